//! articlens - front end for AI-powered news article analysis.
//!
//! Submits article text or a file to a remote analysis backend and renders
//! the returned summary and extracted geopolitical entities (countries,
//! nationalities, people, organizations). Ships a CLI and a small local web
//! interface, both driven by the same client and form controller.

pub mod cli;
pub mod client;
pub mod config;
pub mod form;
pub mod models;
pub mod render;
pub mod server;
pub mod utils;
