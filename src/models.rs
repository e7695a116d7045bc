//! Shared data shapes exchanged between the UI surfaces and the analysis backend.

use serde::{Deserialize, Serialize};

/// The four extracted entity categories, in the order they are always rendered.
pub const ENTITY_CATEGORY_LABELS: [&str; 4] =
    ["Countries", "Nationalities", "People", "Organizations"];

/// Geopolitical entities extracted from an article.
///
/// Each category is an ordered list of strings, exactly as the backend
/// returned them: duplicates are kept and no local sorting is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeopoliticalEntities {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub nationalities: Vec<String>,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
}

impl GeopoliticalEntities {
    /// Labeled categories in fixed rendering order.
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            (ENTITY_CATEGORY_LABELS[0], self.countries.as_slice()),
            (ENTITY_CATEGORY_LABELS[1], self.nationalities.as_slice()),
            (ENTITY_CATEGORY_LABELS[2], self.people.as_slice()),
            (ENTITY_CATEGORY_LABELS[3], self.organizations.as_slice()),
        ]
    }

    /// Total entity count across all categories.
    pub fn total(&self) -> usize {
        self.categories().iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Canonical analysis result the UI consumes.
///
/// Always in the nested-entities shape regardless of which backend response
/// variant was received. Replaced wholesale on each new analysis and
/// discarded on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// AI-generated summary. May be empty.
    #[serde(default)]
    pub summary: String,
    pub entities: GeopoliticalEntities,
}

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A single analysis submission: article text or a file, exactly one required.
///
/// If both are somehow set, the file wins (matches the historical submit
/// behavior of the form).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub file: Option<FileUpload>,
}

impl AnalysisRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    pub fn from_file(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            text: None,
            file: Some(FileUpload {
                filename: filename.into(),
                bytes,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_order_and_total() {
        let entities = GeopoliticalEntities {
            countries: vec!["France".into()],
            nationalities: vec!["French".into(), "German".into()],
            people: vec![],
            organizations: vec!["UN".into()],
        };

        let categories = entities.categories();
        assert_eq!(categories[0].0, "Countries");
        assert_eq!(categories[1].1.len(), 2);
        assert_eq!(categories[2].1.len(), 0);
        assert_eq!(entities.total(), 4);
        assert!(!entities.is_empty());
        assert!(GeopoliticalEntities::default().is_empty());
    }

    #[test]
    fn test_request_constructors() {
        let req = AnalysisRequest::from_text("some article");
        assert_eq!(req.text.as_deref(), Some("some article"));
        assert!(req.file.is_none());

        let req = AnalysisRequest::from_file("a.txt", b"body".to_vec());
        assert!(req.text.is_none());
        assert_eq!(req.file.as_ref().unwrap().filename, "a.txt");
        assert!(!req.is_empty());
        assert!(AnalysisRequest::default().is_empty());
    }
}
