//! Response normalization: fold both backend response shapes into the
//! canonical nested-entities result.
//!
//! The backend's response evolved over time. Older deployments return the
//! entity lists as flat top-level fields (`nationalities`, `countries`, ...);
//! newer ones nest them under `geopolitical_entities`. Both shapes must be
//! tolerated, so each category is read through an explicit ordered fallback:
//! nested value when present and non-empty, else the legacy top-level field,
//! else an empty list.

use serde::Deserialize;

use crate::models::{AnalysisResult, GeopoliticalEntities};

/// Raw `/analyze` response body, covering both wire shapes.
#[derive(Debug, Default, Deserialize)]
pub struct RawAnalysisResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub geopolitical_entities: Option<RawEntities>,
    // Legacy flat fields.
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub nationalities: Option<Vec<String>>,
    #[serde(default)]
    pub people: Option<Vec<String>>,
    #[serde(default)]
    pub organizations: Option<Vec<String>>,
}

/// Nested entity object from the newer response shape.
#[derive(Debug, Default, Deserialize)]
pub struct RawEntities {
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub nationalities: Option<Vec<String>>,
    #[serde(default)]
    pub people: Option<Vec<String>>,
    #[serde(default)]
    pub organizations: Option<Vec<String>>,
}

/// Ordered fallback for one entity category: non-empty nested value wins,
/// else the legacy field, else empty.
pub fn merge_category(nested: Option<Vec<String>>, legacy: Option<Vec<String>>) -> Vec<String> {
    match nested {
        Some(values) if !values.is_empty() => values,
        _ => legacy.unwrap_or_default(),
    }
}

/// Build the canonical result from a raw response body.
pub fn normalize(raw: RawAnalysisResponse) -> AnalysisResult {
    let nested = raw.geopolitical_entities.unwrap_or_default();

    AnalysisResult {
        summary: raw.summary.unwrap_or_default(),
        entities: GeopoliticalEntities {
            countries: merge_category(nested.countries, raw.countries),
            nationalities: merge_category(nested.nationalities, raw.nationalities),
            people: merge_category(nested.people, raw.people),
            organizations: merge_category(nested.organizations, raw.organizations),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawAnalysisResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_legacy_flat_shape() {
        let raw = parse(r#"{"summary": "S", "nationalities": ["French"]}"#);
        let result = normalize(raw);

        assert_eq!(result.summary, "S");
        assert_eq!(result.entities.nationalities, vec!["French"]);
        assert!(result.entities.countries.is_empty());
        assert!(result.entities.people.is_empty());
        assert!(result.entities.organizations.is_empty());
    }

    #[test]
    fn test_nested_shape() {
        let raw = parse(
            r#"{
                "summary": "S",
                "geopolitical_entities": {
                    "countries": ["France", "Germany"],
                    "nationalities": ["French"],
                    "people": ["Macron"],
                    "organizations": ["EU"]
                }
            }"#,
        );
        let result = normalize(raw);

        assert_eq!(result.entities.countries, vec!["France", "Germany"]);
        assert_eq!(result.entities.nationalities, vec!["French"]);
        assert_eq!(result.entities.people, vec!["Macron"]);
        assert_eq!(result.entities.organizations, vec!["EU"]);
    }

    #[test]
    fn test_nested_wins_over_legacy_when_non_empty() {
        let raw = parse(
            r#"{
                "summary": "S",
                "nationalities": ["Old"],
                "geopolitical_entities": {"nationalities": ["New"]}
            }"#,
        );
        assert_eq!(normalize(raw).entities.nationalities, vec!["New"]);
    }

    #[test]
    fn test_empty_nested_falls_back_to_legacy() {
        let raw = parse(
            r#"{
                "nationalities": ["Old"],
                "geopolitical_entities": {"nationalities": []}
            }"#,
        );
        assert_eq!(normalize(raw).entities.nationalities, vec!["Old"]);
    }

    #[test]
    fn test_missing_summary_defaults_to_empty() {
        let result = normalize(parse(r#"{"countries": ["France"]}"#));
        assert_eq!(result.summary, "");
        assert_eq!(result.entities.countries, vec!["France"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let raw = parse(
            r#"{"geopolitical_entities": {"people": ["Smith", "Jones", "Smith"]}}"#,
        );
        assert_eq!(
            normalize(raw).entities.people,
            vec!["Smith", "Jones", "Smith"]
        );
    }
}
