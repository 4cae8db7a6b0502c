//! The mzQC document model and the loader that builds it.
//!
//! A parsed document is a read-only view over one render pass's input: every
//! optional section is resolved exactly once here, so the panels never probe
//! the raw JSON tree again.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    NotAnObject,
}

/// Root entity for one mzQC report. Each section is independently optional;
/// a missing section is simply absent, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QcDocument {
    pub metadata: Option<Map<String, Value>>,
    pub sample_info: Option<Map<String, Value>>,
    pub run_summary: Option<RunSummary>,
    pub metrics: Vec<Metric>,
    /// qualityMetrics entries dropped because `name` or `value` was missing.
    pub skipped_metrics: usize,
}

/// One named measurement. `name` and `value` are required; the rest default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit: String,
    pub value: Value,
}

/// Optional run-level scalars, each rendered independently if present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_peptides: Option<i64>,
    pub total_proteins: Option<i64>,
    pub successful_run: Option<bool>,
    pub status_message: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl RunSummary {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            total_peptides: map.get("totalPeptides").and_then(Value::as_i64),
            total_proteins: map.get("totalProteins").and_then(Value::as_i64),
            successful_run: map.get("successfulRun").and_then(Value::as_bool),
            status_message: map
                .get("statusMessage")
                .and_then(Value::as_str)
                .map(str::to_string),
            start_time: map
                .get("startTime")
                .and_then(Value::as_str)
                .map(str::to_string),
            end_time: map
                .get("endTime")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_peptides.is_none()
            && self.total_proteins.is_none()
            && self.successful_run.is_none()
            && self.status_message.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}

impl QcDocument {
    /// Parse a raw JSON source into a document. Malformed JSON is the one
    /// global failure; everything past this point degrades per section.
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_str(source)?;
        Self::from_value(root)
    }

    pub fn from_value(root: Value) -> Result<Self, DocumentError> {
        let root = match root {
            Value::Object(map) => map,
            _ => return Err(DocumentError::NotAnObject),
        };

        let metadata = root.get("metadata").and_then(Value::as_object).cloned();
        let sample_info = root.get("sampleInfo").and_then(Value::as_object).cloned();
        let run_summary = root
            .get("runSummary")
            .and_then(Value::as_object)
            .map(RunSummary::from_map);

        let mut metrics = Vec::new();
        let mut skipped_metrics = 0;
        if let Some(entries) = root.get("qualityMetrics").and_then(Value::as_array) {
            for entry in entries {
                match Metric::from_entry(entry) {
                    Some(metric) => metrics.push(metric),
                    None => skipped_metrics += 1,
                }
            }
        }

        Ok(Self {
            metadata,
            sample_info,
            run_summary,
            metrics,
            skipped_metrics,
        })
    }
}

impl Metric {
    /// Build a metric from one qualityMetrics entry. Returns `None` when a
    /// required field (`name`, `value`) is absent; the caller counts the
    /// skip and the pass continues.
    fn from_entry(entry: &Value) -> Option<Self> {
        let map = entry.as_object()?;
        let name = coerce_string(map.get("name"), "");
        if name.is_empty() {
            return None;
        }
        let value = map.get("value")?.clone();

        Some(Self {
            name,
            description: coerce_string(map.get("description"), ""),
            category: coerce_string(map.get("category"), "Other"),
            unit: coerce_string(map.get("unit"), ""),
            value,
        })
    }
}

/// Defensive string coercion for fields the format declares as strings but
/// real-world files sometimes carry as numbers or booleans.
fn coerce_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_minimal_document() {
        let doc = QcDocument::parse(r#"{"qualityMetrics": []}"#).unwrap();
        assert!(doc.metadata.is_none());
        assert!(doc.sample_info.is_none());
        assert!(doc.run_summary.is_none());
        assert!(doc.metrics.is_empty());
        assert_eq!(doc.skipped_metrics, 0);
    }

    #[test]
    fn missing_sections_do_not_fail_the_pipeline() {
        let doc = QcDocument::parse("{}").unwrap();
        assert!(doc.metrics.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            QcDocument::parse("{not json"),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_object_roots() {
        assert!(matches!(
            QcDocument::parse("[1, 2, 3]"),
            Err(DocumentError::NotAnObject)
        ));
    }

    #[test]
    fn ignores_unrecognized_top_level_keys() {
        let doc =
            QcDocument::parse(r#"{"vendorExtras": {"x": 1}, "qualityMetrics": []}"#).unwrap();
        assert!(doc.metrics.is_empty());
    }

    #[test]
    fn skips_metrics_missing_required_fields() {
        let doc = QcDocument::from_value(json!({
            "qualityMetrics": [
                {"name": "Good", "value": 1},
                {"name": "No value"},
                {"value": 2},
                "not even an object"
            ]
        }))
        .unwrap();
        assert_eq!(doc.metrics.len(), 1);
        assert_eq!(doc.metrics[0].name, "Good");
        assert_eq!(doc.skipped_metrics, 3);
    }

    #[test]
    fn optional_metric_fields_take_documented_defaults() {
        let doc = QcDocument::from_value(json!({
            "qualityMetrics": [{"name": "Bare", "value": 7}]
        }))
        .unwrap();
        let metric = &doc.metrics[0];
        assert_eq!(metric.description, "");
        assert_eq!(metric.category, "Other");
        assert_eq!(metric.unit, "");
    }

    #[test]
    fn coerces_non_string_category_and_unit() {
        let doc = QcDocument::from_value(json!({
            "qualityMetrics": [
                {"name": "Odd", "value": 1, "category": 3, "unit": true},
                {"name": "Worse", "value": 1, "category": {"a": 1}, "unit": [1]}
            ]
        }))
        .unwrap();
        assert_eq!(doc.metrics[0].category, "3");
        assert_eq!(doc.metrics[0].unit, "true");
        // Shapes with no sensible string form fall back to the defaults.
        assert_eq!(doc.metrics[1].category, "Other");
        assert_eq!(doc.metrics[1].unit, "");
    }

    #[test]
    fn extracts_run_summary_scalars() {
        let doc = QcDocument::from_value(json!({
            "runSummary": {
                "totalPeptides": 12345,
                "successfulRun": true,
                "startTime": "2024-01-01T00:00:00Z"
            }
        }))
        .unwrap();
        let summary = doc.run_summary.unwrap();
        assert_eq!(summary.total_peptides, Some(12345));
        assert_eq!(summary.total_proteins, None);
        assert_eq!(summary.successful_run, Some(true));
        assert_eq!(summary.start_time.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(summary.end_time.is_none());
    }
}
