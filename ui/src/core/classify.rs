//! Runtime shape classification for metric values.
//!
//! The chart dispatcher never inspects JSON directly; it works off the
//! closed `MetricShape` union produced here, so every rendering branch is
//! checked for exhaustiveness by the compiler.

use serde_json::Value;

/// The five value shapes the dispatcher distinguishes, in classification
/// order. `Other` covers strings, booleans, nulls, empty sequences, and
/// mixed-type sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricShape {
    Number,
    NumericSequence,
    RecordSequence,
    Record,
    Other,
}

/// Classify one metric value by its runtime shape.
pub fn classify(value: &Value) -> MetricShape {
    match value {
        Value::Number(_) => MetricShape::Number,
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_number) => {
            MetricShape::NumericSequence
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            MetricShape::RecordSequence
        }
        Value::Object(_) => MetricShape::Record,
        _ => MetricShape::Other,
    }
}
