//! Run-summary derivations: status labels and the start/end duration.

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

use super::document::RunSummary;

#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("unparseable timestamp: {0}")]
    Timestamp(String),
    #[error("end time precedes start time")]
    NegativeDuration,
}

/// Fixed two-valued run status convention. Not localizable.
pub fn status_label(successful: bool) -> &'static str {
    if successful {
        "Success"
    } else {
        "Failed"
    }
}

/// Parse an ISO-8601 timestamp. A trailing `Z` or explicit offset is taken
/// as written; a timestamp with no offset at all is assumed UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp);
    }

    let with_subsecond =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let whole_second = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

    PrimitiveDateTime::parse(raw, &with_subsecond)
        .or_else(|_| PrimitiveDateTime::parse(raw, &whole_second))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Minutes elapsed between two timestamps. Negative spans and unparseable
/// timestamps are defined errors; the caller flags this one derived metric
/// and the rest of the pass continues.
pub fn duration_minutes(start: &str, end: &str) -> Result<f64, SummaryError> {
    let start_ts =
        parse_timestamp(start).ok_or_else(|| SummaryError::Timestamp(start.to_string()))?;
    let end_ts = parse_timestamp(end).ok_or_else(|| SummaryError::Timestamp(end.to_string()))?;

    let delta = end_ts - start_ts;
    if delta.is_negative() {
        return Err(SummaryError::NegativeDuration);
    }

    Ok(delta.whole_seconds() as f64 / 60.0)
}

/// Duration derivation for a run summary: `None` when either endpoint is
/// absent, otherwise the (possibly failed) minute count.
pub fn run_duration_minutes(summary: &RunSummary) -> Option<Result<f64, SummaryError>> {
    match (&summary.start_time, &summary.end_time) {
        (Some(start), Some(end)) => Some(duration_minutes(start, end)),
        _ => None,
    }
}

/// One-decimal minute display, e.g. `5.5 minutes`.
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.1} minutes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_reported_in_minutes() {
        let minutes =
            duration_minutes("2024-01-01T00:00:00Z", "2024-01-01T00:05:30Z").unwrap();
        assert_eq!(minutes, 5.5);
        assert_eq!(format_minutes(minutes), "5.5 minutes");
    }

    #[test]
    fn offsets_and_naive_timestamps_are_accepted() {
        let with_offset =
            duration_minutes("2024-01-01T00:00:00+02:00", "2024-01-01T01:00:00+02:00").unwrap();
        assert_eq!(with_offset, 60.0);

        // No offset at all: assumed UTC.
        let naive = duration_minutes("2024-01-01T00:00:00", "2024-01-01T00:06:00Z").unwrap();
        assert_eq!(naive, 6.0);
    }

    #[test]
    fn unparseable_timestamps_are_a_defined_error() {
        assert_eq!(
            duration_minutes("yesterday", "2024-01-01T00:05:30Z"),
            Err(SummaryError::Timestamp("yesterday".into()))
        );
    }

    #[test]
    fn negative_spans_are_not_silently_absorbed() {
        assert_eq!(
            duration_minutes("2024-01-01T01:00:00Z", "2024-01-01T00:00:00Z"),
            Err(SummaryError::NegativeDuration)
        );
    }

    #[test]
    fn duration_needs_both_endpoints() {
        let summary = RunSummary {
            start_time: Some("2024-01-01T00:00:00Z".into()),
            ..RunSummary::default()
        };
        assert!(run_duration_minutes(&summary).is_none());
    }

    #[test]
    fn status_labels_are_fixed() {
        assert_eq!(status_label(true), "Success");
        assert_eq!(status_label(false), "Failed");
    }
}
