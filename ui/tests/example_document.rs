//! End-to-end pass over the bundled example report: parse, extract, group,
//! and dispatch every metric exactly as the dashboard does.

use ui::core::chart::{descriptor_for, ChartDescriptor, Orientation};
use ui::core::document::QcDocument;
use ui::core::group::group_by_category;
use ui::core::summary::run_duration_minutes;

const EXAMPLE: &str = include_str!("../assets/example_mzqc.json");

fn example_document() -> QcDocument {
    QcDocument::parse(EXAMPLE).expect("bundled example must parse")
}

fn descriptor_of(doc: &QcDocument, name: &str) -> Option<ChartDescriptor> {
    let metric = doc
        .metrics
        .iter()
        .find(|metric| metric.name == name)
        .unwrap_or_else(|| panic!("metric `{name}` missing from example"));
    descriptor_for(&metric.value)
}

#[test]
fn example_parses_with_every_section_present() {
    let doc = example_document();
    assert!(doc.metadata.is_some());
    assert!(doc.sample_info.is_some());
    assert!(doc.run_summary.is_some());
    assert_eq!(doc.metrics.len(), 10);
    assert_eq!(doc.skipped_metrics, 0);
}

#[test]
fn example_run_summary_derives_a_two_hour_duration() {
    let doc = example_document();
    let summary = doc.run_summary.unwrap();
    assert_eq!(summary.total_peptides, Some(45_231));
    assert_eq!(summary.total_proteins, Some(5_876));
    assert_eq!(summary.successful_run, Some(true));
    assert_eq!(run_duration_minutes(&summary), Some(Ok(120.0)));
}

#[test]
fn example_metrics_cover_every_dispatch_branch() {
    let doc = example_document();

    match descriptor_of(&doc, "MS1 Median Signal-to-Noise") {
        Some(ChartDescriptor::Gauge { value, range }) => {
            assert_eq!(value, 84.2);
            assert_eq!(range, (0.0, 168.4));
        }
        other => panic!("expected gauge, got {other:?}"),
    }

    assert!(matches!(
        descriptor_of(&doc, "TIC Quartile Intensities"),
        Some(ChartDescriptor::CategoricalBar { .. })
    ));

    match descriptor_of(&doc, "Ion Injection Time Trace") {
        Some(ChartDescriptor::LineSeries { values }) => assert_eq!(values.len(), 24),
        other => panic!("expected line series, got {other:?}"),
    }

    match descriptor_of(&doc, "Peak Width vs Retention Time") {
        Some(ChartDescriptor::Scatter {
            x_label,
            y_label,
            x,
            trend,
            ..
        }) => {
            assert_eq!(x_label, "retentionTime");
            assert_eq!(y_label, "peakWidth");
            assert_eq!(x.len(), 8);
            // Eight monotone points: the OLS overlay must be present.
            assert!(trend.is_some());
        }
        other => panic!("expected scatter, got {other:?}"),
    }

    match descriptor_of(&doc, "Charge State Distribution") {
        Some(ChartDescriptor::KeyValueBar { pairs, orientation }) => {
            assert_eq!(pairs.len(), 5);
            assert_eq!(orientation, Orientation::Vertical);
        }
        other => panic!("expected key-value bars, got {other:?}"),
    }

    match descriptor_of(&doc, "Modification Frequencies") {
        Some(ChartDescriptor::KeyValueBar { pairs, orientation }) => {
            assert_eq!(pairs.len(), 8);
            assert_eq!(orientation, Orientation::Horizontal);
            assert!(pairs.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        }
        other => panic!("expected key-value bars, got {other:?}"),
    }

    assert_eq!(descriptor_of(&doc, "Search Engine"), None);
}

#[test]
fn example_categories_group_in_encounter_order() {
    let doc = example_document();
    let groups = group_by_category(&doc.metrics);
    let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "signal",
            "acquisition",
            "chromatography",
            "identification",
            "mass",
            "Other"
        ]
    );

    // The categoryless metric landed in the defaulted group.
    let other = groups.last().unwrap();
    assert_eq!(other.metrics.len(), 1);
    assert_eq!(other.metrics[0].name, "Digestion Efficiency");
}
