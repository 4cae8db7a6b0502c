use dioxus::prelude::*;

use crate::core::{palette::ColorScheme, settings::ViewSettings};
use crate::report::{
    DocumentSession, MetadataPanel, MetricCharts, MetricsExportPanel, MetricsTablePanel,
    ReportState, RunSummaryPanel, SampleInfoPanel,
};

/// The report page: one full render pass over the session document, gated
/// by the sidebar settings. Settings only decide what is shown; they never
/// reach the chart dispatcher.
#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Signal<DocumentSession>>();
    let mut settings = use_signal(ViewSettings::default);

    let ReportState { document, error } = match session().source {
        Some(source) => ReportState::from_source(&source),
        None => ReportState::empty(),
    };
    let view = settings();

    rsx! {
        section { class: "page page-report",
            h1 { "Report" }

            div { class: "report-settings",
                label { class: "report-settings__field",
                    span { "Chart color scheme" }
                    select {
                        value: "{view.color_scheme.label()}",
                        onchange: move |evt| {
                            if let Some(scheme) = ColorScheme::from_label(&evt.value()) {
                                settings.write().color_scheme = scheme;
                            }
                        },
                        for scheme in ColorScheme::ALL {
                            option {
                                value: "{scheme.label()}",
                                selected: scheme == view.color_scheme,
                                "{scheme.label()}"
                            }
                        }
                    }
                }

                label { class: "report-settings__field",
                    input {
                        r#type: "checkbox",
                        checked: view.show_summary,
                        onchange: move |_| {
                            let mut current = settings.write();
                            current.show_summary = !current.show_summary;
                        },
                    }
                    span { "Show run summary" }
                }
                label { class: "report-settings__field",
                    input {
                        r#type: "checkbox",
                        checked: view.show_metadata,
                        onchange: move |_| {
                            let mut current = settings.write();
                            current.show_metadata = !current.show_metadata;
                        },
                    }
                    span { "Show metadata" }
                }
                label { class: "report-settings__field",
                    input {
                        r#type: "checkbox",
                        checked: view.show_raw_metrics,
                        onchange: move |_| {
                            let mut current = settings.write();
                            current.show_raw_metrics = !current.show_raw_metrics;
                        },
                    }
                    span { "Show raw metrics table" }
                }
            }

            if let Some(problem) = error {
                section { class: "report-card",
                    p { class: "report-card__meta report-card__meta--error", "⚠️ {problem}" }
                }
            } else if let Some(document) = document {
                if document.skipped_metrics > 0 {
                    p { class: "report-card__meta report-card__meta--error",
                        "⚠️ {document.skipped_metrics} metric(s) skipped (missing name or value)."
                    }
                }

                if view.show_summary {
                    if let Some(summary) = document.run_summary.clone() {
                        if !summary.is_empty() {
                            RunSummaryPanel { summary }
                        }
                    }
                }

                if view.show_metadata {
                    if let Some(metadata) = document.metadata.clone() {
                        MetadataPanel { metadata }
                    }
                }

                if let Some(sample_info) = document.sample_info.clone() {
                    SampleInfoPanel { sample_info }
                }

                if view.show_raw_metrics {
                    MetricsTablePanel { metrics: document.metrics.clone() }
                }

                MetricCharts { metrics: document.metrics.clone(), settings: view }

                MetricsExportPanel { metrics: document.metrics.clone() }
            } else {
                section { class: "report-card",
                    p { class: "report-card__placeholder",
                        "No document loaded. Head to Home and paste a report or use the example file."
                    }
                }
            }
        }
    }
}
