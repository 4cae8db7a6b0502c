use dioxus::prelude::*;

use crate::core::document::QcDocument;
use crate::report::DocumentSession;

/// Bundled demonstration report, the same document the integration tests
/// exercise.
const EXAMPLE_DOCUMENT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/example_mzqc.json"
));

#[derive(Clone, Debug, PartialEq)]
enum LoadFeedback {
    None,
    Loaded(String),
    Rejected(String),
}

/// Landing page: paste an mzQC document or load the bundled example. The
/// raw source is held in session state; the Report view re-runs the full
/// pass over it on every render.
#[component]
pub fn Home() -> Element {
    let mut session = use_context::<Signal<DocumentSession>>();
    let mut pasted = use_signal(String::new);
    let mut feedback = use_signal(|| LoadFeedback::None);

    let mut load_source = move |source: String| {
        let note = match QcDocument::parse(&source) {
            Ok(document) => LoadFeedback::Loaded(format!(
                "Document loaded ({} metrics). Open the Report tab to explore it.",
                document.metrics.len()
            )),
            Err(err) => LoadFeedback::Rejected(format!("Couldn't read mzQC document: {err}")),
        };
        session.write().load(source);
        feedback.set(note);
    };

    let load_example = move |_| load_source(EXAMPLE_DOCUMENT.to_string());
    let load_pasted = move |_| {
        let source = pasted();
        if source.trim().is_empty() {
            feedback.set(LoadFeedback::Rejected(
                "Paste an mzQC document first.".to_string(),
            ));
        } else {
            load_source(source);
        }
    };

    let note = feedback();

    rsx! {
        section { class: "page page-home",
            h1 { "mzQC File Visualizer" }
            p {
                "Load a mass spectrometry quality-control report and explore its "
                "metrics as charts, grouped by category."
            }

            ul { class: "page-home__features",
                li { "Run summary at a glance: peptide and protein counts, status, duration." }
                li { "One chart per metric, picked automatically from the value's shape." }
                li { "Raw metrics table with CSV and JSON export." }
            }

            div { class: "page-home__loader",
                textarea {
                    class: "page-home__paste",
                    placeholder: "Paste the JSON contents of an .mzQC file here…",
                    rows: "10",
                    value: "{pasted}",
                    oninput: move |evt| pasted.set(evt.value()),
                }

                div { class: "page-home__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: load_pasted,
                        "Load pasted document"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: load_example,
                        "Use example file"
                    }
                }

                match note {
                    LoadFeedback::None => rsx! {
                        p { class: "report-card__meta",
                            "Nothing loaded yet. The example file is a complete report."
                        }
                    },
                    LoadFeedback::Loaded(message) => rsx! {
                        p { class: "report-card__meta report-card__meta--success", "✅ {message}" }
                    },
                    LoadFeedback::Rejected(message) => rsx! {
                        p { class: "report-card__meta report-card__meta--error", "⚠️ {message}" }
                    },
                }
            }
        }
    }
}
