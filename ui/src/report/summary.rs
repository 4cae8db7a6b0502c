use dioxus::prelude::*;

use crate::core::{
    document::RunSummary,
    format,
    summary::{format_minutes, run_duration_minutes, status_label},
};

/// Run-level overview cards: counters, status, and the derived duration.
/// Each field renders independently; a failed duration derivation flags
/// only itself.
#[component]
pub fn RunSummaryPanel(summary: RunSummary) -> Element {
    let mut cards: Vec<(&'static str, String)> = Vec::new();

    if let Some(peptides) = summary.total_peptides {
        cards.push(("Total Peptides", format::format_count(peptides)));
    }
    if let Some(proteins) = summary.total_proteins {
        cards.push(("Total Proteins", format::format_count(proteins)));
    }
    if let Some(successful) = summary.successful_run {
        let icon = if successful { "✅" } else { "❌" };
        cards.push(("Run Status", format!("{icon} {}", status_label(successful))));
    }

    let mut duration_error: Option<String> = None;
    match run_duration_minutes(&summary) {
        Some(Ok(minutes)) => cards.push(("Run Duration", format_minutes(minutes))),
        Some(Err(err)) => duration_error = Some(format!("Run duration unavailable: {err}")),
        None => {}
    }

    let status_message = summary.status_message.clone();

    rsx! {
        section { class: "report-card report-summary",
            div { class: "report-card__header",
                h2 { "Run Summary" }
            }

            div { class: "report-highlights",
                for (label, value) in cards.into_iter() {
                    div { class: "report-highlight",
                        span { class: "report-highlight__label", "{label}" }
                        strong { class: "report-highlight__value", "{value}" }
                    }
                }
            }

            if let Some(message) = status_message {
                p { class: "report-card__meta", "Status: {message}" }
            }

            if let Some(problem) = duration_error {
                p { class: "report-card__meta report-card__meta--error", "⚠️ {problem}" }
            }
        }
    }
}
