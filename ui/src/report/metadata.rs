use dioxus::prelude::*;
use serde_json::{Map, Value};

use crate::core::format::{display_date, display_value};

/// File-level metadata panel. Known fields get their pretty labels and date
/// formatting; anything else passes through under its raw key.
#[component]
pub fn MetadataPanel(metadata: Map<String, Value>) -> Element {
    let rows = metadata_rows(&metadata);

    rsx! {
        section { class: "report-card report-metadata",
            div { class: "report-card__header",
                h2 { "Metadata" }
            }
            {field_grid(rows)}
        }
    }
}

/// Sample description panel, same shape as the metadata panel.
#[component]
pub fn SampleInfoPanel(sample_info: Map<String, Value>) -> Element {
    let rows = sample_rows(&sample_info);

    rsx! {
        section { class: "report-card report-metadata",
            div { class: "report-card__header",
                h2 { "Sample Information" }
            }
            {field_grid(rows)}
        }
    }
}

fn field_grid(rows: Vec<(String, String)>) -> Element {
    rsx! {
        if rows.is_empty() {
            p { class: "report-card__placeholder", "Nothing recorded for this section." }
        } else {
            ul { class: "report-fields",
                for (label, value) in rows.into_iter() {
                    li { class: "report-fields__row",
                        span { class: "report-fields__label", "{label}" }
                        span { class: "report-fields__value", "{value}" }
                    }
                }
            }
        }
    }
}

fn metadata_rows(metadata: &Map<String, Value>) -> Vec<(String, String)> {
    let mut rows = Vec::new();

    for (key, value) in metadata {
        match key.as_str() {
            "creationDate" => rows.push((
                "Creation Date".to_string(),
                display_date(&display_value(value)),
            )),
            "version" => rows.push(("Version".to_string(), display_value(value))),
            "description" => rows.push(("Description".to_string(), display_value(value))),
            "instrumentModel" => rows.push(("Instrument".to_string(), display_value(value))),
            "softwareVersion" => rows.push(("Software".to_string(), display_value(value))),
            "contactName" => {
                let name = display_value(value);
                let contact = match metadata.get("contactOrganization") {
                    Some(org) => format!("{name} ({})", display_value(org)),
                    None => name,
                };
                rows.push(("Contact".to_string(), contact));
            }
            // Folded into the Contact row above.
            "contactOrganization" => {}
            other => rows.push((other.to_string(), display_value(value))),
        }
    }

    rows
}

fn sample_rows(sample_info: &Map<String, Value>) -> Vec<(String, String)> {
    let mut rows = Vec::new();

    for (key, value) in sample_info {
        match key.as_str() {
            "sampleId" => rows.push(("Sample ID".to_string(), display_value(value))),
            "organism" => rows.push(("Organism".to_string(), display_value(value))),
            "cellLine" => rows.push(("Cell Line".to_string(), display_value(value))),
            "collectionDate" => rows.push((
                "Collection Date".to_string(),
                display_date(&display_value(value)),
            )),
            other => rows.push((other.to_string(), display_value(value))),
        }
    }

    rows
}
