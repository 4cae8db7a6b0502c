use dioxus::prelude::*;

use crate::core::{document::Metric, format::display_value};

#[derive(Clone, PartialEq)]
struct TableRow {
    name: String,
    description: String,
    category: String,
    unit: String,
    value: String,
}

/// Flat table of every metric with a type-aware stringified value column.
#[component]
pub fn MetricsTablePanel(metrics: Vec<Metric>) -> Element {
    let rows: Vec<TableRow> = metrics
        .iter()
        .map(|metric| TableRow {
            name: metric.name.clone(),
            description: metric.description.clone(),
            category: metric.category.clone(),
            unit: metric.unit.clone(),
            value: display_value(&metric.value),
        })
        .collect();

    rsx! {
        section { class: "report-card report-table",
            div { class: "report-card__header",
                h2 { "Raw Quality Metrics" }
                if !rows.is_empty() {
                    span { class: "report-card__meta", "{rows.len()} metrics" }
                }
            }

            if rows.is_empty() {
                p { class: "report-card__placeholder", "This document carries no quality metrics." }
            } else {
                div { class: "report-table__scroll",
                    table { class: "report-table__grid",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th { "Category" }
                                th { "Unit" }
                                th { "Value" }
                            }
                        }
                        tbody {
                            for row in rows.into_iter() {
                                tr {
                                    td { "{row.name}" }
                                    td { "{row.description}" }
                                    td { "{row.category}" }
                                    td { "{row.unit}" }
                                    td { class: "report-table__value", "{row.value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
