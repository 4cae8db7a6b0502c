use dioxus::prelude::*;

use crate::core::{
    chart::{self, ChartDescriptor, Orientation},
    document::Metric,
    format,
    group::group_by_category,
    palette::{category_color, ColorScheme},
    settings::ViewSettings,
};

use super::svg;

/// Per-category chart tabs. Each metric in the active category gets one
/// card; what the card draws is decided entirely by the dispatcher.
#[component]
pub fn MetricCharts(metrics: Vec<Metric>, settings: ViewSettings) -> Element {
    let groups = group_by_category(&metrics);
    let mut selected = use_signal(|| 0usize);

    if groups.is_empty() {
        return rsx! {
            section { class: "report-card report-charts",
                div { class: "report-card__header",
                    h2 { "Metric Visualizations" }
                }
                p { class: "report-card__placeholder",
                    "No quality metrics to visualize in this document."
                }
            }
        };
    }

    // A reloaded document may have fewer categories than the last selection.
    let active = selected().min(groups.len() - 1);
    let active_group = groups[active].clone();

    rsx! {
        section { class: "report-card report-charts",
            div { class: "report-card__header",
                h2 { "Metric Visualizations" }
                span { class: "report-card__meta", "{groups.len()} categories" }
            }

            div { class: "report-tabs", role: "tablist",
                for (index, group) in groups.iter().enumerate() {
                    button {
                        r#type: "button",
                        role: "tab",
                        class: format!(
                            "report-tabs__tab {}",
                            if index == active { "report-tabs__tab--active" } else { "" }
                        ),
                        onclick: move |_| selected.set(index),
                        span {
                            class: "report-tabs__swatch",
                            style: "background: {category_color(&group.name)}",
                        }
                        "{group.name}"
                        span { class: "report-tabs__count", "{group.metrics.len()}" }
                    }
                }
            }

            div { class: "report-charts__panel", role: "tabpanel",
                for metric in active_group.metrics.iter() {
                    {metric_card(metric, &active_group.name, settings.color_scheme)}
                }
            }
        }
    }
}

fn metric_card(metric: &Metric, category: &str, scheme: ColorScheme) -> Element {
    let accent = category_color(category);
    let body = match chart::descriptor_for(&metric.value) {
        Some(descriptor) => chart_body(metric, descriptor, accent, scheme),
        // Fifth dispatch branch: nothing to draw, show the value as text.
        None => rsx! {
            p { class: "metric-card__fallback", "{format::display_value(&metric.value)}" }
        },
    };

    rsx! {
        article { class: "metric-card", style: "border-left-color: {accent}",
            h4 { class: "metric-card__name", "{metric.name}" }
            if !metric.description.is_empty() {
                p { class: "metric-card__description", em { "{metric.description}" } }
            }
            {body}
        }
    }
}

fn chart_body(
    metric: &Metric,
    descriptor: ChartDescriptor,
    accent: &str,
    scheme: ColorScheme,
) -> Element {
    match descriptor {
        ChartDescriptor::Gauge { value, range } => {
            let markup = svg::gauge_svg(value, range, &metric.unit, accent);
            rsx! {
                div { class: "metric-card__chart", dangerous_inner_html: "{markup}" }
            }
        }
        ChartDescriptor::CategoricalBar { labels, values } => {
            let caption = series_caption(values.len(), &metric.unit);
            let markup = svg::bar_svg(&labels, &values, accent);
            rsx! {
                p { class: "metric-card__caption", "{caption}" }
                div { class: "metric-card__chart", dangerous_inner_html: "{markup}" }
            }
        }
        ChartDescriptor::LineSeries { values } => {
            let caption = series_caption(values.len(), &metric.unit);
            let markup = svg::line_svg(&values, accent);
            rsx! {
                p { class: "metric-card__caption", "{caption}" }
                div { class: "metric-card__chart", dangerous_inner_html: "{markup}" }
            }
        }
        ChartDescriptor::Scatter {
            x_label,
            y_label,
            x,
            y,
            trend,
        } => {
            let markup = svg::scatter_svg(&x, &y, trend, &x_label, &y_label, accent);
            let stats = chart::column_stats(&y);
            let unit = metric.unit.clone();
            rsx! {
                div { class: "metric-card__chart", dangerous_inner_html: "{markup}" }
                if let Some(stats) = stats {
                    div { class: "report-highlights report-highlights--compact",
                        div { class: "report-highlight",
                            span { class: "report-highlight__label", "Mean {y_label}" }
                            strong { class: "report-highlight__value",
                                "{format::format_number(stats.mean, 3)} {unit}"
                            }
                        }
                        div { class: "report-highlight",
                            span { class: "report-highlight__label", "Max {y_label}" }
                            strong { class: "report-highlight__value",
                                "{format::format_number(stats.max, 3)} {unit}"
                            }
                        }
                    }
                }
            }
        }
        ChartDescriptor::KeyValueBar { pairs, orientation } => {
            let markup = match orientation {
                Orientation::Vertical => svg::keyed_bar_svg(&pairs, scheme),
                Orientation::Horizontal => svg::horizontal_bar_svg(&pairs, scheme),
            };
            let values: Vec<f64> = pairs.iter().map(|(_, value)| *value).collect();
            let stats = chart::column_stats(&values);
            rsx! {
                div { class: "metric-card__chart", dangerous_inner_html: "{markup}" }
                details { class: "metric-card__data",
                    summary { "View data table" }
                    table { class: "report-table__grid",
                        thead {
                            tr {
                                th { "Key" }
                                th { "Value" }
                            }
                        }
                        tbody {
                            for (key, value) in pairs.iter() {
                                tr {
                                    td { "{key}" }
                                    td { class: "report-table__value", "{value}" }
                                }
                            }
                        }
                    }
                    if let Some(stats) = stats {
                        p { class: "metric-card__caption",
                            "{stats.count} entries · mean {format::format_number(stats.mean, 3)} · "
                            "σ {format::format_number(stats.std_dev, 3)} · "
                            "min {format::format_number(stats.min, 3)} · "
                            "max {format::format_number(stats.max, 3)}"
                        }
                    }
                }
            }
        }
    }
}

fn series_caption(count: usize, unit: &str) -> String {
    if unit.is_empty() {
        format!("{count} data points")
    } else {
        format!("{count} data points · {unit}")
    }
}
