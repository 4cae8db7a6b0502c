use dioxus::prelude::*;

use crate::core::{document::Metric, format::display_value};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Tabular export of every metric as CSV or JSON. On the web the payload is
/// copied to the clipboard and offered as a download; on desktop it lands
/// in the app's data directory.
#[component]
pub fn MetricsExportPanel(metrics: Vec<Metric>) -> Element {
    let total = metrics.len();
    let status = use_signal(|| ExportStatus::Idle);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "report-card__meta report-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "report-card__meta report-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = {
        let export_metrics = metrics.clone();
        let mut status_signal = status;
        move |_| {
            let outcome = export_csv(&export_metrics);
            match outcome {
                Ok(message) => status_signal.set(ExportStatus::Done(message)),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
        }
    };

    let json_handler = {
        let export_metrics = metrics.clone();
        let mut status_signal = status;
        move |_| {
            let outcome = export_json(&export_metrics);
            match outcome {
                Ok(message) => status_signal.set(ExportStatus::Done(message)),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
        }
    };

    rsx! {
        section { class: "report-card report-export",
            div { class: "report-card__header",
                h2 { "Export" }
            }

            if total == 0 {
                p { class: "report-card__placeholder", "Exports unlock once a document with metrics is loaded." }
            } else {
                p { "Take the {total} tabulated metrics with you for deeper analysis." }

                div { class: "report-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: csv_handler,
                        "Export CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: json_handler,
                        "Export JSON"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn export_csv(metrics: &[Metric]) -> Result<String, String> {
    let csv = build_csv(metrics);
    let filename = format!("mzview-metrics-{}.csv", timestamp_slug());
    deliver(&filename, csv.into_bytes())
}

fn export_json(metrics: &[Metric]) -> Result<String, String> {
    let json = serde_json::to_string_pretty(metrics).map_err(|err| err.to_string())?;
    copy_to_clipboard(&json)?;
    let filename = format!("mzview-metrics-{}.json", timestamp_slug());
    let delivered = deliver(&filename, json.into_bytes())?;
    Ok(format!("JSON copied to clipboard; {delivered}"))
}

fn build_csv(metrics: &[Metric]) -> String {
    let mut csv = String::from("name,description,category,unit,value\n");

    for metric in metrics {
        let fields = [
            metric.name.as_str().to_string(),
            metric.description.clone(),
            metric.category.clone(),
            metric.unit.clone(),
            display_value(&metric.value),
        ];
        let line = fields
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

fn copy_to_clipboard(payload: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("Clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard
            .set_text(payload.to_string())
            .map_err(|err| err.to_string())
    }
}

fn deliver(filename: &str, bytes: Vec<u8>) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type("application/octet-stream");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok("download started".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(format!("saved to {}", path.to_string_lossy()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Mzview", "Mzview")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metric(name: &str, value: serde_json::Value) -> Metric {
        Metric {
            name: name.into(),
            description: "a metric".into(),
            category: "signal".into(),
            unit: "counts".into(),
            value,
        }
    }

    #[test]
    fn csv_rows_follow_the_table_stringification() {
        let csv = build_csv(&[
            metric("Total", json!(1234567)),
            metric("Trace", json!([1, 2, 3, 4])),
        ]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,description,category,unit,value"));
        assert_eq!(
            lines.next(),
            Some("Total,a metric,signal,counts,\"1,234,567\"")
        );
        assert_eq!(lines.next(), Some("Trace,a metric,signal,counts,[4 items]"));
    }

    #[test]
    fn csv_escapes_quotes_and_commas() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
