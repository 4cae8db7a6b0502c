mod summary;
pub use summary::RunSummaryPanel;

mod metadata;
pub use metadata::{MetadataPanel, SampleInfoPanel};

mod table;
pub use table::MetricsTablePanel;

mod charts;
pub use charts::MetricCharts;

mod export;
pub use export::MetricsExportPanel;

mod svg;

use crate::core::document::QcDocument;

/// The one piece of state that outlives a render pass: the raw source text
/// of the loaded document. Every pass re-parses it from scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSession {
    pub source: Option<String>,
}

impl DocumentSession {
    pub fn load<T: Into<String>>(&mut self, source: T) {
        self.source = Some(source.into());
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }
}

/// Parsed document or the parse failure, for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub document: Option<QcDocument>,
    pub error: Option<String>,
}

impl ReportState {
    pub fn from_source(source: &str) -> Self {
        match QcDocument::parse(source) {
            Ok(document) => Self {
                document: Some(document),
                error: None,
            },
            Err(err) => {
                eprintln!("[mzview] document rejected: {err}");
                Self {
                    document: None,
                    error: Some(format!("Couldn't read mzQC document: {err}")),
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
