//! Presentation settings for one render pass.

use serde::{Deserialize, Serialize};

use super::palette::ColorScheme;

/// Immutable configuration handed to the presentation layer at the start of
/// each pass. The toggles gate whole sections; none of this ever reaches
/// the dispatcher, so classification stays configuration-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub color_scheme: ColorScheme,
    pub show_metadata: bool,
    pub show_raw_metrics: bool,
    pub show_summary: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            show_metadata: true,
            show_raw_metrics: true,
            show_summary: true,
        }
    }
}
