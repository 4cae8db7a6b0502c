//! Fixed color tables: per-category accents and the selectable chart
//! schemes. Pure lookups, no state.

use serde::{Deserialize, Serialize};

/// Fallback accent for categories without an assigned color.
pub const DEFAULT_CATEGORY_COLOR: &str = "#607D8B";

/// Deterministic accent color for a category, matched case-insensitively.
pub fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "signal" => "#2196F3",
        "chromatography" => "#4CAF50",
        "acquisition" => "#FFC107",
        "mass" => "#9C27B0",
        "identification" => "#F44336",
        "sample preparation" => "#FF9800",
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

/// Chart color scheme: one qualitative palette plus five sequential ones.
/// Selected in the dashboard sidebar; consumed only by the presentation
/// layer, never by the dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Plotly,
    Viridis,
    Plasma,
    Blues,
    Greens,
    Reds,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Plotly,
        ColorScheme::Viridis,
        ColorScheme::Plasma,
        ColorScheme::Blues,
        ColorScheme::Greens,
        ColorScheme::Reds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Plotly => "Plotly",
            ColorScheme::Viridis => "Viridis",
            ColorScheme::Plasma => "Plasma",
            ColorScheme::Blues => "Blues",
            ColorScheme::Greens => "Greens",
            ColorScheme::Reds => "Reds",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.label() == label)
    }

    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            ColorScheme::Plotly => &[
                "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692",
                "#B6E880", "#FF97FF", "#FECB52",
            ],
            ColorScheme::Viridis => &[
                "#440154", "#482878", "#3E4989", "#31688E", "#26828E", "#1F9E89", "#35B779",
                "#6DCD59", "#B4DE2C", "#FDE725",
            ],
            ColorScheme::Plasma => &[
                "#0D0887", "#46039F", "#7201A8", "#9C179E", "#BD3786", "#D8576B", "#ED7953",
                "#FB9F3A", "#FDCA26", "#F0F921",
            ],
            ColorScheme::Blues => &[
                "#F7FBFF", "#DEEBF7", "#C6DBEF", "#9ECAE1", "#6BAED6", "#4292C6", "#2171B5",
                "#08519C", "#08306B",
            ],
            ColorScheme::Greens => &[
                "#F7FCF5", "#E5F5E0", "#C7E9C0", "#A1D99B", "#74C476", "#41AB5D", "#238B45",
                "#006D2C", "#00441B",
            ],
            ColorScheme::Reds => &[
                "#FFF5F0", "#FEE0D2", "#FCBBA1", "#FC9272", "#FB6A4A", "#EF3B2C", "#CB181D",
                "#A50F15", "#67000D",
            ],
        }
    }

    /// Cycle through the scheme for the nth mark of a discrete series.
    pub fn color_at(&self, index: usize) -> &'static str {
        let colors = self.colors();
        colors[index % colors.len()]
    }

    /// Map a 0..=1 position onto the scheme, for value-graded bars.
    pub fn color_for_fraction(&self, fraction: f64) -> &'static str {
        let colors = self.colors();
        let clamped = fraction.clamp(0.0, 1.0);
        let index = (clamped * (colors.len() - 1) as f64).round() as usize;
        colors[index]
    }
}
