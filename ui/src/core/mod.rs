//! Renderer-independent core: document model, shape classification, chart
//! dispatch, grouping, and formatting. Everything here is pure and
//! unit-testable without a UI runtime.

pub mod chart;
pub mod classify;
pub mod document;
pub mod format;
pub mod group;
pub mod palette;
pub mod settings;
pub mod summary;
