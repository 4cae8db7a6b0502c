//! Chart descriptors and the metric-to-visualization dispatcher.
//!
//! `descriptor_for` is the core contract of the whole dashboard: given one
//! metric value it deterministically produces at most one renderer-agnostic
//! descriptor. It is a pure mapping with no configuration input, so the
//! presentation layer can be swapped without touching it.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use super::classify::{classify, MetricShape};

/// Numeric sequences shorter than this render as bars; longer ones as a line.
const BAR_TO_LINE_THRESHOLD: usize = 10;

/// Mappings with more entries than this render as sorted horizontal bars.
const HORIZONTAL_BAR_THRESHOLD: usize = 5;

/// Gauge upper bound when the value itself is zero.
const GAUGE_FALLBACK_BOUND: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartDescriptor {
    Gauge {
        value: f64,
        range: (f64, f64),
    },
    CategoricalBar {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    LineSeries {
        values: Vec<f64>,
    },
    Scatter {
        x_label: String,
        y_label: String,
        x: Vec<f64>,
        y: Vec<f64>,
        trend: Option<TrendLine>,
    },
    KeyValueBar {
        pairs: Vec<(String, f64)>,
        orientation: Orientation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Ordinary-least-squares fit over scatter points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Produce the chart descriptor for one metric value, or `None` for shapes
/// that render as plain text only.
pub fn descriptor_for(value: &Value) -> Option<ChartDescriptor> {
    match classify(value) {
        MetricShape::Number => Some(gauge(value.as_f64().unwrap_or(0.0))),
        MetricShape::NumericSequence => {
            let values: Vec<f64> = value
                .as_array()
                .map(|items| items.iter().filter_map(Value::as_f64).collect())
                .unwrap_or_default();
            Some(numeric_sequence(values))
        }
        MetricShape::RecordSequence => scatter(value.as_array().map(Vec::as_slice).unwrap_or(&[])),
        MetricShape::Record => key_value_bar(value.as_object().unwrap_or(&Map::new())),
        MetricShape::Other => None,
    }
}

/// Gauge range policy: [0, 2·|value|], or [0, 100] when the value is zero.
/// A negative value therefore sits outside its own range; that asymmetry is
/// inherited behavior, kept deliberately.
fn gauge(value: f64) -> ChartDescriptor {
    let upper = if value != 0.0 {
        2.0 * value.abs()
    } else {
        GAUGE_FALLBACK_BOUND
    };
    ChartDescriptor::Gauge {
        value,
        range: (0.0, upper),
    }
}

/// Short numeric sequences become bars labeled by index; long ones a line.
/// The tie-break is on count only, never on value distribution.
fn numeric_sequence(values: Vec<f64>) -> ChartDescriptor {
    if values.len() < BAR_TO_LINE_THRESHOLD {
        let labels = (0..values.len()).map(|i| i.to_string()).collect();
        ChartDescriptor::CategoricalBar { labels, values }
    } else {
        ChartDescriptor::LineSeries { values }
    }
}

/// Scatter over a record sequence: column 0 is x, column 1 is y. Fewer than
/// two columns after tabulation skips the chart. Rows missing either field
/// (or carrying non-numeric values there) are dropped from the plot.
fn scatter(rows: &[Value]) -> Option<ChartDescriptor> {
    let table = tabulate(rows);
    if table.columns().len() < 2 {
        return None;
    }

    let x_label = table.columns()[0].clone();
    let y_label = table.columns()[1].clone();

    let mut x = Vec::new();
    let mut y = Vec::new();
    for row in 0..table.row_count() {
        if let (Some(px), Some(py)) = (table.cell(0, row), table.cell(1, row)) {
            x.push(px);
            y.push(py);
        }
    }

    let trend = ols_fit(&x, &y);

    Some(ChartDescriptor::Scatter {
        x_label,
        y_label,
        x,
        y,
        trend,
    })
}

/// Key-value bars for a single mapping. Entries without a numeric value are
/// dropped; a mapping with no numeric entries has nothing to draw. Above the
/// size threshold the pairs are sorted ascending and drawn horizontally for
/// label legibility; otherwise declared order, vertical.
fn key_value_bar(map: &Map<String, Value>) -> Option<ChartDescriptor> {
    let mut pairs: Vec<(String, f64)> = map
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|number| (key.clone(), number)))
        .collect();

    if pairs.is_empty() {
        return None;
    }

    let orientation = if pairs.len() > HORIZONTAL_BAR_THRESHOLD {
        pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    Some(ChartDescriptor::KeyValueBar { pairs, orientation })
}

/// A record sequence tabulated column-wise. Column order is first-declared
/// order across rows; a key missing from a row is absent there (never zero),
/// as is a non-numeric cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    columns: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
    row_count: usize,
}

impl ColumnTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<f64> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    /// All present values of one column, in row order.
    pub fn column_values(&self, column: usize) -> Vec<f64> {
        self.cells
            .get(column)
            .map(|cells| cells.iter().copied().flatten().collect())
            .unwrap_or_default()
    }
}

/// Tabulate a sequence of records into a column-oriented table.
pub fn tabulate(rows: &[Value]) -> ColumnTable {
    let mut table = ColumnTable {
        row_count: rows.len(),
        ..ColumnTable::default()
    };

    for (row_index, row) in rows.iter().enumerate() {
        let Some(record) = row.as_object() else {
            continue;
        };
        for (key, value) in record {
            let column = match table.columns.iter().position(|name| name == key) {
                Some(existing) => existing,
                None => {
                    table.columns.push(key.clone());
                    table.cells.push(vec![None; rows.len()]);
                    table.columns.len() - 1
                }
            };
            table.cells[column][row_index] = value.as_f64();
        }
    }

    table
}

/// Ordinary-least-squares fit. Returns `None` below three points or when the
/// x spread is degenerate, which degrades the scatter to plain points.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Option<TrendLine> {
    let n = x.len().min(y.len());
    if n < 3 {
        return None;
    }

    let count = n as f64;
    let mean_x = x[..n].iter().sum::<f64>() / count;
    let mean_y = y[..n].iter().sum::<f64>() / count;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        covariance += dx * (y[i] - mean_y);
        variance += dx * dx;
    }

    if variance.abs() < f64::EPSILON {
        return None;
    }

    let slope = covariance / variance;
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Basic descriptive statistics over one column, shown beside scatter and
/// key-value charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn column_stats(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count as f64 - 1.0);
        variance.sqrt()
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(ColumnStats {
        count,
        mean,
        std_dev,
        min,
        max,
    })
}
