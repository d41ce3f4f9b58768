//! Chart figures produced by the reporting module.
//!
//! A [`Chart`] is a plain description of what to draw. Rendering is left to
//! the host; [`Chart::to_plotly`] emits a Plotly figure for web front ends.

use serde::Serialize;
use serde_json::{json, Value};

/// A titled chart with a single series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub series: Series,
}

/// The drawable payload of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Series {
    /// Donut-style pie with one slice per category.
    Pie {
        label: String,
        slices: Vec<Slice>,
        /// Fraction of the radius left empty in the center.
        hole: f64,
    },
    /// One bar per category, annotated with its count.
    Bar {
        x_label: String,
        y_label: String,
        bars: Vec<Bar>,
    },
    /// Equal-width bins over a numeric column.
    Histogram { x_label: String, bins: Vec<Bin> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// Share of the total, 0-100.
    pub percent: f64,
}

impl Slice {
    /// Text shown on the slice: percentage and label.
    #[must_use]
    pub fn annotation(&self) -> String {
        format!("{:.1}%<br>{}", self.percent, self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub category: String,
    pub count: usize,
}

impl Bar {
    /// Text shown on the bar.
    #[must_use]
    pub fn annotation(&self) -> String {
        self.count.to_string()
    }
}

/// Histogram bin covering `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Chart {
    /// Number of categories or bins in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.series {
            Series::Pie { slices, .. } => slices.len(),
            Series::Bar { bars, .. } => bars.len(),
            Series::Histogram { bins, .. } => bins.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as a Plotly figure (`{"data": [...], "layout": {...}}`).
    #[must_use]
    pub fn to_plotly(&self) -> Value {
        match &self.series {
            Series::Pie { label, slices, hole } => json!({
                "data": [{
                    "type": "pie",
                    "name": label,
                    "labels": slices.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
                    "values": slices.iter().map(|s| s.count).collect::<Vec<_>>(),
                    "hole": hole,
                    "textinfo": "percent+label",
                    "textposition": "inside",
                }],
                "layout": { "title": { "text": self.title } },
            }),
            Series::Bar {
                x_label,
                y_label,
                bars,
            } => json!({
                "data": [{
                    "type": "bar",
                    "x": bars.iter().map(|b| b.category.as_str()).collect::<Vec<_>>(),
                    "y": bars.iter().map(|b| b.count).collect::<Vec<_>>(),
                    "text": bars.iter().map(Bar::annotation).collect::<Vec<_>>(),
                    "textposition": "auto",
                }],
                "layout": {
                    "title": { "text": self.title },
                    "xaxis": { "title": { "text": x_label } },
                    "yaxis": { "title": { "text": y_label } },
                },
            }),
            Series::Histogram { x_label, bins } => json!({
                "data": [{
                    "type": "bar",
                    "x": bins.iter().map(|b| (b.start + b.end) / 2.0).collect::<Vec<_>>(),
                    "y": bins.iter().map(|b| b.count).collect::<Vec<_>>(),
                    "width": bins.iter().map(|b| b.end - b.start).collect::<Vec<_>>(),
                }],
                "layout": {
                    "title": { "text": self.title },
                    "bargap": 0,
                    "xaxis": { "title": { "text": x_label } },
                    "yaxis": { "title": { "text": "count" } },
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_renders_as_donut_with_percent_labels() {
        let chart = Chart {
            title: "Status".into(),
            series: Series::Pie {
                label: "status".into(),
                slices: vec![Slice {
                    label: "Updated".into(),
                    count: 3,
                    percent: 100.0,
                }],
                hole: 0.3,
            },
        };

        let figure = chart.to_plotly();
        assert_eq!(figure["data"][0]["type"], "pie");
        assert_eq!(figure["data"][0]["hole"], 0.3);
        assert_eq!(figure["data"][0]["textinfo"], "percent+label");
        assert_eq!(figure["data"][0]["values"][0], 3);
        assert_eq!(figure["layout"]["title"]["text"], "Status");
    }

    #[test]
    fn bar_text_mirrors_counts() {
        let chart = Chart {
            title: "Departments".into(),
            series: Series::Bar {
                x_label: "department".into(),
                y_label: "count".into(),
                bars: vec![
                    Bar {
                        category: "IT".into(),
                        count: 2,
                    },
                    Bar {
                        category: "HR".into(),
                        count: 1,
                    },
                ],
            },
        };

        let figure = chart.to_plotly();
        assert_eq!(figure["data"][0]["x"], json!(["IT", "HR"]));
        assert_eq!(figure["data"][0]["text"], json!(["2", "1"]));
        assert_eq!(chart.len(), 2);
    }

    #[test]
    fn slice_annotation_has_percent_and_label() {
        let slice = Slice {
            label: "Pending".into(),
            count: 1,
            percent: 33.333,
        };
        assert_eq!(slice.annotation(), "33.3%<br>Pending");
    }

    #[test]
    fn series_serializes_with_kind_tag() {
        let series = Series::Histogram {
            x_label: "age".into(),
            bins: vec![],
        };
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["kind"], "histogram");
    }

    #[test]
    fn histogram_renders_prebinned_bars() {
        let chart = Chart {
            title: "Ages".into(),
            series: Series::Histogram {
                x_label: "age".into(),
                bins: vec![
                    Bin {
                        start: 20.0,
                        end: 30.0,
                        count: 2,
                    },
                    Bin {
                        start: 30.0,
                        end: 40.0,
                        count: 1,
                    },
                ],
            },
        };

        let figure = chart.to_plotly();
        let trace = &figure["data"][0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"], json!([25.0, 35.0]));
        assert_eq!(trace["y"], json!([2, 1]));
        assert_eq!(trace["width"], json!([10.0, 10.0]));
        assert!(trace.get("xbins").is_none());
    }
}
