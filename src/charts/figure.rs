//! Plotly figure descriptions.
//!
//! The page passes these straight to `Plotly.react`, so field names follow
//! Plotly's JSON schema rather than Rust conventions.

use serde::{Deserialize, Serialize};

use crate::models::{PieChart, ScatterChart, ScatterPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub mode: String,
    pub name: String,
    pub legendgroup: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    /// Hover text, one entry per point.
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub legend: Option<Legend>,
}

impl Figure {
    /// Single pie trace. Zero slices still produce a trace so the chart
    /// keeps its title and renders as empty.
    pub fn pie(chart: &PieChart) -> Self {
        let (labels, values): (Vec<String>, Vec<usize>) = chart
            .slices
            .iter()
            .map(|s| (s.label.clone(), s.count))
            .unzip();

        Self {
            data: vec![Trace::Pie(PieTrace { labels, values })],
            layout: Layout {
                title: Title::new(&chart.title),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    /// One marker trace per booster category, in order of first appearance.
    pub fn scatter(chart: &ScatterChart) -> Self {
        let mut traces: Vec<ScatterTrace> = Vec::new();

        for point in &chart.points {
            let category = &point.booster_version_category;
            let idx = match traces.iter().position(|t| &t.name == category) {
                Some(idx) => idx,
                None => {
                    traces.push(ScatterTrace {
                        mode: "markers".to_string(),
                        name: category.clone(),
                        legendgroup: category.clone(),
                        x: Vec::new(),
                        y: Vec::new(),
                        text: Vec::new(),
                    });
                    traces.len() - 1
                }
            };
            let trace = &mut traces[idx];
            trace.x.push(point.payload_mass_kg);
            trace.y.push(point.outcome.as_u8());
            trace.text.push(hover_text(point));
        }

        Self {
            data: traces.into_iter().map(Trace::Scatter).collect(),
            layout: Layout {
                title: Title::new(&chart.title),
                xaxis: Some(Axis {
                    title: Title::new("Payload Mass (kg)"),
                }),
                yaxis: Some(Axis {
                    title: Title::new("class"),
                }),
                legend: Some(Legend {
                    title: Title::new("Booster Version Category"),
                }),
            },
        }
    }
}

fn hover_text(point: &ScatterPoint) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(n) = point.flight_number {
        parts.push(format!("Flight {}", n));
    }
    parts.push(point.launch_site.to_string());
    if let Some(ref version) = point.booster_version {
        parts.push(version.clone());
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchSite, Outcome, PieSlice};

    fn point(mass: f64, outcome: Outcome, category: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: mass,
            outcome,
            booster_version_category: category.to_string(),
            launch_site: LaunchSite::KscLc39a,
            flight_number: None,
            booster_version: None,
        }
    }

    #[test]
    fn pie_figure_serializes_in_plotly_shape() {
        let chart = PieChart {
            title: "Total Success Launches by Site".to_string(),
            slices: vec![PieSlice {
                label: "KSC LC-39A".to_string(),
                count: 10,
            }],
        };

        let json = serde_json::to_value(Figure::pie(&chart)).unwrap();
        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["labels"][0], "KSC LC-39A");
        assert_eq!(json["data"][0]["values"][0], 10);
        assert_eq!(json["layout"]["title"]["text"], "Total Success Launches by Site");
        assert!(json["layout"].get("xaxis").is_none());
    }

    #[test]
    fn scatter_groups_points_by_category_in_first_seen_order() {
        let chart = ScatterChart {
            title: "t".to_string(),
            points: vec![
                point(500.0, Outcome::Failure, "v1.1"),
                point(5000.0, Outcome::Success, "FT"),
                point(700.0, Outcome::Success, "v1.1"),
            ],
        };

        let figure = Figure::scatter(&chart);
        let traces: Vec<&ScatterTrace> = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s,
                Trace::Pie(_) => panic!("unexpected pie trace"),
            })
            .collect();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].name, "v1.1");
        assert_eq!(traces[0].x, vec![500.0, 700.0]);
        assert_eq!(traces[0].y, vec![0, 1]);
        assert_eq!(traces[1].name, "FT");
        assert_eq!(
            figure.layout.xaxis.as_ref().map(|a| a.title.text.as_str()),
            Some("Payload Mass (kg)")
        );
    }

    #[test]
    fn empty_scatter_has_no_traces_but_keeps_layout() {
        let chart = ScatterChart {
            title: "Correlation between Payload and Success for all Sites".to_string(),
            points: Vec::new(),
        };

        let figure = Figure::scatter(&chart);
        assert!(figure.data.is_empty());
        assert_eq!(figure.layout.title.text, chart.title);
    }

    #[test]
    fn hover_text_includes_optional_columns() {
        let mut p = point(500.0, Outcome::Success, "v1.1");
        p.flight_number = Some(7);
        p.booster_version = Some("F9 v1.1 B1003".to_string());
        assert_eq!(hover_text(&p), "Flight 7 | KSC LC-39A | F9 v1.1 B1003");
    }
}
