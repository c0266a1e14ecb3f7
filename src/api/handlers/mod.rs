use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::charts::{self, Figure};
use crate::data::LaunchTable;
use crate::models::*;

const INDEX_HTML: &str = include_str!("../static/index.html");

// ============================================================
// Response Types
// ============================================================

/// A derived chart table together with the figure the page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse<T> {
    pub chart: T,
    pub figure: Figure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub records: usize,
}

/// Log selections that name no known site. They still produce an (empty) chart.
fn note_unlisted(site: &SiteFilter) {
    if let SiteFilter::Unlisted(value) = site {
        tracing::warn!("Unlisted launch site '{}' selected, chart will be empty", value);
    }
}

// ============================================================
// Page
// ============================================================

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        records: state.table().len(),
    })
}

// ============================================================
// Controls
// ============================================================

pub async fn get_controls(State(state): State<AppState>) -> Json<Controls> {
    let table = state.table();
    Json(Controls::new(table.min_payload(), table.max_payload()))
}

// ============================================================
// Charts
// ============================================================

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    #[serde(default)]
    pub site: SiteFilter,
}

pub async fn success_pie(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> Json<ChartResponse<PieChart>> {
    note_unlisted(&query.site);

    let chart = charts::site_success(state.table(), &query.site);
    tracing::debug!(
        "Success pie for {}: {} slices, {} launches",
        query.site,
        chart.slices.len(),
        chart.total()
    );

    let figure = Figure::pie(&chart);
    Json(ChartResponse { chart, figure })
}

/// Missing bounds default to the table's observed payload range.
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    pub site: SiteFilter,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ScatterQuery {
    fn into_selection(self, table: &LaunchTable) -> Selection {
        Selection {
            site: self.site,
            payload_range: PayloadRange::new(
                self.low.unwrap_or_else(|| table.min_payload()),
                self.high.unwrap_or_else(|| table.max_payload()),
            ),
        }
    }
}

pub async fn payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> Json<ChartResponse<ScatterChart>> {
    note_unlisted(&query.site);

    let table = state.table();
    let selection = query.into_selection(table);
    let range = selection.payload_range;

    let chart = charts::payload_outcome(table, &selection.site, range);
    tracing::debug!(
        "Payload scatter for {} in [{}, {}]: {} points",
        selection.site,
        range.low,
        range.high,
        chart.points.len()
    );

    let figure = Figure::scatter(&chart);
    Json(ChartResponse { chart, figure })
}
