use serde::{Deserialize, Serialize};

use super::{LaunchRecord, LaunchSite, Outcome};

/// One pie slice: a category label and how many launches fall in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// Derived table behind the success pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Count for `label`, or 0 when there is no such slice.
    pub fn count_of(&self, label: &str) -> usize {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map_or(0, |s| s.count)
    }
}

/// One scatter point: payload on x, outcome on y, colored by booster category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub launch_site: LaunchSite,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site,
            flight_number: record.flight_number,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Derived table behind the payload/outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}
