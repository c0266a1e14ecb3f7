use crate::data::LaunchTable;
use crate::models::{PayloadRange, ScatterChart, ScatterPoint, SiteFilter};

/// Launches inside `range` (inclusive) at the selected site, in table order.
pub fn payload_outcome(table: &LaunchTable, site: &SiteFilter, range: PayloadRange) -> ScatterChart {
    let points = table
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(r.launch_site))
        .map(ScatterPoint::from)
        .collect();

    let title = match site {
        SiteFilter::All => "Correlation between Payload and Success for all Sites".to_string(),
        other => format!("Correlation between Payload and Success for {}", other),
    };

    ScatterChart { title, points }
}
