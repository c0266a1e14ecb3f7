use std::collections::BTreeMap;

use crate::data::LaunchTable;
use crate::models::{PieChart, PieSlice, SiteFilter};

/// Success counts for the pie chart.
///
/// - `All`: successful launches only, one slice per site.
/// - A single site: every launch at that site, one slice per outcome (`"0"`/`"1"`).
/// - `Unlisted`: no slices.
///
/// Slices are ordered by count descending, then label.
pub fn site_success(table: &LaunchTable, site: &SiteFilter) -> PieChart {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    let title = match site {
        SiteFilter::All => {
            for record in table.records().iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(record.launch_site.to_string()).or_default() += 1;
            }
            "Total Success Launches by Site".to_string()
        }
        SiteFilter::Site(_) | SiteFilter::Unlisted(_) => {
            for record in table.records().iter().filter(|r| site.matches(r.launch_site)) {
                *counts.entry(record.outcome.as_u8().to_string()).or_default() += 1;
            }
            format!("Total Success Launches for site {}", site)
        }
    };

    let mut slices: Vec<PieSlice> = counts
        .into_iter()
        .map(|(label, count)| PieSlice { label, count })
        .collect();
    // BTreeMap already yields labels in order, so a stable sort keeps ties sorted.
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    PieChart { title, slices }
}
