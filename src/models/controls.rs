use serde::{Deserialize, Serialize};

use super::{LaunchSite, SiteFilter, ALL_SITES};

/// Spacing of labelled ticks on the payload slider.
pub const SLIDER_MARK_INTERVAL_KG: f64 = 2500.0;

/// A dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Initial `[low, high]`, the full observed range.
    pub value: [f64; 2],
    pub marks: Vec<f64>,
}

impl SliderConfig {
    /// Slider spanning `[min, max]` with marks at every multiple of
    /// [`SLIDER_MARK_INTERVAL_KG`] inside those bounds.
    pub fn spanning(min: f64, max: f64) -> Self {
        let mut marks = Vec::new();
        let mut mark = (min / SLIDER_MARK_INTERVAL_KG).ceil() * SLIDER_MARK_INTERVAL_KG;
        while mark <= max {
            marks.push(mark);
            mark += SLIDER_MARK_INTERVAL_KG;
        }
        Self {
            min,
            max,
            value: [min, max],
            marks,
        }
    }
}

/// Everything the page needs to render its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub site_options: Vec<DropdownOption>,
    pub default_site: SiteFilter,
    pub placeholder: String,
    pub payload_slider: SliderConfig,
}

impl Controls {
    pub fn new(min_payload: f64, max_payload: f64) -> Self {
        let mut site_options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        site_options.extend(LaunchSite::ALL.iter().map(|site| DropdownOption {
            label: site.as_str().to_string(),
            value: site.as_str().to_string(),
        }));

        Self {
            site_options,
            default_site: SiteFilter::All,
            placeholder: "Select a Launch Site here".to_string(),
            payload_slider: SliderConfig::spanning(min_payload, max_payload),
        }
    }
}
