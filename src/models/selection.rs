use std::fmt;

use serde::{Deserialize, Serialize};

use super::LaunchSite;

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

/// Which launches the dropdown selects.
///
/// `Unlisted` only arises from free-form input at the HTTP boundary. It matches
/// no records, so charts built from it are empty rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(LaunchSite),
    Unlisted(String),
}

impl SiteFilter {
    /// Parse a dropdown value. Never fails: unknown names become `Unlisted`.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            return Self::All;
        }
        match LaunchSite::from_name(value) {
            Some(site) => Self::Site(site),
            None => Self::Unlisted(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site.as_str(),
            Self::Unlisted(value) => value,
        }
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: LaunchSite) -> bool {
        match self {
            Self::All => true,
            Self::Site(selected) => *selected == site,
            Self::Unlisted(_) => false,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LaunchSite> for SiteFilter {
    fn from(site: LaunchSite) -> Self {
        Self::Site(site)
    }
}

impl Serialize for SiteFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SiteFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Closed payload interval `[low, high]` in kilograms.
///
/// `low > high` is allowed and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends. NaN bounds contain nothing.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

/// Current dashboard control state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_all_sentinel() {
        assert_eq!(SiteFilter::parse("ALL"), SiteFilter::All);
    }

    #[test]
    fn parse_maps_known_sites() {
        assert_eq!(
            SiteFilter::parse("KSC LC-39A"),
            SiteFilter::Site(LaunchSite::KscLc39a)
        );
    }

    #[test]
    fn parse_keeps_unknown_values_as_unlisted() {
        let filter = SiteFilter::parse("Boca Chica");
        assert_eq!(filter, SiteFilter::Unlisted("Boca Chica".to_string()));
        assert_eq!(filter.to_string(), "Boca Chica");
        assert!(LaunchSite::ALL.iter().all(|s| !filter.matches(*s)));
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_or_nan_range_contains_nothing() {
        assert!(!PayloadRange::new(5000.0, 1000.0).contains(3000.0));
        assert!(!PayloadRange::new(f64::NAN, 10000.0).contains(3000.0));
    }
}
