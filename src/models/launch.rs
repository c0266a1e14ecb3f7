use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical launch pad.
///
/// The set is closed: a CSV row naming any other pad is rejected at load time,
/// and selections are matched against these variants rather than raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LaunchSite {
    #[serde(rename = "CCAFS LC-40")]
    CcafsLc40,
    #[serde(rename = "VAFB SLC-4E")]
    VafbSlc4e,
    #[serde(rename = "KSC LC-39A")]
    KscLc39a,
    #[serde(rename = "CCAFS SLC-40")]
    CcafsSlc40,
}

impl LaunchSite {
    /// All sites, in dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        Self::CcafsLc40,
        Self::VafbSlc4e,
        Self::KscLc39a,
        Self::CcafsSlc40,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CcafsLc40 => "CCAFS LC-40",
            Self::VafbSlc4e => "VAFB SLC-4E",
            Self::KscLc39a => "KSC LC-39A",
            Self::CcafsSlc40 => "CCAFS SLC-40",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "CCAFS LC-40" => Some(Self::CcafsLc40),
            "VAFB SLC-4E" => Some(Self::VafbSlc4e),
            "KSC LC-39A" => Some(Self::KscLc39a),
            "CCAFS SLC-40" => Some(Self::CcafsSlc40),
            _ => None,
        }
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landing/recovery outcome of a launch, the `class` column.
///
/// Serialized as the integer `0` or `1` so chart y-values match the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Failure),
            1 => Some(Self::Success),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = u8::deserialize(deserializer)?;
        Self::from_u8(v)
            .ok_or_else(|| serde::de::Error::custom(format!("outcome class must be 0 or 1, got {v}")))
    }
}

/// One launch, as loaded from the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: LaunchSite,
    /// Cargo mass in kilograms. Always finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    /// Present when the CSV carries a `Flight Number` column.
    pub flight_number: Option<u32>,
    /// Present when the CSV carries a `Booster Version` column.
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    /// Record with only the columns the charts need.
    pub fn new(
        launch_site: LaunchSite,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site,
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_names_round_trip_through_from_name() {
        for site in LaunchSite::ALL {
            assert_eq!(LaunchSite::from_name(site.as_str()), Some(site));
        }
    }

    #[test]
    fn site_names_are_case_sensitive() {
        assert_eq!(LaunchSite::from_name("ksc lc-39a"), None);
        assert_eq!(LaunchSite::from_name("KSC LC-39A "), None);
    }

    #[test]
    fn site_serializes_as_pad_name() {
        let json = serde_json::to_string(&LaunchSite::VafbSlc4e).unwrap();
        assert_eq!(json, "\"VAFB SLC-4E\"");
    }

    #[test]
    fn outcome_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Outcome::Failure).unwrap(), "0");
    }

    #[test]
    fn outcome_rejects_values_other_than_zero_and_one() {
        assert!(serde_json::from_str::<Outcome>("2").is_err());
        assert_eq!(serde_json::from_str::<Outcome>("1").unwrap(), Outcome::Success);
    }
}
