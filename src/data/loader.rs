use serde::Deserialize;

use super::DataError;
use crate::models::{LaunchRecord, LaunchSite, Outcome};

/// Columns a launch CSV must carry. Any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Raw CSV row before site and outcome validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(
        rename = "Flight Number",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    flight_number: Option<u32>,
    #[serde(
        rename = "Booster Version",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    booster_version: Option<String>,
}

impl CsvRow {
    fn into_record(self, record: usize) -> Result<LaunchRecord, DataError> {
        let launch_site =
            LaunchSite::from_name(&self.launch_site).ok_or_else(|| DataError::UnknownSite {
                record,
                site: self.launch_site.clone(),
            })?;
        let outcome = Outcome::from_u8(self.class).ok_or(DataError::InvalidOutcome {
            record,
            value: self.class,
        })?;

        Ok(LaunchRecord {
            launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version_category: self.booster_version_category,
            flight_number: self.flight_number,
            booster_version: self.booster_version.filter(|v| !v.is_empty()),
        })
    }
}

/// Read every row of `reader`, numbering records from 1 (header excluded).
pub(super) fn read_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<LaunchRecord>, DataError> {
    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(DataError::MissingColumn(missing));
    }

    let mut records = Vec::new();
    for (i, raw) in reader.records().enumerate() {
        let record = i + 1;
        let raw = raw.map_err(|source| DataError::Malformed { record, source })?;
        let row: CsvRow = raw
            .deserialize(Some(&headers))
            .map_err(|source| DataError::Malformed { record, source })?;
        records.push(row.into_record(record)?);
    }

    Ok(records)
}
