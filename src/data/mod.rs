//! In-memory launch table.
//!
//! The table is loaded once at startup and never mutated. Payload bounds are
//! computed from the records themselves, so every record lies inside them.

mod loader;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{LaunchRecord, PayloadRange};

pub use loader::REQUIRED_COLUMNS;

/// Reasons a launch table cannot be built.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Record {record}: {source}")]
    Malformed {
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Record {record}: unknown launch site '{site}'")]
    UnknownSite { record: usize, site: String },

    #[error("Record {record}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { record: usize, value: u8 },

    #[error("Record {record}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { record: usize, value: f64 },

    #[error("Launch table has no records")]
    Empty,
}

/// Immutable, ordered launch records plus their payload bounds.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchTable {
    /// Build a table from already-parsed records.
    ///
    /// Fails on an empty input or on a negative or non-finite payload, since
    /// either would leave the payload bounds undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        let mut bounds: Option<(f64, f64)> = None;

        for (i, record) in records.iter().enumerate() {
            let mass = record.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DataError::InvalidPayload {
                    record: i + 1,
                    value: mass,
                });
            }
            bounds = Some(match bounds {
                None => (mass, mass),
                Some((lo, hi)) => (lo.min(mass), hi.max(mass)),
            });
        }

        let (min_payload, max_payload) = bounds.ok_or(DataError::Empty)?;

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    /// Load a table from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| DataError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let records = loader::read_records(reader)?;
        tracing::debug!("Read {} launch records from {}", records.len(), path.display());
        Self::from_records(records)
    }

    /// Load a table from any CSV byte source.
    pub fn from_reader<R: std::io::Read>(rdr: R) -> Result<Self, DataError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_records(loader::read_records(reader)?)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// `[min_payload, max_payload]`, the slider's default value.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }
}
