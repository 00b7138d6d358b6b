//! Dataset store.
//!
//! Holds the immutable in-memory tables served by the API: the mission
//! records and, when configured, the GDP table in long form.
//!
//! # Pre-conditions
//!
//! - The mission CSV exists and every row deserializes into a mission record.
//! - If a GDP path is configured, that file has a country column.
//!
//! # Post-conditions
//!
//! - A `Dataset` is fully populated when `load` returns `Ok`.
//!
//! # Invariants
//!
//! - A `Dataset` exposes no mutation methods. It is shared between requests
//!   behind an `Arc` and read concurrently without locking.

mod gdp;
mod loader;
mod mission;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use gdp::{GdpRecord, GdpTable};
pub use loader::LoadError;
pub use mission::{EnvironmentalImpact, MissionRecord};

/// Locations of the CSV files backing a dataset.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    /// The space-exploration mission CSV.
    pub missions: PathBuf,
    /// Optional wide-form GDP CSV.
    pub gdp: Option<PathBuf>,
}

/// Immutable tables shared by all queries.
#[derive(Debug)]
pub struct Dataset {
    missions: Vec<MissionRecord>,
    gdp: Option<GdpTable>,
}

impl Dataset {
    /// Load the mission table and, if configured, the GDP table.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if a file is missing, unreadable or malformed.
    pub fn load(paths: &DatasetPaths) -> Result<Self, LoadError> {
        let missions = loader::load_missions(&paths.missions)?;
        tracing::info!(
            "Loaded {} mission records from {}",
            missions.len(),
            paths.missions.display()
        );

        let gdp = match &paths.gdp {
            Some(path) => {
                let table = GdpTable::from_records(loader::load_gdp(path)?);
                tracing::info!("Loaded {} GDP values from {}", table.len(), path.display());
                Some(table)
            }
            None => None,
        };

        Ok(Self { missions, gdp })
    }

    /// Build a dataset from records already in memory.
    #[must_use]
    pub const fn from_parts(missions: Vec<MissionRecord>, gdp: Option<GdpTable>) -> Self {
        Self { missions, gdp }
    }

    /// Mission records in file order.
    #[must_use]
    pub fn missions(&self) -> &[MissionRecord] {
        &self.missions
    }

    /// The GDP table, if one was configured.
    #[must_use]
    pub const fn gdp(&self) -> Option<&GdpTable> {
        self.gdp.as_ref()
    }

    /// Number of distinct countries in the mission table.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.missions
            .iter()
            .map(|m| m.country.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
