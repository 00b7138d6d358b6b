//! Mission records: one row of the space-exploration dataset.
//!
//! # Invariants
//!
//! - `environmental_impact` is resolved once when the record is built and is
//!   never recomputed by queries.

use serde::Deserialize;

/// Environmental impact category of a mission.
///
/// Each category maps to a fixed ordinal used by the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentalImpact {
    Low,
    Medium,
    High,
}

impl EnvironmentalImpact {
    /// Parse a category label. Returns `None` for anything but the three known labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    /// Ordinal on the Low=1, Medium=3, High=5 scale.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }
}

/// One mission row as it appears in the CSV file.
#[derive(Debug, Deserialize)]
pub(crate) struct MissionRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Budget (in Billion $)")]
    budget: f64,
    #[serde(rename = "Duration (in Days)")]
    duration: i64,
    #[serde(rename = "Mission Type", default)]
    mission_type: Option<String>,
    #[serde(rename = "Satellite Type", default)]
    satellite_type: Option<String>,
    #[serde(rename = "Technology Used", default)]
    technology_used: Option<String>,
    #[serde(rename = "Environmental Impact", default)]
    environmental_impact: Option<String>,
    #[serde(rename = "Success Rate (%)")]
    success_rate: f64,
    #[serde(rename = "Collaborating Countries", default)]
    collaborating_countries: Option<String>,
}

/// A mission record held by the dataset store.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRecord {
    pub country: String,
    pub year: i32,
    /// Budget in billions of dollars.
    pub budget: f64,
    /// Duration in days.
    pub duration: i64,
    /// Category columns are `None` when the CSV cell is empty; such records
    /// form no group in category counts.
    pub mission_type: Option<String>,
    pub satellite_type: Option<String>,
    pub technology_used: Option<String>,
    /// `None` when the CSV value is missing or not one of Low/Medium/High.
    pub environmental_impact: Option<EnvironmentalImpact>,
    /// Success rate in percent.
    pub success_rate: f64,
    /// Raw comma-separated collaborator list.
    pub collaborating_countries: Option<String>,
}

impl MissionRecord {
    /// Iterate over the trimmed, non-empty collaborators of this mission.
    pub fn collaborators(&self) -> impl Iterator<Item = &str> {
        self.collaborating_countries
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

impl From<MissionRow> for MissionRecord {
    fn from(row: MissionRow) -> Self {
        let environmental_impact = row
            .environmental_impact
            .as_deref()
            .and_then(EnvironmentalImpact::from_label);
        Self {
            country: row.country,
            year: row.year,
            budget: row.budget,
            duration: row.duration,
            mission_type: row.mission_type,
            satellite_type: row.satellite_type,
            technology_used: row.technology_used,
            environmental_impact,
            success_rate: row.success_rate,
            collaborating_countries: row.collaborating_countries,
        }
    }
}
