//! Query parameters and result rows.
//!
//! Parameters arrive as raw optional strings straight from the request's
//! query string; each query validates them before doing any work.
//!
//! Result rows are tuple structs so they serialize as JSON arrays, which is
//! the row format the dashboard consumes.

use serde::Serialize;

use super::error::QueryError;
use crate::dataset::MissionRecord;

/// First year accepted by the bubble chart.
pub const MIN_YEAR: i32 = 2000;
/// Last year accepted by the bubble chart.
pub const MAX_YEAR: i32 = 2024;

/// Parameters of the bubble chart query.
#[derive(Debug, Default)]
pub struct BubbleParams {
    pub year: Option<String>,
    pub country: Option<String>,
}

impl BubbleParams {
    #[must_use]
    pub fn new(year: Option<&str>, country: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_owned),
            country: country.map(str::to_owned),
        }
    }

    /// The requested year, defaulting to [`MIN_YEAR`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter("Invalid year")` if the year is not an integer
    /// in `MIN_YEAR..=MAX_YEAR`.
    pub fn year(&self) -> Result<i32, QueryError> {
        let year = match self.year.as_deref() {
            None => MIN_YEAR,
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| QueryError::invalid_year())?,
        };
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(year)
        } else {
            Err(QueryError::invalid_year())
        }
    }
}

/// Parameters of the pie, radar and chord queries.
#[derive(Debug, Default)]
pub struct CountryParams {
    pub country: Option<String>,
}

impl CountryParams {
    #[must_use]
    pub fn new(country: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_owned),
        }
    }
}

/// Parameters of the stacked area query.
#[derive(Debug, Default)]
pub struct StackedAreaParams {
    /// The `type` query parameter.
    pub kind: Option<String>,
}

impl StackedAreaParams {
    #[must_use]
    pub fn new(kind: Option<&str>) -> Self {
        Self {
            kind: kind.map(str::to_owned),
        }
    }
}

/// Column a stacked area chart is broken down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDimension {
    SatelliteType,
    TechnologyUsed,
}

impl StackDimension {
    /// Resolve the `type` parameter. Only the exact column names are accepted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter("Invalid index")` for any other value.
    pub fn parse(kind: Option<&str>) -> Result<Self, QueryError> {
        match kind {
            Some("Satellite Type") => Ok(Self::SatelliteType),
            Some("Technology Used") => Ok(Self::TechnologyUsed),
            _ => Err(QueryError::InvalidParameter("Invalid index".to_string())),
        }
    }

    /// The record's value in this column, `None` if the cell was empty.
    pub(crate) fn value(self, record: &MissionRecord) -> Option<&str> {
        match self {
            Self::SatelliteType => record.satellite_type.as_deref(),
            Self::TechnologyUsed => record.technology_used.as_deref(),
        }
    }
}

/// `[country, mean budget, mean duration]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleRow(pub String, pub f64, pub f64);

/// `[country, mean gdp, total budget, total duration]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GdpBubbleRow(pub String, pub Option<f64>, pub f64, pub i64);

/// Bubble chart rows; the shape depends on whether a GDP table is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BubbleRows {
    Plain(Vec<BubbleRow>),
    WithGdp(Vec<GdpBubbleRow>),
}

impl BubbleRows {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(rows) => rows.len(),
            Self::WithGdp(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `[category, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow(pub String, pub usize);

/// Frequency tables by mission type, satellite type and technology, in that order.
pub type PieTables = [Vec<CountRow>; 3];

/// `[country, count, mean budget, mean success rate, mean environmental impact, mean duration]`.
///
/// The environmental impact mean is `None` when no record has a known category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow(
    pub String,
    pub usize,
    pub f64,
    pub f64,
    pub Option<f64>,
    pub f64,
);

/// `[country, collaborator]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordRow(pub String, pub String);

/// `[dimension value, year, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedAreaRow(pub String, pub i32, pub usize);
