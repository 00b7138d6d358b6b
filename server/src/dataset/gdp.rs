//! GDP table in long form.
//!
//! The GDP file is wide: one row per country, one column per year. It is
//! reshaped into `(country, year, gdp)` records when loaded so it can be
//! joined against mission records on `(country, year)`.
//!
//! # Invariants
//!
//! - Year keys are integers; header cells that do not parse as a year are
//!   never part of the table.
//! - Each `(country, year)` key appears at most once.

use std::collections::HashMap;

/// One long-form GDP value.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpRecord {
    pub country: String,
    pub year: i32,
    pub gdp: f64,
}

/// Read-only GDP lookup keyed by `(country, year)`.
#[derive(Debug, Default)]
pub struct GdpTable {
    records: Vec<GdpRecord>,
    /// country -> year -> position in `records`.
    index: HashMap<String, HashMap<i32, usize>>,
}

impl GdpTable {
    /// Build a table from long-form records.
    ///
    /// When a key repeats, the first value wins and the duplicate is dropped.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = GdpRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            let position = table.records.len();
            let years = table.index.entry(record.country.clone()).or_default();
            if years.contains_key(&record.year) {
                tracing::warn!(
                    "duplicate GDP value for '{}' in {}, keeping the first",
                    record.country,
                    record.year
                );
                continue;
            }
            years.insert(record.year, position);
            table.records.push(record);
        }
        table
    }

    /// GDP of `country` in `year`, if known.
    #[must_use]
    pub fn get(&self, country: &str, year: i32) -> Option<f64> {
        self.index
            .get(country)
            .and_then(|years| years.get(&year))
            .map(|&i| self.records[i].gdp)
    }

    /// All records in long form, in load order.
    #[must_use]
    pub fn records(&self) -> &[GdpRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Interpret a wide-form header cell as a year column.
pub(crate) fn parse_year_header(header: &str) -> Option<i32> {
    header.trim().parse::<i32>().ok()
}
