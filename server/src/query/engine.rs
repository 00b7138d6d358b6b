//! Query engine implementation.
//!
//! The `QueryEngine` evaluates one chart query at a time against a borrowed
//! dataset. Every query is a single pass of filter, group and aggregate:
//! - bubble: mean (or, with GDP, sum) of budget and duration per country for one year
//! - pie: record counts per mission type, satellite type and technology for one country
//! - radar: one summary row for one country
//! - chord: (country, collaborator) pairs
//! - stacked area: record counts per category and year
//!
//! Groups are collected in `BTreeMap`s so rows come out sorted by their
//! group key, which keeps responses deterministic.

use std::collections::BTreeMap;

use super::aggregate::Mean;
use super::error::QueryError;
use super::types::{
    BubbleParams, BubbleRow, BubbleRows, ChordRow, CountRow, CountryParams, GdpBubbleRow,
    PieTables, RadarRow, StackDimension, StackedAreaParams, StackedAreaRow,
};
use crate::dataset::{Dataset, GdpTable, MissionRecord};

/// The query engine evaluates chart queries against a dataset.
///
/// Queries only read from the dataset.
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine for a dataset.
    #[must_use]
    pub const fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Per-country budget and duration for one year.
    ///
    /// Without a GDP table, budget and duration are averaged per country. With
    /// one, missions are joined to GDP on (country, year), GDP is averaged and
    /// budget and duration are summed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter("Invalid year")` if the year is not an integer
    /// between 2000 and 2024.
    pub fn bubble(&self, params: &BubbleParams) -> Result<BubbleRows, QueryError> {
        let year = params.year()?;
        let country = params.country.as_deref();
        let missions = self
            .dataset
            .missions()
            .iter()
            .filter(|m| m.year == year && country.is_none_or(|c| m.country == c));

        Ok(match self.dataset.gdp() {
            None => BubbleRows::Plain(bubble_means(missions)),
            Some(gdp) => BubbleRows::WithGdp(bubble_with_gdp(missions, gdp)),
        })
    }

    /// Record counts for one country by mission type, satellite type and
    /// technology used.
    ///
    /// An absent or unknown country yields three empty tables. A record with
    /// an empty category cell is not counted in that table.
    #[must_use]
    pub fn pie(&self, params: &CountryParams) -> PieTables {
        let mut by_mission_type = BTreeMap::<&str, usize>::new();
        let mut by_satellite_type = BTreeMap::<&str, usize>::new();
        let mut by_technology = BTreeMap::<&str, usize>::new();

        for mission in missions_of(self.dataset.missions(), params.country.as_deref()) {
            count_into(&mut by_mission_type, mission.mission_type.as_deref());
            count_into(&mut by_satellite_type, mission.satellite_type.as_deref());
            count_into(&mut by_technology, mission.technology_used.as_deref());
        }

        [
            count_rows(by_mission_type),
            count_rows(by_satellite_type),
            count_rows(by_technology),
        ]
    }

    /// Summary of one country: record count and the means of budget, success
    /// rate, environmental impact ordinal and duration.
    ///
    /// Returns no row if the country is absent or has no records. Records with
    /// an unknown environmental impact are left out of that mean only.
    #[must_use]
    pub fn radar(&self, params: &CountryParams) -> Vec<RadarRow> {
        let Some(country) = params.country.as_deref() else {
            return Vec::new();
        };

        let mut count = 0;
        let mut budget = Mean::default();
        let mut success_rate = Mean::default();
        let mut environmental_impact = Mean::default();
        let mut duration = Mean::default();
        for mission in missions_of(self.dataset.missions(), Some(country)) {
            count += 1;
            budget.push(mission.budget);
            success_rate.push(mission.success_rate);
            if let Some(impact) = mission.environmental_impact {
                environmental_impact.push(f64::from(impact.ordinal()));
            }
            duration.push(days(mission.duration));
        }

        if count == 0 {
            return Vec::new();
        }
        vec![RadarRow(
            country.to_owned(),
            count,
            budget.value().unwrap_or_default(),
            success_rate.value().unwrap_or_default(),
            environmental_impact.value(),
            duration.value().unwrap_or_default(),
        )]
    }

    /// Collaboration pairs, one per listed collaborator, in record order.
    ///
    /// With a country, only that country's pairs are kept and self-pairs are
    /// dropped.
    #[must_use]
    pub fn chord(&self, params: &CountryParams) -> Vec<ChordRow> {
        let country = params.country.as_deref();
        self.dataset
            .missions()
            .iter()
            .filter(|m| country.is_none_or(|c| m.country == c))
            .flat_map(|m| {
                m.collaborators()
                    .filter(move |&collaborator| country != Some(collaborator))
                    .map(move |collaborator| ChordRow(m.country.clone(), collaborator.to_owned()))
            })
            .collect()
    }

    /// Record counts per (category, year), where the category column is picked
    /// by the `type` parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter("Invalid index")` unless `type` is exactly
    /// `Satellite Type` or `Technology Used`.
    pub fn stacked_area(
        &self,
        params: &StackedAreaParams,
    ) -> Result<Vec<StackedAreaRow>, QueryError> {
        let dimension = StackDimension::parse(params.kind.as_deref())?;

        let mut counts = BTreeMap::<(&str, i32), usize>::new();
        for mission in self.dataset.missions() {
            if let Some(value) = dimension.value(mission) {
                *counts.entry((value, mission.year)).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|((value, year), count)| StackedAreaRow(value.to_owned(), year, count))
            .collect())
    }
}

/// Missions of `country`; nothing when `country` is `None`.
fn missions_of<'a>(
    missions: &'a [MissionRecord],
    country: Option<&'a str>,
) -> impl Iterator<Item = &'a MissionRecord> {
    missions
        .iter()
        .filter(move |m| country.is_some_and(|c| m.country == c))
}

#[allow(clippy::cast_precision_loss)] // Durations are small day counts
fn days(duration: i64) -> f64 {
    duration as f64
}

/// Count one record under `category`. Records without a category are not counted.
fn count_into<'a>(counts: &mut BTreeMap<&'a str, usize>, category: Option<&'a str>) {
    if let Some(category) = category {
        *counts.entry(category).or_default() += 1;
    }
}

fn count_rows(counts: BTreeMap<&str, usize>) -> Vec<CountRow> {
    counts
        .into_iter()
        .map(|(category, count)| CountRow(category.to_owned(), count))
        .collect()
}

fn bubble_means<'a>(missions: impl Iterator<Item = &'a MissionRecord>) -> Vec<BubbleRow> {
    let mut groups = BTreeMap::<&str, (Mean, Mean)>::new();
    for mission in missions {
        let (budget, duration) = groups.entry(&mission.country).or_default();
        budget.push(mission.budget);
        duration.push(days(mission.duration));
    }

    // Every group holds at least one mission, so both means are present.
    groups
        .into_iter()
        .map(|(country, (budget, duration))| {
            BubbleRow(
                country.to_owned(),
                budget.value().unwrap_or_default(),
                duration.value().unwrap_or_default(),
            )
        })
        .collect()
}

#[derive(Default)]
struct GdpGroup {
    gdp: Mean,
    budget: f64,
    duration: i64,
}

fn bubble_with_gdp<'a>(
    missions: impl Iterator<Item = &'a MissionRecord>,
    gdp: &GdpTable,
) -> Vec<GdpBubbleRow> {
    let mut groups = BTreeMap::<&str, GdpGroup>::new();
    for mission in missions {
        let group = groups.entry(&mission.country).or_default();
        // Left join: a mission without a GDP partner still counts toward the sums.
        if let Some(value) = gdp.get(&mission.country, mission.year) {
            group.gdp.push(value);
        }
        group.budget += mission.budget;
        group.duration += mission.duration;
    }

    groups
        .into_iter()
        .map(|(country, group)| {
            GdpBubbleRow(
                country.to_owned(),
                group.gdp.value(),
                group.budget,
                group.duration,
            )
        })
        .collect()
}
