//! Query engine for the chart endpoints.
//!
//! This module turns the raw parameters of a chart request into result rows.
//! Each chart has one query:
//! - `bubble` - budget and duration per country for a year, optionally joined with GDP
//! - `pie` - category frequencies for a country
//! - `radar` - one summary row for a country
//! - `chord` - collaboration pairs
//! - `stacked_area` - category counts per year
//!
//! # Example
//!
//! ```ignore
//! use space_api::dataset::Dataset;
//! use space_api::query::{BubbleParams, QueryEngine};
//!
//! let dataset = Dataset::load(&paths)?;
//! let engine = QueryEngine::new(&dataset);
//!
//! let rows = engine.bubble(&BubbleParams::new(Some("2004"), None))?;
//! ```
//!
//! # Invariants
//!
//! - Queries never modify the dataset; the same parameters against the same
//!   dataset always produce the same rows in the same order.

mod aggregate;
pub mod engine;
pub mod error;
pub mod types;

pub use engine::QueryEngine;
pub use error::QueryError;
pub use types::{
    BubbleParams, BubbleRow, BubbleRows, ChordRow, CountRow, CountryParams, GdpBubbleRow,
    MAX_YEAR, MIN_YEAR, PieTables, RadarRow, StackDimension, StackedAreaParams, StackedAreaRow,
};
