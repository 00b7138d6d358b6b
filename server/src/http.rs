//! HTTP routes for the dashboard API.
//!
//! Each handler extracts the query string, runs one query against the shared
//! dataset and wraps the outcome in an [`Envelope`]. All routes are `GET` and
//! every response allows any origin.
//!
//! Query strings are read as raw key/value pairs. When a key repeats, the
//! first value wins, so a request can never be rejected before it reaches
//! its query.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dataset::Dataset;
use crate::query::{
    BubbleParams, BubbleRows, ChordRow, CountryParams, PieTables, QueryEngine, RadarRow,
    StackedAreaParams, StackedAreaRow,
};
use crate::response::{EmptyData, Envelope};

/// State shared by all handlers.
#[derive(Clone)]
#[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected for shared state
pub struct AppState {
    /// Immutable dataset, loaded once at startup.
    pub dataset: Arc<Dataset>,
}

impl AppState {
    #[must_use]
    pub const fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.dataset)
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/bubble", get(bubble_handler))
        .route("/api/v1/pie", get(pie_handler))
        .route("/api/v1/radar", get(radar_handler))
        .route("/api/v1/chord", get(chord_handler))
        .route("/api/v1/stacked_area", get(stacked_area_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Raw query string pairs in request order, repeated keys included.
type QueryPairs = Query<Vec<(String, String)>>;

/// First value of `key` in the query string.
fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

async fn bubble_handler(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Envelope<BubbleRows> {
    let params = BubbleParams::new(first(&pairs, "year"), first(&pairs, "country"));
    let result = state.engine().bubble(&params);
    if let Err(e) = &result {
        tracing::debug!("rejected bubble query {params:?}: {e}");
    }
    Envelope::from_result(result, EmptyData::List)
}

async fn pie_handler(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Envelope<PieTables> {
    let params = CountryParams::new(first(&pairs, "country"));
    Envelope::success(state.engine().pie(&params))
}

async fn radar_handler(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Envelope<Vec<RadarRow>> {
    let params = CountryParams::new(first(&pairs, "country"));
    Envelope::success(state.engine().radar(&params))
}

async fn chord_handler(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Envelope<Vec<ChordRow>> {
    let params = CountryParams::new(first(&pairs, "country"));
    Envelope::success(state.engine().chord(&params))
}

async fn stacked_area_handler(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Envelope<Vec<StackedAreaRow>> {
    let params = StackedAreaParams::new(first(&pairs, "type"));
    let result = state.engine().stacked_area(&params);
    if let Err(e) = &result {
        tracing::debug!("rejected stacked_area query {params:?}: {e}");
    }
    Envelope::from_result(result, EmptyData::Object)
}
