// Life of a request:
// 1. GET /api/v1/<chart>?<params> comes in
// 2. Raw query parameters are extracted into the chart's params struct
// 3. The query engine validates them and aggregates over the shared dataset
// 4. The result (or the rejection) is wrapped in a {code, message, data} envelope
//
// System components:
//  - Dataset store (loaded once, read-only)
//  - Query engine (one pure query per chart)
//  - Response envelope
//  - HTTP routes

pub mod config;
pub mod dataset;
pub mod http;
pub mod query;
pub mod response;

#[cfg(test)]
mod testing;
