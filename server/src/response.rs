//! Response envelope shared by every endpoint.
//!
//! Every response body has the shape `{code, message, data}`. Success carries
//! `code: 200`, `message: "Success"` and the result rows. Failure carries
//! `code: 400`, the reason as `message`, and an empty `data` container.
//!
//! The envelope is always sent with HTTP status 200; clients read `code`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};

use crate::query::QueryError;

/// Envelope code for a successful query.
pub const CODE_SUCCESS: u16 = 200;
/// Envelope code for a rejected query.
pub const CODE_INVALID: u16 = 400;

/// The empty container sent as `data` when a query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyData {
    /// `[]`
    List,
    /// `{}`
    Object,
}

impl Serialize for EmptyData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List => serializer.serialize_seq(Some(0))?.end(),
            Self::Object => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Payload of an envelope: result rows, or the empty container on failure.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Rows(T),
    Empty(EmptyData),
}

/// The `{code, message, data}` wrapper.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub data: Payload<T>,
}

impl<T> Envelope<T> {
    /// Wrap successful result rows.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            message: "Success".to_string(),
            data: Payload::Rows(data),
        }
    }

    /// Wrap a query error, using `empty` as the `data` container.
    #[must_use]
    pub fn failure(error: &QueryError, empty: EmptyData) -> Self {
        Self {
            code: CODE_INVALID,
            message: error.reason().to_string(),
            data: Payload::Empty(empty),
        }
    }

    /// Wrap the outcome of a query.
    #[must_use]
    pub fn from_result(result: Result<T, QueryError>, empty: EmptyData) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(&error, empty),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
