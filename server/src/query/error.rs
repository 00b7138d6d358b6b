//! Errors reported by chart queries.

/// Error returned when a query rejects its parameters.
///
/// Queries validate before aggregating, so an error never comes with
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter is out of range or not a recognized value.
    /// Holds the human-readable reason sent back to the client.
    InvalidParameter(String),
}

impl QueryError {
    pub(crate) fn invalid_year() -> Self {
        Self::InvalidParameter("Invalid year".to_string())
    }

    /// Reason suitable for the `message` field of a response envelope.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidParameter(reason) => reason,
        }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(reason) => write!(f, "invalid parameter: {reason}"),
        }
    }
}

impl std::error::Error for QueryError {}
