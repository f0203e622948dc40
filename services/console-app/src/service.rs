//! Fetch lifecycle as a sum type
//!
//! `Init -> Loading -> {Loaded | Error}`. A loaded or failed service only
//! returns to `Loading` through an explicit reload signal, never on its own.
//! In-flight fetches are not cancelled when their dependencies change; the
//! last completed write wins.

use crate::error::ApiError;

/// Lifecycle of an asynchronously fetched value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Service<T> {
    Init,
    Loading,
    Loaded(T),
    Error(ApiError),
}

impl<T> Service<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Service::Loaded(_))
    }

    /// Payload of a loaded service
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Service::Loaded(payload) => Some(payload),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Service<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => Service::Loaded(payload),
            Err(error) => Service::Error(error),
        }
    }
}
