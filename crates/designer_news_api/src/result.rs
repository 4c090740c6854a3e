//! Two-variant outcome returned by data sources.

use crate::error::DesignerNewsError;

/// Exactly one of a value or the failure that prevented producing it.
#[must_use]
#[derive(Debug)]
pub enum FetchResult<T> {
    Success(T),
    Error(DesignerNewsError),
}

impl<T> FetchResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Converts into a standard `Result` so callers can use `?`.
    pub fn into_result(self) -> crate::error::Result<T> {
        match self {
            FetchResult::Success(value) => Ok(value),
            FetchResult::Error(err) => Err(err),
        }
    }
}

impl<T> From<crate::error::Result<T>> for FetchResult<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(value) => FetchResult::Success(value),
            Err(err) => FetchResult::Error(err),
        }
    }
}
