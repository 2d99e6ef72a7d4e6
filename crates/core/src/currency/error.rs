//! Currency error types.

use thiserror::Error;
use vendra_shared::AppError;

/// Errors that can occur while resolving currencies.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// The platform has no shop base currency configured.
    #[error("Shop base currency is not configured")]
    BaseCurrencyMissing,

    /// A currency code failed shape validation.
    #[error("{0}")]
    InvalidCode(String),
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BaseCurrencyMissing => "BASE_CURRENCY_MISSING",
            Self::InvalidCode(_) => "INVALID_CURRENCY_CODE",
        }
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match &err {
            CurrencyError::BaseCurrencyMissing => Self::Internal(err.to_string()),
            CurrencyError::InvalidCode(_) => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CurrencyError::BaseCurrencyMissing.error_code(),
            "BASE_CURRENCY_MISSING"
        );
        assert_eq!(
            CurrencyError::InvalidCode("Invalid currency code: X".into()).error_code(),
            "INVALID_CURRENCY_CODE"
        );
    }

    #[test]
    fn test_maps_to_boundary_error() {
        assert_eq!(
            AppError::from(CurrencyError::BaseCurrencyMissing).status_code(),
            500
        );
        let app = AppError::from(CurrencyError::InvalidCode("bad code".into()));
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.to_string(), "Validation error: bad code");
    }
}
