//! Commission error types.

use thiserror::Error;
use vendra_shared::AppError;

use crate::currency::CurrencyError;
use crate::platform::PlatformError;
use crate::settlement::SettlementError;

/// Errors that can occur while recalculating a commission.
///
/// Every variant is fatal for the single calculation that triggered it and
/// carries no cross-request state.
#[derive(Debug, Error)]
pub enum CommissionError {
    /// A host-platform collaborator (vendor directory, rate lookup,
    /// converter) failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Currency resolution failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Settlement-currency lookup failed.
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

impl CommissionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Platform(e) => e.error_code(),
            Self::Currency(e) => e.error_code(),
            Self::Settlement(e) => e.error_code(),
        }
    }
}

impl From<CommissionError> for AppError {
    fn from(err: CommissionError) -> Self {
        match err {
            CommissionError::Platform(e) => e.into(),
            CommissionError::Currency(e) => e.into(),
            CommissionError::Settlement(e) => e.into(),
        }
    }
}
