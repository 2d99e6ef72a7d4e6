//! Settlement error types.

use thiserror::Error;
use vendra_shared::AppError;
use vendra_shared::types::CurrencyCode;

use crate::currency::CurrencyError;
use crate::platform::PlatformError;

/// Errors that can occur on the settlement-currency paths.
#[derive(Debug, Error)]
pub enum SettlementError {
    /// A save was attempted after the vendor's currency was locked.
    #[error("Settlement currency is already locked to {existing}")]
    AlreadyLocked {
        /// The value that remains in force.
        existing: CurrencyCode,
    },

    /// A submitted or stored currency code failed shape validation.
    #[error("{0}")]
    InvalidCode(String),

    /// Currency resolution failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// A host-platform collaborator failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyLocked { .. } => "SETTLEMENT_ALREADY_LOCKED",
            Self::InvalidCode(_) => "INVALID_CURRENCY_CODE",
            Self::Currency(e) => e.error_code(),
            Self::Platform(e) => e.error_code(),
        }
    }
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::AlreadyLocked { .. } => Self::Conflict(err.to_string()),
            SettlementError::InvalidCode(_) => Self::Validation(err.to_string()),
            SettlementError::Currency(e) => e.into(),
            SettlementError::Platform(e) => e.into(),
        }
    }
}
