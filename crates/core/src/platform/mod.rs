//! Collaborator traits for the host platform.
//!
//! The policy never talks to the marketplace plugin, the currency switcher,
//! or the platform's storage directly. Everything external is a trait
//! injected at construction, so tests and the demo binary substitute the
//! implementations in [`memory`].
//!
//! All calls are blocking and synchronous; each failure is local to the
//! request that triggered it.

pub mod memory;

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;
use vendra_shared::AppError;
use vendra_shared::types::{CurrencyCode, ProductId, VendorId};

/// Errors surfaced by host-platform collaborators.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The marketplace could not resolve an owning vendor for a product.
    #[error("No vendor found for product {0}")]
    VendorNotFound(ProductId),

    /// No commission rate is configured for a product.
    #[error("No commission rate configured for product {0}")]
    RateNotFound(ProductId),

    /// The currency-conversion collaborator failed.
    #[error("Currency conversion failed from {from} to {to}: {reason}")]
    ConversionFailed {
        /// Source currency code.
        from: CurrencyCode,
        /// Target currency code.
        to: CurrencyCode,
        /// Collaborator-supplied failure description.
        reason: String,
    },

    /// The per-vendor metadata store failed.
    #[error("Vendor metadata storage error: {0}")]
    Storage(String),
}

impl PlatformError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::VendorNotFound(_) => "VENDOR_NOT_FOUND",
            Self::RateNotFound(_) => "RATE_NOT_FOUND",
            Self::ConversionFailed { .. } => "CONVERSION_FAILED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<PlatformError> for AppError {
    fn from(err: PlatformError) -> Self {
        match &err {
            PlatformError::VendorNotFound(_) | PlatformError::RateNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            PlatformError::ConversionFailed { .. } => Self::ExternalService(err.to_string()),
            PlatformError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}

/// Read access to platform configuration.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformConfig: Send + Sync {
    /// Reads a configuration value by key (e.g. the shop base currency).
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the platform's currency display-name table.
    fn currency_names(&self) -> HashMap<CurrencyCode, String>;
}

/// Per-vendor persisted key-value storage.
#[cfg_attr(test, mockall::automock)]
pub trait VendorMetaStore: Send + Sync {
    /// Reads a vendor attribute.
    fn get(&self, vendor: VendorId, key: &str) -> Result<Option<String>, PlatformError>;

    /// Writes a vendor attribute only if no value is currently stored.
    ///
    /// Returns `true` if this call performed the write. The conditional
    /// semantics are what make the one-time settlement-currency lock hold
    /// even when two first saves race.
    fn set_if_absent(
        &self,
        vendor: VendorId,
        key: &str,
        value: &str,
    ) -> Result<bool, PlatformError>;
}

/// Resolves the owning vendor of a product (marketplace collaborator).
#[cfg_attr(test, mockall::automock)]
pub trait VendorDirectory: Send + Sync {
    /// Returns the vendor that owns the given product.
    fn vendor_for_product(&self, product: ProductId) -> Result<VendorId, PlatformError>;
}

/// Per-product commission rate lookup (marketplace collaborator).
#[cfg_attr(test, mockall::automock)]
pub trait CommissionRates: Send + Sync {
    /// Returns the commission rate for the product, in percent (e.g. 7.5).
    fn rate_percent(&self, product: ProductId) -> Result<Decimal, PlatformError>;
}

/// Currency conversion (currency-switcher collaborator).
#[cfg_attr(test, mockall::automock)]
pub trait CurrencyConverter: Send + Sync {
    /// Converts `amount` from `from` into `to`.
    fn convert(
        &self,
        amount: Decimal,
        to: &CurrencyCode,
        from: &CurrencyCode,
    ) -> Result<Decimal, PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_boundary_error() {
        let product = ProductId::new();
        assert_eq!(
            AppError::from(PlatformError::VendorNotFound(product)).status_code(),
            404
        );
        assert_eq!(
            AppError::from(PlatformError::RateNotFound(product)).status_code(),
            404
        );
        let conversion = PlatformError::ConversionFailed {
            from: CurrencyCode::new("USD").unwrap(),
            to: CurrencyCode::new("EUR").unwrap(),
            reason: "no rate".into(),
        };
        assert_eq!(AppError::from(conversion).status_code(), 500);
        assert_eq!(
            AppError::from(PlatformError::Storage("disk".into())).error_code(),
            "INTERNAL_ERROR"
        );
    }
}
