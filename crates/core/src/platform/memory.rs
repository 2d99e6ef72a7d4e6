//! In-memory collaborator implementations for tests and the demo binary.

use std::collections::HashMap;
use std::sync::Mutex;

use rust_decimal::Decimal;
use vendra_shared::types::{CurrencyCode, ProductId, VendorId};

use super::{
    CommissionRates, CurrencyConverter, PlatformConfig, PlatformError, VendorDirectory,
    VendorMetaStore,
};

/// In-memory platform configuration.
#[derive(Debug, Default)]
pub struct InMemoryPlatformConfig {
    values: HashMap<String, String>,
    names: HashMap<CurrencyCode, String>,
}

impl InMemoryPlatformConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a configuration value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Registers a currency display name.
    pub fn set_currency_name(&mut self, code: CurrencyCode, name: impl Into<String>) {
        self.names.insert(code, name.into());
    }
}

impl PlatformConfig for InMemoryPlatformConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn currency_names(&self) -> HashMap<CurrencyCode, String> {
        self.names.clone()
    }
}

/// In-memory per-vendor key-value store.
///
/// `set_if_absent` is atomic under a single lock, which is exactly the
/// "set only if currently unset" guarantee the settlement lock needs.
#[derive(Debug, Default)]
pub struct InMemoryMetaStore {
    inner: Mutex<HashMap<(VendorId, String), String>>,
}

impl InMemoryMetaStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VendorMetaStore for InMemoryMetaStore {
    fn get(&self, vendor: VendorId, key: &str) -> Result<Option<String>, PlatformError> {
        let map = self
            .inner
            .lock()
            .map_err(|_| PlatformError::Storage("vendor meta store lock poisoned".to_string()))?;
        Ok(map.get(&(vendor, key.to_string())).cloned())
    }

    fn set_if_absent(
        &self,
        vendor: VendorId,
        key: &str,
        value: &str,
    ) -> Result<bool, PlatformError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| PlatformError::Storage("vendor meta store lock poisoned".to_string()))?;
        let entry = map.entry((vendor, key.to_string()));
        match entry {
            std::collections::hash_map::Entry::Occupied(_) => Ok(false),
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
        }
    }
}

/// In-memory product → vendor mapping.
#[derive(Debug, Default)]
pub struct InMemoryVendorDirectory {
    owners: HashMap<ProductId, VendorId>,
}

impl InMemoryVendorDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a product to a vendor.
    pub fn assign(&mut self, product: ProductId, vendor: VendorId) {
        self.owners.insert(product, vendor);
    }
}

impl VendorDirectory for InMemoryVendorDirectory {
    fn vendor_for_product(&self, product: ProductId) -> Result<VendorId, PlatformError> {
        self.owners
            .get(&product)
            .copied()
            .ok_or(PlatformError::VendorNotFound(product))
    }
}

/// Fixed per-product commission rates.
#[derive(Debug, Default)]
pub struct FixedCommissionRates {
    rates: HashMap<ProductId, Decimal>,
}

impl FixedCommissionRates {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate (in percent) for a product.
    pub fn set_rate(&mut self, product: ProductId, percent: Decimal) {
        self.rates.insert(product, percent);
    }
}

impl CommissionRates for FixedCommissionRates {
    fn rate_percent(&self, product: ProductId) -> Result<Decimal, PlatformError> {
        self.rates
            .get(&product)
            .copied()
            .ok_or(PlatformError::RateNotFound(product))
    }
}

/// Converter backed by a fixed rate table keyed by (from, to).
#[derive(Debug, Default)]
pub struct FixedRateConverter {
    rates: HashMap<(CurrencyCode, CurrencyCode), Decimal>,
}

impl FixedRateConverter {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for converting `from` into `to`.
    pub fn set_rate(&mut self, from: CurrencyCode, to: CurrencyCode, rate: Decimal) {
        self.rates.insert((from, to), rate);
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn convert(
        &self,
        amount: Decimal,
        to: &CurrencyCode,
        from: &CurrencyCode,
    ) -> Result<Decimal, PlatformError> {
        if from == to {
            return Ok(amount);
        }
        let rate = self.rates.get(&(from.clone(), to.clone())).copied().ok_or(
            PlatformError::ConversionFailed {
                from: from.clone(),
                to: to.clone(),
                reason: "no exchange rate configured".to_string(),
            },
        )?;
        Ok(amount * rate)
    }
}
