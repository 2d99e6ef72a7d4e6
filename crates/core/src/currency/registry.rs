//! Currency registry: base currency, enabled set, display names.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use vendra_shared::types::CurrencyCode;

use crate::hooks::FilterChain;
use crate::platform::PlatformConfig;

use super::error::CurrencyError;

/// Platform configuration key holding the shop base currency.
pub const BASE_CURRENCY_KEY: &str = "shop.base_currency";

/// Resolves currencies for the settlement policy.
///
/// The base currency and the display-name table are read from the platform
/// once and memoized for the registry's lifetime; a process restart is the
/// only refresh. The enabled set is an extension point: a currency-switcher
/// collaborator registers a filter, and with no filter registered the
/// storefront degrades to single-currency mode.
pub struct CurrencyRegistry {
    platform: Arc<dyn PlatformConfig>,
    base: OnceCell<CurrencyCode>,
    names: OnceCell<HashMap<CurrencyCode, String>>,
    enabled_filters: FilterChain<Vec<CurrencyCode>>,
}

impl CurrencyRegistry {
    /// Creates a registry over the given platform configuration.
    #[must_use]
    pub fn new(platform: Arc<dyn PlatformConfig>) -> Self {
        Self {
            platform,
            base: OnceCell::new(),
            names: OnceCell::new(),
            enabled_filters: FilterChain::new(),
        }
    }

    /// Registers an enabled-currencies filter (currency-switcher hook).
    ///
    /// Filters run in registration order over the seed list `[base]`; the
    /// last filter's return value wins.
    pub fn register_enabled_filter<F>(&mut self, filter: F)
    where
        F: Fn(Vec<CurrencyCode>) -> Vec<CurrencyCode> + Send + Sync + 'static,
    {
        self.enabled_filters.register(move |list, ()| filter(list));
    }

    /// Returns the shop base currency, reading it from the platform on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no base currency configured or
    /// the configured value is not a valid currency code.
    pub fn base_currency(&self) -> Result<CurrencyCode, CurrencyError> {
        self.base
            .get_or_try_init(|| {
                let raw = self
                    .platform
                    .get(BASE_CURRENCY_KEY)
                    .ok_or(CurrencyError::BaseCurrencyMissing)?;
                CurrencyCode::new(&raw).map_err(CurrencyError::InvalidCode)
            })
            .cloned()
    }

    /// Returns the ordered list of currencies enabled on the storefront.
    ///
    /// Always contains the base currency: it seeds the list, and if a filter
    /// drops it, it is re-inserted at the front. Duplicates are removed,
    /// first occurrence wins.
    pub fn enabled_currencies(&self) -> Result<Vec<CurrencyCode>, CurrencyError> {
        let base = self.base_currency()?;
        let filtered = self.enabled_filters.apply(vec![base.clone()], &());

        let mut enabled: Vec<CurrencyCode> = Vec::with_capacity(filtered.len());
        for code in filtered {
            if !enabled.contains(&code) {
                enabled.push(code);
            }
        }
        if !enabled.contains(&base) {
            enabled.insert(0, base);
        }
        Ok(enabled)
    }

    /// Returns the display name for a currency.
    ///
    /// Unknown codes yield a descriptive placeholder instead of failing.
    #[must_use]
    pub fn currency_name(&self, code: &CurrencyCode) -> String {
        let names = self.names.get_or_init(|| self.platform.currency_names());
        names
            .get(code)
            .cloned()
            .unwrap_or_else(|| format!("Currency name not found for {code}"))
    }
}

impl std::fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("base", &self.base.get())
            .field("enabled_filters", &self.enabled_filters)
            .finish_non_exhaustive()
    }
}
