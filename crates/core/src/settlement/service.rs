//! Settlement service: currency lock, settings field, active-currency override.

use std::sync::Arc;

use tracing::info;
use vendra_shared::types::{CurrencyCode, VendorId};

use crate::context::RequestContext;
use crate::currency::CurrencyRegistry;
use crate::platform::VendorMetaStore;

use super::error::SettlementError;
use super::types::{
    CurrencyOption, LOCKED_NOTICE, PERMANENT_CHOICE_WARNING, SETTINGS_FORM_ANCHOR,
    SETTLEMENT_CURRENCY_KEY, SettlementField,
};

/// Policy for the per-vendor settlement currency.
///
/// Each vendor moves through exactly two states: Unset, then Locked. The
/// transition happens on the first successful save and there is no way back;
/// the storage layer's conditional write keeps the invariant even when two
/// first saves race.
pub struct SettlementService {
    registry: Arc<CurrencyRegistry>,
    meta: Arc<dyn VendorMetaStore>,
}

impl SettlementService {
    /// Creates the service over the currency registry and vendor storage.
    #[must_use]
    pub fn new(registry: Arc<CurrencyRegistry>, meta: Arc<dyn VendorMetaStore>) -> Self {
        Self { registry, meta }
    }

    /// Reads the vendor's locked settlement currency, if any.
    ///
    /// An empty stored value counts as unset.
    pub fn settlement_currency(
        &self,
        vendor: VendorId,
    ) -> Result<Option<CurrencyCode>, SettlementError> {
        match self.meta.get(vendor, SETTLEMENT_CURRENCY_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(
                CurrencyCode::new(&raw).map_err(SettlementError::InvalidCode)?,
            )),
            _ => Ok(None),
        }
    }

    /// The vendor's settlement currency, falling back to the shop base
    /// currency when unset. Never empty.
    pub fn settlement_currency_or_base(
        &self,
        vendor: VendorId,
    ) -> Result<CurrencyCode, SettlementError> {
        match self.settlement_currency(vendor)? {
            Some(code) => Ok(code),
            None => Ok(self.registry.base_currency()?),
        }
    }

    /// Builds the settlement-currency field for the vendor-settings form.
    ///
    /// Unset vendors get a selector over the enabled currencies with the
    /// base currency pre-selected; locked vendors get a read-only label.
    pub fn settings_field(&self, vendor: VendorId) -> Result<SettlementField, SettlementError> {
        match self.settlement_currency(vendor)? {
            Some(code) => Ok(SettlementField::Locked {
                anchor: SETTINGS_FORM_ANCHOR,
                label: format!("{code} ({})", self.registry.currency_name(&code)),
                currency: code,
                notice: LOCKED_NOTICE,
            }),
            None => {
                let selected = self.registry.base_currency()?;
                let options = self
                    .registry
                    .enabled_currencies()?
                    .into_iter()
                    .map(|code| CurrencyOption {
                        display_name: self.registry.currency_name(&code),
                        code,
                    })
                    .collect();
                Ok(SettlementField::Selector {
                    anchor: SETTINGS_FORM_ANCHOR,
                    options,
                    selected,
                    warning: PERMANENT_CHOICE_WARNING,
                })
            }
        }
    }

    /// Handles a settings-form submission for `vendor`.
    ///
    /// The submitted code is stored verbatim when present; membership in
    /// `enabled_currencies()` is deliberately not checked (known gap, see
    /// DESIGN.md). An empty submission stores the shop base currency.
    /// Admin-initiated saves go through this same path with the target
    /// vendor's id.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::AlreadyLocked`] if the vendor already has
    /// a settlement currency; the stored value is left untouched.
    pub fn save(
        &self,
        vendor: VendorId,
        submitted: Option<&str>,
    ) -> Result<CurrencyCode, SettlementError> {
        if let Some(existing) = self.settlement_currency(vendor)? {
            return Err(SettlementError::AlreadyLocked { existing });
        }

        let chosen = match submitted {
            Some(raw) if !raw.trim().is_empty() => {
                CurrencyCode::new(raw).map_err(SettlementError::InvalidCode)?
            }
            _ => self.registry.base_currency()?,
        };

        let won = self
            .meta
            .set_if_absent(vendor, SETTLEMENT_CURRENCY_KEY, chosen.as_str())?;
        if !won {
            // Lost a race against a concurrent first save.
            let existing = self
                .settlement_currency(vendor)?
                .unwrap_or_else(|| chosen.clone());
            return Err(SettlementError::AlreadyLocked { existing });
        }

        info!(vendor = %vendor, currency = %chosen, "vendor settlement currency locked");
        Ok(chosen)
    }

    /// The currency to display for this request.
    ///
    /// On the vendor-orders admin view the authenticated vendor's settlement
    /// currency overrides the ambient one (base currency when unset or when
    /// no vendor is authenticated); every other request keeps the ambient
    /// currency.
    pub fn active_currency(
        &self,
        ctx: &RequestContext,
    ) -> Result<CurrencyCode, SettlementError> {
        if !ctx.is_vendor_orders_view() {
            return Ok(ctx.ambient_currency().clone());
        }
        match ctx.vendor() {
            Some(vendor) => self.settlement_currency_or_base(vendor),
            None => Ok(self.registry.base_currency()?),
        }
    }
}

impl std::fmt::Debug for SettlementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettlementService")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
