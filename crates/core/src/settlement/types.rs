//! Settlement view-model types.

use serde::Serialize;
use vendra_shared::types::CurrencyCode;

/// Vendor-attribute key the settlement currency is stored under.
pub const SETTLEMENT_CURRENCY_KEY: &str = "settlement_currency";

/// Anchor in the existing vendor-settings form where the field is injected
/// (right after the payment section).
pub const SETTINGS_FORM_ANCHOR: &str = "vendor_settings_after_payment";

/// Warning shown alongside the selector before the first save.
pub const PERMANENT_CHOICE_WARNING: &str =
    "Select the currency in which you will sell your products. This selection cannot be changed later.";

/// Notice shown once the currency is locked.
pub const LOCKED_NOTICE: &str =
    "This currency cannot be changed, because it would invalidate the shop data collected so far.";

/// One selectable currency, code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    /// Currency code.
    pub code: CurrencyCode,
    /// Human-readable display name.
    pub display_name: String,
}

/// The settlement-currency field as the host should render it.
///
/// Two states, one per side of the Unset → Locked transition. There is no
/// variant that renders an editable field for a locked vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettlementField {
    /// Vendor has not chosen yet: a selector over the enabled currencies,
    /// defaulting to the shop base currency.
    Selector {
        /// Form anchor to inject at.
        anchor: &'static str,
        /// Enabled currencies, in storefront order.
        options: Vec<CurrencyOption>,
        /// Pre-selected currency (the shop base currency).
        selected: CurrencyCode,
        /// Permanent-choice warning to display.
        warning: &'static str,
    },
    /// Choice is locked: a read-only label.
    Locked {
        /// Form anchor to inject at.
        anchor: &'static str,
        /// Read-only label, formatted as `CODE (Display Name)`.
        label: String,
        /// The locked currency.
        currency: CurrencyCode,
        /// Immutability notice to display.
        notice: &'static str,
    },
}
