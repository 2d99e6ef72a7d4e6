//! Commission value types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendra_shared::types::{CurrencyCode, OrderId, ProductId};

/// The order as the policy sees it: identity plus the currency the buyer
/// paid in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    /// Order identifier.
    pub id: OrderId,
    /// Currency the buyer paid in.
    pub currency: CurrencyCode,
}

/// Read-only inputs handed to commission-adjustment filters.
#[derive(Debug, Clone)]
pub struct CommissionInputs {
    /// Product the commission is for.
    pub product: ProductId,
    /// Product price in the order currency.
    pub price: Decimal,
    /// The order the line item belongs to.
    pub order: OrderView,
    /// Line-item quantity.
    pub quantity: u32,
}
