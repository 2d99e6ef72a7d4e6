//! Commission service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use vendra_shared::types::{CurrencyCode, Money, ProductId};

use crate::currency::{COMMISSION_SCALE, CurrencyRegistry, convert_amount, round_half_up};
use crate::hooks::FilterChain;
use crate::platform::{CommissionRates, CurrencyConverter, VendorDirectory};
use crate::settlement::SettlementService;

use super::error::CommissionError;
use super::types::{CommissionInputs, OrderView};

/// Recalculates commissions in the vendor's settlement currency.
pub struct CommissionService {
    registry: Arc<CurrencyRegistry>,
    settlement: Arc<SettlementService>,
    directory: Arc<dyn VendorDirectory>,
    rates: Arc<dyn CommissionRates>,
    converter: Arc<dyn CurrencyConverter>,
    adjustments: FilterChain<Decimal, CommissionInputs>,
}

impl CommissionService {
    /// Creates the service over its collaborators.
    #[must_use]
    pub fn new(
        registry: Arc<CurrencyRegistry>,
        settlement: Arc<SettlementService>,
        directory: Arc<dyn VendorDirectory>,
        rates: Arc<dyn CommissionRates>,
        converter: Arc<dyn CurrencyConverter>,
    ) -> Self {
        Self {
            registry,
            settlement,
            directory,
            rates,
            converter,
            adjustments: FilterChain::new(),
        }
    }

    /// Registers a commission-adjustment filter.
    ///
    /// Adjustments run after rounding, in registration order; the last
    /// registered handler's return value is the final commission amount.
    pub fn register_adjustment<F>(&mut self, adjustment: F)
    where
        F: Fn(Decimal, &CommissionInputs) -> Decimal + Send + Sync + 'static,
    {
        self.adjustments.register(adjustment);
    }

    /// The currency a product's commission settles in: the owning vendor's
    /// settlement currency, or the shop base currency when unset.
    ///
    /// Pure read — two external lookups plus the fallback rule.
    pub fn commission_currency_for_product(
        &self,
        product: ProductId,
    ) -> Result<CurrencyCode, CommissionError> {
        let vendor = self.directory.vendor_for_product(product)?;
        Ok(self.settlement.settlement_currency_or_base(vendor)?)
    }

    /// Recomputes the commission for one order line.
    ///
    /// The product price is converted from the order currency into the
    /// commission currency, the per-product rate is applied, and the result
    /// is rounded half-up to 2 decimal places before the adjustment chain
    /// runs. `upstream_commission` arrives pre-rounded from the marketplace
    /// and is deliberately discarded: it is not safe for further arithmetic.
    ///
    /// # Errors
    ///
    /// Vendor-lookup, rate-lookup, and conversion failures propagate as hard
    /// errors for this calculation; there is no retry and no fallback.
    pub fn recalculate(
        &self,
        upstream_commission: Decimal,
        product: ProductId,
        price: Decimal,
        order: &OrderView,
        quantity: u32,
    ) -> Result<Money, CommissionError> {
        let _ = upstream_commission;

        let currency = self.commission_currency_for_product(product)?;
        let rate = self.rates.rate_percent(product)?;
        let base = self.registry.base_currency()?;

        let converted = convert_amount(
            self.converter.as_ref(),
            price,
            &currency,
            Some(&order.currency),
            &base,
        )?;
        let amount = round_half_up(converted * rate / Decimal::ONE_HUNDRED, COMMISSION_SCALE);

        let inputs = CommissionInputs {
            product,
            price,
            order: order.clone(),
            quantity,
        };
        let amount = self.adjustments.apply(amount, &inputs);

        debug!(
            product = %product,
            order = %order.id,
            rate = %rate,
            currency = %currency,
            amount = %amount,
            "commission recalculated"
        );
        Ok(Money::new(amount, currency))
    }
}

impl std::fmt::Debug for CommissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommissionService")
            .field("adjustments", &self.adjustments)
            .finish_non_exhaustive()
    }
}
