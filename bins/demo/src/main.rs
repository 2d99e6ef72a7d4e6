//! Vendra demo host.
//!
//! Wires the settlement-currency policy against in-memory collaborators and
//! walks through the documented flows: enabled currencies, the one-time
//! settlement lock, commission recalculation, and the vendor-orders
//! active-currency override.

use std::sync::Arc;

use anyhow::anyhow;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vendra_core::commission::{CommissionService, OrderView};
use vendra_core::context::{PAGE_PARAM, RequestContext, VENDOR_ORDERS_PAGE};
use vendra_core::currency::{BASE_CURRENCY_KEY, CurrencyRegistry};
use vendra_core::platform::memory::{
    FixedCommissionRates, FixedRateConverter, InMemoryMetaStore, InMemoryPlatformConfig,
    InMemoryVendorDirectory,
};
use vendra_core::settlement::SettlementService;
use vendra_shared::{AppConfig, AppError};
use vendra_shared::types::{CurrencyCode, OrderId, ProductId, VendorId};

/// Demo exchange rates applied from the base currency, in switcher order.
const DEMO_RATES: [Decimal; 3] = [dec!(0.90), dec!(0.80), dec!(150)];

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendra=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().map_err(|e| anyhow!("Failed to load configuration: {e}"))?;
    let base = CurrencyCode::new(&config.marketplace.base_currency).map_err(anyhow::Error::msg)?;

    // Platform configuration as the host would expose it.
    let mut platform = InMemoryPlatformConfig::new();
    platform.set(BASE_CURRENCY_KEY, base.as_str());
    for (code, name) in [("USD", "US Dollar"), ("EUR", "Euro"), ("GBP", "Pound Sterling")] {
        platform.set_currency_name(CurrencyCode::new(code).map_err(anyhow::Error::msg)?, name);
    }
    for (code, name) in &config.marketplace.currency_names {
        platform.set_currency_name(
            CurrencyCode::new(code).map_err(anyhow::Error::msg)?,
            name.clone(),
        );
    }

    // Currency switcher: enable the configured extra currencies (demo
    // defaults to EUR and GBP when none are configured).
    let extra: Vec<CurrencyCode> = if config.marketplace.extra_currencies.is_empty() {
        vec![
            CurrencyCode::new("EUR").map_err(anyhow::Error::msg)?,
            CurrencyCode::new("GBP").map_err(anyhow::Error::msg)?,
        ]
    } else {
        config
            .marketplace
            .extra_currencies
            .iter()
            .map(|c| CurrencyCode::new(c))
            .collect::<Result<_, _>>()
            .map_err(anyhow::Error::msg)?
    };

    let mut registry = CurrencyRegistry::new(Arc::new(platform));
    let switcher_list = extra.clone();
    registry.register_enabled_filter(move |mut list| {
        list.extend(switcher_list.iter().cloned());
        list
    });
    let registry = Arc::new(registry);

    info!(base = %registry.base_currency()?, "marketplace base currency");
    info!(enabled = ?registry.enabled_currencies()?, "storefront currencies");

    // One vendor with one product, paid in the base currency.
    let vendor = VendorId::new();
    let product = ProductId::new();
    let order = OrderView {
        id: OrderId::new(),
        currency: base.clone(),
    };

    let mut directory = InMemoryVendorDirectory::new();
    directory.assign(product, vendor);

    let mut rates = FixedCommissionRates::new();
    rates.set_rate(product, dec!(10));

    let mut converter = FixedRateConverter::new();
    for (i, code) in extra.iter().enumerate() {
        converter.set_rate(base.clone(), code.clone(), DEMO_RATES[i % DEMO_RATES.len()]);
    }

    let settlement = Arc::new(SettlementService::new(
        Arc::clone(&registry),
        Arc::new(InMemoryMetaStore::new()),
    ));
    let mut commission = CommissionService::new(
        Arc::clone(&registry),
        Arc::clone(&settlement),
        Arc::new(directory),
        Arc::new(rates),
        Arc::new(converter),
    );
    commission.register_adjustment(|amount, inputs| {
        info!(product = %inputs.product, amount = %amount, "adjustment filter observed commission");
        amount
    });

    // Before the first save the settings form offers a selector.
    let field = settlement.settings_field(vendor).map_err(AppError::from)?;
    info!(field = %serde_json::to_string_pretty(&field)?, "settings field (unset)");

    // First save locks the choice; a second save is refused.
    let chosen = extra.first().cloned().unwrap_or_else(|| base.clone());
    let locked = settlement
        .save(vendor, Some(chosen.as_str()))
        .map_err(AppError::from)?;
    info!(currency = %locked, "vendor locked settlement currency");
    if let Err(err) = settlement.save(vendor, Some("GBP")) {
        let err = AppError::from(err);
        warn!(
            code = err.error_code(),
            status = err.status_code(),
            error = %err,
            "second save refused"
        );
    }

    let field = settlement.settings_field(vendor).map_err(AppError::from)?;
    info!(field = %serde_json::to_string_pretty(&field)?, "settings field (locked)");

    // Commission for a 100.00 line item at 10%.
    let result = commission
        .recalculate(dec!(0), product, dec!(100.00), &order, 1)
        .map_err(AppError::from)?;
    info!(commission = %result, "recalculated commission");

    // The vendor-orders admin view displays the vendor's currency.
    let vendor_view = RequestContext::new(base.clone())
        .with_vendor(vendor)
        .with_query_param(PAGE_PARAM, VENDOR_ORDERS_PAGE);
    info!(active = %settlement.active_currency(&vendor_view)?, "active currency on vendor-orders view");

    let storefront = RequestContext::new(base);
    info!(active = %settlement.active_currency(&storefront)?, "active currency elsewhere");

    Ok(())
}
