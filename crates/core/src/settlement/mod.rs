//! Per-vendor settlement currency: a one-time lock.

pub mod error;
pub mod service;
pub mod types;

pub use error::SettlementError;
pub use service::SettlementService;
pub use types::{CurrencyOption, SETTLEMENT_CURRENCY_KEY, SettlementField};
