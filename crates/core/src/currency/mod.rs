//! Currency resolution and conversion for the settlement policy.

pub mod conversion;
pub mod error;
pub mod registry;

#[cfg(test)]
mod props;

pub use conversion::{COMMISSION_SCALE, convert_amount, round_half_up};
pub use error::CurrencyError;
pub use registry::{BASE_CURRENCY_KEY, CurrencyRegistry};
