//! Commission recalculation in the vendor's settlement currency.

pub mod error;
pub mod service;
pub mod types;

pub use error::CommissionError;
pub use service::CommissionService;
pub use types::{CommissionInputs, OrderView};
