//! Core settlement-currency policy for Vendra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The host platform (marketplace plugin, currency switcher, metadata storage)
//! is modeled as collaborator traits injected at construction.
//!
//! # Modules
//!
//! - `currency` - Base-currency resolution, enabled currencies, conversion
//! - `settlement` - Per-vendor settlement-currency lock (Unset → Locked)
//! - `commission` - Commission recalculation in the vendor's currency
//! - `context` - Request-scoped active-currency override
//! - `hooks` - Ordered filter chains (last registered handler wins)
//! - `platform` - Collaborator traits and in-memory implementations

pub mod commission;
pub mod context;
pub mod currency;
pub mod hooks;
pub mod platform;
pub mod settlement;
