//! Request-scoped context.
//!
//! One `RequestContext` is built per web request by the host and dropped
//! with it. The active-currency override in the settlement service is a pure
//! function of this value, so an override on one request cannot leak into
//! another.

use std::collections::HashMap;

use vendra_shared::types::{CurrencyCode, VendorId};

/// Query parameter naming the admin page being viewed.
pub const PAGE_PARAM: &str = "page";

/// `page` value identifying the vendor-orders admin view.
pub const VENDOR_ORDERS_PAGE: &str = "vendor-orders";

/// Snapshot of the request the policy is deciding for.
#[derive(Debug, Clone)]
pub struct RequestContext {
    vendor: Option<VendorId>,
    query: HashMap<String, String>,
    ambient_currency: CurrencyCode,
}

impl RequestContext {
    /// Creates a context with the platform's ambient active currency.
    #[must_use]
    pub fn new(ambient_currency: CurrencyCode) -> Self {
        Self {
            vendor: None,
            query: HashMap::new(),
            ambient_currency,
        }
    }

    /// Sets the authenticated vendor.
    #[must_use]
    pub fn with_vendor(mut self, vendor: VendorId) -> Self {
        self.vendor = Some(vendor);
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// The authenticated vendor, if any.
    #[must_use]
    pub fn vendor(&self) -> Option<VendorId> {
        self.vendor
    }

    /// Looks up a query parameter.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The currency the platform considers active before any override.
    #[must_use]
    pub fn ambient_currency(&self) -> &CurrencyCode {
        &self.ambient_currency
    }

    /// Whether this request renders the vendor-orders admin view.
    #[must_use]
    pub fn is_vendor_orders_view(&self) -> bool {
        self.query_param(PAGE_PARAM) == Some(VENDOR_ORDERS_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD").unwrap()
    }

    #[test]
    fn test_plain_request_is_not_vendor_orders_view() {
        let ctx = RequestContext::new(usd());
        assert!(!ctx.is_vendor_orders_view());
        assert_eq!(ctx.vendor(), None);
    }

    #[test]
    fn test_vendor_orders_view_detection() {
        let ctx = RequestContext::new(usd()).with_query_param(PAGE_PARAM, VENDOR_ORDERS_PAGE);
        assert!(ctx.is_vendor_orders_view());

        let other = RequestContext::new(usd()).with_query_param(PAGE_PARAM, "settings");
        assert!(!other.is_vendor_orders_view());
    }

    #[test]
    fn test_builder_accumulates() {
        let vendor = VendorId::new();
        let ctx = RequestContext::new(usd())
            .with_vendor(vendor)
            .with_query_param("page", "vendor-orders")
            .with_query_param("tab", "pending");

        assert_eq!(ctx.vendor(), Some(vendor));
        assert_eq!(ctx.query_param("tab"), Some("pending"));
        assert_eq!(ctx.ambient_currency(), &usd());
    }
}
