//! Ordered filter chains.
//!
//! The host platform's hook-based extensibility is modeled as an explicit
//! list of registered handlers invoked in registration order. Each handler
//! receives the value returned by the previous one, so the final result is
//! whatever the last registered handler returns.

/// Boxed filter handler: takes the current value plus a read-only context
/// and returns the (possibly adjusted) value.
type Handler<T, Ctx> = Box<dyn Fn(T, &Ctx) -> T + Send + Sync>;

/// An ordered chain of value filters.
///
/// With no handlers registered, `apply` returns the seed unchanged — callers
/// degrade gracefully when no collaborator has hooked in.
pub struct FilterChain<T, Ctx = ()> {
    handlers: Vec<Handler<T, Ctx>>,
}

impl<T, Ctx> FilterChain<T, Ctx> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler to the chain.
    ///
    /// Handlers run in registration order; the last one's return value wins.
    pub fn register<F>(&mut self, handler: F)
    where
        F: Fn(T, &Ctx) -> T + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Threads `seed` through every registered handler in order.
    pub fn apply(&self, seed: T, ctx: &Ctx) -> T {
        self.handlers
            .iter()
            .fold(seed, |value, handler| handler(value, ctx))
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T, Ctx> Default for FilterChain<T, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Ctx> std::fmt::Debug for FilterChain<T, Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_returns_seed() {
        let chain: FilterChain<i64> = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply(42, &()), 42);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut chain: FilterChain<Vec<&'static str>> = FilterChain::new();
        chain.register(|mut v, ()| {
            v.push("first");
            v
        });
        chain.register(|mut v, ()| {
            v.push("second");
            v
        });

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(Vec::new(), &()), vec!["first", "second"]);
    }

    #[test]
    fn test_last_handler_wins() {
        let mut chain: FilterChain<i64> = FilterChain::new();
        chain.register(|v, ()| v + 1);
        chain.register(|_, ()| 100);

        assert_eq!(chain.apply(5, &()), 100);
    }

    #[test]
    fn test_context_is_visible_to_handlers() {
        let mut chain: FilterChain<i64, i64> = FilterChain::new();
        chain.register(|v, multiplier| v * multiplier);

        assert_eq!(chain.apply(6, &7), 42);
    }
}
