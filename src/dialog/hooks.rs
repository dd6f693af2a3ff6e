//! Extension points for rewriting a dialog while it is being built

use std::fmt;

use super::args::DialogConfig;

/// An ordered list of callbacks that each rewrite a value
///
/// Every callback sees the output of the previous one plus a read-only
/// context value.
pub struct FilterChain<T, C: ?Sized> {
    filters: Vec<Box<dyn Fn(T, &C) -> T>>,
}

impl<T, C: ?Sized> Default for FilterChain<T, C> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<T, C: ?Sized> fmt::Debug for FilterChain<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}

impl<T, C: ?Sized> FilterChain<T, C> {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback; callbacks run in the order they were added
    pub fn add<F>(&mut self, filter: F)
    where
        F: Fn(T, &C) -> T + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Run `value` through every callback
    pub fn apply(&self, value: T, ctx: &C) -> T {
        self.filters.iter().fold(value, |acc, f| f(acc, ctx))
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// The three extension points of the dialog builder
#[derive(Debug, Default)]
pub struct DialogHooks {
    /// Rewrites the merged record; context is the dialog content
    pub args: FilterChain<DialogConfig, str>,
    /// Picks the template name; context is the merged record
    pub template: FilterChain<String, DialogConfig>,
    /// Rewrites the rendered HTML; context is the merged record
    pub html: FilterChain<String, DialogConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_identity() {
        let chain: FilterChain<String, ()> = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply("x".to_string(), &()), "x");
    }

    #[test]
    fn test_filters_run_in_order() {
        let mut chain: FilterChain<String, str> = FilterChain::new();
        chain.add(|s, _| format!("{}a", s));
        chain.add(|s, ctx| format!("{}{}", s, ctx));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(String::new(), "b"), "ab");
    }
}
