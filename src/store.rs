//! Two-tier template variable store
//!
//! Persistent values survive across renders on the same store. Scoped values
//! belong to a single render and shadow persistent values with the same key
//! without ever overwriting them.

use std::collections::BTreeMap;

use serde_json::Value;

/// Template variables keyed by name
pub type VariableMap = BTreeMap<String, Value>;

/// Which tier a write goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Survives across renders
    Persistent,
    /// Per-render values, shadowing persistent ones
    #[default]
    Scoped,
}

/// Persistent and scoped template variables
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    persistent: VariableMap,
    scoped: VariableMap,
}

impl VariableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `values` into one tier, overwriting existing keys
    pub fn set_values<I, K>(&mut self, values: I, scope: Scope)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let target = self.tier_mut(scope);
        for (key, value) in values {
            target.insert(key.into(), value);
        }
    }

    /// Set a single variable in one tier
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>, scope: Scope) {
        self.tier_mut(scope).insert(key.into(), value.into());
    }

    /// Look up a variable, scoped tier first
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.scoped.get(key).or_else(|| self.persistent.get(key))
    }

    /// Snapshot of the persistent tier
    pub fn persistent(&self) -> &VariableMap {
        &self.persistent
    }

    /// Snapshot of the scoped tier
    pub fn scoped(&self) -> &VariableMap {
        &self.scoped
    }

    /// Union of both tiers; scoped entries win on collision
    pub fn merged(&self) -> VariableMap {
        let mut merged = self.persistent.clone();
        merged.extend(self.scoped.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Drop every scoped value, leaving persistent values untouched
    pub fn clear_scoped(&mut self) {
        self.scoped.clear();
    }

    fn tier_mut(&mut self, scope: Scope) -> &mut VariableMap {
        match scope {
            Scope::Persistent => &mut self.persistent,
            Scope::Scoped => &mut self.scoped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = VariableStore::new();
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn test_scoped_shadows_persistent() {
        let mut store = VariableStore::new();
        store.set("a", 1, Scope::Persistent);
        store.set("a", 2, Scope::Scoped);
        assert_eq!(store.get("a"), Some(&json!(2)));
        assert_eq!(store.persistent().get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = VariableStore::new();
        store.set("k", "first", Scope::Scoped);
        store.set("k", "second", Scope::Scoped);
        assert_eq!(store.get("k"), Some(&json!("second")));
        assert_eq!(store.scoped().len(), 1);
    }

    #[test]
    fn test_set_values_accumulates() {
        let mut store = VariableStore::new();
        store.set_values([("a", json!(1))], Scope::Persistent);
        store.set_values([("b", json!(2))], Scope::Persistent);
        assert_eq!(store.persistent().len(), 2);
    }

    #[test]
    fn test_clear_scoped_keeps_persistent() {
        let mut store = VariableStore::new();
        store.set("g", true, Scope::Persistent);
        store.set("l", true, Scope::Scoped);
        store.clear_scoped();
        assert!(store.scoped().is_empty());
        assert_eq!(store.get("g"), Some(&json!(true)));
        assert_eq!(store.get("l"), None);
    }
}
