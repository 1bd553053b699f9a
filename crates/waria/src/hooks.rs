//! Per-attribute override hooks
//!
//! Hooks replace the default get/set/has/unset behaviour for a single
//! attribute. They are keyed by the unprefixed stem in lower case after any
//! rename has been applied; when in doubt the key is
//! `normalise(name)` with the `aria-` prefix sliced off.
//!
//! Hooks are consulted live on every handler call; registering or removing
//! one takes effect on the very next operation for that stem. A hook that
//! panics aborts the whole batch it runs in.

use std::collections::HashMap;

use crate::value::AriaValue;
use waria_dom::{Document, NodeId};

/// Set override. Returning `Some` routes the value back through the default
/// write path; returning `None` means the hook performed (or suppressed) the
/// write itself.
pub type SetHook = Box<dyn Fn(&mut Document, NodeId, &AriaValue, &str) -> Option<AriaValue>>;

/// Get override. Runs only when the attribute tests as present; the result
/// replaces the raw attribute string.
pub type GetHook = Box<dyn Fn(&Document, NodeId, &str) -> Option<AriaValue>>;

/// Presence override, replacing the default attribute-existence test.
pub type HasHook = Box<dyn Fn(&Document, NodeId, &str) -> bool>;

/// Removal override. Returning `false` vetoes the default removal;
/// `true` lets it proceed.
pub type UnsetHook = Box<dyn Fn(&mut Document, NodeId, &str) -> bool>;

/// Override tuple for one attribute stem. Any subset of the four operations
/// may be provided.
#[derive(Default)]
pub struct AttrHooks {
    pub set: Option<SetHook>,
    pub get: Option<GetHook>,
    pub has: Option<HasHook>,
    pub unset: Option<UnsetHook>,
}

impl AttrHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_set<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Document, NodeId, &AriaValue, &str) -> Option<AriaValue> + 'static,
    {
        self.set = Some(Box::new(f));
        self
    }

    pub fn on_get<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, NodeId, &str) -> Option<AriaValue> + 'static,
    {
        self.get = Some(Box::new(f));
        self
    }

    pub fn on_has<F>(mut self, f: F) -> Self
    where
        F: Fn(&Document, NodeId, &str) -> bool + 'static,
    {
        self.has = Some(Box::new(f));
        self
    }

    pub fn on_unset<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Document, NodeId, &str) -> bool + 'static,
    {
        self.unset = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for AttrHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttrHooks")
            .field("set", &self.set.is_some())
            .field("get", &self.get.is_some())
            .field("has", &self.has.is_some())
            .field("unset", &self.unset.is_some())
            .finish()
    }
}

/// Mutable stem-to-hooks table.
#[derive(Debug, Default)]
pub struct HookRegistry {
    table: HashMap<String, AttrHooks>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register hooks for a stem, replacing any existing entry
    pub fn insert(&mut self, stem: impl Into<String>, hooks: AttrHooks) {
        self.table.insert(stem.into(), hooks);
    }

    /// Remove the hooks for a stem
    pub fn remove(&mut self, stem: &str) -> Option<AttrHooks> {
        self.table.remove(stem)
    }

    /// Hooks registered for a stem, if any
    pub fn get(&self, stem: &str) -> Option<&AttrHooks> {
        self.table.get(stem)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.table.contains_key(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_live_updates() {
        let mut registry = HookRegistry::new();
        assert!(registry.get("level").is_none());

        registry.insert("level", AttrHooks::new().on_has(|_, _, _| true));
        assert!(registry.contains("level"));
        assert!(registry.get("level").unwrap().has.is_some());
        assert!(registry.get("level").unwrap().set.is_none());

        registry.remove("level");
        assert!(registry.get("level").is_none());
    }

    #[test]
    fn test_builder_accumulates() {
        let hooks = AttrHooks::new()
            .on_set(|_, _, value, _| Some(value.clone()))
            .on_unset(|_, _, _| false);
        assert!(hooks.set.is_some());
        assert!(hooks.unset.is_some());
        assert!(hooks.get.is_none());
    }
}
