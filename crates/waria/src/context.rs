//! ARIA context
//!
//! Owns the mutable configuration the handlers consult: the rename table
//! (inside the normaliser), the hook registry and the anonymous-ID counter.
//! Handlers always read the live tables; there is no snapshotting beyond the
//! normaliser's cache, which the mutation methods invalidate.

use std::cell::Cell;

use crate::hooks::{AttrHooks, HookRegistry};
use crate::normalise::NameNormaliser;
use crate::value::AriaValue;

/// Configuration and state for one set of ARIA operations.
#[derive(Debug)]
pub struct AriaContext {
    normaliser: NameNormaliser,
    hooks: HookRegistry,
    pub(crate) counter: Cell<u64>,
}

impl AriaContext {
    /// A context with the shipped defaults: the `labeledby` rename and a
    /// `hidden` set hook that removes the attribute instead of writing a
    /// `false`-shaped value, since WAI-ARIA prefers absence over
    /// `aria-hidden="false"`.
    pub fn new() -> Self {
        let mut hooks = HookRegistry::new();
        hooks.insert(
            "hidden",
            AttrHooks::new().on_set(|doc, element, value, name| {
                let is_false = match value {
                    AriaValue::Bool(b) => !b,
                    AriaValue::Text(s) => s.eq_ignore_ascii_case("false"),
                    _ => false,
                };
                if is_false {
                    doc.remove_attr(element, name);
                    None
                } else {
                    Some(value.clone())
                }
            }),
        );

        Self {
            normaliser: NameNormaliser::new(),
            hooks,
            counter: Cell::new(0),
        }
    }

    /// Normalise an attribute name to its canonical `aria-` form
    pub fn normalise(&self, name: &str) -> String {
        self.normaliser.normalise(name)
    }

    /// The hook key for an attribute name
    pub fn stem(&self, name: &str) -> String {
        self.normaliser.stem(name)
    }

    /// Add a stem rename, e.g. correcting a common typo
    pub fn set_rename(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.normaliser.set_rename(from, to);
    }

    /// Drop a stem rename
    pub fn remove_rename(&mut self, stem: &str) {
        self.normaliser.remove_rename(stem);
    }

    /// Register hooks for an attribute stem
    pub fn set_hooks(&mut self, stem: impl Into<String>, hooks: AttrHooks) {
        self.hooks.insert(stem, hooks);
    }

    /// Remove the hooks for an attribute stem
    pub fn remove_hooks(&mut self, stem: &str) {
        self.hooks.remove(stem);
    }

    /// Hooks registered for an attribute stem
    pub fn hooks(&self, stem: &str) -> Option<&AttrHooks> {
        self.hooks.get(stem)
    }

    /// Access the normaliser directly
    pub fn normaliser(&self) -> &NameNormaliser {
        &self.normaliser
    }
}

impl Default for AriaContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = AriaContext::new();
        assert_eq!(ctx.normalise("labeledby"), "aria-labelledby");
        assert!(ctx.hooks("hidden").is_some());
        assert!(ctx.hooks("busy").is_none());
    }

    #[test]
    fn test_hook_key_follows_rename() {
        let mut ctx = AriaContext::new();
        ctx.set_rename("budy", "busy");
        assert_eq!(ctx.stem("aria-budy"), "busy");
    }

    #[test]
    fn test_remove_default_hook() {
        let mut ctx = AriaContext::new();
        ctx.remove_hooks("hidden");
        assert!(ctx.hooks("hidden").is_none());
    }
}
