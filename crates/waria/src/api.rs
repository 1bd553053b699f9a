//! Public wrapper surface
//!
//! Thin methods over the access dispatcher and handlers, mirroring the
//! operations applications actually call: `aria`, `aria_ref`, `aria_state`,
//! the removal variants, role helpers, visibility and focusability.

use crate::access::{access, PropertyArg};
use crate::context::AriaContext;
use crate::handlers::{self, state, AriaReading, HandlerKind};
use crate::value::{AriaValue, StateFlag, ValueSource};
use waria_dom::{Document, Selection};

/// Split a value into its whitespace-separated words
pub fn to_words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

impl AriaContext {
    /// Get or set ARIA properties.
    ///
    /// With a name and no value, returns the first element's attribute
    /// value. With a value (or a map), writes to every element in the
    /// collection and returns `None`.
    pub fn aria(
        &self,
        doc: &mut Document,
        selection: &Selection,
        property: impl Into<PropertyArg>,
        value: Option<ValueSource>,
    ) -> Option<AriaValue> {
        access(self, doc, selection, property.into(), value, HandlerKind::Property)
            .and_then(AriaReading::into_value)
    }

    /// Get or set ARIA references; see [`crate::handlers::reference`]
    pub fn aria_ref(
        &self,
        doc: &mut Document,
        selection: &Selection,
        property: impl Into<PropertyArg>,
        value: Option<ValueSource>,
    ) -> Option<Selection> {
        access(self, doc, selection, property.into(), value, HandlerKind::Reference)
            .and_then(AriaReading::into_refs)
    }

    /// Get or set ARIA states; see [`crate::handlers::state`]
    pub fn aria_state(
        &self,
        doc: &mut Document,
        selection: &Selection,
        property: impl Into<PropertyArg>,
        value: Option<ValueSource>,
    ) -> Option<StateFlag> {
        access(self, doc, selection, property.into(), value, HandlerKind::State)
            .and_then(AriaReading::into_state)
    }

    /// Remove an ARIA attribute from every element in the collection
    pub fn remove_aria(&self, doc: &mut Document, selection: &Selection, name: &str) {
        for element in selection.iter() {
            handlers::property::unset(self, doc, element, name);
        }
    }

    /// Alias of [`AriaContext::remove_aria`] for reference attributes
    pub fn remove_aria_ref(&self, doc: &mut Document, selection: &Selection, name: &str) {
        self.remove_aria(doc, selection, name);
    }

    /// Alias of [`AriaContext::remove_aria`] for state attributes
    pub fn remove_aria_state(&self, doc: &mut Document, selection: &Selection, name: &str) {
        self.remove_aria(doc, selection, name);
    }

    /// Get or set the `role` attribute.
    ///
    /// Plain attribute access: no normalisation and no hooks. Getting
    /// reads the first element; setting writes every element.
    pub fn role(
        &self,
        doc: &mut Document,
        selection: &Selection,
        role: Option<ValueSource>,
    ) -> Option<String> {
        let Some(role) = role else {
            return selection.attr(doc, "role").map(str::to_string);
        };
        for (index, element) in selection.iter().enumerate() {
            let current = doc.attr(element, "role").map(str::to_string);
            if let Some(value) = role.resolve(doc, element, index, current.as_deref()) {
                doc.set_attr(element, "role", &value.write_out());
            }
        }
        None
    }

    /// Add roles to every element, preserving existing ones.
    ///
    /// Words already present (and empty words) are skipped.
    pub fn add_role(&self, doc: &mut Document, selection: &Selection, role: ValueSource) {
        for (index, element) in selection.iter().enumerate() {
            let current = doc.attr(element, "role").unwrap_or("").to_string();
            let Some(value) = role.resolve(doc, element, index, Some(&current)) else {
                continue;
            };
            let mut roles = to_words(&current);
            for word in to_words(&value.write_out()) {
                if !roles.contains(&word) {
                    roles.push(word);
                }
            }
            doc.set_attr(element, "role", &roles.join(" "));
        }
    }

    /// Remove roles.
    ///
    /// Without a value the whole attribute goes; with one, only the named
    /// words are filtered out of each element's role list.
    pub fn remove_role(
        &self,
        doc: &mut Document,
        selection: &Selection,
        role: Option<ValueSource>,
    ) {
        let Some(role) = role else {
            selection.remove_attr(doc, "role");
            return;
        };
        for (index, element) in selection.iter().enumerate() {
            let current = doc.attr(element, "role").unwrap_or("").to_string();
            let Some(value) = role.resolve(doc, element, index, Some(&current)) else {
                continue;
            };
            let dropped = to_words(&value.write_out());
            let kept: Vec<String> = to_words(&current)
                .into_iter()
                .filter(|word| !dropped.contains(word))
                .collect();
            doc.set_attr(element, "role", &kept.join(" "));
        }
    }

    /// Set the collection's visibility at the WAI-ARIA level.
    ///
    /// A truthy state removes `aria-hidden` (the way WAI-ARIA prefers an
    /// element be declared visible); a falsy one writes
    /// `aria-hidden="true"`. Only `aria-hidden` on the matched elements is
    /// touched - ancestors and CSS can still hide the element.
    pub fn aria_visible(
        &self,
        doc: &mut Document,
        selection: &Selection,
        visible: impl Into<AriaValue>,
    ) {
        if state::read(&visible.into()).is_truthy() {
            self.remove_aria(doc, selection, "hidden");
        } else {
            self.aria(doc, selection, "hidden", Some(true.into()));
        }
    }

    /// Set whether the collection is focusable, via `tabindex` 0 or -1.
    ///
    /// Only the matched elements are modified; a disabled or hidden
    /// ancestor can still keep the element unreachable.
    pub fn aria_focusable(
        &self,
        doc: &mut Document,
        selection: &Selection,
        focusable: impl Into<AriaValue>,
    ) {
        let value = if state::read(&focusable.into()).is_truthy() {
            "0"
        } else {
            "-1"
        };
        selection.set_attr(doc, "tabindex", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waria_dom::NodeId;

    fn setup() -> (AriaContext, Document, Selection) {
        let mut doc = Document::new();
        let nodes = (0..2)
            .map(|_| doc.append_element(NodeId::ROOT, "div").unwrap())
            .collect::<Vec<_>>();
        (AriaContext::new(), doc, Selection::from_nodes(nodes))
    }

    #[test]
    fn test_role_get_set() {
        let (ctx, mut doc, sel) = setup();

        assert_eq!(ctx.role(&mut doc, &sel, None), None);
        ctx.role(&mut doc, &sel, Some("presentation".into()));
        assert_eq!(
            ctx.role(&mut doc, &sel, None),
            Some("presentation".to_string())
        );
        assert_eq!(doc.attr(sel.get(1).unwrap(), "role"), Some("presentation"));
    }

    #[test]
    fn test_add_role_merges_words() {
        let (ctx, mut doc, sel) = setup();
        let first = Selection::single(sel.first().unwrap());

        ctx.add_role(&mut doc, &first, "button".into());
        ctx.add_role(&mut doc, &first, "button switch".into());

        assert_eq!(ctx.role(&mut doc, &first, None).as_deref(), Some("button switch"));
    }

    #[test]
    fn test_remove_role_words() {
        let (ctx, mut doc, sel) = setup();
        let first = Selection::single(sel.first().unwrap());
        ctx.role(&mut doc, &first, Some("button switch tab".into()));

        ctx.remove_role(&mut doc, &first, Some("switch button".into()));
        assert_eq!(ctx.role(&mut doc, &first, None).as_deref(), Some("tab"));

        ctx.remove_role(&mut doc, &first, None);
        assert_eq!(ctx.role(&mut doc, &first, None), None);
    }

    #[test]
    fn test_aria_visible() {
        let (ctx, mut doc, sel) = setup();

        ctx.aria_visible(&mut doc, &sel, false);
        assert_eq!(doc.attr(sel.first().unwrap(), "aria-hidden"), Some("true"));

        ctx.aria_visible(&mut doc, &sel, true);
        assert!(!doc.has_attr(sel.first().unwrap(), "aria-hidden"));
    }

    #[test]
    fn test_aria_focusable() {
        let (ctx, mut doc, sel) = setup();

        ctx.aria_focusable(&mut doc, &sel, true);
        assert_eq!(doc.attr(sel.first().unwrap(), "tabindex"), Some("0"));

        ctx.aria_focusable(&mut doc, &sel, 0);
        assert_eq!(doc.attr(sel.first().unwrap(), "tabindex"), Some("-1"));

        // "mixed" is truthy for focusability, like any unrecognised state.
        ctx.aria_focusable(&mut doc, &sel, "mixed");
        assert_eq!(doc.attr(sel.first().unwrap(), "tabindex"), Some("0"));
    }
}
