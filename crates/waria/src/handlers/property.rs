//! Property handler
//!
//! The base handler: reads and writes attribute values with no coercion
//! beyond string conversion. The other handlers delegate here, supplying a
//! `convert` step. All operations are silent no-ops on non-elements.

use crate::context::AriaContext;
use crate::normalise::ARIA_PREFIX;
use crate::value::{AriaValue, ValueSource};
use waria_dom::{Document, NodeId};

/// Conversion applied to a value after hooks and before the write.
/// Returning `None` suppresses the write.
pub(crate) type Convert<'a> = &'a dyn Fn(&AriaContext, &mut Document, AriaValue) -> Option<AriaValue>;

fn stem_of(canonical: &str) -> &str {
    &canonical[ARIA_PREFIX.len()..]
}

/// Set an attribute.
///
/// Order of operations: normalise the name, resolve a computed value
/// against the element, consult the `set` hook, apply `convert`, then
/// write. A hook returning `None` has handled the write itself; a computed
/// value or `convert` returning `None` means no action for this element.
pub(crate) fn set(
    ctx: &AriaContext,
    doc: &mut Document,
    element: NodeId,
    name: &str,
    value: &ValueSource,
    index: usize,
    convert: Option<Convert<'_>>,
) {
    let canonical = ctx.normalise(name);
    let current = doc.attr(element, &canonical).map(str::to_string);
    let Some(mut value) = value.resolve(doc, element, index, current.as_deref()) else {
        return;
    };

    if let Some(hook) = ctx.hooks(stem_of(&canonical)).and_then(|h| h.set.as_ref()) {
        match hook(doc, element, &value, &canonical) {
            Some(replacement) => value = replacement,
            None => return,
        }
    }

    let value = match convert {
        Some(convert) => match convert(ctx, doc, value) {
            Some(converted) => converted,
            None => return,
        },
        None => value,
    };

    if doc.is_element(element) {
        doc.set_attr(element, &canonical, &value.write_out());
    }
}

/// Check whether the attribute exists. Non-elements always report `false`;
/// otherwise a `has` hook replaces the default existence test.
pub(crate) fn has(ctx: &AriaContext, doc: &Document, element: NodeId, name: &str) -> bool {
    if !doc.is_element(element) {
        return false;
    }
    let canonical = ctx.normalise(name);
    match ctx.hooks(stem_of(&canonical)).and_then(|h| h.has.as_ref()) {
        Some(hook) => hook(doc, element, &canonical),
        None => doc.has_attr(element, &canonical),
    }
}

/// Get the attribute value.
///
/// Bails early with `None` when [`has`] reports the attribute absent; the
/// `get` hook is only consulted for present attributes.
pub(crate) fn get(
    ctx: &AriaContext,
    doc: &Document,
    element: NodeId,
    name: &str,
) -> Option<AriaValue> {
    if !has(ctx, doc, element, name) {
        return None;
    }
    let canonical = ctx.normalise(name);
    match ctx.hooks(stem_of(&canonical)).and_then(|h| h.get.as_ref()) {
        Some(hook) => hook(doc, element, &canonical),
        None => doc
            .attr(element, &canonical)
            .map(|raw| AriaValue::Text(raw.to_string())),
    }
}

/// Remove the attribute. An `unset` hook returning `false` vetoes the
/// default removal.
pub(crate) fn unset(ctx: &AriaContext, doc: &mut Document, element: NodeId, name: &str) {
    if !doc.is_element(element) {
        return;
    }
    let canonical = ctx.normalise(name);
    let proceed = match ctx.hooks(stem_of(&canonical)).and_then(|h| h.unset.as_ref()) {
        Some(hook) => hook(doc, element, &canonical),
        None => true,
    };
    if proceed {
        doc.remove_attr(element, &canonical);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AriaContext, Document, NodeId) {
        let mut doc = Document::new();
        let div = doc.append_element(waria_dom::NodeId::ROOT, "div").unwrap();
        (AriaContext::new(), doc, div)
    }

    #[test]
    fn test_set_and_get() {
        let (ctx, mut doc, div) = setup();

        set(&ctx, &mut doc, div, "label", &"test".into(), 0, None);
        assert_eq!(doc.attr(div, "aria-label"), Some("test"));
        assert_eq!(
            get(&ctx, &doc, div, "label"),
            Some(AriaValue::Text("test".into()))
        );
        assert_eq!(get(&ctx, &doc, div, "busy"), None);
    }

    #[test]
    fn test_set_normalises_name() {
        let (ctx, mut doc, div) = setup();

        set(&ctx, &mut doc, div, "LABEL", &"a".into(), 0, None);
        set(&ctx, &mut doc, div, "aria-labeledby", &"b".into(), 0, None);

        assert_eq!(doc.attr(div, "aria-label"), Some("a"));
        assert_eq!(doc.attr(div, "aria-labelledby"), Some("b"));
    }

    #[test]
    fn test_set_on_non_element_is_noop() {
        let (ctx, mut doc, _) = setup();
        let text = doc.create_text("hi");

        set(&ctx, &mut doc, text, "label", &"test".into(), 0, None);
        assert!(!has(&ctx, &doc, text, "label"));
        assert_eq!(get(&ctx, &doc, text, "label"), None);
    }

    #[test]
    fn test_computed_value_sees_current() {
        let (ctx, mut doc, div) = setup();
        doc.set_attr(div, "aria-label", "old");

        let source = ValueSource::computed(|_, _, index, current| {
            Some(AriaValue::Text(format!("{}:{}", current.unwrap(), index)))
        });
        set(&ctx, &mut doc, div, "label", &source, 4, None);
        assert_eq!(doc.attr(div, "aria-label"), Some("old:4"));
    }

    #[test]
    fn test_computed_none_takes_no_action() {
        let (ctx, mut doc, div) = setup();

        let source = ValueSource::computed(|_, _, _, _| None);
        set(&ctx, &mut doc, div, "label", &source, 0, None);
        assert!(!doc.has_attr(div, "aria-label"));
    }

    #[test]
    fn test_convert_applies_after_resolution() {
        let (ctx, mut doc, div) = setup();

        let upper: Convert<'_> =
            &|_, _, value| Some(AriaValue::Text(value.write_out().to_uppercase()));
        set(&ctx, &mut doc, div, "label", &"test".into(), 0, Some(upper));
        assert_eq!(doc.attr(div, "aria-label"), Some("TEST"));
    }

    #[test]
    fn test_unset() {
        let (ctx, mut doc, div) = setup();
        doc.set_attr(div, "aria-label", "test");

        unset(&ctx, &mut doc, div, "label");
        assert!(!doc.has_attr(div, "aria-label"));
    }
}
