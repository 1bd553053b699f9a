//! State handler
//!
//! ARIA states are tri-state: `true`, `false` or `mixed`. Writes coerce
//! the incoming value through [`read`]; reads coerce the stored attribute
//! back into a [`StateFlag`].

use super::property;
use crate::context::AriaContext;
use crate::value::{AriaValue, StateFlag, ValueSource};
use waria_dom::{Document, NodeId};

/// Coerce a raw value into a state flag.
///
/// Booleans pass through; the strings `"mixed"`, `"true"`, `"false"`,
/// `"1"` and `"0"` (case-insensitive) and the numbers `0` and `1` are
/// recognised. Anything else defaults to `true` - an unrecognised value
/// asserts the state rather than failing.
pub fn read(raw: &AriaValue) -> StateFlag {
    match raw {
        AriaValue::Bool(b) => (*b).into(),
        AriaValue::Int(0) => StateFlag::False,
        AriaValue::Int(1) => StateFlag::True,
        AriaValue::Text(s) => {
            let lower = s.to_lowercase();
            match lower.as_str() {
                "mixed" => StateFlag::Mixed,
                "0" => read(&AriaValue::Int(0)),
                "1" => read(&AriaValue::Int(1)),
                "true" => StateFlag::True,
                "false" => StateFlag::False,
                _ => StateFlag::True,
            }
        }
        _ => StateFlag::True,
    }
}

fn coerce(_: &AriaContext, _: &mut Document, value: AriaValue) -> Option<AriaValue> {
    Some(AriaValue::Text(read(&value).to_string()))
}

/// Set a state attribute, coercing the value through [`read`]
pub(crate) fn set(
    ctx: &AriaContext,
    doc: &mut Document,
    element: NodeId,
    name: &str,
    state: &ValueSource,
    index: usize,
) {
    property::set(ctx, doc, element, name, state, index, Some(&coerce));
}

/// Read a state attribute.
///
/// Absent attributes read as `None`. A present value that is neither
/// `mixed` nor boolean-shaped reads as `False` - deliberately different
/// from [`read`]'s default-true policy, matching how assistive technology
/// treats a malformed state.
pub(crate) fn get(
    ctx: &AriaContext,
    doc: &Document,
    element: NodeId,
    name: &str,
) -> Option<StateFlag> {
    let value = property::get(ctx, doc, element, name)?;
    let lower = value.write_out().to_lowercase();
    Some(match lower.as_str() {
        "mixed" => StateFlag::Mixed,
        "true" => StateFlag::True,
        _ => StateFlag::False,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_recognised_values() {
        assert_eq!(read(&true.into()), StateFlag::True);
        assert_eq!(read(&false.into()), StateFlag::False);
        assert_eq!(read(&"false".into()), StateFlag::False);
        assert_eq!(read(&"TRUE".into()), StateFlag::True);
        assert_eq!(read(&"1".into()), StateFlag::True);
        assert_eq!(read(&"0".into()), StateFlag::False);
        assert_eq!(read(&0.into()), StateFlag::False);
        assert_eq!(read(&1.into()), StateFlag::True);
        assert_eq!(read(&"mixed".into()), StateFlag::Mixed);
        assert_eq!(read(&"MIXED".into()), StateFlag::Mixed);
    }

    #[test]
    fn test_read_defaults_to_true() {
        assert_eq!(read(&"mixed.".into()), StateFlag::True);
        assert_eq!(read(&"2".into()), StateFlag::True);
        assert_eq!(read(&(-1).into()), StateFlag::True);
        assert_eq!(read(&"nothing".into()), StateFlag::True);
        assert_eq!(read(&"".into()), StateFlag::True);
        assert_eq!(read(&AriaValue::Nodes(vec![])), StateFlag::True);
    }

    fn setup() -> (AriaContext, Document, NodeId) {
        let mut doc = Document::new();
        let div = doc.append_element(waria_dom::NodeId::ROOT, "div").unwrap();
        (AriaContext::new(), doc, div)
    }

    #[test]
    fn test_set_writes_coerced_value() {
        let (ctx, mut doc, div) = setup();

        set(&ctx, &mut doc, div, "busy", &true.into(), 0);
        set(&ctx, &mut doc, div, "checked", &"MIXED".into(), 0);
        set(&ctx, &mut doc, div, "pressed", &"junk".into(), 0);

        assert_eq!(doc.attr(div, "aria-busy"), Some("true"));
        assert_eq!(doc.attr(div, "aria-checked"), Some("mixed"));
        assert_eq!(doc.attr(div, "aria-pressed"), Some("true"));
    }

    #[test]
    fn test_get_coerces_stored_value() {
        let (ctx, mut doc, div) = setup();
        doc.set_attr(div, "aria-busy", "true");
        doc.set_attr(div, "aria-checked", "MIXED");
        doc.set_attr(div, "aria-pressed", "garbage");

        assert_eq!(get(&ctx, &doc, div, "busy"), Some(StateFlag::True));
        assert_eq!(get(&ctx, &doc, div, "checked"), Some(StateFlag::Mixed));
        // Malformed stored values read as false, not as read()'s default
        // true and not as absent.
        assert_eq!(get(&ctx, &doc, div, "pressed"), Some(StateFlag::False));
        assert_eq!(get(&ctx, &doc, div, "disabled"), None);
    }
}
