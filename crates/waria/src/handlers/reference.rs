//! Reference handler
//!
//! Writes attributes whose values point at other elements
//! (`aria-labelledby`, `aria-controls`, ...). On write, the referenced
//! elements are identified (minting IDs where needed) and the IDs are
//! stored; on read, the stored IDs are resolved back into a collection.

use super::property;
use crate::context::AriaContext;
use crate::value::{AriaValue, ValueSource};
use waria_dom::{Document, NodeId, Selection};

/// Coerce a reference value into the elements it designates. Strings are
/// treated as selectors; values with no element interpretation resolve to
/// an empty selection.
pub(crate) fn to_selection(doc: &Document, value: &AriaValue) -> Selection {
    match value {
        AriaValue::Node(node) => Selection::single(*node),
        AriaValue::Nodes(nodes) => Selection::from_nodes(nodes.clone()),
        AriaValue::Text(selector) => doc.select(selector),
        AriaValue::Bool(_) | AriaValue::Int(_) => Selection::empty(),
    }
}

/// The property-handler convert step: identify every referenced element
/// and space-join the IDs. No referenced elements means no write.
fn identify_references(
    ctx: &AriaContext,
    doc: &mut Document,
    value: AriaValue,
) -> Option<AriaValue> {
    let targets = to_selection(doc, &value);
    let ids = ctx.identify_all(doc, &targets);
    if ids.is_empty() {
        None
    } else {
        Some(AriaValue::Text(ids.join(" ")))
    }
}

/// Set a reference attribute
pub(crate) fn set(
    ctx: &AriaContext,
    doc: &mut Document,
    element: NodeId,
    name: &str,
    reference: &ValueSource,
    index: usize,
) {
    property::set(
        ctx,
        doc,
        element,
        name,
        reference,
        index,
        Some(&identify_references),
    );
}

/// Get a reference attribute as the collection it points at.
///
/// Absent attributes read as `None`; a present attribute whose IDs match
/// nothing yields an empty selection.
pub(crate) fn get(
    ctx: &AriaContext,
    doc: &Document,
    element: NodeId,
    name: &str,
) -> Option<Selection> {
    let raw = property::get(ctx, doc, element, name)?.write_out();
    Some(
        raw.split_whitespace()
            .filter_map(|id| doc.get_element_by_id(id))
            .collect(),
    )
}
