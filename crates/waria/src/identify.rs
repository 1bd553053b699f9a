//! Element identification
//!
//! Assigns stable IDs to elements so they can be referenced from ARIA
//! attributes. Generated IDs concatenate a fixed prefix with a monotonic
//! counter; candidates already present anywhere in the document (including
//! manually assigned ones) are skipped, and the counter is never reset.

use crate::context::AriaContext;
use waria_dom::{Document, NodeId, Selection};

const IDENTIFY_PREFIX: &str = "anonymous";

impl AriaContext {
    /// Identify a single node.
    ///
    /// Returns the existing non-empty `id` unchanged, otherwise generates a
    /// fresh one, assigns it and returns it. Non-elements yield `None`.
    /// Calling this twice on the same element returns the same ID both
    /// times.
    pub fn identify_node(&self, doc: &mut Document, node: NodeId) -> Option<String> {
        if !doc.is_element(node) {
            return None;
        }
        if let Some(id) = doc.element_id(node) {
            return Some(id.to_string());
        }

        let id = loop {
            let candidate = format!("{}{}", IDENTIFY_PREFIX, self.counter.get());
            self.counter.set(self.counter.get() + 1);
            if doc.get_element_by_id(&candidate).is_none() {
                break candidate;
            }
        };
        tracing::debug!("assigned id {:?}", id);
        doc.set_attr(node, "id", &id);
        Some(id)
    }

    /// Identify the first element of a collection
    pub fn identify(&self, doc: &mut Document, selection: &Selection) -> Option<String> {
        selection.first().and_then(|node| self.identify_node(doc, node))
    }

    /// Identify every element of a collection, in order.
    ///
    /// Non-elements are skipped.
    pub fn identify_all(&self, doc: &mut Document, selection: &Selection) -> Vec<String> {
        selection
            .iter()
            .filter_map(|node| self.identify_node(doc, node))
            .collect()
    }

    /// The ID of the element at `index`, identifying it first if needed
    pub fn identify_at(
        &self,
        doc: &mut Document,
        selection: &Selection,
        index: usize,
    ) -> Option<String> {
        selection.get(index).and_then(|node| self.identify_node(doc, node))
    }
}
