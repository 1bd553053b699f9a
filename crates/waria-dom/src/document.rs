//! Document - High-level document API

use crate::{DomResult, DomTree, Node, NodeId, Selection, SimpleSelector};

/// HTML document
///
/// Wraps the arena tree with the operations the attribute toolkit consumes:
/// attribute access, element tests, ID lookup and selector queries.
#[derive(Debug, Default)]
pub struct Document {
    tree: DomTree,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
        }
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        tracing::trace!("create element <{}>", tag);
        self.tree.insert(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.tree.insert(Node::text(content))
    }

    /// Append `child` as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.tree.append_child(parent, child)
    }

    /// Create an element and append it to `parent` in one step
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let element = self.create_element(tag);
        self.append(parent, element)?;
        Ok(element)
    }

    /// Check whether `node` exists and is an element
    pub fn is_element(&self, node: NodeId) -> bool {
        self.tree.get(node).is_some_and(Node::is_element)
    }

    /// Get an attribute value from an element
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree
            .get(node)
            .and_then(Node::as_element)
            .and_then(|e| e.get_attr(name))
    }

    /// Check whether an element carries an attribute
    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.tree
            .get(node)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element; no-op for non-elements
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(Node::as_element_mut) {
            tracing::debug!("set {}=\"{}\"", name, value);
            elem.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element; no-op for non-elements
    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(Node::as_element_mut) {
            if elem.remove_attr(name).is_some() {
                tracing::debug!("removed {}", name);
            }
        }
    }

    /// The element's non-empty `id`, if any
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.tree.get(node).and_then(Node::as_element).and_then(|e| e.id())
    }

    /// Get an element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.element_id(node) == Some(id))
    }

    /// Query all elements matching a simple selector, in document order
    pub fn select(&self, selector: &str) -> Selection {
        let Some(selector) = SimpleSelector::parse(selector) else {
            return Selection::empty();
        };
        let nodes = self
            .tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&node| {
                self.tree
                    .get(node)
                    .and_then(Node::as_element)
                    .is_some_and(|e| selector.matches(e))
            })
            .collect();
        Selection::from_nodes(nodes)
    }

    /// Access the tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
