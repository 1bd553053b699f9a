//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree manipulation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,
    #[error("node cannot be inserted into its own subtree")]
    HierarchyRequest,
}

/// Arena-based DOM tree
///
/// Node 0 is always the document root.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Allocate a detached node, returning its ID
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        if let Some(old_parent) = self.nodes[child.0 as usize].parent {
            let siblings = &mut self.nodes[old_parent.0 as usize].children;
            siblings.retain(|&c| c != child);
        }
        self.nodes[child.0 as usize].parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
        Ok(())
    }

    /// Check whether `ancestor` is an ancestor of `node`
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.get(node).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Iterate the subtree below `root` in document order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(root) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child() {
        let mut tree = DomTree::new();
        let div = tree.insert(Node::element("div"));
        let span = tree.insert(Node::element("span"));

        tree.append_child(NodeId::ROOT, div).unwrap();
        tree.append_child(div, span).unwrap();

        assert_eq!(tree.get(span).unwrap().parent, Some(div));
        assert_eq!(tree.get(div).unwrap().children, vec![span]);
    }

    #[test]
    fn test_append_rejects_cycle() {
        let mut tree = DomTree::new();
        let a = tree.insert(Node::element("div"));
        let b = tree.insert(Node::element("div"));
        tree.append_child(NodeId::ROOT, a).unwrap();
        tree.append_child(a, b).unwrap();

        assert_eq!(tree.append_child(b, a), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(a, a), Err(DomError::HierarchyRequest));
    }

    #[test]
    fn test_descendants_document_order() {
        let mut tree = DomTree::new();
        let a = tree.insert(Node::element("div"));
        let b = tree.insert(Node::element("span"));
        let c = tree.insert(Node::element("p"));
        tree.append_child(NodeId::ROOT, a).unwrap();
        tree.append_child(a, b).unwrap();
        tree.append_child(NodeId::ROOT, c).unwrap();

        assert_eq!(tree.descendants(NodeId::ROOT), vec![a, b, c]);
    }

    #[test]
    fn test_reappend_moves_node() {
        let mut tree = DomTree::new();
        let a = tree.insert(Node::element("div"));
        let b = tree.insert(Node::element("div"));
        let child = tree.insert(Node::element("span"));
        tree.append_child(NodeId::ROOT, a).unwrap();
        tree.append_child(NodeId::ROOT, b).unwrap();
        tree.append_child(a, child).unwrap();
        tree.append_child(b, child).unwrap();

        assert!(tree.get(a).unwrap().children.is_empty());
        assert_eq!(tree.get(b).unwrap().children, vec![child]);
    }
}
