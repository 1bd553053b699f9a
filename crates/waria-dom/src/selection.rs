//! Element collections and simple selectors

use crate::{Document, ElementData, NodeId};

/// Ordered collection of nodes
///
/// The unit the attribute toolkit fans out over: supports indexed access,
/// iteration and bulk attribute edits. Duplicates are not removed; callers
/// build selections from queries or explicit node lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    nodes: Vec<NodeId>,
}

impl Selection {
    /// An empty selection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selection holding a single node
    pub fn single(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    /// Selection from a node list
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// First node in the collection
    pub fn first(&self) -> Option<NodeId> {
        self.get(0)
    }

    /// Check membership
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.nodes.clone()
    }

    /// Get the attribute from the first element
    pub fn attr<'d>(&self, doc: &'d Document, name: &str) -> Option<&'d str> {
        self.first().and_then(|node| doc.attr(node, name))
    }

    /// Set the attribute on every element in the collection
    pub fn set_attr(&self, doc: &mut Document, name: &str, value: &str) {
        for node in self.iter() {
            doc.set_attr(node, name, value);
        }
    }

    /// Remove the attribute from every element in the collection
    pub fn remove_attr(&self, doc: &mut Document, name: &str) {
        for node in self.iter() {
            doc.remove_attr(node, name);
        }
    }
}

impl From<NodeId> for Selection {
    fn from(node: NodeId) -> Self {
        Self::single(node)
    }
}

impl From<Vec<NodeId>> for Selection {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::from_nodes(nodes)
    }
}

impl FromIterator<NodeId> for Selection {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for &Selection {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.clone().into_iter()
    }
}

/// Simple selector for matching elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_lowercase()))
        }
    }

    /// Check if an element matches this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag_name.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id),
            Self::Class(class) => elem.classes().any(|c| c == class),
        }
    }
}
