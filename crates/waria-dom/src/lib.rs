//! waria-dom - Element collection abstraction
//!
//! A small arena-based DOM used by the waria attribute toolkit: nodes,
//! a document with ID lookup, and an ordered element collection.

mod node;
mod tree;
mod document;
mod selection;

pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{DomError, DomResult, DomTree};
pub use document::Document;
pub use selection::{Selection, SimpleSelector};

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
}
