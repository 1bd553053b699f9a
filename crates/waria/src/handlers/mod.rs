//! Attribute handlers
//!
//! Three handler variants cover the three flavours of ARIA attribute:
//! plain properties, element references and tri-state flags. Reference and
//! state defer to the property handler for anything they do not override,
//! so the property handler is also the fallback for unknown handler names.

pub(crate) mod property;
pub mod reference;
pub mod state;

use crate::context::AriaContext;
use crate::value::{AriaValue, StateFlag, ValueSource};
use waria_dom::{Document, NodeId, Selection};

/// Which handler an operation should run through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerKind {
    #[default]
    Property,
    Reference,
    State,
}

impl HandlerKind {
    /// Resolve a handler name; omitted or unrecognised names fall back to
    /// the property handler.
    pub fn resolve(kind: Option<&str>) -> Self {
        match kind {
            Some("reference") => Self::Reference,
            Some("state") => Self::State,
            _ => Self::Property,
        }
    }

    pub(crate) fn set(
        self,
        ctx: &AriaContext,
        doc: &mut Document,
        element: NodeId,
        name: &str,
        value: &ValueSource,
        index: usize,
    ) {
        match self {
            Self::Property => property::set(ctx, doc, element, name, value, index, None),
            Self::Reference => reference::set(ctx, doc, element, name, value, index),
            Self::State => state::set(ctx, doc, element, name, value, index),
        }
    }

    pub(crate) fn get(
        self,
        ctx: &AriaContext,
        doc: &Document,
        element: NodeId,
        name: &str,
    ) -> Option<AriaReading> {
        match self {
            Self::Property => property::get(ctx, doc, element, name).map(AriaReading::Value),
            Self::Reference => reference::get(ctx, doc, element, name).map(AriaReading::Refs),
            Self::State => state::get(ctx, doc, element, name).map(AriaReading::State),
        }
    }
}

/// What a get-mode access produced, shaped by the handler that ran.
#[derive(Debug, Clone, PartialEq)]
pub enum AriaReading {
    /// Property handler: the attribute value
    Value(AriaValue),
    /// Reference handler: the referenced elements
    Refs(Selection),
    /// State handler: the coerced flag
    State(StateFlag),
}

impl AriaReading {
    pub fn into_value(self) -> Option<AriaValue> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_refs(self) -> Option<Selection> {
        match self {
            Self::Refs(refs) => Some(refs),
            _ => None,
        }
    }

    pub fn into_state(self) -> Option<StateFlag> {
        match self {
            Self::State(state) => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kind() {
        assert_eq!(HandlerKind::resolve(None), HandlerKind::Property);
        assert_eq!(HandlerKind::resolve(Some("property")), HandlerKind::Property);
        assert_eq!(HandlerKind::resolve(Some("reference")), HandlerKind::Reference);
        assert_eq!(HandlerKind::resolve(Some("state")), HandlerKind::State);
        assert_eq!(HandlerKind::resolve(Some("nonsense")), HandlerKind::Property);
    }
}
