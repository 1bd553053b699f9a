//! Attribute values
//!
//! The dynamic value domain accepted by the attribute writers, plus the
//! literal-or-computed wrapper used everywhere a value can instead be derived
//! per element.

use waria_dom::{Document, NodeId, Selection};

/// A value that can be written to (or produced by) an ARIA attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AriaValue {
    Bool(bool),
    Int(i64),
    Text(String),
    /// A single element reference, resolved by the reference handler
    Node(NodeId),
    /// Multiple element references
    Nodes(Vec<NodeId>),
}

impl AriaValue {
    /// String coercion used when the value reaches the default write path.
    ///
    /// Node references have no textual form of their own; the reference
    /// handler resolves them to IDs before this point. One that slips
    /// through coerces to the empty string.
    pub fn write_out(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Node(_) | Self::Nodes(_) => String::new(),
        }
    }
}

impl From<bool> for AriaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AriaValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AriaValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for AriaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AriaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NodeId> for AriaValue {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

impl From<&Selection> for AriaValue {
    fn from(value: &Selection) -> Self {
        Self::Nodes(value.to_vec())
    }
}

/// Callback signature for computed values.
///
/// Receives the document, the element being written, the element's index
/// within the collection and the current attribute value. Returning `None`
/// means "take no action for this element".
pub type ValueFn = dyn Fn(&Document, NodeId, usize, Option<&str>) -> Option<AriaValue>;

/// A literal value or a per-element computation.
pub enum ValueSource {
    Literal(AriaValue),
    Computed(Box<ValueFn>),
}

impl ValueSource {
    /// Shorthand for a computed source
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Document, NodeId, usize, Option<&str>) -> Option<AriaValue> + 'static,
    {
        Self::Computed(Box::new(f))
    }

    /// Resolve against a concrete element.
    pub fn resolve(
        &self,
        doc: &Document,
        element: NodeId,
        index: usize,
        current: Option<&str>,
    ) -> Option<AriaValue> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Computed(f) => f(doc, element, index, current),
        }
    }
}

impl std::fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<AriaValue> for ValueSource {
    fn from(value: AriaValue) -> Self {
        Self::Literal(value)
    }
}

impl From<bool> for ValueSource {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for ValueSource {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i32> for ValueSource {
    fn from(value: i32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<&str> for ValueSource {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for ValueSource {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<NodeId> for ValueSource {
    fn from(value: NodeId) -> Self {
        Self::Literal(value.into())
    }
}

impl From<&Selection> for ValueSource {
    fn from(value: &Selection) -> Self {
        Self::Literal(value.into())
    }
}

/// The three-valued reading of an ARIA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFlag {
    True,
    False,
    Mixed,
}

impl StateFlag {
    /// `false` is the only falsy reading; `mixed` counts as asserted.
    pub fn is_truthy(self) -> bool {
        !matches!(self, Self::False)
    }
}

impl From<bool> for StateFlag {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl std::fmt::Display for StateFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::True => "true",
            Self::False => "false",
            Self::Mixed => "mixed",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_out() {
        assert_eq!(AriaValue::from(true).write_out(), "true");
        assert_eq!(AriaValue::from(false).write_out(), "false");
        assert_eq!(AriaValue::from(0).write_out(), "0");
        assert_eq!(AriaValue::from(-1).write_out(), "-1");
        assert_eq!(AriaValue::from("test").write_out(), "test");
    }

    #[test]
    fn test_state_flag_display() {
        assert_eq!(StateFlag::True.to_string(), "true");
        assert_eq!(StateFlag::False.to_string(), "false");
        assert_eq!(StateFlag::Mixed.to_string(), "mixed");
    }

    #[test]
    fn test_state_flag_truthiness() {
        assert!(StateFlag::True.is_truthy());
        assert!(StateFlag::Mixed.is_truthy());
        assert!(!StateFlag::False.is_truthy());
    }

    #[test]
    fn test_literal_resolve_ignores_element() {
        let doc = Document::new();
        let source = ValueSource::from("fixed");
        let resolved = source.resolve(&doc, NodeId::ROOT, 3, None);
        assert_eq!(resolved, Some(AriaValue::Text("fixed".into())));
    }

    #[test]
    fn test_computed_resolve_sees_index_and_current() {
        let doc = Document::new();
        let source = ValueSource::computed(|_, _, index, current| {
            Some(AriaValue::Text(format!("{}-{}", index, current.unwrap_or("none"))))
        });
        let resolved = source.resolve(&doc, NodeId::ROOT, 2, Some("old"));
        assert_eq!(resolved, Some(AriaValue::Text("2-old".into())));
    }
}
