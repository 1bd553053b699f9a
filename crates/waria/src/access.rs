//! Access dispatcher
//!
//! The single entry point behind every public get/set wrapper. Determines
//! getter-vs-setter mode from the shape of the arguments, resolves the
//! handler and fans set-mode out over the whole collection.

use crate::context::AriaContext;
use crate::handlers::{AriaReading, HandlerKind};
use crate::value::ValueSource;
use waria_dom::{Document, Selection};

/// The property argument of an access call: a single name or a name/value
/// map. A map always implies set mode, whether or not a separate value was
/// supplied.
#[derive(Debug)]
pub enum PropertyArg {
    Name(String),
    Map(Vec<(String, ValueSource)>),
}

impl PropertyArg {
    /// The first key, used when a map is handed to a getter
    pub fn first_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Map(map) => map.first().map(|(name, _)| name.as_str()),
        }
    }
}

impl From<&str> for PropertyArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PropertyArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Vec<(String, ValueSource)>> for PropertyArg {
    fn from(map: Vec<(String, ValueSource)>) -> Self {
        Self::Map(map)
    }
}

impl<const N: usize> From<[(&str, ValueSource); N]> for PropertyArg {
    fn from(map: [(&str, ValueSource); N]) -> Self {
        Self::Map(
            map.into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

/// Get or set ARIA attributes on a collection.
///
/// Get mode applies iff `value` is `None` and `property` is a single name;
/// it consults the first element only and returns the handler's reading.
/// Anything else is set mode: a bare name/value pair is folded into a
/// single-entry map, every element of the collection receives every entry
/// (with its index in the collection), and `None` is returned. Malformed
/// input never raises; it degrades to the no-op paths of the handlers.
pub fn access(
    ctx: &AriaContext,
    doc: &mut Document,
    selection: &Selection,
    property: PropertyArg,
    value: Option<ValueSource>,
    kind: HandlerKind,
) -> Option<AriaReading> {
    let map = match (property, value) {
        (PropertyArg::Name(name), None) => {
            let first = selection.first()?;
            return kind.get(ctx, doc, first, &name);
        }
        (PropertyArg::Name(name), Some(value)) => vec![(name, value)],
        (PropertyArg::Map(map), _) => map,
    };

    for (index, element) in selection.iter().enumerate() {
        for (name, value) in &map {
            kind.set(ctx, doc, element, name, value, index);
        }
    }
    None
}
