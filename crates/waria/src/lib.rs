//! waria - WAI-ARIA attribute toolkit
//!
//! Reads, writes and removes `aria-*` attributes on an element collection,
//! normalising names, minting element IDs for cross-element references and
//! allowing per-attribute behaviour overrides through hooks.
//!
//! Everything runs through an [`AriaContext`], which owns the mutable
//! configuration (rename table, hook registry, ID counter):
//!
//! ```
//! use waria::AriaContext;
//! use waria_dom::{Document, NodeId, Selection};
//!
//! let ctx = AriaContext::new();
//! let mut doc = Document::new();
//! let button = doc.append_element(NodeId::ROOT, "button").unwrap();
//! let panel = doc.append_element(NodeId::ROOT, "div").unwrap();
//! let buttons = Selection::single(button);
//!
//! ctx.aria(&mut doc, &buttons, "label", Some("Toggle".into()));
//! ctx.aria_ref(&mut doc, &buttons, "controls", Some(panel.into()));
//! ctx.aria_state(&mut doc, &buttons, "expanded", Some(false.into()));
//!
//! assert_eq!(doc.attr(button, "aria-label"), Some("Toggle"));
//! assert_eq!(doc.attr(button, "aria-controls"), Some("anonymous0"));
//! assert_eq!(doc.attr(button, "aria-expanded"), Some("false"));
//! ```
//!
//! Error policy: there isn't one. Malformed input - a non-element target, a
//! missing attribute, an unrecognised state value - degrades to a no-op or
//! an absent reading, never a panic or an error value.

mod access;
mod api;
mod context;
mod hooks;
mod identify;
mod normalise;
mod value;

pub mod handlers;

pub use access::{access, PropertyArg};
pub use api::to_words;
pub use context::AriaContext;
pub use handlers::{AriaReading, HandlerKind};
pub use hooks::{AttrHooks, GetHook, HasHook, HookRegistry, SetHook, UnsetHook};
pub use normalise::{NameNormaliser, ARIA_PREFIX};
pub use value::{AriaValue, StateFlag, ValueFn, ValueSource};

// Re-export the DOM layer so applications need a single dependency.
pub use waria_dom as dom;
