//! Example: wiring up a disclosure button

use waria::AriaContext;
use waria_dom::{Document, NodeId, Selection};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let ctx = AriaContext::new();
    let mut doc = Document::new();

    let button = doc.append_element(NodeId::ROOT, "button").unwrap();
    let panel = doc.append_element(NodeId::ROOT, "div").unwrap();
    let buttons = Selection::single(button);

    ctx.aria(&mut doc, &buttons, "label", Some("Show details".into()));
    ctx.aria_ref(&mut doc, &buttons, "controls", Some(panel.into()));
    ctx.aria_state(&mut doc, &buttons, "expanded", Some(false.into()));
    ctx.aria_visible(&mut doc, &Selection::single(panel), false);

    println!(
        "button: aria-label={:?} aria-controls={:?} aria-expanded={:?}",
        doc.attr(button, "aria-label"),
        doc.attr(button, "aria-controls"),
        doc.attr(button, "aria-expanded"),
    );
    println!("panel: id={:?} aria-hidden={:?}", doc.element_id(panel), doc.attr(panel, "aria-hidden"));
}
