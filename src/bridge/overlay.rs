//! Info overlay toggle
//!
//! One UI action: show or hide the `#modal` informational panel. No other
//! state is touched.

use wasm_bindgen::prelude::*;

/// Flip the overlay's display style between flex and none.
#[wasm_bindgen]
pub fn toggle_overlay() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(modal) = document.get_element_by_id("modal") else {
        web_sys::console::warn_1(&"No element with id 'modal' found".into());
        return;
    };
    let Ok(modal) = modal.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let style = modal.style();
    let current = style.get_property_value("display").unwrap_or_default();
    let next = if current == "flex" { "none" } else { "flex" };
    let _ = style.set_property("display", next);
}
