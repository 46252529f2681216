//! Navigation wiring

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::query_all;
use crate::error::Result;
use crate::nav::{current_page, is_active, is_fragment_link};

/// Mark the `nav a` link for the current page with `active`
pub fn set_active_nav_item(window: &Window, document: &Document) -> Result<()> {
    let pathname = window.location().pathname()?;
    let current = current_page(&pathname);

    for link in query_all::<Element>(document, "nav a")? {
        let href = link.get_attribute("href");
        if is_active(href.as_deref(), current) {
            link.class_list().add_1("active")?;
        } else {
            link.class_list().remove_1("active")?;
        }
    }

    log::debug!("Active page: {}", current);
    Ok(())
}

/// Smooth-scroll to in-page targets instead of jumping
pub fn install_smooth_scroll(document: &Document) -> Result<()> {
    let anchors = query_all::<Element>(document, r##"a[href^="#"]"##)?;

    for anchor in anchors {
        let document = document.clone();
        let anchor_clone = anchor.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            let Some(href) = anchor_clone.get_attribute("href") else {
                return;
            };
            if !is_fragment_link(&href) {
                return;
            }
            // A bare "#" is not a valid selector; ignore it
            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
