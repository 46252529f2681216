//! Browser platform layer
//!
//! Binds the pure modules to the page DOM:
//! - Search form, input and results panel
//! - Navigation highlighting and smooth in-page scrolling
//! - Scroll animations and parallax
//! - Pac-Man keyboard demo
//!
//! Optional elements that are missing simply leave their behavior unwired.

pub mod effects;
pub mod nav;
pub mod pacman;
pub mod search;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom_is_parsed;
use crate::error::{Result, SiteError};
use crate::search::SiteIndex;
use crate::settings::Settings;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::MissingDocument)
}

/// All elements matching `selector` that are a `T`
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// OS-level "reduce motion" accessibility setting
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Run `f` once the DOM is parsed (immediately if it already is)
pub fn on_dom_ready<F: FnOnce() + 'static>(f: F) -> Result<()> {
    let document = document()?;
    if dom_is_parsed(&document.ready_state()) {
        f();
        return Ok(());
    }

    let closure = Closure::once(move |_event: web_sys::Event| f());
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Page-provided index from `<script type="application/json" id="site-index">`,
/// or the built-in one
pub fn load_index(document: &Document) -> Result<SiteIndex> {
    let json = document
        .get_element_by_id("site-index")
        .and_then(|el| el.text_content());
    SiteIndex::from_override(json.as_deref())
}

/// Wire every behavior into the current page
pub fn install(settings: &Settings) -> Result<()> {
    let window = window()?;
    let document = document()?;
    let reduced_motion = settings.effective_reduced_motion(prefers_reduced_motion(&window));

    let index = load_index(&document)?;
    search::install(&document, index, settings.live_search)?;

    nav::set_active_nav_item(&window, &document)?;
    nav::install_smooth_scroll(&document)?;

    effects::init_scroll_animations(&window, &document, reduced_motion)?;
    effects::init_parallax(&window, &document, reduced_motion)?;

    pacman::install(&document, settings.effective_sprite_speed())?;

    log::info!("Site scripts ready (reduced motion: {})", reduced_motion);
    Ok(())
}
