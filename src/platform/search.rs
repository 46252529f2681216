//! Search form wiring

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, Node};

use crate::error::Result;
use crate::search::{SearchOutcome, SiteIndex, normalize_query, render_results};

/// Index plus the results panel it renders into
struct SearchUi {
    index: SiteIndex,
    panel: Option<Element>,
}

impl SearchUi {
    /// Search and show results, or hide the panel for too-short queries
    fn update(&self, query: &str) {
        if normalize_query(query).is_none() {
            self.hide();
            return;
        }
        let results = self.index.search(query);
        self.display(&render_results(&results));
    }

    fn display(&self, html: &str) {
        if let Some(ref panel) = self.panel {
            panel.set_inner_html(html);
            let _ = panel.class_list().add_1("active");
        }
    }

    fn hide(&self) {
        if let Some(ref panel) = self.panel {
            let _ = panel.class_list().remove_1("active");
        }
    }

    fn submit(&self, query: &str) {
        let results = self.index.search(query);
        match SearchOutcome::for_submit(&results) {
            SearchOutcome::Navigate(url) => {
                log::info!("Single match for {:?}, navigating to {}", query, url);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
            }
            SearchOutcome::Display(html) => self.display(&html),
        }
    }
}

pub fn install(document: &Document, index: SiteIndex, live_search: bool) -> Result<()> {
    let form = document.get_element_by_id("search-form");
    let input = document
        .get_element_by_id("search-input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let panel = document.get_element_by_id("search-results");
    if panel.is_none() {
        log::debug!("No #search-results panel; results will not be shown");
    }

    let ui = Rc::new(SearchUi { index, panel });

    // Submit: jump straight to a single match, otherwise list them
    if let Some(ref form) = form {
        let ui = ui.clone();
        let input = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let query = input.as_ref().map(|i| i.value()).unwrap_or_default();
            ui.submit(&query);
        });
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let Some(input) = input else {
        log::debug!("No #search-input; live search disabled");
        return Ok(());
    };

    // Live search as the visitor types
    if live_search {
        let ui = ui.clone();
        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            ui.update(&input_clone.value());
        });
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Hide results when clicking outside the form
    if let Some(form) = form {
        let ui = ui.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !form.contains(target.as_ref()) {
                ui.hide();
            }
        });
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Re-show results on focus if there's a query
    {
        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let query = input_clone.value();
            if normalize_query(&query).is_some() {
                let results = ui.index.search(&query);
                ui.display(&render_results(&results));
            }
        });
        input.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
