//! Scroll animations and parallax

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::query_all;
use crate::consts::{SCROLL_ANIMATION_ROOT_MARGIN, SCROLL_ANIMATION_THRESHOLD};
use crate::effects::{parallax_speed, parallax_transform};
use crate::error::Result;

/// Add `visible` to each `.animate-on-scroll` element as it enters the viewport
pub fn init_scroll_animations(
    window: &Window,
    document: &Document,
    reduced_motion: bool,
) -> Result<()> {
    let elements = query_all::<Element>(document, ".animate-on-scroll")?;
    if elements.is_empty() {
        return Ok(());
    }

    let observer_key = JsValue::from_str("IntersectionObserver");
    let supported = js_sys::Reflect::has(window, &observer_key).unwrap_or(false);
    if reduced_motion || !supported {
        // Older browsers (or reduced motion): show everything
        for el in &elements {
            el.class_list().add_1("visible")?;
        }
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(_, _)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SCROLL_ANIMATION_THRESHOLD));
    options.set_root_margin(SCROLL_ANIMATION_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();

    log::debug!("Observing {} scroll-animated elements", elements.len());
    Ok(())
}

/// Translate `.parallax-bg` layers by `scrollY * data-speed`
pub fn init_parallax(window: &Window, document: &Document, reduced_motion: bool) -> Result<()> {
    let layers = query_all::<HtmlElement>(document, ".parallax-bg")?;
    if layers.is_empty() {
        return Ok(());
    }
    if reduced_motion {
        log::info!("Parallax disabled (reduced motion)");
        return Ok(());
    }

    let layers = Rc::new(layers);
    // At most one pending frame per burst of scroll events
    let ticking = Rc::new(Cell::new(false));

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if ticking.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let frame = {
            let layers = layers.clone();
            let ticking = ticking.clone();
            Closure::once(move |_time: f64| {
                update_parallax(&layers);
                ticking.set(false);
            })
        };
        let requested = window.request_animation_frame(frame.as_ref().unchecked_ref());
        if requested.is_ok() {
            ticking.set(true);
        }
        frame.forget();
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();

    Ok(())
}

fn update_parallax(layers: &[HtmlElement]) {
    let scroll_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);

    for layer in layers {
        let speed = parallax_speed(layer.dataset().get("speed").as_deref());
        let _ = layer
            .style()
            .set_property("transform", &parallax_transform(scroll_y, speed));
    }
}
