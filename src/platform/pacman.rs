//! Pac-Man keyboard demo
//!
//! WASDX steers the sprite inside `#gameBox`; `#key-<direction>` hints light
//! up for the active direction.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use crate::error::Result;
use crate::sprite::{Bounds, Direction, Motion, SpriteAssets};

/// Demo instance holding the motion state and its elements
struct PacmanDemo {
    motion: Motion,
    assets: SpriteAssets,
    sprite: HtmlImageElement,
    container: Element,
    controls: Vec<(Direction, Element)>,
}

impl PacmanDemo {
    fn set_direction(&mut self, direction: Direction) {
        if self.motion.set_direction(direction) {
            log::debug!("Pac-Man heading {}", direction.as_str());
            self.render_direction();
        }
    }

    /// Swap image and rotation to match the logical direction
    fn render_direction(&self) {
        let direction = self.motion.direction;
        self.sprite.set_src(self.assets.image_for(direction));
        let _ = self
            .sprite
            .style()
            .set_property("transform", &direction.transform());
        self.update_control_highlight();
    }

    fn update_control_highlight(&self) {
        for (direction, el) in &self.controls {
            let _ = el
                .class_list()
                .toggle_with_force("active", *direction == self.motion.direction);
        }
    }

    /// One animation frame
    fn frame(&mut self) {
        let bounds = Bounds::new(
            self.container.client_width() as f32,
            self.container.client_height() as f32,
            self.sprite.offset_width() as f32,
            self.sprite.offset_height() as f32,
        );

        let outcome = self.motion.tick(bounds);
        if outcome.direction_changed {
            self.render_direction();
        }
        if outcome.moved {
            let style = self.sprite.style();
            let _ = style.set_property("left", &format!("{}px", self.motion.pos.x));
            let _ = style.set_property("top", &format!("{}px", self.motion.pos.y));
        }
    }
}

/// Start the demo if the page has one
pub fn install(document: &Document, speed: f32) -> Result<()> {
    let sprite = document
        .get_element_by_id("pacman")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
    let container = document.get_element_by_id("gameBox");
    let (Some(sprite), Some(container)) = (sprite, container) else {
        log::debug!("No Pac-Man demo on this page");
        return Ok(());
    };

    let controls = Direction::ALL
        .iter()
        .filter_map(|dir| {
            document
                .get_element_by_id(&dir.control_id())
                .map(|el| (*dir, el))
        })
        .collect();

    let demo = PacmanDemo {
        motion: Motion::new(speed),
        assets: SpriteAssets::default(),
        sprite,
        container,
        controls,
    };
    demo.update_control_highlight();
    let demo = Rc::new(RefCell::new(demo));

    // Keyboard
    {
        let demo = demo.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&event.key()) {
                demo.borrow_mut().set_direction(direction);
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    request_animation_frame(demo);
    log::info!("Pac-Man demo running (speed {} px/frame)", speed);
    Ok(())
}

fn request_animation_frame(demo: Rc<RefCell<PacmanDemo>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        demo.borrow_mut().frame();
        request_animation_frame(demo);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
