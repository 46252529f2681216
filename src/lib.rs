//! JustinGreeno.dev client scripts
//!
//! Core modules:
//! - `search`: Static page index, keyword scoring and result rendering
//! - `sprite`: Pac-Man motion state machine (WASDX controls, edge bounces)
//! - `nav`: Current page resolution for navigation highlighting
//! - `effects`: Parallax and scroll-animation helpers
//! - `settings`: User preferences persisted in LocalStorage
//! - `platform`: DOM wiring (wasm32 only)

pub mod effects;
pub mod error;
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod search;
pub mod settings;
pub mod sprite;

pub use error::{Result, SiteError};
pub use search::{PageDescriptor, SearchResult, SiteIndex};
pub use settings::Settings;
pub use sprite::{Direction, Motion};

/// Site configuration constants
pub mod consts {
    /// Queries shorter than this (in characters, after trimming) never match
    pub const MIN_QUERY_LEN: usize = 2;

    /// Score for a title substring match
    pub const TITLE_SCORE: u32 = 10;
    /// Score for each keyword containing the query
    pub const KEYWORD_PARTIAL_SCORE: u32 = 5;
    /// Extra score for a keyword equal to the query
    pub const KEYWORD_EXACT_SCORE: u32 = 10;
    /// Score for a description substring match
    pub const DESCRIPTION_SCORE: u32 = 3;

    /// Pac-Man speed in pixels per animation frame
    pub const SPRITE_SPEED: f32 = 3.0;
    pub const SPRITE_MOVING_IMAGE: &str = "../images/pacman/pac-man-fast.gif";
    pub const SPRITE_STATIC_IMAGE: &str = "../images/pacman/pac-man-static.gif";

    /// Parallax factor when `data-speed` is missing or unusable
    pub const PARALLAX_DEFAULT_SPEED: f64 = 0.3;

    /// Fraction of an element that must be visible before it animates in
    pub const SCROLL_ANIMATION_THRESHOLD: f64 = 0.1;
    /// Shrinks the viewport bottom so elements animate slightly after entering
    pub const SCROLL_ANIMATION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

    /// Page assumed when the URL path has no file segment
    pub const DEFAULT_PAGE: &str = "index.html";
}

/// Whether `document.readyState` means the DOM has been parsed.
///
/// Anything but `"loading"` (`"interactive"` or `"complete"`) counts.
#[inline]
pub fn dom_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}
