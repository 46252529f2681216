//! Navigation highlighting

use crate::consts::DEFAULT_PAGE;

/// File name of the current page from a URL path.
///
/// `/` and `/site/` resolve to `index.html`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

/// Whether a nav link `href` points at `current`
pub fn is_active(href: Option<&str>, current: &str) -> bool {
    href == Some(current)
}

/// In-page anchors (`#section`) get smooth scrolling instead of a jump
pub fn is_fragment_link(href: &str) -> bool {
    href.starts_with('#')
}
