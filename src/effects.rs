//! Scroll-driven visual effects
//!
//! The DOM side lives in `platform::effects`; this is the arithmetic.

use crate::consts::PARALLAX_DEFAULT_SPEED;

/// Parse a `data-speed` attribute the way `parseFloat(x) || 0.3` would:
/// the longest numeric prefix wins, and missing, unparsable or zero values
/// fall back to the default.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(leading_float)
        .filter(|speed| *speed != 0.0 && speed.is_finite())
        .unwrap_or(PARALLAX_DEFAULT_SPEED)
}

/// CSS transform for a parallax layer at the given scroll offset
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !is_float_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    // Shrink until it parses, e.g. "0.5e" -> "0.5"
    (1..=end).rev().find_map(|len| text[..len].parse::<f64>().ok())
}

fn is_float_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_speed_parses_numbers() {
        assert_eq!(parallax_speed(Some("0.5")), 0.5);
        assert_eq!(parallax_speed(Some(" -0.2")), -0.2);
        assert_eq!(parallax_speed(Some("1e-1")), 0.1);
    }

    #[test]
    fn test_parallax_speed_takes_leading_number() {
        assert_eq!(parallax_speed(Some("0.6px")), 0.6);
        assert_eq!(parallax_speed(Some("0.5e")), 0.5);
    }

    #[test]
    fn test_parallax_speed_falls_back() {
        assert_eq!(parallax_speed(None), PARALLAX_DEFAULT_SPEED);
        assert_eq!(parallax_speed(Some("")), PARALLAX_DEFAULT_SPEED);
        assert_eq!(parallax_speed(Some("fast")), PARALLAX_DEFAULT_SPEED);
        // Zero is falsy, so it also falls back
        assert_eq!(parallax_speed(Some("0")), PARALLAX_DEFAULT_SPEED);
    }

    #[test]
    fn test_parallax_transform() {
        assert_eq!(parallax_transform(100.0, 0.5), "translateY(50px)");
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    }
}
