//! Inline style properties touched by the scroll animators

/// The subset of an element's inline style the presenter reads and writes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    /// CSS length, e.g. `"80%"`. `None` means no inline width has been set.
    pub width: Option<String>,
    pub opacity: Option<f32>,
    pub transform: Option<String>,
}

impl InlineStyle {
    /// Width as a whole percentage, if it is set and written as `N%`
    pub fn width_percent(&self) -> Option<u16> {
        parse_percent(self.width.as_deref()?)
    }

    /// Whether the element has been made fully visible
    pub fn is_opaque(&self) -> bool {
        self.opacity.is_some_and(|o| o >= 1.0)
    }
}

/// Parse a `"NN%"` / `"NN.N%"` length, clamped to 0..=100
pub fn parse_percent(value: &str) -> Option<u16> {
    let number = value.trim().strip_suffix('%')?.trim();
    let parsed: f64 = number.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.clamp(0.0, 100.0).round() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("80%"), Some(80));
        assert_eq!(parse_percent(" 62.5% "), Some(63));
        assert_eq!(parse_percent("140%"), Some(100));
        assert_eq!(parse_percent("12rem"), None);
        assert_eq!(parse_percent("%"), None);
    }

    #[test]
    fn test_width_percent_unset() {
        let style = InlineStyle::default();
        assert_eq!(style.width_percent(), None);
        assert!(!style.is_opaque());
    }
}
