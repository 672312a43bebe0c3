//! Addressable presenter state: the URL fragment
//!
//! The fragment is the only bookmarkable state. It is written as
//! `slide-{index}` on every navigation and read once at load.

/// Current location fragment, stored without the leading `#`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    fragment: Option<String>,
}

impl Location {
    pub fn new(fragment: Option<&str>) -> Self {
        let mut location = Location::default();
        if let Some(fragment) = fragment {
            location.set_fragment(fragment);
        }
        location
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        self.fragment = (!fragment.is_empty()).then(|| fragment.to_string());
    }

    /// The fragment as it would appear in an address bar
    pub fn hash(&self) -> String {
        self.fragment
            .as_deref()
            .map(|f| format!("#{}", f))
            .unwrap_or_default()
    }
}

/// Fragment naming pane `index`
pub fn slide_fragment(index: usize) -> String {
    format!("slide-{}", index)
}

/// Extract the pane index from a fragment such as `slide-2`.
///
/// Takes whatever follows the first `-` and reads a leading integer from
/// it, ignoring trailing characters. Returns `None` when there are no
/// digits to read. Range checking is left to the caller.
pub fn parse_slide_index(fragment: &str) -> Option<i64> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let tail = fragment.split('-').nth(1)?;
    parse_int_prefix(tail)
}

/// Read a leading integer the way `parseInt` does: leading whitespace and an
/// optional sign are accepted, anything after the digits is ignored
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long numbers rather than rejecting them; the caller
    // clamps or range-checks anyway
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slide_index() {
        assert_eq!(parse_slide_index("slide-2"), Some(2));
        assert_eq!(parse_slide_index("#slide-17"), Some(17));
        assert_eq!(parse_slide_index("slide-3abc"), Some(3));
        assert_eq!(parse_slide_index("slide-abc"), None);
        assert_eq!(parse_slide_index("slide"), None);
        assert_eq!(parse_slide_index("about-1"), Some(1));
        assert_eq!(parse_slide_index("slide-"), None);
    }

    #[test]
    fn test_negative_fragment_needs_second_dash() {
        // "slide--1" splits into ["slide", "", "1"]
        assert_eq!(parse_slide_index("slide--1"), None);
        assert_eq!(parse_int_prefix("-4"), Some(-4));
    }

    #[test]
    fn test_location_hash() {
        let mut location = Location::new(Some("#slide-1"));
        assert_eq!(location.fragment(), Some("slide-1"));
        assert_eq!(location.hash(), "#slide-1");
        location.set_fragment(&slide_fragment(3));
        assert_eq!(location.hash(), "#slide-3");
        location.set_fragment("");
        assert_eq!(location.fragment(), None);
        assert_eq!(location.hash(), "");
    }
}
