//! Validation pattern extraction from HTML form fragments.
//!
//! Parsing is delegated to `scraper` (html5ever), which recovers from any
//! malformed markup instead of failing. The worst case for broken input is an
//! empty result.

use scraper::{ElementRef, Html, Selector};

/// Attributes that carry a client-side validation regex, in priority order.
pub const PATTERN_ATTRIBUTES: [&str; 3] = ["pattern", "data-val-regex-pattern", "ng-pattern"];

/// Build the union selector `input[pattern],input[data-val-regex-pattern],...`.
pub fn pattern_selector() -> String {
    PATTERN_ATTRIBUTES
        .iter()
        .map(|attr| format!("input[{}]", attr))
        .collect::<Vec<_>>()
        .join(",")
}

/// The validation pattern of an element.
///
/// The first recognized attribute that is present wins, even when its value is
/// empty. `None` means the element carries none of them.
pub fn interesting_value<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    let value = element.value();
    PATTERN_ATTRIBUTES.iter().find_map(|attr| value.attr(attr))
}

/// Finds validation patterns in HTML.
pub struct PatternExtractor {
    selector: Selector,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self {
            selector: Selector::parse(&pattern_selector())
                .expect("pattern selector is a valid CSS selector"),
        }
    }

    /// Patterns of every matching `input` element, in document order.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let patterns = document
            .select(&self.selector)
            .filter_map(|element| interesting_value(&element))
            .map(str::to_string)
            .collect();
        patterns
    }
}
