use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

/// Trims the text and turns every run of whitespace (including the newlines
/// and tabs of template markup) into a single space.
pub fn remove_excess_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}

/// All text below `element`, cleaned up with [`remove_excess_whitespace`].
pub fn element_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    remove_excess_whitespace(&text)
}
