//! HTML entity escaping for user-supplied text.

/// Escape the five HTML special characters in a text value.
///
/// Applied to every interpolated plain-text field; URLs and the rich-text
/// block's trusted `html` are the only fields that skip it.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
