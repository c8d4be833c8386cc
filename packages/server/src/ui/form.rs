//! Form payloads and input sanitizing.
//!
//! Everything a visitor types is escaped here, before it reaches the
//! registry, so stored names, styles and messages are safe to embed in markup.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleForm {
    #[serde(default)]
    pub preferred: String,
}

/// Escape `&`, `<`, `>`, `'` and `"` for safe embedding in HTML
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
