use crate::domain::constants::{SCRIPT_CLOSE, SCRIPT_OPEN};
use serde_json::Value;

/// Two-space indentation; non-ASCII text is written as-is, not `\u` escaped.
pub fn format_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn wrap_script(body: &str) -> String {
    format!("{SCRIPT_OPEN}\n{body}\n{SCRIPT_CLOSE}")
}

pub fn embed(value: &Value) -> serde_json::Result<String> {
    Ok(wrap_script(&format_json(value)?))
}

/// Escaped code block suitable for dropping into an HTML page.
///
/// No syntax highlighting is applied; only `& < > "` are escaped and the
/// `language-json` class is left for a client-side highlighter.
pub fn html_preview(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    format!("<pre><code class=\"language-json\">{escaped}</code></pre>")
}
