//! Embedding a composed document in a sandboxed frame.

/// iframe `sandbox` value: scripts run, everything else (same-origin access,
/// top navigation, forms, popups) is denied
pub const SANDBOX_POLICY: &str = "allow-scripts";

/// Response header value giving a directly served document the same isolation
pub const SANDBOX_CSP: &str = "sandbox allow-scripts";

/// Escape text for use inside a double-quoted HTML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `<iframe>` markup carrying `document` inline through `srcdoc`
pub fn srcdoc_frame(document: &str) -> String {
    format!(
        "<iframe title=\"Preview\" sandbox=\"{}\" srcdoc=\"{}\"></iframe>",
        SANDBOX_POLICY,
        escape_attribute(document)
    )
}
