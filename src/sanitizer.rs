//! Recursive sanitization of untrusted request input.
//!
//! Every string leaf is trimmed, HTML-escaped, then driver-escaped, in that
//! order. Plain ASCII text without special characters passes through all
//! three layers unchanged, so re-sanitizing safe text is a no-op. Text that
//! already contains backslash escapes will be escaped again; the layering
//! makes no attempt to detect prior passes.

use serde_json::Value;

/// Sanitize a scalar string: trim surrounding whitespace, escape
/// HTML-significant characters into entity form, then escape characters
/// significant to query-string construction.
pub fn sanitize_str(input: &str) -> String {
    escape_sql(&escape_html(input.trim()))
}

/// Recursively sanitize a request value tree. Objects and arrays keep their
/// structure, string leaves are sanitized, other leaves pass through
/// unchanged.
pub fn sanitize_value(input: Value) -> Value {
    match input {
        Value::String(s) => Value::String(sanitize_str(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, sanitize_value(value)))
                .collect(),
        ),
        other => other,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_sql(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{1a}' => out.push_str("\\Z"),
            _ => out.push(c),
        }
    }
    out
}
