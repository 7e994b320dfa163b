//! HTML escaping for text content and attribute values.

/// Escape text content: `&`, `<` and `>`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_text_escaped(&mut out, text);
    out
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_attribute_escaped(&mut out, value);
    out
}

pub(crate) fn push_text_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn push_attribute_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
