// src/core/html.rs
use maud::Render;

/// Escape all five HTML-reserved characters. Safe for text and for
/// quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text that has already been escaped. The only constructor escapes,
/// so anything of this type is safe to splice verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Escaped(String);

impl Escaped {
    pub fn new(raw: &str) -> Self { Self(escape(raw)) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Render for Escaped {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}
