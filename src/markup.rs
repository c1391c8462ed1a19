//! Markup escaping and span rendering
//!
//! Every character of user text passes through [`escape_html`] before a
//! classification wrapper is placed around it, so user input can never
//! inject markup into the overlay.

use std::borrow::Cow;
use std::fmt::Write;

use crate::syntax::Span;

/// Escape markup-significant characters
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Render classified spans over `text` as escaped markup
///
/// Unclassified spans are written as bare escaped text. An empty
/// classified span renders as a single space so it stays visible.
pub fn render_html(text: &str, spans: &[Span]) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    for span in spans {
        let slice = span.text(text);
        match span.token.css_class() {
            Some(class) => {
                let body = if slice.is_empty() { Cow::Borrowed(" ") } else { escape_html(slice) };
                // Writing to a String cannot fail
                let _ = write!(html, r#"<span class="{class}">{body}</span>"#);
            }
            None => html.push_str(&escape_html(slice)),
        }
    }
    html
}

/// Recover the plain text from rendered markup
///
/// Drops every tag and decodes the entities produced by [`escape_html`].
pub fn to_plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => {
                rest = match rest.find('>') {
                    Some(end) => &rest[end + 1..],
                    None => "",
                };
            }
            '&' => {
                let entity = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"'), ("&#39;", '\'')]
                    .into_iter()
                    .find(|(name, _)| rest.starts_with(name));
                match entity {
                    Some((name, decoded)) => {
                        out.push(decoded);
                        rest = &rest[name.len()..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}
