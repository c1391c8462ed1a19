//! Terminal rendering of classified spans using crossterm
//!
//! The counterpart of [`crate::markup`] for terminals: each styled span
//! is wrapped in SGR sequences taken from a [`Theme`] and followed by a
//! reset, so styles never bleed into the next span.

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::config::Theme;
use crate::error::Result;
use crate::syntax::{Color, Span, Style};

/// Map a palette color to its crossterm equivalent
fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

fn set_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(to_crossterm(style.fg)))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(to_crossterm(style.bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Write `text` to `out`, styling each span
///
/// Empty spans are written as a single styled space.
pub fn write_ansi<W: Write>(out: &mut W, text: &str, spans: &[Span], theme: &Theme) -> Result<()> {
    for span in spans {
        let style = theme.style_for(span.token);
        let slice = if span.is_empty() { " " } else { span.text(text) };

        if style.is_default() {
            queue!(out, Print(slice))?;
            continue;
        }

        set_style(out, style)?;
        queue!(out, Print(slice), SetAttribute(Attribute::Reset))?;
    }
    out.flush()?;
    Ok(())
}

/// Render `text` with ANSI styling into a string
pub fn render_ansi(text: &str, spans: &[Span], theme: &Theme) -> Result<String> {
    let mut buf = Vec::with_capacity(text.len() * 2);
    write_ansi(&mut buf, text, spans, theme)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
