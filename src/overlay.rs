//! Overlay state: an editable surface mirrored by a formatted layer
//!
//! The editor surface holds the authoritative text. The layer is a
//! read-only rendering of it that is rebuilt in full on every edit and
//! kept at the same scroll offset as the editor.

use unicode_width::UnicodeWidthStr;

use crate::config::OverlayConfig;
use crate::matcher::LiveMatcher;
use crate::syntax::{Mode, SyntaxRegistry};

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Escaped markup for the layer
    pub html: String,
    /// Status line, for renderers that report one
    pub status: Option<String>,
    /// False when the input could not be interpreted (bad pattern)
    pub ok: bool,
}

impl Rendered {
    fn markup(html: String) -> Self {
        Self {
            html,
            status: None,
            ok: true,
        }
    }
}

/// Turns the authoritative text into layer markup
pub trait LayerRenderer {
    /// Render the full current value; called after every change
    fn render(&self, value: &str) -> Rendered;
}

/// Syntax highlighting for a code field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRenderer {
    pub mode: Mode,
}

impl CodeRenderer {
    /// Create a renderer for fields written in `mode`
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

impl LayerRenderer for CodeRenderer {
    fn render(&self, value: &str) -> Rendered {
        Rendered::markup(SyntaxRegistry::global().tokenize(self.mode, value))
    }
}

/// Live match highlighting of subject text against a pattern
#[derive(Debug, Clone, Default)]
pub struct MatchRenderer {
    pattern: String,
    matcher: LiveMatcher,
}

impl MatchRenderer {
    /// Create a renderer matching subjects against `pattern`
    pub fn new(pattern: impl Into<String>, matcher: LiveMatcher) -> Self {
        Self {
            pattern: pattern.into(),
            matcher,
        }
    }

    /// The pattern currently applied
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl LayerRenderer for MatchRenderer {
    fn render(&self, value: &str) -> Rendered {
        let report = self.matcher.highlight(value, &self.pattern);
        Rendered {
            html: report.html,
            status: Some(report.status),
            ok: report.ok,
        }
    }
}

/// Which of the two stacked surfaces an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Editor,
    Layer,
}

/// Scroll position in lines and display columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub top: usize,
    pub left: usize,
}

/// An editable text surface and its formatted mirror
#[derive(Debug, Clone)]
pub struct Overlay<R> {
    renderer: R,
    /// Authoritative text; never contains layer padding
    value: String,
    /// Rendered markup, padded with a trailing newline when needed
    layer: String,
    status: Option<String>,
    ok: bool,
    editor_scroll: ScrollOffset,
    layer_scroll: ScrollOffset,
    pad_trailing_newline: bool,
}

impl<R: LayerRenderer> Overlay<R> {
    /// Create an overlay and render its initial value
    pub fn new(renderer: R, value: impl Into<String>) -> Self {
        Self::with_config(renderer, value, &OverlayConfig::default())
    }

    /// Create an overlay with explicit rendering settings
    pub fn with_config(renderer: R, value: impl Into<String>, config: &OverlayConfig) -> Self {
        let mut overlay = Self {
            renderer,
            value: value.into(),
            layer: String::new(),
            status: None,
            ok: true,
            editor_scroll: ScrollOffset::default(),
            layer_scroll: ScrollOffset::default(),
            pad_trailing_newline: config.pad_trailing_newline,
        };
        overlay.refresh();
        overlay
    }

    /// Handle an edit: store the new value and re-render
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.refresh();
        // Content may have shrunk under the current offset
        let offset = self.clamp(self.editor_scroll);
        self.editor_scroll = offset;
        self.layer_scroll = offset;
    }

    /// Re-render from the current value
    pub fn refresh(&mut self) {
        let rendered = self.renderer.render(&self.value);
        self.layer = rendered.html;
        if self.pad_trailing_newline && !self.value.ends_with('\n') {
            self.layer.push('\n');
        }
        self.status = rendered.status;
        self.ok = rendered.ok;
    }

    /// Handle a scroll on either surface and mirror it to the other
    ///
    /// Returns the offset both surfaces now share.
    pub fn on_scroll(&mut self, surface: Surface, offset: ScrollOffset) -> ScrollOffset {
        let offset = self.clamp(offset);
        match surface {
            Surface::Editor => {
                self.editor_scroll = offset;
                self.layer_scroll = self.editor_scroll;
            }
            Surface::Layer => {
                self.layer_scroll = offset;
                self.editor_scroll = self.layer_scroll;
            }
        }
        offset
    }

    /// Largest scroll offset the current content allows
    pub fn extent(&self) -> ScrollOffset {
        let lines = self.value.split('\n');
        let line_count = self.value.split('\n').count();
        ScrollOffset {
            top: line_count.saturating_sub(1),
            left: lines.map(|line| line.width()).max().unwrap_or(0),
        }
    }

    fn clamp(&self, offset: ScrollOffset) -> ScrollOffset {
        let extent = self.extent();
        ScrollOffset {
            top: offset.top.min(extent.top),
            left: offset.left.min(extent.left),
        }
    }

    /// The authoritative text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The rendered layer markup
    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Status line from the last render, if the renderer reports one
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// False while the renderer reports an error (shown as an error status)
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Current scroll offset of one surface
    pub fn scroll(&self, surface: Surface) -> ScrollOffset {
        match surface {
            Surface::Editor => self.editor_scroll,
            Surface::Layer => self.layer_scroll,
        }
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl Overlay<MatchRenderer> {
    /// Change the pattern the subject is matched against and re-render
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.renderer.pattern = pattern.into();
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;

    #[test]
    fn test_layer_follows_input() {
        let mut overlay = Overlay::new(CodeRenderer::new(Mode::StructuredData), "1");
        assert_eq!(overlay.layer(), "<span class=\"syn-number\">1</span>\n");

        overlay.on_input("true");
        assert_eq!(overlay.layer(), "<span class=\"syn-keyword\">true</span>\n");
        assert_eq!(overlay.value(), "true");
    }

    #[test]
    fn test_padding_only_when_missing() {
        let overlay = Overlay::new(CodeRenderer::new(Mode::Plain), "a\n");
        assert_eq!(overlay.layer(), "a\n");
        assert_eq!(overlay.value(), "a\n");

        let overlay = Overlay::new(CodeRenderer::new(Mode::Plain), "");
        assert_eq!(overlay.layer(), "\n");
        assert_eq!(overlay.value(), "");
    }

    #[test]
    fn test_padding_can_be_disabled() {
        let config = OverlayConfig {
            pad_trailing_newline: false,
        };
        let overlay = Overlay::with_config(CodeRenderer::new(Mode::Plain), "a", &config);
        assert_eq!(overlay.layer(), "a");
    }

    #[test]
    fn test_layer_matches_value_text() {
        let text = "def f():\n    return '<x>'";
        let overlay = Overlay::new(CodeRenderer::new(Mode::ScriptingCode), text);
        assert_eq!(markup::to_plain_text(overlay.layer()), format!("{text}\n"));
    }

    #[test]
    fn test_scroll_is_mirrored_both_ways() {
        let mut overlay = Overlay::new(CodeRenderer::new(Mode::Plain), "aaaa\nbb\ncc\ndd");
        let offset = overlay.on_scroll(Surface::Editor, ScrollOffset { top: 2, left: 1 });
        assert_eq!(offset, ScrollOffset { top: 2, left: 1 });
        assert_eq!(overlay.scroll(Surface::Layer), offset);

        overlay.on_scroll(Surface::Layer, ScrollOffset { top: 1, left: 0 });
        assert_eq!(overlay.scroll(Surface::Editor), ScrollOffset { top: 1, left: 0 });
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut overlay = Overlay::new(CodeRenderer::new(Mode::Plain), "漢字\nab");
        let offset = overlay.on_scroll(Surface::Editor, ScrollOffset { top: 10, left: 10 });
        // Wide characters take two columns each
        assert_eq!(offset, ScrollOffset { top: 1, left: 4 });

        overlay.on_input("x");
        assert_eq!(overlay.scroll(Surface::Editor), ScrollOffset { top: 0, left: 1 });
        assert_eq!(overlay.scroll(Surface::Layer), ScrollOffset { top: 0, left: 1 });
    }

    #[test]
    fn test_match_overlay_status_and_pattern_change() {
        let renderer = MatchRenderer::new("Gi", LiveMatcher::new());
        let mut overlay = Overlay::new(renderer, "Gi0/0 Gi0/1");
        assert!(overlay.is_ok());
        assert_eq!(overlay.status(), Some("2 matches highlighted in real-time."));

        overlay.set_pattern("(unbalanced");
        assert!(!overlay.is_ok());
        assert_eq!(overlay.layer(), "Gi0/0 Gi0/1\n");
        assert!(overlay.status().is_some_and(|s| s.starts_with("Pattern error")));

        overlay.set_pattern("");
        assert_eq!(overlay.status(), Some("Enter a pattern to preview matches."));
        assert_eq!(overlay.renderer().pattern(), "");
    }

    #[test]
    fn test_regex_field_overlay() {
        let overlay = Overlay::new(CodeRenderer::new(Mode::Regex), r"\d+");
        assert_eq!(
            overlay.layer(),
            "<span class=\"rgx-esc\">\\d</span><span class=\"rgx-quant\">+</span>\n"
        );
        assert_eq!(overlay.status(), None);
    }
}
