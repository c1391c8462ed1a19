//! Python (scripting-code) definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::ScriptingCode);

    if let Some(rule) = PatternRule::new("comment", r"#[^\n]*", TokenType::Comment) {
        lang.add_pattern(rule);
    }

    // Triple-quoted strings before single-line ones
    if let Some(rule) = PatternRule::new("docstring", r#"(?s)""".*?"""|'''.*?'''"#, TokenType::String) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("string", QUOTED_STRING, TokenType::String) {
        lang.add_pattern(rule);
    }

    let keywords = r"(?:and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield|True|False|None)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("identifier", r"[A-Za-z_]\w*", TokenType::Default) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("number", r"-?\d+(?:\.\d+)?", TokenType::Number) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("operator", r"\*\*|//|->|==|!=|>=|<=|[-+*/%=<>:()\[\]{},.@]", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_python_function() {
        let text = "def hot(t):\n    return t >= 50";
        let spans = python_language().spans(text);
        assert_eq!(spans[0], Span::new(0, 3, TokenType::Keyword));
        assert!(spans.contains(&Span::new(7, 8, TokenType::Operator)));
        assert!(spans.contains(&Span::new(16, 22, TokenType::Keyword)));
        assert!(spans.contains(&Span::new(25, 27, TokenType::Operator)));
        assert!(spans.contains(&Span::new(28, 30, TokenType::Number)));
    }

    #[test]
    fn test_comment_only_to_end_of_line() {
        let text = "# first\nx = 1\n";
        let spans = python_language().spans(text);
        assert_eq!(spans[0], Span::new(0, 7, TokenType::Comment));
        assert!(spans.contains(&Span::new(12, 13, TokenType::Number)));
    }

    #[test]
    fn test_docstring_spans_lines() {
        let text = "\"\"\"a\nb\"\"\"";
        assert_eq!(python_language().spans(text), vec![Span::new(0, text.len(), TokenType::String)]);
    }

    #[test]
    fn test_identifier_containing_keyword() {
        let spans = python_language().spans("format");
        assert_eq!(spans, vec![Span::plain(0, 6)]);
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        let spans = python_language().spans("'#x'");
        assert_eq!(spans, vec![Span::new(0, 4, TokenType::String)]);
    }
}
