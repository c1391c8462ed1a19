//! TTP template definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create TTP language definition
pub fn ttp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::Ttp);

    if let Some(rule) = PatternRule::new("group_tag", r"</?group(?:\s+[^>]*)?>", TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    // Unterminated "{{" is left unclassified
    if let Some(rule) = PatternRule::new("variable", r"\{\{[^}]+\}\}", TokenType::Variable) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("pipe", r"\|", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("string", QUOTED_STRING, TokenType::String) {
        lang.add_pattern(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;
    use crate::syntax::Span;

    #[test]
    fn test_group_and_variables() {
        let text = "<group name=\"interfaces\">\ninterface {{ name }}\n</group>";
        let spans = ttp_language().spans(text);
        assert_eq!(spans[0], Span::new(0, 25, TokenType::Keyword));
        assert!(spans.contains(&Span::new(36, 46, TokenType::Variable)));
        assert_eq!(spans.last(), Some(&Span::new(47, 55, TokenType::Keyword)));
    }

    #[test]
    fn test_group_tag_markup_is_escaped() {
        let html = ttp_language().tokenize("<group>");
        assert_eq!(html, r#"<span class="syn-keyword">&lt;group&gt;</span>"#);
    }

    #[test]
    fn test_unterminated_variable() {
        let spans = ttp_language().spans("{{ name");
        assert_eq!(spans, vec![Span::plain(0, 7)]);
        assert_eq!(markup::to_plain_text(&ttp_language().tokenize("{{ name")), "{{ name");
    }
}
