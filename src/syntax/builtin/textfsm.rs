//! TextFSM template definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create TextFSM language definition
pub fn textfsm_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::TextFsm);

    if let Some(rule) = PatternRule::new("comment", r"#[^\n]*", TokenType::Comment) {
        lang.add_pattern(rule);
    }

    // ${VALUE} substitutions inside rule regexes
    if let Some(rule) = PatternRule::new("variable", r"\$\{\w+\}", TokenType::Variable) {
        lang.add_pattern(rule);
    }

    // Declarations, state names and value options
    let keywords = r"(?:Value|Start|End|EOF|Record|NoRecord|Clear|Clearall|Continue|Next|Error|Filldown|Fillup|Required|List|Key)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    // Rule actions: "-> Record", "-> Next.Clear", "-> NewState"
    if let Some(rule) = PatternRule::new("action", r"->[ \t]*[\w.]+", TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("regex_operator", r"\^|\$|\\[wWsSdDbB]|[(){}|+*?]", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("string", QUOTED_STRING, TokenType::String) {
        lang.add_pattern(rule);
    }

    // Upper-case value names
    if let Some(rule) = PatternRule::new("name", r"[A-Z_][A-Z0-9_]*\b", TokenType::Name) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("identifier", r"[A-Za-z_]\w*", TokenType::Default) {
        lang.add_pattern(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_value_declaration() {
        let text = r"Value INTERFACE (\S+)";
        let spans = textfsm_language().spans(text);
        assert_eq!(spans[0], Span::new(0, 5, TokenType::Keyword));
        assert_eq!(spans[2], Span::new(6, 15, TokenType::Name));
        assert!(spans.contains(&Span::new(16, 17, TokenType::Operator)));
        assert!(spans.contains(&Span::new(17, 19, TokenType::Operator)));
        assert!(spans.contains(&Span::new(19, 20, TokenType::Operator)));
    }

    #[test]
    fn test_state_rule_with_action() {
        let text = r"  ^${INTERFACE}\s+${STATUS} -> Record";
        let spans = textfsm_language().spans(text);
        assert!(spans.contains(&Span::new(2, 3, TokenType::Operator)));
        assert!(spans.contains(&Span::new(3, 15, TokenType::Variable)));
        assert!(spans.contains(&Span::new(28, 37, TokenType::Keyword)));
    }

    #[test]
    fn test_mixed_case_word_is_not_a_name() {
        let spans = textfsm_language().spans("Interface");
        assert_eq!(spans, vec![Span::plain(0, 9)]);
    }
}
