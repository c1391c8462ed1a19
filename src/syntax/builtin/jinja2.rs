//! Jinja2 (templated-text) definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Tag contents: anything except the start of another tag
const TAG_BODY: &str = r"(?:[^{]|\{[^{%#])*?";

/// Create Jinja2 language definition
pub fn jinja2_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::TemplatedText);

    // Delimited constructs may span lines. The body stops at the next
    // opener, so an unclosed tag never scans past the tag that follows it.
    let comment = format!(r"\{{#{TAG_BODY}#\}}");
    if let Some(rule) = PatternRule::new("comment", &comment, TokenType::Comment) {
        lang.add_pattern(rule);
    }
    let statement = format!(r"\{{%{TAG_BODY}%\}}");
    if let Some(rule) = PatternRule::new("statement", &statement, TokenType::Keyword) {
        lang.add_pattern(rule);
    }
    let expression = format!(r"\{{\{{{TAG_BODY}\}}\}}");
    if let Some(rule) = PatternRule::new("expression", &expression, TokenType::Variable) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("string", QUOTED_STRING, TokenType::String) {
        lang.add_pattern(rule);
    }

    let keywords = r"(?:for|in|if|else|elif|endif|endfor|set|endset|block|endblock|extends|include|import|macro|endmacro|filter|endfilter|with|endwith)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("identifier", r"[A-Za-z_]\w*", TokenType::Default) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("pipe", r"\|", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    lang
}
