//! XPath (path-query) definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create XPath language definition
pub fn xpath_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::PathQuery);

    if let Some(rule) = PatternRule::new("string", QUOTED_STRING, TokenType::String) {
        lang.add_pattern(rule);
    }

    // Path steps and predicates ("//" before "/")
    if let Some(rule) = PatternRule::new("operator", r"//|/|\.\.|::|\*|@|\[|\]|\(|\)|\||!=|<=|>=|=|<|>", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    // Functions, only when called
    let functions = r"(?P<tok>text|contains|starts-with|ends-with|name|local-name|normalize-space|count|position|last|not|string|concat|translate|string-length|sum|number)\(";
    if let Some(rule) = PatternRule::new("function", functions, TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("number", r"-?\d+(?:\.\d+)?", TokenType::Number) {
        lang.add_pattern(rule);
    }

    // Element and attribute names (may carry a namespace prefix)
    if let Some(rule) = PatternRule::new("name", r"[a-zA-Z_][\w:-]*", TokenType::Name) {
        lang.add_pattern(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_xpath_path() {
        let text = r#"//interface[enabled="true"]/name/text()"#;
        let spans = xpath_language().spans(text);
        assert_eq!(spans[0], Span::new(0, 2, TokenType::Operator));
        assert_eq!(spans[1], Span::new(2, 11, TokenType::Name));
        assert_eq!(spans[2], Span::new(11, 12, TokenType::Operator));
        assert!(spans.contains(&Span::new(20, 26, TokenType::String)));
        assert!(spans.contains(&Span::new(33, 37, TokenType::Keyword)));
    }

    #[test]
    fn test_function_name_without_call_is_a_name() {
        let spans = xpath_language().spans("/text");
        assert_eq!(spans[1], Span::new(1, 5, TokenType::Name));
    }

    #[test]
    fn test_attribute_and_index() {
        let spans = xpath_language().spans("//entry[@name][1]");
        assert!(spans.contains(&Span::new(8, 9, TokenType::Operator)));
        assert!(spans.contains(&Span::new(9, 13, TokenType::Name)));
        assert!(spans.contains(&Span::new(15, 16, TokenType::Number)));
    }
}
