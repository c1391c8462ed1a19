//! JMESPath definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create JMESPath language definition
pub fn jmespath_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Mode::JmesPath);

    // Quoted identifiers, raw strings and `literal` JSON
    if let Some(rule) = PatternRule::new("string", r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`[^`]*`"#, TokenType::String) {
        lang.add_pattern(rule);
    }

    // Multi-character operators first
    let operators = r"\[\?\]|\[\*\]|\[\]|\[\?|\|\||&&|==|!=|>=|<=|[{}\[\]()|><:,.@&!]";
    if let Some(rule) = PatternRule::new("operator", operators, TokenType::Operator) {
        lang.add_pattern(rule);
    }

    let functions = r"(?P<tok>abs|avg|ceil|contains|ends_with|floor|join|keys|length|map|max|max_by|merge|min|min_by|not_null|reverse|sort|sort_by|starts_with|sum|to_array|to_number|to_string|type|values)\(";
    if let Some(rule) = PatternRule::new("function", functions, TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("number", r"-?\d+(?:\.\d+)?", TokenType::Number) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("name", r"[a-zA-Z_][\w-]*", TokenType::Name) {
        lang.add_pattern(rule);
    }

    lang
}
