//! Built-in rule tables
//!
//! One definition per rule-driven mode. `Regex` and `Plain` have no
//! table: the former uses the hand-scanned pattern tokenizer and the
//! latter is escape-only.

mod jinja2;
mod jmespath;
mod json;
mod python;
mod textfsm;
mod ttp;
mod xpath;

use super::language::LanguageDefinition;

/// Shared string literal rule (double or single quoted, backslash escapes)
pub(crate) const QUOTED_STRING: &str = r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        json::json_language(),
        json::schema_language(),
        xpath::xpath_language(),
        jmespath::jmespath_language(),
        textfsm::textfsm_language(),
        ttp::ttp_language(),
        jinja2::jinja2_language(),
        python::python_language(),
    ]
}
