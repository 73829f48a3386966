use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// A piece of template text: literal text or a `{name}` placeholder
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Split template text into literal and placeholder segments in one pass.
///
/// A placeholder is a nonempty run of ASCII alphanumerics or underscores
/// between single braces. Braces around anything else, and unclosed braces,
/// are literal text.
fn scan(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            let mut end = i + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            if end > i + 1 && end < bytes.len() && bytes[end] == b'}' {
                if literal_start < i {
                    segments.push(Segment::Literal(&text[literal_start..i]));
                }
                segments.push(Segment::Placeholder(&text[i + 1..end]));
                i = end + 1;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }
    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&text[literal_start..]));
    }
    segments
}

/// A reusable prompt template with `{variable}` placeholders.
///
/// The template text is fixed at construction. Default values for variables
/// can be attached at construction time; [`format`](Self::format) resolves
/// each placeholder from the supplied overrides first, then from the
/// defaults.
///
/// ```
/// use ezprompt::PromptTemplate;
///
/// let template = PromptTemplate::new("Hello {name}, you have {count} messages.")
///     .with_default("count", "5");
/// let prompt = template.format(&[("name", "User")]).unwrap();
/// assert_eq!(prompt, "Hello User, you have 5 messages.");
/// ```
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    defaults: HashMap<String, String>,
}

impl PromptTemplate {
    /// Create a new template from the raw text
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            defaults: HashMap::new(),
        }
    }

    /// Attach a default value for a template variable.
    ///
    /// Defaults are meant to be set when the template is constructed, before
    /// it is handed out for formatting.
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Attach several default values at once
    pub fn with_defaults<K, V>(mut self, defaults: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in defaults {
            self.defaults.insert(name.into(), value.into());
        }
        self
    }

    /// The raw template text
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The default values attached to this template
    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    /// Get all distinct variable names in the template, in the order they
    /// are first encountered.
    pub fn get_variables(&self) -> Vec<&str> {
        let mut variables = Vec::new();
        for segment in scan(&self.template) {
            if let Segment::Placeholder(name) = segment {
                if !variables.contains(&name) {
                    variables.push(name);
                }
            }
        }
        variables
    }

    /// Check whether the overrides plus the defaults cover every variable.
    ///
    /// This is the non-failing counterpart of [`format`](Self::format):
    /// it returns `false` where `format` would fail, and never errors
    /// itself.
    pub fn validate(&self, overrides: &[(&str, &str)]) -> bool {
        self.get_variables().into_iter().all(|name| {
            overrides.iter().any(|(key, _)| *key == name) || self.defaults.contains_key(name)
        })
    }

    /// Format the template with the provided variables.
    ///
    /// Every placeholder is resolved to its override value if one is given,
    /// otherwise to its default value. The first placeholder in scan order
    /// with neither fails with [`Error::MissingVariable`]. Resolved values
    /// are substituted as opaque text and never re-scanned for placeholders.
    pub fn format(&self, overrides: &[(&str, &str)]) -> Result<String> {
        let mut output = String::with_capacity(self.template.len());
        for segment in scan(&self.template) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value = overrides
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .or_else(|| self.defaults.get(name).map(String::as_str))
                        .ok_or_else(|| Error::MissingVariable(name.to_string()))?;
                    output.push_str(value);
                }
            }
        }
        debug!("Formatted template: {}", output);
        Ok(output)
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_template() {
        let template = PromptTemplate::new("Hello {name}");
        assert_eq!(template.template(), "Hello {name}");
        assert!(template.defaults().is_empty());
    }

    #[test]
    fn test_with_default() {
        let template = PromptTemplate::new("Hello {name}").with_default("name", "World");
        assert_eq!(
            template.defaults().get("name").map(String::as_str),
            Some("World")
        );
    }

    #[test]
    fn test_format_with_overrides() {
        let template = PromptTemplate::new("Hello {name}, you are {age} years old.");
        let result = template.format(&[("name", "Alice"), ("age", "30")]).unwrap();
        assert_eq!(result, "Hello Alice, you are 30 years old.");
    }

    #[test]
    fn test_format_with_defaults() {
        let template = PromptTemplate::new("Hello {name}").with_default("name", "World");
        assert_eq!(template.format(&[]).unwrap(), "Hello World");
    }

    #[test]
    fn test_format_override_beats_default() {
        let template = PromptTemplate::new("Hello {name}").with_default("name", "World");
        assert_eq!(template.format(&[("name", "Alice")]).unwrap(), "Hello Alice");
    }

    #[test]
    fn test_format_missing_variable() {
        let template = PromptTemplate::new("Hello {name}");
        let err = template.format(&[]).unwrap_err();
        assert!(matches!(err, Error::MissingVariable(ref name) if name == "name"));
        assert_eq!(err.to_string(), "Missing required template variable: name");
    }

    #[test]
    fn test_failed_format_leaves_no_residue() {
        let template = PromptTemplate::new("Hello {name}");
        assert!(template.format(&[]).is_err());

        // a later call with the variable supplied is unaffected
        assert_eq!(template.format(&[("name", "Alice")]).unwrap(), "Hello Alice");
    }

    #[test]
    fn test_missing_variable_is_first_in_scan_order() {
        let template = PromptTemplate::new("{greeting} {name}");
        let err = template.format(&[]).unwrap_err();
        assert!(matches!(err, Error::MissingVariable(ref name) if name == "greeting"));
    }

    #[test]
    fn test_get_variables() {
        let template = PromptTemplate::new("Hello {name}, your score is {score}");
        assert_eq!(template.get_variables(), vec!["name", "score"]);
    }

    #[test]
    fn test_get_variables_collapses_duplicates() {
        let template = PromptTemplate::new("Hello {name}, it is {weather} today, {name}!");
        assert_eq!(template.get_variables(), vec!["name", "weather"]);
    }

    #[test]
    fn test_repeated_placeholder_resolves_to_same_value() {
        let template = PromptTemplate::new("Hello {name}, it is {weather} today, {name}!");
        let result = template
            .format(&[("name", "Alice"), ("weather", "sunny")])
            .unwrap();
        assert_eq!(result, "Hello Alice, it is sunny today, Alice!");
    }

    #[test]
    fn test_validate() {
        let template = PromptTemplate::new("Hello {name}, it is {weather} today, {name}!");
        assert!(!template.validate(&[("name", "X")]));
        assert!(template.validate(&[("name", "X"), ("weather", "Y")]));
    }

    #[test]
    fn test_validate_with_defaults() {
        let template = PromptTemplate::new("Hello {name}").with_default("name", "World");
        assert!(template.validate(&[]));
    }

    #[test]
    fn test_no_placeholders() {
        let template = PromptTemplate::new("Just plain text.");
        assert!(template.get_variables().is_empty());
        assert!(template.validate(&[]));
        assert_eq!(template.format(&[]).unwrap(), "Just plain text.");
        // extraneous overrides are ignored
        assert_eq!(
            template.format(&[("unused", "value")]).unwrap(),
            "Just plain text."
        );
    }

    #[test]
    fn test_defaults_and_overrides_mix() {
        let template = PromptTemplate::new("你好 {name}，今天{weather}")
            .with_default("name", "用户")
            .with_default("weather", "晴朗");

        assert_eq!(template.format(&[]).unwrap(), "你好 用户，今天晴朗");
        assert_eq!(
            template.format(&[("name", "李四")]).unwrap(),
            "你好 李四，今天晴朗"
        );
    }

    #[test]
    fn test_braces_without_identifier_are_literal() {
        let template = PromptTemplate::new("{} and {not an identifier} and {open");
        assert!(template.get_variables().is_empty());
        assert_eq!(
            template.format(&[]).unwrap(),
            "{} and {not an identifier} and {open"
        );
    }

    #[test]
    fn test_numeric_identifier_names() {
        let template = PromptTemplate::new("{0_role}: {0_content}");
        assert_eq!(template.get_variables(), vec!["0_role", "0_content"]);
        let result = template
            .format(&[("0_role", "user"), ("0_content", "hi")])
            .unwrap();
        assert_eq!(result, "user: hi");
    }

    #[test]
    fn test_no_recursive_expansion() {
        let template = PromptTemplate::new("{outer}").with_default("inner", "never");
        let result = template.format(&[("outer", "{inner}")]).unwrap();
        assert_eq!(result, "{inner}");
    }

    #[test]
    fn test_display_is_raw_text() {
        let template = PromptTemplate::new("Hello {name}");
        assert_eq!(template.to_string(), "Hello {name}");
    }
}
