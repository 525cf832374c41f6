//! Ordered literal substring substitution

use std::borrow::Cow;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    pattern: String,
    replacement: String,
}

/// An ordered list of (pattern, replacement) rules.
///
/// Rules are prioritized longest pattern first; patterns of equal length keep the
/// order they were declared in. Application is a single left-to-right scan: at each
/// position the first rule in priority order whose pattern matches is replaced, and
/// scanning resumes after the matched pattern. Replacement text is never rescanned.
///
/// With `"Chrome"` and `"Chromium"` both in the table, `"Chromium"` is always tried
/// first, whatever order the rules were written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    rules: Vec<Rule>,
}

impl SubstitutionTable {
    /// Build a table. Fails if any pattern is empty.
    pub fn new<P, R>(rules: impl IntoIterator<Item = (P, R)>) -> Result<Self, ConfigError>
    where
        P: Into<String>,
        R: Into<String>,
    {
        let mut rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, (pattern, replacement))| {
                let pattern = pattern.into();
                if pattern.is_empty() {
                    return Err(ConfigError::EmptyPattern { index });
                }
                Ok(Rule {
                    pattern,
                    replacement: replacement.into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        // stable: equal lengths keep declaration order
        rules.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        Ok(Self { rules })
    }

    /// Patterns in the order they are tried.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.pattern.as_str())
    }

    fn rule_at(&self, rest: &[u8]) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|rule| rest.starts_with(rule.pattern.as_bytes()))
    }

    /// Apply the table to text. Borrows the input when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut output: Option<String> = None;
        let mut from = 0;
        while from < text.len() {
            let rest = &text[from..];
            if let Some(rule) = self.rule_at(rest.as_bytes()) {
                output
                    .get_or_insert_with(|| text[..from].to_string())
                    .push_str(&rule.replacement);
                from += rule.pattern.len();
            } else {
                let step = rest.chars().next().map_or(1, char::len_utf8);
                if let Some(output) = output.as_mut() {
                    output.push_str(&rest[..step]);
                }
                from += step;
            }
        }
        output.map_or(Cow::Borrowed(text), Cow::Owned)
    }

    /// Apply the table to raw bytes. Borrows the input when nothing matched.
    pub fn apply_bytes<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        let mut output: Option<Vec<u8>> = None;
        let mut from = 0;
        while from < input.len() {
            let rest = &input[from..];
            if let Some(rule) = self.rule_at(rest) {
                output
                    .get_or_insert_with(|| input[..from].to_vec())
                    .extend_from_slice(rule.replacement.as_bytes());
                from += rule.pattern.len();
            } else {
                if let Some(output) = output.as_mut() {
                    output.push(rest[0]);
                }
                from += 1;
            }
        }
        output.map_or(Cow::Borrowed(input), Cow::Owned)
    }
}
