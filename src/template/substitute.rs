//! Substitution strategies

use super::scanner::{placeholder_at, Placeholder};
use super::store::VariableStore;

/// How stored variables are applied to a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// One left-to-right scan; substituted text is never scanned again
    #[default]
    SinglePass,
    /// One literal replace per stored entry, in store order, over the
    /// progressively modified string. Values containing `{other}` may be
    /// substituted again by a later entry.
    Sequential,
}

impl SubstitutionMode {
    /// Name used on the command line and in variables files
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionMode::SinglePass => "single-pass",
            SubstitutionMode::Sequential => "sequential",
        }
    }
}

impl std::fmt::Display for SubstitutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubstitutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-pass" | "single_pass" => Ok(SubstitutionMode::SinglePass),
            "sequential" => Ok(SubstitutionMode::Sequential),
            other => Err(format!(
                "unknown substitution mode '{}' (expected single-pass or sequential)",
                other
            )),
        }
    }
}

/// Substitute with the given strategy
pub fn substitute(template: &str, variables: &VariableStore, mode: SubstitutionMode) -> String {
    match mode {
        SubstitutionMode::SinglePass => substitute_single_pass(template, variables),
        SubstitutionMode::Sequential => substitute_sequential(template, variables),
    }
}

/// Replace `{name}` for each stored entry in turn
pub fn substitute_sequential(template: &str, variables: &VariableStore) -> String {
    let mut result = template.to_string();

    for (name, value) in variables.iter() {
        let pattern = format!("{{{}}}", name);
        result = result.replace(&pattern, value);
    }

    result
}

/// Replace tokens in a single scan of the template
///
/// At each `{` the longest stored name whose token starts there wins.
/// Anything else is copied verbatim.
pub fn substitute_single_pass(template: &str, variables: &VariableStore) -> String {
    substitute_single_pass_tracked(template, variables).0
}

/// Single-pass substitution that also reports the placeholder tokens it
/// left in place, with spans in `template`
pub fn substitute_single_pass_tracked(
    template: &str,
    variables: &VariableStore,
) -> (String, Vec<Placeholder>) {
    let mut result = String::with_capacity(template.len());
    let mut unmatched = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        rest = &rest[open..];

        match longest_match(rest, variables) {
            Some((token_len, value)) => {
                result.push_str(value);
                rest = &rest[token_len..];
            }
            None => {
                let offset = template.len() - rest.len();
                unmatched.extend(placeholder_at(rest, offset));
                result.push('{');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    (result, unmatched)
}

/// Find the longest `{name}` token at the start of `text`
fn longest_match<'a>(text: &str, variables: &'a VariableStore) -> Option<(usize, &'a str)> {
    let inner = &text[1..];
    variables
        .iter()
        .filter(|(name, _)| inner.starts_with(name) && inner[name.len()..].starts_with('}'))
        .max_by_key(|(name, _)| name.len())
        .map(|(name, value)| (name.len() + 2, value))
}
