//! Variable-store-and-substitute renderer

use std::fmt::Display;

use tracing::{debug, trace};

use super::scanner::{placeholders, Placeholder};
use super::store::VariableStore;
use super::substitute::{
    substitute, substitute_sequential, substitute_single_pass_tracked, SubstitutionMode,
};
use super::Template;
use crate::error::TemplateError;

/// Configuration for a renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Substitution strategy
    pub mode: SubstitutionMode,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substitution strategy
    pub fn with_mode(mut self, mode: SubstitutionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Renderer holding a private variable store
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    variables: VariableStore,
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with no variables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            variables: VariableStore::new(),
            config,
        }
    }

    /// Get the renderer configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get the variable store
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Get the text stored under `name`
    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name)
    }

    /// Check whether `name` has been set
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// Remove a variable, returning its value if it was set
    pub fn unset_variable(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    /// Remove all variables
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Placeholders left unresolved by rendering `template`
    ///
    /// In single-pass mode spans refer to `template`. In sequential mode
    /// values can introduce tokens, so spans refer to the rendered text.
    pub fn unset_placeholders(&self, template: &str) -> Vec<Placeholder> {
        match self.try_render(template) {
            Ok(_) => Vec::new(),
            Err(e) => e.placeholders().to_vec(),
        }
    }

    /// Render, failing if any placeholder is left without a variable
    ///
    /// Unlike [`Template::render`], which passes unknown tokens through,
    /// this reports every unresolved `{name}` with its span.
    pub fn try_render(&self, template: &str) -> Result<String, TemplateError> {
        match self.config.mode {
            SubstitutionMode::SinglePass => {
                let (rendered, unset) = substitute_single_pass_tracked(template, &self.variables);
                if !unset.is_empty() {
                    debug!(count = unset.len(), "template has unset placeholders");
                    return Err(TemplateError::UnsetVariables { placeholders: unset });
                }
                Ok(rendered)
            }
            SubstitutionMode::Sequential => {
                let rendered = substitute_sequential(template, &self.variables);
                let unset: Vec<_> = placeholders(&rendered)
                    .into_iter()
                    .filter(|p| !self.variables.contains(&p.name))
                    .collect();
                if !unset.is_empty() {
                    debug!(count = unset.len(), "rendered output has unset placeholders");
                    return Err(TemplateError::UnsetInOutput {
                        placeholders: unset,
                        rendered,
                    });
                }
                Ok(rendered)
            }
        }
    }
}

impl Template for Renderer {
    fn set_variable(&mut self, name: &str, value: impl Display) {
        if self.variables.set(name, value).is_some() {
            trace!(variable = name, "overwrote variable");
        } else {
            trace!(variable = name, "set variable");
        }
    }

    fn render(&self, template: &str) -> String {
        debug!(
            mode = %self.config.mode,
            variables = self.variables.len(),
            len = template.len(),
            "rendering template"
        );
        substitute(template, &self.variables, self.config.mode)
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for Renderer {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.variables.extend(iter);
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Renderer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
            config: RenderConfig::default(),
        }
    }
}
