//! Brace Render - named-variable substitution for `{placeholder}` templates
//!
//! This library provides a small template contract ([`Template`]) and a
//! renderer implementing it. A renderer accumulates named values and applies
//! them to any template string on demand. Tokens without a stored value are
//! passed through unchanged.
//!
//! # Example
//!
//! ```rust
//! use brace_render::{Renderer, Template};
//!
//! let mut template = Renderer::new();
//! template.set_variable("name", "John Doe");
//! assert_eq!(template.render("Hello, {name}!"), "Hello, John Doe!");
//! assert_eq!(template.render("Bye, {other}!"), "Bye, {other}!");
//! ```

pub mod error;
pub mod template;
pub mod variables;

pub use error::TemplateError;
pub use template::{
    placeholders, Placeholder, RenderConfig, Renderer, SubstitutionMode, Template, VariableStore,
};
pub use variables::{VariableFile, VariablesError};

use std::fmt::Display;

/// Render a template with a one-off set of variables
///
/// # Example
///
/// ```rust
/// let out = brace_render::render("{a}-{b}", [("a", 1), ("b", 2)]);
/// assert_eq!(out, "1-2");
/// ```
pub fn render<K, V, I>(template: &str, variables: I) -> String
where
    K: Into<String>,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let renderer: Renderer = variables.into_iter().collect();
    renderer.render(template)
}
