//! Template contract and its renderer
//!
//! A template stores named variables and substitutes `{name}` tokens in
//! strings handed to it. [`Template`] is the contract; [`Renderer`] is the
//! implementation shipped with this crate.
//!
//! # Example
//!
//! ```rust
//! use brace_render::{Renderer, Template};
//!
//! let mut template = Renderer::new();
//! template.set_variable("name", "John Doe");
//! assert_eq!(template.render("Hello, {name}!"), "Hello, John Doe!");
//! ```

mod renderer;
pub mod scanner;
mod store;
mod substitute;

use std::fmt::Display;

pub use renderer::{RenderConfig, Renderer};
pub use scanner::{placeholders, Placeholder};
pub use store::VariableStore;
pub use substitute::{substitute, SubstitutionMode};

/// Contract for anything that can hold variables and render templates
pub trait Template {
    /// Set a variable, overwriting any previous value under the same name.
    ///
    /// The value is converted to text immediately.
    fn set_variable(&mut self, name: &str, value: impl Display);

    /// Render a template string.
    ///
    /// Every `{name}` token with a stored variable is replaced by its value.
    /// Tokens without a stored variable are kept verbatim.
    fn render(&self, template: &str) -> String;
}
