//! Error types for strict rendering

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::template::Placeholder;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// Placeholders in the template with no stored variable, in template order
    #[error("unset variables: {}", format_names(.placeholders))]
    UnsetVariables { placeholders: Vec<Placeholder> },

    /// Placeholders left in the rendered text with no stored variable.
    /// Spans refer to `rendered`, since values may have introduced them.
    #[error("unset variables in rendered output: {}", format_names(.placeholders))]
    UnsetInOutput {
        placeholders: Vec<Placeholder>,
        rendered: String,
    },
}

impl TemplateError {
    /// Placeholders that stayed unresolved
    pub fn placeholders(&self) -> &[Placeholder] {
        match self {
            TemplateError::UnsetVariables { placeholders }
            | TemplateError::UnsetInOutput { placeholders, .. } => placeholders,
        }
    }

    /// Format the error with template context using ariadne
    ///
    /// For [`TemplateError::UnsetInOutput`] the report is drawn over the
    /// rendered text instead of `source`.
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            TemplateError::UnsetVariables { placeholders } => {
                self.report(placeholders, source, filename)
            }
            TemplateError::UnsetInOutput { placeholders, rendered } => {
                let name = format!("{} (rendered)", filename);
                self.report(placeholders, rendered, &name)
            }
        }
    }

    fn report(&self, placeholders: &[Placeholder], text: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let offset = placeholders.first().map(|p| p.span.start).unwrap_or(0);
        let message = format!(
            "{} unset variable{}",
            placeholders.len(),
            if placeholders.len() == 1 { "" } else { "s" }
        );

        let mut report = Report::build(ReportKind::Error, filename, offset).with_message(message);
        for p in placeholders {
            report = report.with_label(
                Label::new((filename, p.span.clone()))
                    .with_message(format!("'{}' is not set", p.name))
                    .with_color(Color::Red),
            );
        }

        let written = report.finish().write((filename, Source::from(text)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn format_names(placeholders: &[Placeholder]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for p in placeholders {
        if !names.contains(&p.name.as_str()) {
            names.push(&p.name);
        }
    }
    names.join(", ")
}
