//! Error types for template rendering

use thiserror::Error;

/// Errors that can occur while rendering a fragment template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template source does not parse
    #[error("invalid template for `{id}`: {source}")]
    Syntax {
        /// `id` of the record being rendered
        id: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// The template references a field the record does not have
    #[error("cannot render template for `{id}`: {source}")]
    Render {
        /// `id` of the record being rendered
        id: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl TemplateError {
    /// The `id` of the record that was being rendered.
    pub fn id(&self) -> &str {
        match self {
            TemplateError::Syntax { id, .. } | TemplateError::Render { id, .. } => id,
        }
    }
}
