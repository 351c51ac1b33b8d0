//! Spinal - turn prose with embedded code blocks into generated source files
//!
//! Fenced code blocks are pulled out of a document per language, and each
//! language gets a generated preamble (banner, front matter header, imports)
//! built from the document's front matter.

pub mod blocks;
pub mod error;
pub mod front_matter;
pub mod language;
pub mod preamble;
pub mod string_utils;
pub mod targets;
pub mod template;

pub use blocks::{BlockExtractor, extract_blocks};
pub use error::TemplateError;
pub use front_matter::FrontMatter;
pub use language::{LanguageDef, Registry};
pub use preamble::{GeneratedPreamble, banner, header, imports};
pub use targets::Target;
pub use template::render_template;
