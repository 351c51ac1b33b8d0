//! Language-specific generation strategies
//!
//! Each supported output language implements [`Target`], which covers
//! everything the preamble builders need to know about it: an optional
//! interpreter line, the header binding, import statements, and the
//! storage and logging setup fragments. Registered languages without a
//! target still get a banner but generate no header or imports.
//!
//! ```text
//! targets/
//! ├── mod.rs          # This file
//! ├── javascript.rs   # `js`
//! └── python.rs       # `py`
//! ```

pub mod javascript;
pub mod python;

use crate::front_matter::FrontMatter;

/// Name every generated header binds the front matter to.
pub const HEADER_BINDING: &str = "spinal";

/// Generation strategy for one output language.
///
/// Capabilities a language lacks default to an empty string.
pub trait Target: Send + Sync {
    /// Tag this target generates for.
    fn tag(&self) -> &'static str;

    /// Interpreter directive placed before the banner.
    fn shebang(&self) -> Option<&'static str> {
        None
    }

    /// Statement(s) binding [`HEADER_BINDING`] to the front matter.
    fn header(&self, _front: &FrontMatter) -> String {
        String::new()
    }

    /// Import statements, including any enabled setup fragments.
    fn imports(&self, _front: &FrontMatter) -> String {
        String::new()
    }

    /// Setup for a file-backed store keyed by the record `id`.
    fn storage_fragment(&self, _front: &FrontMatter) -> String {
        String::new()
    }

    /// Setup for a structured file logger keyed by the record `id`.
    fn logging_fragment(&self, _front: &FrontMatter) -> String {
        String::new()
    }
}

static TARGETS: &[&dyn Target] = &[&javascript::JavaScript, &python::Python];

/// Find the generation strategy for `tag`.
pub fn lookup(tag: &str) -> Option<&'static dyn Target> {
    TARGETS.iter().copied().find(|target| target.tag() == tag)
}

/// Tags that have a generation strategy.
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    TARGETS.iter().map(|target| target.tag())
}

/// Front matter as an indented JSON literal.
fn front_matter_literal(front: &FrontMatter) -> String {
    front.to_json_pretty()
}
