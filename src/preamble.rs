//! Generated preamble: banner, header and imports
//!
//! The preamble is the text placed before an extracted body to make it a
//! runnable program. It is assembled in a fixed order:
//!
//! 1. shebang, if the language needs one
//! 2. "generated file" banner
//! 3. header binding the front matter
//! 4. imports and setup fragments
//!
//! Each builder returns an empty string for languages it cannot generate
//! for. That is a capability gap, not an error.

use std::fmt;

use log::debug;

use crate::front_matter::FrontMatter;
use crate::language::Registry;
use crate::targets::{self, Target};

const GENERATED_NOTICE: &str = "THIS FILE IS GENERATED by Trinkets-Spinal";
const OVERWRITE_WARNING: &str = "Don't edit; Your changes will be overwritten!";

/// Separator between preamble parts and between the preamble and the body.
const PART_SEPARATOR: &str = "\n\n";

/// Two-line "generated file" banner in the language's comment syntax.
///
/// Languages that need an interpreter directive get it as an extra first
/// line. Returns an empty string for tags missing from `registry`.
///
/// # Examples
///
/// ```
/// use spinal::{Registry, banner};
///
/// assert_eq!(
///     banner(Registry::builtin(), "js"),
///     "// THIS FILE IS GENERATED by Trinkets-Spinal\n\
///      // Don't edit; Your changes will be overwritten!"
/// );
/// assert_eq!(banner(Registry::builtin(), "md"), "");
/// ```
pub fn banner(registry: &Registry, tag: &str) -> String {
    let Some(comment) = registry.comment(tag) else {
        debug!("no banner for unregistered language `{}`", tag);
        return String::new();
    };

    let mut out = String::new();
    if let Some(shebang) = targets::lookup(tag).and_then(|target| target.shebang()) {
        out.push_str(shebang);
        out.push('\n');
    }
    out.push_str(&format!("{} {}\n", comment, GENERATED_NOTICE));
    out.push_str(&format!("{} {}", comment, OVERWRITE_WARNING));
    out
}

/// Statement binding the front matter to a language-native variable.
pub fn header(front: &FrontMatter, tag: &str) -> String {
    with_target(tag, |target| target.header(front))
}

/// Import statements, with storage and logging setup when enabled.
pub fn imports(front: &FrontMatter, tag: &str) -> String {
    with_target(tag, |target| target.imports(front))
}

/// Storage setup on its own; empty where unsupported.
pub fn storage_fragment(front: &FrontMatter, tag: &str) -> String {
    with_target(tag, |target| target.storage_fragment(front))
}

/// Logging setup on its own; empty where unsupported.
pub fn logging_fragment(front: &FrontMatter, tag: &str) -> String {
    with_target(tag, |target| target.logging_fragment(front))
}

fn with_target(tag: &str, build: impl FnOnce(&dyn Target) -> String) -> String {
    match targets::lookup(tag) {
        Some(target) => build(target),
        None => {
            debug!("no generation target for `{}`", tag);
            String::new()
        }
    }
}

/// All generated parts for one language, ready to prepend to its body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPreamble {
    /// Banner, including the shebang line when present
    pub banner: String,
    pub header: String,
    pub imports: String,
}

impl GeneratedPreamble {
    /// Build every part for `tag`.
    pub fn build(registry: &Registry, front: &FrontMatter, tag: &str) -> Self {
        Self {
            banner: banner(registry, tag),
            header: header(front, tag),
            imports: imports(front, tag),
        }
    }

    /// True when no part produced any text.
    pub fn is_empty(&self) -> bool {
        self.banner.is_empty() && self.header.is_empty() && self.imports.is_empty()
    }

    /// Non-empty parts joined by a blank line.
    pub fn render(&self) -> String {
        [&self.banner, &self.header, &self.imports]
            .into_iter()
            .map(|part| part.trim_end_matches('\n'))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR)
    }

    /// Full source text: the preamble, a blank line, then `body`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spinal::{FrontMatter, GeneratedPreamble, Registry};
    ///
    /// let front = FrontMatter::new("svc1");
    /// let preamble = GeneratedPreamble::build(Registry::builtin(), &front, "py");
    /// let source = preamble.prepend_to("print(spinal['id'])");
    /// assert!(source.starts_with("#!/usr/bin/env python3\n"));
    /// assert!(source.ends_with("flush=True)\n\nprint(spinal['id'])"));
    /// ```
    pub fn prepend_to(&self, body: &str) -> String {
        if self.is_empty() {
            return body.to_string();
        }
        format!("{}{}{}", self.render(), PART_SEPARATOR, body)
    }
}

impl fmt::Display for GeneratedPreamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
