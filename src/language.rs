//! Language registry for code block extraction and generation
//!
//! This module provides the centralized table of languages that fenced code
//! blocks may be tagged with. The extractor, the banner builder and the
//! generation targets all consult it, so a language only needs to be
//! described once.

use std::sync::LazyLock;

use log::debug;

use crate::string_utils::BLANK_CHARS;

/// A single registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageDef {
    /// Tag used on the opening fence (e.g. `js` in "```js")
    pub tag: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Single-line comment syntax
    pub comment: &'static str,
}

impl LanguageDef {
    pub const fn new(tag: &'static str, name: &'static str, comment: &'static str) -> Self {
        Self { tag, name, comment }
    }

    /// A tag can open a fence only if it is a single non-blank token
    /// without backticks.
    pub fn has_valid_tag(&self) -> bool {
        !self.tag.is_empty() && !self.tag.contains(BLANK_CHARS) && !self.tag.contains('`')
    }
}

/// Languages known out of the box.
pub const BUILTIN_LANGUAGES: &[LanguageDef] = &[
    LanguageDef::new("js", "JavaScript", "//"),
    LanguageDef::new("py", "Python", "#"),
    LanguageDef::new("rb", "Ruby", "#"),
    LanguageDef::new("sh", "Shell", "#"),
];

static BUILTIN: LazyLock<Registry> =
    LazyLock::new(|| Registry::new(BUILTIN_LANGUAGES.iter().copied()));

/// An ordered set of languages, keyed by tag.
///
/// The set is fixed once built: extractors compiled from a registry
/// recognize exactly the tags it held at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    languages: Vec<LanguageDef>,
}

impl Registry {
    /// Build a registry from language definitions.
    ///
    /// When a tag appears more than once, the first definition wins.
    /// Definitions whose tag is empty, contains blanks or contains
    /// backticks are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use spinal::language::{LanguageDef, Registry};
    ///
    /// let registry = Registry::new([
    ///     LanguageDef::new("lua", "Lua", "--"),
    ///     LanguageDef::new("lua", "Lua 5.4", ";;"),
    /// ]);
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.comment("lua"), Some("--"));
    /// ```
    pub fn new(defs: impl IntoIterator<Item = LanguageDef>) -> Self {
        let mut languages: Vec<LanguageDef> = Vec::new();
        for def in defs {
            if !def.has_valid_tag() {
                debug!("skipping language `{}` with unusable tag {:?}", def.name, def.tag);
                continue;
            }
            if !languages.iter().any(|known| known.tag == def.tag) {
                languages.push(def);
            }
        }
        Self { languages }
    }

    /// The built-in registry (`js`, `py`, `rb`, `sh`).
    ///
    /// # Examples
    ///
    /// ```
    /// use spinal::language::Registry;
    ///
    /// assert!(Registry::builtin().contains("js"));
    /// assert_eq!(Registry::builtin().comment("py"), Some("#"));
    /// assert_eq!(Registry::builtin().get("md"), None);
    /// ```
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Look up a language by tag.
    pub fn get(&self, tag: &str) -> Option<&LanguageDef> {
        self.languages.iter().find(|def| def.tag == tag)
    }

    /// Comment syntax for a tag, if registered.
    pub fn comment(&self, tag: &str) -> Option<&'static str> {
        self.get(tag).map(|def| def.comment)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|def| def.tag)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin().clone()
    }
}
