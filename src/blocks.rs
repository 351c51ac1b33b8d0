//! Fenced code block extraction
//!
//! Scans a markdown-like document for fenced code blocks tagged with a
//! registered language and merges every block of the same language, in
//! document order, separated by a blank line.
//!
//! # Fence Syntax
//!
//! ````text
//! ```<blanks?>TAG<blanks?>
//! body (may span lines, must not contain a closing fence)
//! ```
//! ````
//!
//! Matching uses one alternation over the registered tags. Nested fences
//! are not supported: the body always ends at the nearest closing fence.
//! Blocks tagged with an unregistered language never match and are left
//! alone.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::language::Registry;
use crate::string_utils::{split_leading_token, trim_blank};

/// Separator placed between merged blocks of the same language.
const MERGE_SEPARATOR: &str = "\n\n";

static BUILTIN_EXTRACTOR: LazyLock<BlockExtractor> =
    LazyLock::new(|| BlockExtractor::new(Registry::builtin()));

/// Extracts and merges fenced code blocks for a fixed set of languages.
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    /// `None` when the registry is empty; nothing can match then.
    pattern: Option<Regex>,
}

impl BlockExtractor {
    /// Compile an extractor for every tag in `registry`.
    pub fn new(registry: &Registry) -> Self {
        if registry.is_empty() {
            return Self { pattern: None };
        }

        let tags: Vec<String> = registry.tags().map(regex::escape).collect();
        let source = format!(
            r"(?s)```[\t ]*(?:{})[\t ]*[\r\n]+.+?[\r\n]```[\r\n]?",
            tags.join("|")
        );
        let pattern = Regex::new(&source).expect("FENCE_PATTERN regex is invalid");

        Self {
            pattern: Some(pattern),
        }
    }

    /// Extractor over the built-in registry, compiled once.
    pub fn builtin() -> &'static BlockExtractor {
        &BUILTIN_EXTRACTOR
    }

    /// Extract all blocks from `document` as `{tag => merged body}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spinal::blocks::BlockExtractor;
    ///
    /// let doc = "```js\nconsole.log(1)\n```\n\n```js\nconsole.log(2)\n```";
    /// let blocks = BlockExtractor::builtin().extract(doc);
    /// assert_eq!(blocks["js"], "console.log(1)\n\nconsole.log(2)");
    /// ```
    pub fn extract(&self, document: &str) -> BTreeMap<String, String> {
        let mut blocks: BTreeMap<String, String> = BTreeMap::new();
        let Some(pattern) = &self.pattern else {
            return blocks;
        };

        for found in pattern.find_iter(document) {
            let Some((tag, body)) = split_block(found.as_str()) else {
                debug!(
                    "dropping fenced block at byte {} with no language tag",
                    found.start()
                );
                continue;
            };
            trace!("merging {} byte block into `{}`", body.len(), tag);

            match blocks.get_mut(tag) {
                Some(merged) => {
                    merged.push_str(MERGE_SEPARATOR);
                    merged.push_str(body);
                }
                None => {
                    blocks.insert(tag.to_string(), body.to_string());
                }
            }
        }

        blocks
    }
}

/// Extract blocks using an extractor compiled for `registry`.
///
/// Compiles the fence pattern on every call; keep a [`BlockExtractor`]
/// around when scanning many documents.
pub fn extract_blocks(document: &str, registry: &Registry) -> BTreeMap<String, String> {
    BlockExtractor::new(registry).extract(document)
}

/// Split a raw fence match into `(tag, body)`.
///
/// Returns `None` when no tag survives trimming.
fn split_block(raw: &str) -> Option<(&str, &str)> {
    let inner = trim_blank(trim_blank(raw).trim_matches('`'));
    let (tag, rest) = split_leading_token(inner);
    if tag.is_empty() {
        return None;
    }
    Some((tag, trim_blank(rest)))
}
