//! Test harness for spinal integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use spinal::{FrontMatter, GeneratedPreamble, Registry, extract_blocks};

/// A markdown-like document assembled piece by piece.
#[derive(Debug, Default)]
pub struct TestDocument {
    text: String,
}

impl TestDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph of prose followed by a blank line.
    pub fn prose(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self.text.push_str("\n\n");
        self
    }

    /// Append a fenced block tagged `tag`.
    pub fn block(mut self, tag: &str, body: &str) -> Self {
        self.text.push_str(&format!("```{}\n{}\n```\n\n", tag, body));
        self
    }

    /// Append raw text verbatim.
    pub fn raw(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Extract blocks and prepend each language's preamble, the way an
/// orchestrator writing one file per language would.
pub fn generate_sources(document: &str, front: &FrontMatter) -> BTreeMap<String, String> {
    let registry = Registry::builtin();
    extract_blocks(document, registry)
        .into_iter()
        .map(|(tag, body)| {
            let source = GeneratedPreamble::build(registry, front, &tag).prepend_to(&body);
            (tag, source)
        })
        .collect()
}
