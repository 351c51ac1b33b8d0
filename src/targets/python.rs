//! Python 3 generation

use super::{HEADER_BINDING, Target, front_matter_literal};
use crate::front_matter::FrontMatter;

/// Aliases JSON's literal names so the header parses as Python.
const JSON_LITERAL_ALIASES: &str = "true = True; false = False; null = None";

/// Python target. Storage and logging setup are not supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

impl Target for Python {
    fn tag(&self) -> &'static str {
        "py"
    }

    fn shebang(&self) -> Option<&'static str> {
        Some("#!/usr/bin/env python3")
    }

    fn header(&self, front: &FrontMatter) -> String {
        format!(
            "{}\n{} = {}",
            JSON_LITERAL_ALIASES,
            HEADER_BINDING,
            front_matter_literal(front)
        )
    }

    /// Rebinds `print` to flush on every call.
    fn imports(&self, _front: &FrontMatter) -> String {
        String::from("import functools\nprint = functools.partial(print, flush=True)\n")
    }
}
