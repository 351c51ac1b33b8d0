//! Field-reference templates rendered against front matter
//!
//! Templates use Handlebars placeholders naming front matter fields
//! (`{{id}}`, `{{db}}`, or any additional field). Rendering is strict: a
//! placeholder naming a missing field is an error, never an empty string.
//! Output is inserted verbatim, without HTML escaping.
//!
//! Templates shipped with the crate are compiled once and memoized
//! process-wide, keyed by template source. Caller templates are compiled on
//! every call and never retained. Rendered text is never cached since it
//! depends on the record.

use std::sync::{LazyLock, PoisonError, RwLock};

use handlebars::Handlebars;

use crate::error::TemplateError;
use crate::front_matter::FrontMatter;

/// Compiled built-in templates. Only `render_static` adds to it, and its
/// callers pass a fixed set of constants, so it stays bounded.
static BUILTIN_TEMPLATES: LazyLock<RwLock<Handlebars<'static>>> =
    LazyLock::new(|| RwLock::new(strict_registry()));

fn strict_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
}

/// Render `template` against `front`.
///
/// The template is compiled for this call only. The record `id` only labels
/// errors; it has no effect on the output.
///
/// # Examples
///
/// ```
/// use spinal::{FrontMatter, render_template};
///
/// let front = FrontMatter::new("svc1");
/// assert_eq!(render_template("dbs/{{id}}.json", &front).unwrap(), "dbs/svc1.json");
/// assert!(render_template("{{nope}}", &front).is_err());
/// ```
pub fn render_template(template: &str, front: &FrontMatter) -> Result<String, TemplateError> {
    let mut registry = strict_registry();
    compile(&mut registry, template, &front.id)?;
    render(&registry, template, front)
}

/// Render a template shipped with the crate, compiling it at most once.
///
/// # Panics
///
/// Panics when the template is invalid or names a missing field. Built-in
/// templates are fixed at compile time, so either case is a bug in this
/// crate rather than in the caller's data.
pub(crate) fn render_static(template: &str, front: &FrontMatter) -> String {
    render_builtin(template, front).unwrap_or_else(|e| panic!("built-in template failed: {e}"))
}

fn render_builtin(template: &str, front: &FrontMatter) -> Result<String, TemplateError> {
    let cached = BUILTIN_TEMPLATES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .has_template(template);
    if !cached {
        let mut registry = BUILTIN_TEMPLATES
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !registry.has_template(template) {
            compile(&mut registry, template, &front.id)?;
        }
    }

    let registry = BUILTIN_TEMPLATES
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    render(&registry, template, front)
}

/// Compile `template` into `registry`, named by its own source.
fn compile(
    registry: &mut Handlebars<'static>,
    template: &str,
    id: &str,
) -> Result<(), TemplateError> {
    registry
        .register_template_string(template, template)
        .map_err(|source| TemplateError::Syntax {
            id: id.to_string(),
            source: Box::new(source),
        })
}

fn render(
    registry: &Handlebars<'static>,
    template: &str,
    front: &FrontMatter,
) -> Result<String, TemplateError> {
    registry
        .render(template, front)
        .map_err(|source| TemplateError::Render {
            id: front.id.clone(),
            source: Box::new(source),
        })
}
