use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::TemplateContext;

/// `{{key}}`, with optional whitespace inside the braces.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Replaces every placeholder bound to a context key with that key's value.
/// Placeholders naming anything else are left verbatim; a seed file is free
/// to carry `{{...}}` syntax of its own.
pub fn render(input: &str, ctx: &TemplateContext) -> String {
    PLACEHOLDER
        .replace_all(input, |caps: &Captures| match ctx.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
