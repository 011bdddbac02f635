//! Manifest-level validation.
//!
//! Only structural manifest checks live here; schema-shape rules are the
//! converter's concern so their diagnostics can carry a name hint for the
//! offending node.

use miette::SourceSpan;

use super::ResourceProvider;
use crate::{Result, error::SourceContext};

/// Validate a parsed provider against the manifest rules.
pub(super) fn validate_provider(provider: &ResourceProvider, ctx: &SourceContext) -> Result<()> {
    if provider.name.trim().is_empty() {
        return Err(ctx.validation_error("resource provider name cannot be empty"));
    }

    for (type_name, resource_type) in &provider.types {
        if resource_type.api_versions.is_empty() {
            let message = format!(
                "resource type '{}' must declare at least one API version",
                type_name
            );
            return Err(match find_name_span(ctx.src(), type_name) {
                Some(span) => ctx.validation_error_at(message, span),
                None => ctx.validation_error(message),
            });
        }

        if let Some(default_version) = &resource_type.default_api_version
            && !resource_type.api_versions.contains_key(default_version)
        {
            let message = format!(
                "resource type '{}' declares default API version '{}' but does not define it",
                type_name, default_version
            );
            return Err(match find_name_span(ctx.src(), default_version) {
                Some(span) => ctx.validation_error_at(message, span),
                None => ctx.validation_error(message),
            });
        }
    }

    Ok(())
}

/// Find the span of a mapping key in the YAML source.
///
/// Best-effort: looks for `name:` at the start of the document or of a
/// line, optionally quoted. No fallback; better to have no span than to
/// point at the wrong place.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let candidates = [
        (format!("{}:", name), 0usize),
        (format!("'{}':", name), 1usize),
        (format!("\"{}\":", name), 1usize),
    ];

    for (pattern, skip) in &candidates {
        let mut search_from = 0;
        while let Some(pos) = src[search_from..].find(pattern.as_str()) {
            let pos = search_from + pos;
            let at_line_start = pos == 0
                || src[..pos]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c == '\n' || c == ' ');
            if at_line_start {
                return Some(SourceSpan::from((pos + skip, name.len())));
            }
            search_from = pos + pattern.len();
        }
    }

    None
}
