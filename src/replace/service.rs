use super::{InputError, InputResult, ReplaceOptions, Replacer};
use crate::errors::ReplaceResult;
use crate::pattern::Patterns;
use crate::segment::{Budget, segment_nodes};
use crate::types::{Node, Source};

/// Replaces every match of `patterns` in `source` using default options.
///
/// ```
/// use string_replace_rs::{Node, replace};
///
/// let out = replace("Hey there, stranger", "er", |m: &str, _i: usize, o: usize| {
///     format!("{m}@{o}")
/// })
/// .expect("well-formed call");
///
/// assert_eq!(out[1], Node::Item("er@6".to_string()));
/// assert_eq!(out[3], Node::Item("er@17".to_string()));
/// ```
pub fn replace<T, S, P, R>(source: S, patterns: P, replacer: R) -> ReplaceResult<Vec<Node<T>>>
where
    S: Into<Source<T>>,
    P: Into<Patterns>,
    R: Replacer<T>,
{
    replace_with(source, patterns, replacer, &ReplaceOptions::default())
}

#[tracing::instrument(level = "trace", skip_all, fields(limit = ?options.limit, strict = options.strict))]
pub fn replace_with<T, S, P, R>(
    source: S,
    patterns: P,
    mut replacer: R,
    options: &ReplaceOptions,
) -> ReplaceResult<Vec<Node<T>>>
where
    S: Into<Source<T>>,
    P: Into<Patterns>,
    R: Replacer<T>,
{
    options.validate()?;
    let patterns: Patterns = patterns.into();
    let patterns = patterns.resolve(options.literal_ignore_case)?;
    let source: Source<T> = source.into();

    if check_source(&source, options.strict)? {
        return Ok(source.into_nodes());
    }

    let mut budget = Budget::new(options.limit);
    Ok(segment_nodes(
        source.into_nodes(),
        &patterns,
        &mut replacer,
        &mut budget,
    ))
}

/// Returns `true` when the source is empty and should be handed back as is.
fn check_source<T>(source: &Source<T>, strict: bool) -> InputResult<bool> {
    if source.is_empty() {
        return if strict {
            Err(InputError::Empty)
        } else {
            Ok(true)
        };
    }

    if strict
        && let Source::Mixed(nodes) = source
        && nodes.first().and_then(Node::as_text) == Some("")
    {
        return Err(InputError::LeadingEmptyText);
    }

    Ok(false)
}
