use smallvec::{SmallVec, smallvec};

use super::{Budget, Piece, split_once};
use crate::pattern::{MatchPattern, PatternSet};
use crate::replace::Replacer;
use crate::types::Node;

/// Runs the pattern set over every text node of `nodes`. Items pass through
/// untouched and offsets restart at zero for each text node. Occurrence
/// indexes are counted per pattern across the whole call.
#[tracing::instrument(level = "trace", skip_all, fields(nodes = nodes.len() as u64, patterns = patterns.len() as u64))]
pub(crate) fn segment_nodes<T, R>(
    nodes: Vec<Node<T>>,
    patterns: &PatternSet,
    replacer: &mut R,
    budget: &mut Budget,
) -> Vec<Node<T>>
where
    R: Replacer<T>,
{
    let mut out = Vec::with_capacity(nodes.len());
    let mut indexes: SmallVec<[usize; 4]> = smallvec![0; patterns.len()];

    for node in nodes {
        match node {
            Node::Text(text) => {
                segment_text(
                    &text,
                    patterns.as_slice(),
                    0,
                    &mut indexes,
                    replacer,
                    budget,
                    &mut out,
                );
            }
            item @ Node::Item(_) => out.push(item),
        }
    }

    tracing::trace!(
        produced = out.len() as u64,
        exhausted = budget.is_exhausted(),
        "segmentation finished"
    );

    out
}

/// Splits `text` by the first pattern and appends the result to `out`.
///
/// Literal pieces are handed to the remaining patterns; matched pieces are
/// replaced while the budget allows and never revisited. `cursor` is the
/// character position of `text` within its top-level string, and the
/// position after `text` is returned. `indexes[d]` is the next occurrence
/// index for `patterns[d]`.
pub(crate) fn segment_text<T, R>(
    text: &str,
    patterns: &[MatchPattern],
    cursor: usize,
    indexes: &mut [usize],
    replacer: &mut R,
    budget: &mut Budget,
    out: &mut Vec<Node<T>>,
) -> usize
where
    R: Replacer<T>,
{
    let (Some((pattern, rest)), Some((index, rest_indexes))) =
        (patterns.split_first(), indexes.split_first_mut())
    else {
        out.push(Node::Text(text.to_string()));
        return cursor + text.chars().count();
    };

    let mut cursor = cursor;

    for piece in split_once(text, pattern) {
        match piece {
            Piece::Literal(literal) if !rest.is_empty() => {
                cursor = segment_text(literal, rest, cursor, rest_indexes, replacer, budget, out);
            }
            Piece::Literal(literal) => {
                out.push(Node::Text(literal.to_string()));
                cursor += literal.chars().count();
            }
            Piece::Matched(matched) => {
                if budget.take() {
                    out.push(Node::Item(replacer.replace(matched, *index, cursor)));
                    *index += 1;
                } else {
                    out.push(Node::Text(matched.to_string()));
                }
                cursor += matched.chars().count();
            }
        }
    }

    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(sources: &[&str]) -> Vec<MatchPattern> {
        sources
            .iter()
            .map(|s| MatchPattern::global(s).expect("pattern should compile"))
            .collect()
    }

    #[test]
    fn nested_patterns_report_offsets_in_the_outer_string() {
        let patterns = patterns(&[r"(\d+)", "(b)"]);
        let mut seen = Vec::new();
        let mut out: Vec<Node<String>> = Vec::new();
        let end = segment_text(
            "ab12b",
            &patterns,
            0,
            &mut [0, 0],
            &mut |m: &str, i: usize, o: usize| {
                seen.push((m.to_string(), i, o));
                m.to_uppercase()
            },
            &mut Budget::new(None),
            &mut out,
        );

        assert_eq!(end, 5);
        assert_eq!(
            seen,
            vec![
                ("b".to_string(), 0, 1),
                ("12".to_string(), 0, 2),
                ("b".to_string(), 1, 4),
            ]
        );
        assert_eq!(
            out,
            vec![
                Node::text("a"),
                Node::item("B".to_string()),
                Node::text(""),
                Node::item("12".to_string()),
                Node::text(""),
                Node::item("B".to_string()),
                Node::text(""),
            ]
        );
    }

    #[test]
    fn exhausted_budget_leaves_matches_as_separate_text() {
        let patterns = patterns(&["(o)"]);
        let mut out: Vec<Node<char>> = Vec::new();
        segment_text(
            "foo",
            &patterns,
            0,
            &mut [0],
            &mut |_: &str, _: usize, _: usize| '0',
            &mut Budget::new(Some(1)),
            &mut out,
        );

        assert_eq!(
            out,
            vec![
                Node::text("f"),
                Node::item('0'),
                Node::text(""),
                Node::text("o"),
                Node::text(""),
            ]
        );
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let patterns = patterns(&["(x)"]);
        let mut offsets = Vec::new();
        let mut out: Vec<Node<()>> = Vec::new();
        segment_text(
            "ñéx",
            &patterns,
            0,
            &mut [0],
            &mut |_: &str, _: usize, o: usize| offsets.push(o),
            &mut Budget::new(None),
            &mut out,
        );

        assert_eq!(offsets, vec![2]);
    }
}
