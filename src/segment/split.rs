use crate::pattern::MatchPattern;

/// One slice of a split string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'h> {
    Literal(&'h str),
    Matched(&'h str),
}

impl<'h> Piece<'h> {
    #[inline]
    pub fn as_str(&self) -> &'h str {
        match self {
            Piece::Literal(text) | Piece::Matched(text) => text,
        }
    }
}

/// Splits `text` by a single pattern.
///
/// The output always alternates `Literal, Matched, Literal, …, Literal`,
/// starting and ending with a literal that may be empty. Zero-length matches
/// are skipped. Without the global flag only the first match is used. Text
/// of a match outside its chosen capture group is not emitted at all.
#[tracing::instrument(level = "trace", skip(text, pattern), fields(text_len = text.len() as u64, pattern = %pattern))]
pub fn split_once<'h>(text: &'h str, pattern: &MatchPattern) -> Vec<Piece<'h>> {
    let mut out = Vec::new();
    let mut last_end = 0usize;

    let matches = pattern
        .regex()
        .captures_iter(text)
        .filter(|caps| caps.get(0).is_some_and(|whole| !whole.is_empty()));
    let limit = if pattern.is_global() { usize::MAX } else { 1 };

    for caps in matches.take(limit) {
        let (Some(whole), Some(segment)) = (caps.get(0), pattern.captured(&caps)) else {
            continue;
        };

        out.push(Piece::Literal(&text[last_end..whole.start()]));
        out.push(Piece::Matched(segment.as_str()));
        last_end = whole.end();
    }

    out.push(Piece::Literal(&text[last_end..]));
    out
}
