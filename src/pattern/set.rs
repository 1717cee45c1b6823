use regex::Regex;
use smallvec::SmallVec;

use super::{MatchPattern, PatternError, PatternResult};

/// A pattern as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternLike {
    /// Plain text, matched literally and globally.
    Literal(String),
    Compiled(MatchPattern),
}

impl PatternLike {
    fn resolve(self, literal_ignore_case: bool) -> PatternResult<MatchPattern> {
        match self {
            PatternLike::Literal(text) => MatchPattern::literal(&text, literal_ignore_case),
            PatternLike::Compiled(pattern) => Ok(pattern),
        }
    }
}

impl From<&str> for PatternLike {
    fn from(value: &str) -> Self {
        PatternLike::Literal(value.to_string())
    }
}

impl From<String> for PatternLike {
    fn from(value: String) -> Self {
        PatternLike::Literal(value)
    }
}

impl From<MatchPattern> for PatternLike {
    fn from(value: MatchPattern) -> Self {
        PatternLike::Compiled(value)
    }
}

/// A bare `Regex` carries no global flag, so it is treated as global.
impl From<Regex> for PatternLike {
    fn from(value: Regex) -> Self {
        PatternLike::Compiled(MatchPattern::from_regex(value, true))
    }
}

/// One or more patterns in application order, not yet compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns(Vec<PatternLike>);

impl Patterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<P: Into<PatternLike>>(mut self, pattern: P) -> Self {
        self.0.push(pattern.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compiles every literal and returns the normalized set.
    pub fn resolve(self, literal_ignore_case: bool) -> PatternResult<PatternSet> {
        PatternSet::from_patterns(self.0, literal_ignore_case)
    }
}

impl From<PatternLike> for Patterns {
    fn from(value: PatternLike) -> Self {
        Patterns(vec![value])
    }
}

impl From<&str> for Patterns {
    fn from(value: &str) -> Self {
        Patterns(vec![value.into()])
    }
}

impl From<String> for Patterns {
    fn from(value: String) -> Self {
        Patterns(vec![value.into()])
    }
}

impl From<MatchPattern> for Patterns {
    fn from(value: MatchPattern) -> Self {
        Patterns(vec![value.into()])
    }
}

impl From<Regex> for Patterns {
    fn from(value: Regex) -> Self {
        Patterns(vec![value.into()])
    }
}

impl From<PatternSet> for Patterns {
    fn from(value: PatternSet) -> Self {
        Patterns(value.patterns.into_iter().map(PatternLike::Compiled).collect())
    }
}

impl<P: Into<PatternLike>> From<Vec<P>> for Patterns {
    fn from(value: Vec<P>) -> Self {
        Patterns(value.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PatternLike>, const N: usize> From<[P; N]> for Patterns {
    fn from(value: [P; N]) -> Self {
        Patterns(value.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PatternLike>> FromIterator<P> for Patterns {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Patterns(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered, non-empty list of compiled patterns.
///
/// The first pattern splits each source string; every later pattern only
/// sees the literal spans left over by the patterns before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: SmallVec<[MatchPattern; 4]>,
}

impl PatternSet {
    pub fn from_patterns<I, P>(patterns: I, literal_ignore_case: bool) -> PatternResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PatternLike>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| pattern.into().resolve(literal_ignore_case))
            .collect::<PatternResult<SmallVec<[MatchPattern; 4]>>>()?;

        if patterns.is_empty() {
            return Err(PatternError::EmptyPatternSet);
        }

        tracing::trace!(count = patterns.len(), "pattern set normalized");

        Ok(Self { patterns })
    }

    pub fn single(pattern: MatchPattern) -> Self {
        let mut patterns = SmallVec::new();
        patterns.push(pattern);
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchPattern> {
        self.patterns.iter()
    }

    pub(crate) fn as_slice(&self) -> &[MatchPattern] {
        &self.patterns
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a MatchPattern;
    type IntoIter = std::slice::Iter<'a, MatchPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_entries_become_global_single_group_patterns() {
        let set = Patterns::from("(hey)")
            .resolve(true)
            .expect("literal should resolve");
        let pattern = set.iter().next().expect("one pattern");
        assert!(pattern.is_global());
        assert_eq!(pattern.group_count(), 1);
        assert_eq!(pattern.as_str(), r"(\(hey\))");
    }

    #[test]
    fn order_is_preserved() {
        let set = Patterns::from(["a", "b", "c"])
            .resolve(false)
            .expect("literals should resolve");
        let sources: Vec<&str> = set.iter().map(MatchPattern::as_str).collect();
        assert_eq!(sources, vec!["(a)", "(b)", "(c)"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        match Patterns::new().resolve(true).expect_err("empty set should fail") {
            PatternError::EmptyPatternSet => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
