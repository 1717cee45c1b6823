use regex::{Captures, Match, Regex, RegexBuilder};
use std::fmt;

use super::{PatternError, PatternFlags, PatternResult};

/// A compiled matcher plus the flags it was built with.
///
/// The segment handed to a replacer is the first capture group that took
/// part in the match. Patterns without capture groups hand over the whole
/// match instead.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl MatchPattern {
    #[tracing::instrument(level = "trace", skip(flags), fields(flags = %flags.letters()))]
    pub fn new(source: &str, flags: PatternFlags) -> PatternResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains(PatternFlags::IGNORE_CASE))
            .multi_line(flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOT_ALL))
            .build()
            .map_err(|source_err| PatternError::InvalidRegex {
                pattern: source.to_string(),
                source: source_err,
            })?;

        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    /// Same as [`MatchPattern::new`] with [`PatternFlags::GLOBAL`] added.
    pub fn global(source: &str) -> PatternResult<Self> {
        Self::new(source, PatternFlags::GLOBAL)
    }

    /// Compiles plain text into a global pattern whose only capture group is
    /// the escaped text.
    pub fn literal(text: &str, ignore_case: bool) -> PatternResult<Self> {
        let mut flags = PatternFlags::GLOBAL;
        if ignore_case {
            flags |= PatternFlags::IGNORE_CASE;
        }
        Self::new(&format!("({})", regex::escape(text)), flags)
    }

    /// Parses the `/source/flags` notation, e.g. `/(@\w+)/g`.
    pub fn parse(input: &str) -> PatternResult<Self> {
        let malformed = || PatternError::MalformedLiteralForm {
            input: input.to_string(),
        };

        let body = input.strip_prefix('/').ok_or_else(malformed)?;
        let close = body.rfind('/').ok_or_else(malformed)?;
        let (source, letters) = (&body[..close], &body[close + 1..]);
        if source.is_empty() {
            return Err(malformed());
        }

        let mut flags = PatternFlags::empty();
        for letter in letters.chars() {
            let flag =
                PatternFlags::from_letter(letter).ok_or_else(|| PatternError::UnknownFlag {
                    input: input.to_string(),
                    flag: letter,
                })?;
            flags |= flag;
        }

        Self::new(source, flags)
    }

    /// Wraps an already-built regex. Case and line modes stay whatever the
    /// regex was built with; only the global flag is recorded.
    pub fn from_regex(regex: Regex, global: bool) -> Self {
        let flags = if global {
            PatternFlags::GLOBAL
        } else {
            PatternFlags::empty()
        };
        Self {
            source: regex.as_str().to_string(),
            flags,
            regex,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.flags.contains(PatternFlags::GLOBAL)
    }

    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of explicit capture groups (group 0 excluded).
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    pub(crate) fn captured<'h>(&self, caps: &Captures<'h>) -> Option<Match<'h>> {
        if self.group_count() == 0 {
            return caps.get(0);
        }
        caps.iter().skip(1).flatten().next().or_else(|| caps.get(0))
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags.letters())
    }
}

/// Equality looks at the source text and recorded flags only. Patterns from
/// [`MatchPattern::from_regex`] record just the global flag, so two of them
/// built with different `RegexBuilder` modes from the same source compare
/// equal.
impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for MatchPattern {}
