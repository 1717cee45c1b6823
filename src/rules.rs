//! Declarative rule lists.
//!
//! A [`RuleSet`] runs each of its rules as an independent pass over the
//! output of the previous one, the same way chained [`replace`](crate::replace)
//! calls behave. Items produced by an earlier rule are never matched again.

use crate::errors::ReplaceResult;
use crate::pattern::PatternLike;
use crate::replace::{ReplaceOptions, Replacer, replace_with};
use crate::types::{Node, Source};

type OnMatch<'a, T> = Box<dyn FnMut(&str, usize, usize) -> T + 'a>;

pub struct Rule<'a, T> {
    pub search: PatternLike,
    pub on_match: OnMatch<'a, T>,
}

impl<'a, T> Rule<'a, T> {
    pub fn new<P, F>(search: P, on_match: F) -> Self
    where
        P: Into<PatternLike>,
        F: FnMut(&str, usize, usize) -> T + 'a,
    {
        Self {
            search: search.into(),
            on_match: Box::new(on_match),
        }
    }
}

impl<T> std::fmt::Debug for Rule<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

struct RuleReplacer<'r, 'a, T>(&'r mut OnMatch<'a, T>);

impl<T> Replacer<T> for RuleReplacer<'_, '_, T> {
    #[inline]
    fn replace(&mut self, matched: &str, index: usize, offset: usize) -> T {
        (self.0)(matched, index, offset)
    }
}

#[derive(Debug)]
pub struct RuleSet<'a, T> {
    rules: Vec<Rule<'a, T>>,
    options: ReplaceOptions,
}

impl<T> Default for RuleSet<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> RuleSet<'a, T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            options: ReplaceOptions::default(),
        }
    }

    /// Options used for every pass. A limit applies to each pass separately
    /// and strictness is only checked against the original source.
    pub fn with_options(mut self, options: ReplaceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn rule<P, F>(mut self, search: P, on_match: F) -> Self
    where
        P: Into<PatternLike>,
        F: FnMut(&str, usize, usize) -> T + 'a,
    {
        self.rules.push(Rule::new(search, on_match));
        self
    }

    pub fn push(&mut self, rule: Rule<'a, T>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[tracing::instrument(level = "trace", skip_all, fields(rules = self.rules.len() as u64))]
    pub fn apply<S>(&mut self, source: S) -> ReplaceResult<Vec<Node<T>>>
    where
        S: Into<Source<T>>,
    {
        let mut source: Source<T> = source.into();
        let mut options = self.options;

        for rule in self.rules.iter_mut() {
            source = Source::Mixed(replace_with(
                source,
                rule.search.clone(),
                RuleReplacer(&mut rule.on_match),
                &options,
            )?);
            // later passes routinely see a leading "" left by the previous one
            options.strict = false;
        }

        Ok(source.into_nodes())
    }
}
