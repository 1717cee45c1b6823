/// Produces the value that takes the place of one matched segment.
///
/// `index` is the zero-based ordinal of the match within one segmentation
/// pass. `offset` is the character position of the match in the top-level
/// string it came from.
pub trait Replacer<T> {
    fn replace(&mut self, matched: &str, index: usize, offset: usize) -> T;

    /// Borrows this replacer so it can be used for more than one call.
    fn by_ref(&mut self) -> ReplacerRef<'_, Self>
    where
        Self: Sized,
    {
        ReplacerRef(self)
    }
}

impl<T, F> Replacer<T> for F
where
    F: FnMut(&str, usize, usize) -> T,
{
    #[inline]
    fn replace(&mut self, matched: &str, index: usize, offset: usize) -> T {
        self(matched, index, offset)
    }
}

/// Hands out a clone of the same value for every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T>(pub T);

impl<T: Clone> Replacer<T> for Constant<T> {
    #[inline]
    fn replace(&mut self, _matched: &str, _index: usize, _offset: usize) -> T {
        self.0.clone()
    }
}

#[derive(Debug)]
pub struct ReplacerRef<'r, R>(&'r mut R);

impl<T, R: Replacer<T>> Replacer<T> for ReplacerRef<'_, R> {
    #[inline]
    fn replace(&mut self, matched: &str, index: usize, offset: usize) -> T {
        self.0.replace(matched, index, offset)
    }
}
