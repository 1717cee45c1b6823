/// Replacement allowance shared by every element and pattern of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    remaining: Option<usize>,
}

impl Budget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { remaining: limit }
    }

    /// Consumes one replacement. Returns `false` once the limit is spent.
    pub(crate) fn take(&mut self) -> bool {
        match self.remaining.as_mut() {
            None => true,
            Some(0) => false,
            Some(left) => {
                *left -= 1;
                if *left == 0 {
                    tracing::debug!("replacement limit reached; remaining matches stay literal");
                }
                true
            }
        }
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}
