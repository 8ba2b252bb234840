use std::fmt::{Debug, Formatter, Result};

/// Remembers the value most recently pulled from `inner`.
pub struct PeekingCursor<I>
where
    I: Iterator,
{
    inner: I,
    current: Option<I::Item>,
}

impl<I> PeekingCursor<I>
where
    I: Iterator,
{
    pub fn new(inner: I) -> Self {
        PeekingCursor {
            inner,
            current: None,
        }
    }

    /// Pulls the next value from `inner` and keeps it as the current one.
    pub fn advance(&mut self) -> Option<&I::Item> {
        self.current = self.inner.next();
        self.current.as_ref()
    }

    /// The value from the last `advance()`, or `None` before the first one.
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Debug for PeekingCursor<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("PeekingCursor")
            .field("inner", &self.inner)
            .field("current", &self.current)
            .finish()
    }
}
