use std::fmt::{Debug, Formatter, Result};
use std::iter::Peekable;

/// Traversal of a collection that starts over once it runs out.
///
/// `C` is a cheap, restartable view such as `&[T]` or `&BTreeSet<T>`.
/// `next()` only returns `None` when the collection is empty.
pub struct RolloverCursor<C>
where
    C: IntoIterator + Copy,
{
    collection: C,
    iter: Peekable<C::IntoIter>,
}

impl<C> RolloverCursor<C>
where
    C: IntoIterator + Copy,
{
    pub fn new(collection: C) -> Self {
        RolloverCursor {
            collection,
            iter: collection.into_iter().peekable(),
        }
    }

    /// Whether the current pass has elements left. Reporting `false` also
    /// restarts the pass, so the following `next()` yields the first element.
    pub fn has_more(&mut self) -> bool {
        if self.iter.peek().is_some() {
            return true;
        }

        self.restart();
        false
    }

    fn restart(&mut self) {
        self.iter = self.collection.into_iter().peekable();
    }
}

impl<C> Iterator for RolloverCursor<C>
where
    C: IntoIterator + Copy,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(element) => Some(element),
            None => {
                self.restart();
                self.iter.next()
            }
        }
    }
}

impl<C> Debug for RolloverCursor<C>
where
    C: IntoIterator + Copy + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("RolloverCursor")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}
