use crate::core::errors::{DimensionError, IterationError};
use crate::core::iters::{peeking::PeekingCursor, rollover::RolloverCursor};
use crate::core::radix;
use std::fmt::{Debug, Formatter, Result};
use std::iter::FusedIterator;
use tracing::{debug, trace};

type Cursor<C> = PeekingCursor<RolloverCursor<C>>;

/// Enumerates every tuple of elements drawn from a list of collections, in
/// the same order as [`IndexOdometer`](crate::IndexOdometer) over their sizes.
///
/// Two ways to drive it:
///
/// - `advance()` (or the `Iterator` impl) steps and returns the next tuple.
/// - `has_more()` then `next_tuple()`, strictly alternating. `has_more()`
///   does the stepping, so calling it twice in a row skips a tuple.
///
/// ```
/// use odometer::ElementOdometer;
///
/// let letters = ['a', 'b'];
/// let others = ['p', 'q', 'r'];
/// let tuples: Vec<String> = ElementOdometer::new([&letters[..], &others[..]])?
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(tuples, ["ap", "bp", "aq", "bq", "ar", "br"]);
/// # Ok::<(), odometer::DimensionError>(())
/// ```
pub struct ElementOdometer<C>
where
    C: IntoIterator + Copy,
{
    cursors: Vec<Cursor<C>>,
    exhausted: bool,
    remaining: Option<usize>,
}

impl<C> ElementOdometer<C>
where
    C: IntoIterator + Copy,
    C::Item: Clone,
{
    pub fn new<D>(dimensions: D) -> std::result::Result<Self, DimensionError>
    where
        D: IntoIterator<Item = C>,
    {
        let mut cursors = Vec::new();
        let mut sizes = Vec::new();

        for (dimension, collection) in dimensions.into_iter().enumerate() {
            let size = collection.into_iter().count();
            if size == 0 {
                return Err(DimensionError::EmptyCollection { dimension });
            }

            let mut cursor = PeekingCursor::new(RolloverCursor::new(collection));
            // Dimension 0 is left for the first `has_more()` to step.
            if dimension > 0 {
                cursor.advance();
            }

            cursors.push(cursor);
            sizes.push(size);
        }

        if cursors.is_empty() {
            return Err(DimensionError::Empty);
        }

        let remaining = radix::capacity(&sizes);
        debug!(dimensions = cursors.len(), tuples = ?remaining, "element odometer created");

        Ok(ElementOdometer {
            cursors,
            exhausted: false,
            remaining,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.cursors.len()
    }

    /// Steps the odometer, reporting whether it landed on a new tuple.
    ///
    /// Dimensions that rolled over are stepped to their first element and
    /// the carry moves up until a dimension with elements left is stepped.
    /// When every dimension rolls over the odometer is exhausted for good.
    pub fn has_more(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        for (dimension, cursor) in self.cursors.iter_mut().enumerate() {
            let more = cursor.get_mut().has_more();
            cursor.advance();

            if more {
                self.remaining = self.remaining.map(|n| n.saturating_sub(1));
                return true;
            }

            trace!(dimension, "rollover");
        }

        self.exhausted = true;
        self.remaining = Some(0);
        debug!(dimensions = self.cursors.len(), "element odometer exhausted");
        false
    }

    /// The tuple the last `has_more()` stepped to. Does not step.
    pub fn next_tuple(&self) -> std::result::Result<Vec<C::Item>, IterationError> {
        if self.exhausted {
            return Err(IterationError::Exhausted);
        }

        self.cursors
            .iter()
            .map(|cursor| cursor.current().cloned().ok_or(IterationError::NotStarted))
            .collect()
    }

    /// Steps and returns the new tuple, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<Vec<C::Item>> {
        if !self.has_more() {
            return None;
        }

        self.next_tuple().ok()
    }
}

impl<C> Iterator for ElementOdometer<C>
where
    C: IntoIterator + Copy,
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<C> FusedIterator for ElementOdometer<C>
where
    C: IntoIterator + Copy,
    C::Item: Clone,
{
}

impl<C> Debug for ElementOdometer<C>
where
    C: IntoIterator + Copy,
    C::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let current: Vec<_> = self.cursors.iter().map(|c| c.current()).collect();

        f.debug_struct("ElementOdometer")
            .field("dims", &self.cursors.len())
            .field("current", &current)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexOdometer;
    use std::collections::BTreeSet;
    use test_case::test_case;

    fn ranges(sizes: &[usize]) -> Vec<Vec<usize>> {
        sizes.iter().map(|&size| (0..size).collect()).collect()
    }

    #[test_case(&[10, 10, 10] ; "decimal")]
    #[test_case(&[3, 4, 5] ; "uniform small case")]
    #[test_case(&[1] ; "single element")]
    #[test_case(&[2, 1, 3] ; "size one in the middle")]
    fn alternation_produces_ordinals_in_order(sizes: &[usize]) {
        let collections = ranges(sizes);
        let mut odometer = ElementOdometer::new(collections.iter()).unwrap();
        let total = radix::capacity(sizes).unwrap();

        for ordinal in 0..total {
            assert!(odometer.has_more());
            let tuple: Vec<usize> = odometer.next_tuple().unwrap().into_iter().copied().collect();
            assert_eq!(tuple.len(), sizes.len());
            assert_eq!(radix::encode(&tuple, sizes), Some(ordinal));
        }

        assert!(!odometer.has_more());
        assert_eq!(odometer.next_tuple(), Err(IterationError::Exhausted));
    }

    #[test]
    fn double_has_more_skips_a_tuple() {
        let collections = ranges(&[3, 2]);
        let mut odometer = ElementOdometer::new(collections.iter()).unwrap();

        assert!(odometer.has_more());
        assert_eq!(odometer.next_tuple(), Ok(vec![&0, &0]));

        assert!(odometer.has_more());
        assert!(odometer.has_more());
        assert_eq!(odometer.next_tuple(), Ok(vec![&2, &0]));
    }

    #[test]
    fn next_tuple_does_not_step() {
        let letters = ["a", "b"];
        let mut odometer = ElementOdometer::new([&letters[..]]).unwrap();

        assert!(odometer.has_more());
        assert_eq!(odometer.next_tuple(), Ok(vec![&"a"]));
        assert_eq!(odometer.next_tuple(), Ok(vec![&"a"]));
    }

    #[test]
    fn read_before_first_step_is_not_started() {
        let letters = ["a", "b"];
        let odometer = ElementOdometer::new([&letters[..]]).unwrap();
        assert_eq!(odometer.next_tuple(), Err(IterationError::NotStarted));
    }

    #[test]
    fn matches_index_odometer() {
        let letters = ["a", "b"];
        let others = ["x", "y", "z"];
        let dims = [&letters[..], &others[..]];

        let by_element: Vec<Vec<&str>> = ElementOdometer::new(dims)
            .unwrap()
            .map(|tuple| tuple.into_iter().copied().collect())
            .collect();

        let sizes = [letters.len(), others.len()];
        let by_index: Vec<Vec<&str>> = IndexOdometer::new(&sizes)
            .unwrap()
            .map(|position| vec![letters[position[0]], others[position[1]]])
            .collect();

        assert_eq!(by_element.len(), 6);
        assert_eq!(by_element, by_index);
    }

    #[test]
    fn stays_exhausted() {
        let collections = ranges(&[2, 2]);
        let mut odometer = ElementOdometer::new(collections.iter()).unwrap();
        assert_eq!(odometer.by_ref().count(), 4);

        for _ in 0..3 {
            assert!(!odometer.has_more());
            assert_eq!(odometer.advance(), None);
            assert_eq!(odometer.next_tuple(), Err(IterationError::Exhausted));
        }
    }

    #[test]
    fn accepts_sets() {
        let low: BTreeSet<u8> = [2, 1].into_iter().collect();
        let high: BTreeSet<u8> = [20, 10].into_iter().collect();

        let tuples: Vec<Vec<&u8>> = ElementOdometer::new([&low, &high]).unwrap().collect();
        assert_eq!(
            tuples,
            vec![
                vec![&1, &10],
                vec![&2, &10],
                vec![&1, &20],
                vec![&2, &20],
            ]
        );
    }

    #[test]
    fn rejects_empty_input() {
        let none: [&[u8]; 0] = [];
        assert_eq!(ElementOdometer::new(none).unwrap_err(), DimensionError::Empty);

        let data = [1u8, 2];
        let dims: [&[u8]; 3] = [&data, &data, &[]];
        assert_eq!(
            ElementOdometer::new(dims).unwrap_err(),
            DimensionError::EmptyCollection { dimension: 2 }
        );
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let collections = ranges(&[2, 3]);
        let mut odometer = ElementOdometer::new(collections.iter()).unwrap();
        assert_eq!(odometer.size_hint(), (6, Some(6)));

        odometer.next();
        assert_eq!(odometer.size_hint(), (5, Some(5)));

        odometer.by_ref().for_each(drop);
        assert_eq!(odometer.size_hint(), (0, Some(0)));
    }
}
