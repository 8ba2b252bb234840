use crate::core::errors::{DimensionError, IterationError};
use crate::core::radix;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Enumerates every index tuple over `sizes` in mixed-radix order, with
/// dimension 0 as the fastest-moving digit.
///
/// ```
/// use odometer::IndexOdometer;
///
/// let sizes = [2, 3];
/// let tuples: Vec<_> = IndexOdometer::new(&sizes)?.collect();
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[1], vec![1, 0]);
/// assert_eq!(tuples[5], vec![1, 2]);
/// # Ok::<(), odometer::DimensionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexOdometer<'a> {
    sizes: &'a [usize],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
    remaining: Option<usize>,
}

impl<'a> IndexOdometer<'a> {
    pub fn new(sizes: &'a [usize]) -> Result<Self, DimensionError> {
        if sizes.is_empty() {
            return Err(DimensionError::Empty);
        }

        if let Some(dimension) = sizes.iter().position(|&size| size == 0) {
            return Err(DimensionError::ZeroSize { dimension });
        }

        let remaining = radix::capacity(sizes);
        debug!(dimensions = sizes.len(), tuples = ?remaining, "index odometer created");

        Ok(IndexOdometer {
            sizes,
            indices: vec![0; sizes.len()],
            started: false,
            exhausted: false,
            remaining,
        })
    }

    pub fn sizes(&self) -> &[usize] {
        self.sizes
    }

    /// The last position returned by `advance()`, if any and not yet exhausted.
    pub fn position(&self) -> Option<&[usize]> {
        (self.started && !self.exhausted).then_some(self.indices.as_slice())
    }

    /// Whether `advance()` will produce another tuple. Does not mutate.
    pub fn has_more(&self) -> bool {
        if self.exhausted {
            return false;
        }

        !self.started
            || self
                .indices
                .iter()
                .zip(self.sizes)
                .any(|(&index, &size)| index + 1 != size)
    }

    /// Steps the counter and returns a snapshot of the new position.
    ///
    /// Once the carry runs past the last dimension the odometer is exhausted
    /// and this returns `IterationError::Exhausted` from then on.
    pub fn advance(&mut self) -> Result<Vec<usize>, IterationError> {
        if self.exhausted {
            return Err(IterationError::Exhausted);
        }

        if !self.started {
            self.started = true;
            self.step();
            return Ok(self.indices.clone());
        }

        for d in 0..self.sizes.len() {
            self.indices[d] += 1;

            if self.indices[d] < self.sizes[d] {
                self.step();
                return Ok(self.indices.clone());
            }

            self.indices[d] = 0;
            trace!(dimension = d, "carry");
        }

        self.exhausted = true;
        self.remaining = Some(0);
        debug!(dimensions = self.sizes.len(), "index odometer exhausted");
        Err(IterationError::Exhausted)
    }

    fn step(&mut self) {
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
    }
}

impl<'a> Iterator for IndexOdometer<'a> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<'a> FusedIterator for IndexOdometer<'a> {}
