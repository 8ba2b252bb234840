//! Conversions between positions and their ordinal in mixed-radix order.
//!
//! Dimension 0 is the least-significant digit: the ordinal of `position`
//! over `sizes` is `Σ position[k] · ∏_{j<k} sizes[j]`.

/// Total number of tuples over `sizes`, or `None` if it does not fit in `usize`.
///
/// An empty `sizes` has capacity 1 (the empty product).
pub fn capacity(sizes: &[usize]) -> Option<usize> {
    sizes
        .iter()
        .try_fold(1usize, |total, &size| total.checked_mul(size))
}

/// Ordinal of `position` over `sizes`.
///
/// Returns `None` if the lengths differ, a digit is out of range for its
/// dimension, or the ordinal overflows `usize`.
pub fn encode(position: &[usize], sizes: &[usize]) -> Option<usize> {
    if position.len() != sizes.len() {
        return None;
    }

    position
        .iter()
        .zip(sizes)
        .rev()
        .try_fold(0usize, |value, (&digit, &size)| {
            if digit >= size {
                return None;
            }
            value.checked_mul(size)?.checked_add(digit)
        })
}

/// Position whose ordinal over `sizes` is `ordinal`.
///
/// Returns `None` if any size is 0 or `ordinal` is past the last tuple.
pub fn decode(ordinal: usize, sizes: &[usize]) -> Option<Vec<usize>> {
    let mut remainder = ordinal;
    let mut position = Vec::with_capacity(sizes.len());

    for &size in sizes {
        if size == 0 {
            return None;
        }
        position.push(remainder % size);
        remainder /= size;
    }

    (remainder == 0).then_some(position)
}
