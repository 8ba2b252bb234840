use thiserror::Error;

// --- Construction ---

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("No dimensions given. An odometer needs at least one dimension.")]
    Empty,

    #[error("Dimension {dimension} has size 0. Every dimension must have a positive size.")]
    ZeroSize { dimension: usize },

    #[error("Collection for dimension {dimension} is empty. Every dimension must have at least one element.")]
    EmptyCollection { dimension: usize },
}

// --- Iteration ---

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationError {
    #[error("Odometer is exhausted. Every tuple has already been produced.")]
    Exhausted,

    #[error("Odometer has not been advanced yet. Call `has_more()` before reading a tuple.")]
    NotStarted,
}
