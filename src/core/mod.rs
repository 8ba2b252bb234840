mod display;
mod errors;
mod iters;
pub mod radix;

pub use display::tabulate;
pub use errors::{DimensionError, IterationError};
pub use iters::element::ElementOdometer;
pub use iters::index::IndexOdometer;
pub use iters::peeking::PeekingCursor;
pub use iters::rollover::RolloverCursor;
