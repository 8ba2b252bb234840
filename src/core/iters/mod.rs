pub(crate) mod element;
pub(crate) mod index;
pub(crate) mod peeking;
pub(crate) mod rollover;
