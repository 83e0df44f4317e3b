use thiserror::Error;

/// Errors that can occur when operating on the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A position or span bound fell outside the addressable range.
    #[error("position {position} is out of range for a sequence of {len} elements")]
    OutOfRange { position: usize, len: usize },

    /// The operation needs at least one element.
    #[error("sequence is empty")]
    Empty,
}
