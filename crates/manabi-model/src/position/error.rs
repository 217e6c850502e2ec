use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PositionError {
    #[error("position key must be a finite number greater than zero, got {0}")]
    InvalidValue(f64),

    #[error("previous key {before} must be strictly less than next key {after}")]
    InvertedBounds { before: f64, after: f64 },

    #[error("no representable key left between {before} and {after}")]
    Exhausted { before: f64, after: f64 },

    #[error("a sequence needs at least one entry")]
    EmptySequence,
}
