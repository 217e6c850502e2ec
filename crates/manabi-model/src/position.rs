use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::position::error::PositionError;

pub mod error;

/// Fractional ordering key of one worksheet entry.
///
/// Entries of a worksheet form a strict total order by key value. Moving an
/// entry between two neighbors computes and stores exactly one new key; the
/// rest of the sequence is never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositionKey(f64);

impl PositionKey {
    /// A key must be finite and strictly greater than zero.
    pub fn new(value: f64) -> Result<Self, PositionError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PositionError::InvalidValue(value));
        }
        Ok(PositionKey(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Key for an entry placed between two optional neighbors.
    ///
    /// No neighbors starts the sequence at 1.0, a missing `before` halves the
    /// first key, a missing `after` appends past the last key, and two
    /// neighbors take their arithmetic midpoint. Midpoints stop being
    /// representable once the gap between the neighbors underflows; that case
    /// fails instead of silently producing a key equal to one of its bounds.
    pub fn between(before: Option<PositionKey>, after: Option<PositionKey>) -> Result<Self, PositionError> {
        match (before, after) {
            (None, None) => PositionKey::new(1.0),
            (None, Some(after)) => PositionKey::new(after.0 / 2.0),
            (Some(before), None) => {
                let key = PositionKey::new(before.0 + 1.0)?;
                if key.0 <= before.0 {
                    return Err(PositionError::Exhausted {
                        before: before.0,
                        after: f64::INFINITY,
                    });
                }
                Ok(key)
            }
            (Some(before), Some(after)) => {
                if before.0 >= after.0 {
                    return Err(PositionError::InvertedBounds {
                        before: before.0,
                        after: after.0,
                    });
                }
                let key = PositionKey::new((before.0 + after.0) / 2.0)?;
                if key.0 <= before.0 || key.0 >= after.0 {
                    return Err(PositionError::Exhausted {
                        before: before.0,
                        after: after.0,
                    });
                }
                Ok(key)
            }
        }
    }

    /// Initial keys for a freshly assembled sequence: `1.0, 2.0, ..`.
    pub fn initial_sequence(count: usize) -> Result<Vec<PositionKey>, PositionError> {
        if count == 0 {
            return Err(PositionError::EmptySequence);
        }
        (1..=count).map(|index| PositionKey::new(index as f64)).collect()
    }

    pub fn is_before(self, other: PositionKey) -> bool {
        self.0 < other.0
    }

    pub fn is_after(self, other: PositionKey) -> bool {
        self.0 > other.0
    }
}

impl TryFrom<f64> for PositionKey {
    type Error = PositionError;

    fn try_from(value: f64) -> Result<Self, PositionError> {
        PositionKey::new(value)
    }
}

impl From<PositionKey> for f64 {
    fn from(key: PositionKey) -> f64 {
        key.0
    }
}
