use manabi_model::position::error::PositionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("problem level {0} is outside the supported range")]
    UnknownLevel(i32),
}
