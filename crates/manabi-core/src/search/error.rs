use manabi_model_tools::error::ConvertError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
