use sea_orm::{DbErr, TransactionError};

/// Collapses a [`TransactionError`] into the domain error of the closure.
pub trait FlattenTransaction<T, E> {
    fn flatten_transaction(self) -> Result<T, E>;
}

impl<T, E> FlattenTransaction<T, E> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + std::error::Error,
{
    fn flatten_transaction(self) -> Result<T, E> {
        self.map_err(|error| match error {
            TransactionError::Connection(error) => error.into(),
            TransactionError::Transaction(error) => error,
        })
    }
}
