use sea_orm::DbErr;
use thiserror::Error;

/// Failure of the backing store itself. Not-found is never an error here;
/// mutations communicate it through a zero affected-row count instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] DbErr),
}
