use thiserror::Error;

/// The full outcome vocabulary the HTTP boundary consumes:
/// `InvalidInput` → 400, `NotFound` → 404, `Unavailable` → 503.
/// Success is the `Ok` arm of the surrounding `Result`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}

impl From<models::errors::StoreError> for ServiceError {
    fn from(err: models::errors::StoreError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
