//! Transactional façade over the wish store.
//!
//! Every operation round-trips to the store; there is no cache and no
//! automatic retry. A store failure is surfaced immediately as
//! `Unavailable` and the caller decides how to degrade.

use models::{store::WishStore, wish};
use tracing::warn;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct WishService {
    store: WishStore,
}

impl WishService {
    pub fn new(store: WishStore) -> Self {
        Self { store }
    }

    /// Trim and persist a new wish; empty input never reaches the store.
    pub async fn submit(&self, raw_item: &str) -> Result<i64, ServiceError> {
        let item = raw_item.trim();
        if item.is_empty() {
            return Err(ServiceError::InvalidInput("item is required".into()));
        }
        self.store.create(item).await.map_err(|e| {
            warn!(error = %e, "store unreachable during create");
            e.into()
        })
    }

    /// Mark a wish fulfilled. A zero affected-row count means the id has
    /// no row, which is `NotFound`; re-fulfilling an existing wish keeps
    /// matching the row and stays `Ok`.
    pub async fn mark_fulfilled(&self, id: i64) -> Result<(), ServiceError> {
        let id = validate_id(id)?;
        let changed = self.store.fulfill(id).await?;
        if changed == 0 {
            return Err(ServiceError::not_found("wish"));
        }
        Ok(())
    }

    /// Physically delete a wish, same count-to-outcome mapping.
    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        let id = validate_id(id)?;
        let changed = self.store.delete(id).await?;
        if changed == 0 {
            return Err(ServiceError::not_found("wish"));
        }
        Ok(())
    }

    /// All wishes, newest first.
    pub async fn list_all(&self) -> Result<Vec<wish::Model>, ServiceError> {
        Ok(self.store.list().await?)
    }
}

/// Ids are positive integers; anything else is caller-correctable input,
/// rejected before it reaches the store.
fn validate_id(id: i64) -> Result<i64, ServiceError> {
    if id <= 0 {
        return Err(ServiceError::InvalidInput(format!("invalid id: {id}")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    async fn setup_service() -> Result<WishService> {
        let store = WishStore::connect("sqlite::memory:").await?;
        store.initialize().await?;
        Ok(WishService::new(store))
    }

    #[tokio::test]
    async fn submit_rejects_blank_items() -> Result<()> {
        let svc = setup_service().await?;
        assert!(matches!(
            svc.submit("").await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.submit("   ").await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(svc.list_all().await?.is_empty(), "no row may be created");
        Ok(())
    }

    #[tokio::test]
    async fn submit_trims_before_persisting() -> Result<()> {
        let svc = setup_service().await?;
        let id = svc.submit("  Lego set  ").await?;
        let wishes = svc.list_all().await?;
        assert_eq!(wishes[0].id, id);
        assert_eq!(wishes[0].item, "Lego set");
        Ok(())
    }

    #[tokio::test]
    async fn mark_fulfilled_is_idempotent() -> Result<()> {
        let svc = setup_service().await?;
        let id = svc.submit("Train").await?;

        svc.mark_fulfilled(id).await?;
        svc.mark_fulfilled(id).await?;

        let wishes = svc.list_all().await?;
        assert_eq!(wishes.len(), 1, "no duplicate row");
        assert!(wishes[0].fulfilled);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> Result<()> {
        let svc = setup_service().await?;
        assert!(matches!(
            svc.mark_fulfilled(9_999_999).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            svc.remove(9_999_999).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn non_positive_ids_are_invalid_input() -> Result<()> {
        let svc = setup_service().await?;
        assert!(matches!(
            svc.mark_fulfilled(0).await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.remove(-3).await,
            Err(ServiceError::InvalidInput(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn remove_then_remove_again() -> Result<()> {
        let svc = setup_service().await?;
        let id = svc.submit("Sled").await?;
        svc.remove(id).await?;
        assert!(svc.list_all().await?.is_empty());
        assert!(matches!(
            svc.remove(id).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn all_operations_degrade_to_unavailable() -> Result<()> {
        let store = WishStore::connect("sqlite::memory:").await?;
        store.initialize().await?;
        let svc = WishService::new(store.clone());
        store.close().await?;

        assert!(matches!(
            svc.submit("anything").await,
            Err(ServiceError::Unavailable(_))
        ));
        assert!(matches!(
            svc.mark_fulfilled(1).await,
            Err(ServiceError::Unavailable(_))
        ));
        assert!(matches!(
            svc.remove(1).await,
            Err(ServiceError::Unavailable(_))
        ));
        assert!(matches!(
            svc.list_all().await,
            Err(ServiceError::Unavailable(_))
        ));
        Ok(())
    }
}
