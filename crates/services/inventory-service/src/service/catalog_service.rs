//! Catalog service - registration, queries, updates and soft deletion of
//! catalog items.
//!
//! Uniqueness pre-checks run as sequential store queries; the table's UNIQUE
//! constraints remain the final guard against concurrent writers.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::validation::prepare_catalog_item;
use domain::{CatalogItem, CatalogItemInput};

use crate::repository::CatalogRepository;

pub const NOT_FOUND: &str = "Catalog item not found.";
pub const DOES_NOT_EXIST: &str = "Catalog item does not exist.";

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Validate and persist a new item
    async fn register(&self, input: CatalogItemInput) -> AppResult<CatalogItem>;

    /// Every item, ordered by id
    async fn list_all(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items that have not been deleted
    async fn list_active(&self) -> AppResult<Vec<CatalogItem>>;

    /// Logically deleted items
    async fn list_inactive(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items whose active flag equals `active`
    async fn list_by_state(&self, active: bool) -> AppResult<Vec<CatalogItem>>;

    async fn get_by_id(&self, id: i32) -> AppResult<CatalogItem>;

    /// Look up by exact code. The argument is not normalized.
    async fn get_by_code(&self, code: &str) -> AppResult<CatalogItem>;

    /// Overwrite code, name and active flag of an existing item
    async fn update(&self, id: i32, input: CatalogItemInput) -> AppResult<CatalogItem>;

    /// Soft delete: flip an active item to inactive
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CatalogService using repository.
pub struct CatalogManager {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogManager {
    /// Create new catalog service instance with repository
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Reject when an item other than `exclude_id` already holds the value.
    fn check_taken(
        holder: Option<CatalogItem>,
        exclude_id: Option<i32>,
        message: &str,
    ) -> AppResult<()> {
        match holder {
            Some(other) if Some(other.id) != exclude_id => {
                tracing::debug!(holder_id = other.id, "{}", message);
                Err(AppError::conflict(message))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn register(&self, input: CatalogItemInput) -> AppResult<CatalogItem> {
        let draft = prepare_catalog_item(input)?;

        Self::check_taken(
            self.repo.find_by_code(&draft.code).await?,
            None,
            "Code is already registered.",
        )?;
        Self::check_taken(
            self.repo.find_by_name(&draft.name).await?,
            None,
            "Name is already registered.",
        )?;

        let item = self.repo.create(draft).await?;
        tracing::info!(id = item.id, code = %item.code, "Catalog item registered");
        Ok(item)
    }

    async fn list_all(&self) -> AppResult<Vec<CatalogItem>> {
        self.repo.find_all().await
    }

    async fn list_active(&self) -> AppResult<Vec<CatalogItem>> {
        self.repo.find_all_active().await
    }

    async fn list_inactive(&self) -> AppResult<Vec<CatalogItem>> {
        self.repo.find_all_inactive().await
    }

    async fn list_by_state(&self, active: bool) -> AppResult<Vec<CatalogItem>> {
        self.repo.find_all_by_active(active).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<CatalogItem> {
        self.repo.find_by_id(id).await?.ok_or_not_found(NOT_FOUND)
    }

    async fn get_by_code(&self, code: &str) -> AppResult<CatalogItem> {
        self.repo.find_by_code(code).await?.ok_or_not_found(NOT_FOUND)
    }

    async fn update(&self, id: i32, input: CatalogItemInput) -> AppResult<CatalogItem> {
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(DOES_NOT_EXIST)?;

        let draft = prepare_catalog_item(input)?;

        Self::check_taken(
            self.repo.find_by_code(&draft.code).await?,
            Some(id),
            "Code already exists on another catalog item.",
        )?;
        Self::check_taken(
            self.repo.find_by_name(&draft.name).await?,
            Some(id),
            "Name already exists on another catalog item.",
        )?;

        item.apply(draft);
        let item = self.repo.update(item).await?;
        tracing::info!(id = item.id, code = %item.code, "Catalog item updated");
        Ok(item)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(DOES_NOT_EXIST)?;

        item.deactivate()?;
        self.repo.update(item).await?;
        tracing::info!(id, "Catalog item deactivated");
        Ok(())
    }
}
