//! Catalog store: catalog items by id, code, name and active flag.
//!
//! Every list query is ordered by id ascending.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select, Set,
};

use super::entities::catalog_item::{self, ActiveModel, Entity as CatalogItemEntity};
use common::{AppError, AppResult};
use domain::{CatalogItem, CatalogItemDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog repository trait for dependency injection.
///
/// Unique-constraint violations on `code` or `name` surface as
/// [`AppError::Conflict`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find item by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<CatalogItem>>;

    /// Find item by exact code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<CatalogItem>>;

    /// Find item by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogItem>>;

    /// All items, active or not
    async fn find_all(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items with `active == true`
    async fn find_all_active(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items with `active == false`
    async fn find_all_inactive(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items whose active flag equals `active`
    async fn find_all_by_active(&self, active: bool) -> AppResult<Vec<CatalogItem>>;

    /// Insert a new item; the store assigns the id.
    async fn create(&self, draft: CatalogItemDraft) -> AppResult<CatalogItem>;

    /// Persist every mutable field of an existing item.
    async fn update(&self, item: CatalogItem) -> AppResult<CatalogItem>;
}

/// SeaORM-backed implementation of CatalogRepository
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn ordered() -> Select<CatalogItemEntity> {
        CatalogItemEntity::find().order_by_asc(catalog_item::Column::Id)
    }

    async fn list(&self, query: Select<CatalogItemEntity>) -> AppResult<Vec<CatalogItem>> {
        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(CatalogItem::from).collect())
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<CatalogItem>> {
        let result = CatalogItemEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(CatalogItem::from))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<CatalogItem>> {
        let result = CatalogItemEntity::find()
            .filter(catalog_item::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        Ok(result.map(CatalogItem::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogItem>> {
        let result = CatalogItemEntity::find()
            .filter(catalog_item::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(result.map(CatalogItem::from))
    }

    async fn find_all(&self) -> AppResult<Vec<CatalogItem>> {
        self.list(Self::ordered()).await
    }

    async fn find_all_active(&self) -> AppResult<Vec<CatalogItem>> {
        self.find_all_by_active(true).await
    }

    async fn find_all_inactive(&self) -> AppResult<Vec<CatalogItem>> {
        self.find_all_by_active(false).await
    }

    async fn find_all_by_active(&self, active: bool) -> AppResult<Vec<CatalogItem>> {
        self.list(Self::ordered().filter(catalog_item::Column::Active.eq(active)))
            .await
    }

    async fn create(&self, draft: CatalogItemDraft) -> AppResult<CatalogItem> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            code: Set(draft.code),
            name: Set(draft.name),
            active: Set(draft.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(CatalogItem::from(model))
    }

    async fn update(&self, item: CatalogItem) -> AppResult<CatalogItem> {
        let active_model = ActiveModel {
            id: Unchanged(item.id),
            code: Set(item.code),
            name: Set(item.name),
            active: Set(item.active),
            created_at: Unchanged(item.created_at),
            updated_at: Set(item.updated_at),
        };

        let model = active_model.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => AppError::not_found("Catalog item does not exist."),
            other => AppError::from(other),
        })?;
        Ok(CatalogItem::from(model))
    }
}
