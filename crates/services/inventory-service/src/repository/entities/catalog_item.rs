//! Catalog item database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::CatalogItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(unique)]
    pub name: String,
    /// Logical deletion flag (false = deleted)
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CatalogItem {
    fn from(model: Model) -> Self {
        CatalogItem {
            id: model.id,
            code: model.code,
            name: model.name,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
