//! Catalog item ("referencia") entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Catalog item domain entity.
///
/// `active == false` is a logical deletion. Rows are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Check if the item has not been logically deleted
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Overwrite the mutable fields with an already validated draft.
    pub fn apply(&mut self, draft: CatalogItemDraft) {
        self.code = draft.code;
        self.name = draft.name;
        self.active = draft.active;
        self.updated_at = Utc::now();
    }

    /// Logically delete the item.
    ///
    /// ACTIVE -> INACTIVE is the only transition; deleting an inactive
    /// item is rejected.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.is_active() {
            return Err(DomainError::conflict("Catalog item is already deleted."));
        }
        self.active = false;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn default_active() -> bool {
    true
}

/// Catalog item payload as submitted by callers (register and update).
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatalogItemInput {
    /// Item code, `RF` followed by digits (case and surrounding blanks are normalized)
    #[serde(rename = "codigo")]
    pub code: Option<String>,
    /// Item name, unique
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    /// Active flag, defaults to `true`
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

impl CatalogItemInput {
    pub fn new(code: impl Into<String>, name: impl Into<String>, active: bool) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            active,
        }
    }

    /// Trim and upper-case the code, trim the name.
    pub fn normalized(self) -> Self {
        Self {
            code: self.code.map(|code| code.trim().to_uppercase()),
            name: self.name.map(|name| name.trim().to_string()),
            active: self.active,
        }
    }
}

/// Normalized, validated values ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemDraft {
    pub code: String,
    pub name: String,
    pub active: bool,
}

/// Catalog item representation returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatalogItemResponse {
    #[serde(rename = "idReferencia")]
    pub id: i32,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl From<CatalogItem> for CatalogItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            code: item.code,
            name: item.name,
            active: item.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(active: bool) -> CatalogItem {
        let now = Utc::now();
        CatalogItem {
            id: 1,
            code: "RF1".to_string(),
            name: "Tornillo".to_string(),
            active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_deactivate_once() {
        let mut item = item(true);

        assert!(item.deactivate().is_ok());
        assert!(!item.is_active());

        let second = item.deactivate();
        assert!(matches!(second, Err(DomainError::Conflict(_))));
        assert!(!item.is_active());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut item = item(false);
        let created_at = item.created_at;

        item.apply(CatalogItemDraft {
            code: "RF2".to_string(),
            name: "Tuerca".to_string(),
            active: true,
        });

        assert_eq!(item.id, 1);
        assert_eq!(item.created_at, created_at);
        assert_eq!(item.code, "RF2");
        assert!(item.is_active());
    }

    #[test]
    fn test_normalized_input() {
        let input = CatalogItemInput::new("  rf10 ", "  Arandela  ", true).normalized();
        assert_eq!(input.code.as_deref(), Some("RF10"));
        assert_eq!(input.name.as_deref(), Some("Arandela"));
    }

    #[test]
    fn test_input_active_defaults_to_true() {
        let input: CatalogItemInput =
            serde_json::from_str(r#"{"codigo":"RF1","nombre":"Perno"}"#).unwrap();
        assert!(input.active);
    }

    #[test]
    fn test_response_uses_wire_names() {
        let json = serde_json::to_value(CatalogItemResponse::from(item(true))).unwrap();
        assert_eq!(json["idReferencia"], 1);
        assert_eq!(json["codigo"], "RF1");
        assert_eq!(json["nombre"], "Tornillo");
        assert_eq!(json["activo"], true);
    }
}
