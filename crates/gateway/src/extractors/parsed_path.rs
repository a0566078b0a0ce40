//! Path extractor with uniform error bodies.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// `Path<T>` whose rejection (e.g. `/api/referencias/abc`) is reported as
/// an `INVALID_FORMAT` error instead of axum's plain-text body.
pub struct ParsedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ParsedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidFormat(e.body_text()))?;

        Ok(ParsedPath(value))
    }
}
