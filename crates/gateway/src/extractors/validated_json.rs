//! JSON body extractor for the catalog and auth payloads.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// `Json<T>` followed by the payload's `validator` rules.
///
/// Every rejection is a 400 `VALIDATION_ERROR`, so a `null` or truncated
/// body never reaches the services.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value.validate().map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());

    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::validation("Request body must be sent as application/json.")
        }
        JsonRejection::JsonSyntaxError(_) => AppError::validation("Request body is not valid JSON."),
        // Missing or mistyped fields: serde's text names the offending field
        other => AppError::validation(other.body_text()),
    }
}

/// Message of the alphabetically first failing field, so responses are stable.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(field, _)| **field);

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| "Request body failed validation.".to_string())
}
