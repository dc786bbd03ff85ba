//! Query string extractor that rejects through `AppError`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Extractor for typed query parameters.
///
/// Same parsing as axum's `Query`; an unknown enum value or a wrongly typed
/// field becomes a 422 `INVALID_PARAMETER` error body.
pub struct ParsedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ParsedQuery(value))
    }
}
