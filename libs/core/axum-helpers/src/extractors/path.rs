//! Path parameter extractor that rejects through `AppError`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Extractor for typed path parameters.
///
/// Same parsing as axum's `Path`, but a value that does not parse (e.g. `abc`
/// for a `u64` id) is answered with a 422 `INVALID_PARAMETER` error body
/// instead of axum's plain-text 400.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ParsedPath;
///
/// async fn get_task(ParsedPath(id): ParsedPath<u64>) -> String {
///     format!("Task {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
pub struct ParsedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ParsedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn show(ParsedPath(id): ParsedPath<u64>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", get(show))
    }

    #[tokio::test]
    async fn test_numeric_id_passes_through() {
        let response = app()
            .oneshot(Request::builder().uri("/items/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"7");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_422_with_error_body() {
        let response = app()
            .oneshot(Request::builder().uri("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.error, "INVALID_PARAMETER");
        assert_eq!(error.code, 1002);
    }
}
