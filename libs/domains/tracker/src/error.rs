use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Convert TrackerError to AppError for standardized error responses
impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::ProjectNotFound(id) => {
                AppError::NotFound(format!("Project {} not found", id))
            }
            TrackerError::TaskNotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            TrackerError::Validation(errors) => AppError::ValidationError(errors),
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProject;
    use axum::http::StatusCode;
    use axum_helpers::ErrorResponse;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn body(error: TrackerError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_uses_validation_code_with_details() {
        let errors = CreateProject {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let (status, error) = body(TrackerError::from(errors)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.error, "VALIDATION_ERROR");
        assert_eq!(error.code, 1001);
        assert!(error.details.unwrap().get("name").is_some());
    }

    #[tokio::test]
    async fn test_not_found_messages_name_the_record() {
        let (status, error) = body(TrackerError::TaskNotFound(9)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "Task 9 not found");
    }
}
