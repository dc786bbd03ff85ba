use axum::Router;
use axum_helpers::server::create_router;

pub mod tracker;

/// Creates the API routes without the `/api` prefix.
/// The prefix is added by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(tracker::router(state))
}

/// Full application: documented `/api` routes plus the `/healthz` probe.
pub fn app(state: &crate::state::AppState) -> eyre::Result<Router> {
    Ok(create_router::<crate::openapi::ApiDoc>(
        routes(state),
        &state.config.cors,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = temp_env::with_vars(
            [
                ("CORS_ORIGINS", None::<&str>),
                ("INTAKE_TITLE_MAX_CHARS", Some("10")),
                ("PORT", None),
            ],
            || Config::from_env().unwrap(),
        );
        app(&AppState::new(config)).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = test_app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_healthz_answers_cross_origin_requests() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_projects_are_served_under_api() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/projects")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Demo"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "id": 1, "name": "Demo" }));

        let response = app
            .oneshot(Request::builder().uri("/api/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!([{ "id": 1, "name": "Demo" }]));
    }

    #[tokio::test]
    async fn test_intake_uses_configured_title_limit() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai/intake")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"input":"Refactor the parser later"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            json_body(response).await,
            json!({ "title": "Refactor t", "priority": "Low" })
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_from_frontend() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/tasks/1")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_tracker_paths() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"].get("/projects/{project_id}/tasks").is_some());
        assert!(doc["paths"].get("/ai/intake").is_some());
    }
}
