// edlp-core/src/infrastructure/http/router.rs

use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::ports::store::PolicyStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PolicyStore>,
    pub export_prefix: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn PolicyStore>, export_prefix: &str) -> Self {
        Self {
            store,
            export_prefix: Arc::from(export_prefix),
        }
    }
}

pub fn build_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/records", get(handlers::list_records))
        .route("/api/submit", post(handlers::submit))
        .route("/api/clear", delete(handlers::clear))
        .route("/api/validate", post(handlers::validate_draft))
        .route("/api/drafts", post(handlers::submit_draft))
        .route("/api/export", get(handlers::export))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::policy::{NewPolicyRecord, PolicyRecord};
    use crate::error::EdlpError;
    use crate::infrastructure::adapters::InMemoryPolicyStore;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(
            AppState::new(Arc::new(InMemoryPolicyStore::new()), "eDLP_Strategy_Export"),
            true,
        )
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn valid_draft() -> Value {
        json!({
            "submitter": { "name": "Amy", "role": "部門二級主管" },
            "office": "瑞三office",
            "blacklist": {
                "enabled": true,
                "options": { "domain": { "enabled": true, "value": "@bad.com" } }
            },
            "approval": { "enabled": true, "window_minutes": 30, "timeout_strategy": "自動通過" }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn test_submit_then_list_records() {
        let app = app();
        let (status, body) = send_json(
            &app,
            "POST",
            "/api/submit",
            json!({ "submitterName": "Amy", "office": "瑞三office", "approval": "時間: 30分, 超時: 自動通過" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "id": 1 }));

        let (status, bytes) = send(&app, get("/api/records")).await;
        assert_eq!(status, StatusCode::OK);
        let records: Value = serde_json::from_slice(&bytes).unwrap();
        let first = &records[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["submitterName"], "Amy");
        assert_eq!(first["bcc"], "");
        assert!(first["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_validate_reports_errors_without_storing() {
        let app = app();
        let (status, body) = send_json(&app, "POST", "/api/validate", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(
            body["errors"],
            json!([
                "請選擇「填寫人職級」。",
                "請選擇「辦公室」。",
                "請勾選「審批」並填寫相關資訊（此為必選項目）。"
            ])
        );

        let (_, body) = send_json(&app, "POST", "/api/validate", valid_draft()).await;
        assert_eq!(body, json!({ "valid": true, "errors": [] }));

        let (_, bytes) = send(&app, get("/api/records")).await;
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn test_drafts_are_canonicalized_on_the_server() {
        let app = app();
        let (status, body) = send_json(&app, "POST", "/api/drafts", valid_draft()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["record"]["blacklist"], "域名/IP: @bad.com");
        assert_eq!(body["record"]["approval"], "時間: 30分, 超時: 自動通過");
        assert_eq!(body["record"]["whitelist"], "N/A");
        assert_eq!(body["id"], body["record"]["id"]);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_unprocessable() {
        let app = app();
        let mut draft = valid_draft();
        draft["approval"]["enabled"] = json!(false);

        let (status, body) = send_json(&app, "POST", "/api/drafts", draft).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({ "errors": ["請勾選「審批」並填寫相關資訊（此為必選項目）。"] })
        );
    }

    #[tokio::test]
    async fn test_export_csv() {
        let app = app();
        let (status, body) = send(&app, get("/api/export")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "No records to export");

        send_json(&app, "POST", "/api/drafts", valid_draft()).await;

        let response = app.clone().oneshot(get("/api/export")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"eDLP_Strategy_Export_"));

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with('\u{FEFF}'));
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let app = app();
        send_json(&app, "POST", "/api/drafts", valid_draft()).await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/clear")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({ "success": true }));

        let (_, bytes) = send(&app, get("/api/records")).await;
        assert_eq!(bytes, b"[]");
    }

    struct BrokenStore;

    #[async_trait]
    impl PolicyStore for BrokenStore {
        async fn list(&self) -> Result<Vec<PolicyRecord>, EdlpError> {
            Err(EdlpError::InternalError("disk full".into()))
        }
        async fn append(&self, _: NewPolicyRecord) -> Result<PolicyRecord, EdlpError> {
            Err(EdlpError::InternalError("disk full".into()))
        }
        async fn clear(&self) -> Result<(), EdlpError> {
            Err(EdlpError::InternalError("disk full".into()))
        }
        fn backend_name(&self) -> &str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_store_failures_are_500_with_message() {
        let app = build_router(AppState::new(Arc::new(BrokenStore), "x"), false);

        let (status, body) =
            send_json(&app, "POST", "/api/submit", json!({ "submitterName": "Amy" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "資料庫錯誤: Internal Error: disk full");

        let (status, body) = send(&app, get("/api/records")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Internal Error: disk full");

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/clear")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Internal Error: disk full" }));
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_json_errors() {
        let app = app();
        for uri in ["/api/submit", "/api/validate", "/api/drafts"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap();
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{}", uri);
        }

        let request = Request::builder()
            .method("POST")
            .uri("/api/submit")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].is_string());

        let (_, bytes) = send(&app, get("/api/records")).await;
        assert_eq!(bytes, b"[]");
    }
}
