//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and, when `dashboard_dir` is given, serves
/// the compiled dashboard from it with `index.html` as the fallback for
/// unknown paths outside `/api`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, TR, LR>(state: AppState<PR, TR, LR>, dashboard_dir: Option<&Path>) -> Router
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes());

    let router = match dashboard_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving dashboard");
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rntly_domain::error::{NotFoundError, RntlyError};
    use rntly_domain::id::{LeaseId, PropertyId, TenantId};
    use rntly_domain::lease::Lease;
    use rntly_domain::property::Property;
    use rntly_domain::tenant::Tenant;
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubPropertyRepo;
    #[derive(Clone)]
    struct StubTenantRepo;
    struct StubLeaseRepo;

    fn missing(entity: &'static str) -> RntlyError {
        NotFoundError {
            entity,
            id: String::new(),
        }
        .into()
    }

    impl PropertyRepository for StubPropertyRepo {
        async fn create(&self, property: Property) -> Result<Property, RntlyError> {
            Ok(property)
        }
        async fn get_by_id(&self, _id: PropertyId) -> Result<Option<Property>, RntlyError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Property>, RntlyError> {
            Ok(vec![])
        }
        async fn update(&self, property: Property) -> Result<Property, RntlyError> {
            Ok(property)
        }
        async fn delete(&self, _id: PropertyId) -> Result<(), RntlyError> {
            Err(missing("property"))
        }
    }

    impl TenantRepository for StubTenantRepo {
        async fn create(&self, tenant: Tenant) -> Result<Tenant, RntlyError> {
            Ok(tenant)
        }
        async fn get_by_id(&self, _id: TenantId) -> Result<Option<Tenant>, RntlyError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Tenant>, RntlyError> {
            Ok(vec![])
        }
        async fn update(&self, tenant: Tenant) -> Result<Tenant, RntlyError> {
            Ok(tenant)
        }
        async fn delete(&self, _id: TenantId) -> Result<(), RntlyError> {
            Err(missing("tenant"))
        }
    }

    impl LeaseRepository for StubLeaseRepo {
        async fn create(&self, lease: Lease) -> Result<Lease, RntlyError> {
            Ok(lease)
        }
        async fn get_by_id(&self, _id: LeaseId) -> Result<Option<Lease>, RntlyError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Lease>, RntlyError> {
            Ok(vec![])
        }
        async fn find_by_property(&self, _id: PropertyId) -> Result<Vec<Lease>, RntlyError> {
            Ok(vec![])
        }
        async fn find_by_tenant(&self, _id: TenantId) -> Result<Vec<Lease>, RntlyError> {
            Ok(vec![])
        }
        async fn update(&self, lease: Lease) -> Result<Lease, RntlyError> {
            Ok(lease)
        }
        async fn delete(&self, _id: LeaseId) -> Result<(), RntlyError> {
            Err(missing("lease"))
        }
    }

    fn app() -> Router {
        build(
            AppState::from_repositories(StubPropertyRepo, StubTenantRepo, StubLeaseRepo),
            None,
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_list_empty_collections() {
        for uri in [
            "/api/properties",
            "/api/tenants",
            "/api/leases",
            "/api/properties/p1/leases",
            "/api/tenants/t1/leases",
        ] {
            let (status, body) =
                send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, "[]", "{uri}");
        }
    }

    #[tokio::test]
    async fn should_return_404_with_json_error_when_property_missing() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/properties/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"property not found"}"#);
    }

    #[tokio::test]
    async fn should_return_201_when_property_created() {
        let (status, body) = send(json_request(
            "POST",
            "/api/properties",
            &serde_json::json!({
                "address": "1 Main St",
                "type": "house",
                "bedrooms": 3,
                "rent_amount": 1500
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(created["address"], "1 Main St");
        assert_eq!(created["status"], "vacant");
        assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn should_return_400_when_property_payload_invalid() {
        let (status, body) = send(json_request(
            "POST",
            "/api/properties",
            &serde_json::json!({
                "address": "",
                "type": "house",
                "bedrooms": 3,
                "rent_amount": 1500
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"address is required"}"#);
    }

    #[tokio::test]
    async fn should_return_400_when_type_unknown() {
        let (status, body) = send(json_request(
            "POST",
            "/api/properties",
            &serde_json::json!({
                "address": "1 Main St",
                "type": "castle",
                "bedrooms": 3,
                "rent_amount": 1500
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid request body"));
    }

    #[tokio::test]
    async fn should_return_400_when_lease_references_unknown_property() {
        let (status, body) = send(json_request(
            "POST",
            "/api/leases",
            &serde_json::json!({
                "property_id": "p1",
                "tenant_id": "t1",
                "start_date": "2024-01-01",
                "end_date": "2024-12-31",
                "rent_amount": 1500,
                "deposit": 0
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"property not found"}"#);
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_missing_tenant() {
        let (status, _) = send(
            Request::builder()
                .method("DELETE")
                .uri("/api/tenants/t1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_not_serve_dashboard_when_unconfigured() {
        let (status, _) = send(
            Request::builder()
                .uri("/properties")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_fall_back_to_index_for_client_routes() {
        let dir = std::env::temp_dir().join(format!("rntly-dashboard-{}", PropertyId::new()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<title>rntly</title>").unwrap();

        let app = build(
            AppState::from_repositories(StubPropertyRepo, StubTenantRepo, StubLeaseRepo),
            Some(&dir),
        );
        let response = app
            .oneshot(Request::builder().uri("/leases").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&bytes[..], b"<title>rntly</title>");
    }

    #[tokio::test]
    async fn should_answer_json_404_for_unknown_api_path_when_dashboard_served() {
        let dir = std::env::temp_dir().join(format!("rntly-dashboard-{}", PropertyId::new()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<title>rntly</title>").unwrap();

        let app = build(
            AppState::from_repositories(StubPropertyRepo, StubTenantRepo, StubLeaseRepo),
            Some(&dir),
        );
        let api = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let api_status = api.status();
        let api_body = api.into_body().collect().await.unwrap().to_bytes();
        let page = app
            .oneshot(Request::builder().uri("/tenants").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let page_status = page.status();
        let page_body = page.into_body().collect().await.unwrap().to_bytes();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(api_status, StatusCode::NOT_FOUND);
        assert_eq!(&api_body[..], br#"{"error":"route not found"}"#);
        assert_eq!(page_status, StatusCode::OK);
        assert_eq!(&page_body[..], b"<title>rntly</title>");
    }

    #[tokio::test]
    async fn should_answer_json_404_for_unknown_api_path() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/properties/p1/photos")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"route not found"}"#);
    }
}
