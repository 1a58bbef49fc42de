//! HTTP routes.
//!
//! JSON surface for the view layer. Mutations answer with the change they
//! made and never embed a refreshed listing; clients re-fetch
//! `GET /api/inventory` when they want one.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use pantry_domain::{InventoryItem, ItemName};

use crate::app::App;
use crate::use_cases::inventory::{InventoryChange, InventoryError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/inventory", get(list_items))
        .route("/api/inventory/{name}", axum::routing::delete(delete_item))
        .route("/api/inventory/{name}/add", post(add_item))
        .route("/api/inventory/{name}/remove", post(remove_item))
        .route("/api/inventory/{name}/rename", post(rename_item))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    q: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
struct QuantityBody {
    #[serde(default = "default_quantity")]
    quantity: i64,
}

impl QuantityBody {
    /// A request without a JSON body means one.
    fn quantity(body: Option<Json<QuantityBody>>) -> i64 {
        body.map_or_else(default_quantity, |Json(body)| body.quantity)
    }
}

#[derive(Debug, Deserialize)]
struct RenameBody {
    new_name: String,
}

/// A name being written for the first time.
fn parse_new_name(raw: String) -> Result<ItemName, ApiError> {
    ItemName::new(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// A name that refers to a document which may already exist.
fn parse_existing_name(raw: String) -> Result<ItemName, ApiError> {
    ItemName::existing(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

async fn list_items(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let list = &app.use_cases.inventory.list;
    let items = match query.q.as_deref() {
        Some(q) => list.search(q).await?,
        None => list.execute().await?,
    };
    Ok(Json(items))
}

async fn add_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
    body: Option<Json<QuantityBody>>,
) -> Result<Json<InventoryChange>, ApiError> {
    let name = parse_new_name(name)?;
    let change = app
        .use_cases
        .inventory
        .upsert
        .execute(&name, QuantityBody::quantity(body))
        .await?;
    Ok(Json(change))
}

async fn remove_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
    body: Option<Json<QuantityBody>>,
) -> Result<Json<InventoryChange>, ApiError> {
    let name = parse_existing_name(name)?;
    let change = app
        .use_cases
        .inventory
        .decrement
        .execute(&name, QuantityBody::quantity(body))
        .await?;
    Ok(Json(change))
}

async fn rename_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
    Json(body): Json<RenameBody>,
) -> Result<Json<InventoryChange>, ApiError> {
    let old_name = parse_existing_name(name)?;
    let new_name = parse_new_name(body.new_name)?;
    let change = app
        .use_cases
        .inventory
        .rename
        .execute(&old_name, &new_name)
        .await?;
    Ok(Json(change))
}

async fn delete_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventoryChange>, ApiError> {
    let name = parse_existing_name(name)?;
    let change = app.use_cases.inventory.delete.execute(&name).await?;
    Ok(Json(change))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        if e.is_validation() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryDocumentStore;
    use crate::infrastructure::ports::{DocumentStore, MockDocumentStore, StoreError};
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router_over(store: Arc<dyn DocumentStore>) -> Router {
        routes().with_state(Arc::new(App::new(store)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));
        let response = app.oneshot(get_req("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn add_then_list() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/oat%20milk/add", json!({"quantity": 2})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"change": "created", "quantity": 2})
        );

        let response = app.oneshot(get_req("/api/inventory")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            json!([{"name": "oat milk", "quantity": 2}])
        );
    }

    #[tokio::test]
    async fn quantity_defaults_to_one() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/eggs/add", json!({})))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            json!({"change": "created", "quantity": 1})
        );

        let response = app
            .oneshot(post_json("/api/inventory/eggs/remove", json!({})))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!({"change": "deleted"}));
    }

    #[tokio::test]
    async fn missing_body_means_one() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/inventory/eggs/add")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"change": "created", "quantity": 1})
        );
    }

    #[tokio::test]
    async fn items_written_by_other_clients_can_be_listed_and_removed() {
        let store = Arc::new(InMemoryDocumentStore::new());
        for id in ["eggs", "  "] {
            store
                .set("inventory", id, json!({"quantity": 2}).as_object().cloned().unwrap())
                .await
                .unwrap();
        }
        let app = router_over(store);

        let response = app.clone().oneshot(get_req("/api/inventory")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            json!([{"name": "  ", "quantity": 2}, {"name": "eggs", "quantity": 2}])
        );

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/%20%20/remove", json!({"quantity": 1})))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            json!({"change": "updated", "quantity": 1})
        );

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/%20%20/rename", json!({"new_name": "flour"})))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!({"change": "renamed"}));

        // Creating a new item under such a name is still refused.
        let response = app
            .oneshot(post_json("/api/inventory/%20%20/add", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_query_filters() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));
        for name in ["Eggs", "Milk", "oat%20milk"] {
            app.clone()
                .oneshot(post_json(&format!("/api/inventory/{}/add", name), json!({})))
                .await
                .unwrap();
        }

        let response = app.oneshot(get_req("/api/inventory?q=MILK")).await.unwrap();

        assert_eq!(
            json_body(response).await,
            json!([{"name": "Milk", "quantity": 1}, {"name": "oat milk", "quantity": 1}])
        );
    }

    #[tokio::test]
    async fn rename_and_delete() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));
        app.clone()
            .oneshot(post_json("/api/inventory/milk/add", json!({"quantity": 2})))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/milk/rename", json!({"new_name": "oat milk"})))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!({"change": "renamed"}));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/inventory/oat%20milk")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_req("/api/inventory")).await.unwrap();
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request() {
        let app = router_over(Arc::new(InMemoryDocumentStore::new()));

        let response = app
            .clone()
            .oneshot(post_json("/api/inventory/eggs/add", json!({"quantity": 0})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(post_json("/api/inventory/eggs/rename", json!({"new_name": "a/b"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_internal_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_all()
            .returning(|_| Err(StoreError::unavailable("list_all", "offline")));
        let app = router_over(Arc::new(store));

        let response = app.oneshot(get_req("/api/inventory")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Internal error");
    }
}
