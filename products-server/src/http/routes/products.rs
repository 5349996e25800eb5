//! Product endpoints
//!
//! One handler per route, each a single store call plus JSON translation.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ListPage, Payload, ProductId};
use crate::http::server::AppState;
use crate::models::{Product, ProductPayload};

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// GET /product?count=&start= - list products ordered by id
async fn list_products(
    State(state): State<AppState>,
    ListPage(page): ListPage,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store().get_products(page).await?;
    Ok(Json(products))
}

/// GET /product/{id} - get a single product
async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state.store().get_product(id).await?;
    Ok(Json(product))
}

/// POST /product - create a product
async fn create_product(
    State(state): State<AppState>,
    Payload(payload): Payload<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let name = payload.name.as_deref().ok_or(ApiError::InvalidPayload)?;
    if !payload.has_valid_price() {
        return Err(ApiError::InvalidPayload);
    }

    let product = state
        .store()
        .create_product(name, payload.price_or_default())
        .await?;
    tracing::info!(id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/{id} - update name and/or price
async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    Payload(payload): Payload<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    if !payload.has_valid_price() {
        return Err(ApiError::InvalidPayload);
    }

    let product = state.store().update_product(id, &payload).await?;
    Ok(Json(product))
}

/// DELETE /product/{id} - remove a product
async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store().delete_product(id).await?;
    tracing::info!(id, "Product deleted");
    Ok(Json(DeleteResponse { result: "success" }))
}

/// Product routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::db::{MemoryStore, ProductStore};

    fn app_with(store: Arc<MemoryStore>) -> Router {
        router().with_state(AppState::new(store))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let body = body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty);
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn seed(store: &MemoryStore, count: usize) {
        for i in 0..count {
            store
                .create_product(&format!("Product {}", i), (i + 1) as f64 * 10.0)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn list_empty_table_is_empty_array() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "GET", "/product", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn list_honours_count_and_start() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 5).await;

        let (status, body) = send(app_with(store), "GET", "/product?count=2&start=1", None).await;
        assert_eq!(status, StatusCode::OK);

        let items: Vec<Product> = serde_json::from_str(&body).unwrap();
        let ids: Vec<i32> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn list_coerces_bad_params() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 12).await;

        let (status, body) = send(app_with(store), "GET", "/product?count=-1&start=oops", None).await;
        assert_eq!(status, StatusCode::OK);

        let items: Vec<Product> = serde_json::from_str(&body).unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].id, 1);
    }

    #[tokio::test]
    async fn list_repeated_keys_use_first_value() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 3).await;

        let (status, body) =
            send(app_with(store), "GET", "/product?count=1&count=2&start=1&start=0", None).await;
        assert_eq!(status, StatusCode::OK);

        let items: Vec<Product> = serde_json::from_str(&body).unwrap();
        let ids: Vec<i32> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn get_invalid_id_is_400() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "GET", "/product/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid product ID"}"#);
    }

    #[tokio::test]
    async fn get_missing_is_404() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "GET", "/product/11", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"Product not found"}"#);
    }

    #[tokio::test]
    async fn create_returns_201_with_id() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            "POST",
            "/product",
            Some(r#"{ "name": "test product", "price": 11.22 }"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, r#"{"id":1,"name":"test product","price":11.22}"#);
    }

    #[tokio::test]
    async fn create_rejects_malformed_body() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "POST", "/product", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid request payload"}"#);
    }

    #[tokio::test]
    async fn create_without_name_is_invalid_payload() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, _) = send(app, "POST", "/product", Some(r#"{"price": 3.5}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_without_price_defaults_to_zero() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "POST", "/product", Some(r#"{"name":"free sample"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, r#"{"id":1,"name":"free sample","price":0.0}"#);
    }

    #[tokio::test]
    async fn create_rejects_unstorable_price() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = send(
            app_with(store.clone()),
            "POST",
            "/product",
            Some(r#"{"name":"yacht","price":1e12}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid request payload"}"#);

        let (_, body) = send(app_with(store), "GET", "/product", None).await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 1).await;

        let (status, body) = send(
            app_with(store),
            "PUT",
            "/product/1",
            Some(r#"{ "name": "updated product", "price": 22.33 }"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "updated product");
        assert_eq!(value["price"], 22.33);
    }

    #[tokio::test]
    async fn update_checks_id_before_body() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "PUT", "/product/xyz", Some("garbage")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid product ID"}"#);
    }

    #[tokio::test]
    async fn update_rejects_malformed_body() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 1).await;

        let (status, body) = send(app_with(store), "PUT", "/product/1", Some("{bad")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid request payload"}"#);
    }

    #[tokio::test]
    async fn update_rejects_unstorable_price() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 1).await;

        let (status, _) = send(
            app_with(store.clone()),
            "PUT",
            "/product/1",
            Some(r#"{"price":-1e9}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.get_product(1).await.unwrap().price, 10.0);
    }

    #[tokio::test]
    async fn partial_update_keeps_stored_name() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 1).await;

        let (status, body) =
            send(app_with(store), "PUT", "/product/1", Some(r#"{"price": 12.5}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":1,"name":"Product 0","price":12.5}"#);
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, _) = send(app, "PUT", "/product/7", Some(r#"{"name":"x"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, 1).await;

        let (status, _) = send(app_with(store.clone()), "GET", "/product/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app_with(store.clone()), "DELETE", "/product/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"result":"success"}"#);

        let (status, _) = send(app_with(store), "GET", "/product/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_is_404() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(app, "DELETE", "/product/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"Product not found"}"#);
    }

    #[tokio::test]
    async fn delete_invalid_id_is_400() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, _) = send(app, "DELETE", "/product/1.5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
