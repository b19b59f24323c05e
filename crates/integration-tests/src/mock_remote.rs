//! In-process mock of the remote catalog API.
//!
//! Serves the REST contract the catalog client speaks - snake_case JSON
//! records, bearer-gated writes, 404 for absent products - from a real axum
//! server bound to an ephemeral port. Tests control its product set to make
//! the dual-source behavior observable.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

/// Shared state of the mock API: the wire-format product records it serves.
#[derive(Clone, Default)]
pub struct MockCatalog {
    products: Arc<Mutex<Vec<Value>>>,
}

impl MockCatalog {
    /// An empty mock catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the served product set.
    pub fn set_products(&self, products: Vec<Value>) {
        *self.products.lock().unwrap() = products;
    }

    /// Current product records, including any accepted writes.
    #[must_use]
    pub fn products(&self) -> Vec<Value> {
        self.products.lock().unwrap().clone()
    }

    /// Spawn the server on an ephemeral port and return the API base URL.
    ///
    /// The server lives until the test's runtime shuts down.
    pub async fn serve(&self) -> String {
        let router = Router::new()
            .route("/api/products", get(list).post(create))
            .route(
                "/api/products/{id}",
                get(get_one).put(update).delete(delete_one),
            )
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}/api")
    }
}

/// A wire-format product record as the real API would serve it.
#[must_use]
pub fn product_record(id: i32, name: &str, price: f64, category: &str, stock: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "price": price,
        "category": category,
        "image_url": "https://example.com/images/product.png",
        "stock": stock,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z",
    })
}

fn record_id(record: &Value) -> i64 {
    record.get("id").and_then(Value::as_i64).unwrap_or_default()
}

fn bearer_present(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer ") && v.len() > "Bearer ".len())
}

async fn list(State(state): State<MockCatalog>) -> Json<Vec<Value>> {
    Json(state.products())
}

async fn get_one(
    State(state): State<MockCatalog>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    state
        .products()
        .into_iter()
        .find(|p| record_id(p) == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(
    State(state): State<MockCatalog>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !bearer_present(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let mut products = state.products.lock().unwrap();
    let next_id = products.iter().map(|p| record_id(p)).max().unwrap_or(0) + 1;

    let mut record = json!({
        "id": next_id,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z",
    });
    merge_fields(&mut record, &body);
    products.push(record.clone());
    Ok(Json(record))
}

async fn update(
    State(state): State<MockCatalog>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !bearer_present(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let mut products = state.products.lock().unwrap();
    let record = products
        .iter_mut()
        .find(|p| record_id(p) == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    merge_fields(record, &body);
    Ok(Json(record.clone()))
}

async fn delete_one(
    State(state): State<MockCatalog>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> StatusCode {
    if !bearer_present(&headers) {
        return StatusCode::UNAUTHORIZED;
    }

    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| record_id(p) != id);
    if products.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Copy the writable wire fields from `body` onto `record`, leaving the ID
/// and creation timestamp alone.
fn merge_fields(record: &mut Value, body: &Value) {
    const FIELDS: &[&str] = &[
        "name",
        "description",
        "price",
        "category",
        "image_url",
        "stock",
    ];
    for field in FIELDS {
        if let Some(value) = body.get(field) {
            record[*field] = value.clone();
        }
    }
}
