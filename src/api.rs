//! REST API router for the matching engine.
//!
//! Used by the binary and by integration tests. Create with [`create_router`].
//! Every request that touches the book holds the engine lock for the whole
//! match-then-rest sequence, so concurrent callers are serialized.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::warn;
use std::sync::{Arc, Mutex};

use crate::types::{OrderId, Price, Quantity, Side};
use crate::{Engine, Order, Trade};

/// Shared app state: one engine per process.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
}

pub fn create_app_state() -> AppState {
    AppState {
        engine: Arc::new(Mutex::new(Engine::new())),
    }
}

/// Builds the REST router over a fresh engine.
pub fn create_router() -> Router<()> {
    router_with_state(create_app_state())
}

pub fn router_with_state(state: AppState) -> Router<()> {
    Router::new()
        .route("/health", get(health))
        .route("/orders", post(submit_order))
        .route("/book", get(book))
        .layer(Extension(state))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Body of `POST /orders`. A `peak` makes it an iceberg order.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OrderRequest {
    pub side: Side,
    pub id: u64,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak: Option<Quantity>,
}

impl From<OrderRequest> for Order {
    fn from(req: OrderRequest) -> Self {
        let id = OrderId(req.id);
        match req.peak {
            Some(peak) => Order::iceberg(id, req.side, req.price, req.quantity, peak),
            None => Order::limit(id, req.side, req.price, req.quantity),
        }
    }
}

async fn submit_order(
    Extension(state): Extension<AppState>,
    Json(req): Json<OrderRequest>,
) -> Response {
    let mut guard = state.engine.lock().expect("lock");
    match guard.submit_order(Order::from(req)) {
        Ok(trades) => {
            #[derive(serde::Serialize)]
            struct Out {
                trades: Vec<Trade>,
            }
            (StatusCode::OK, Json(Out { trades })).into_response()
        }
        Err(e) => {
            warn!("order rejected: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn book(Extension(state): Extension<AppState>) -> Response {
    let snapshot = state.engine.lock().expect("lock").snapshot();
    (StatusCode::OK, Json(snapshot)).into_response()
}
