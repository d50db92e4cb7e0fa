//! In-memory users API for exercising the HTTP transport end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Id for which GET answers 200 with a body that is not JSON.
pub const GARBAGE_ID: &str = "garbage";

#[derive(Clone, Default)]
struct StoreState {
    users: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<AtomicUsize>,
}

/// Honest store: PUT keeps the body as sent, GET returns it verbatim.
pub struct MockUsersApi {
    pub addr: SocketAddr,
    state: StoreState,
}

impl MockUsersApi {
    pub async fn start() -> Self {
        let state = StoreState::default();

        let app = Router::new()
            .route(
                "/api/users/{id}",
                get(get_user).put(put_user).delete(delete_user),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed a raw record, bypassing the client.
    pub async fn insert(&self, id: &str, record: Value) {
        self.state.users.lock().await.insert(id.to_string(), record);
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.state.users.lock().await.contains_key(id)
    }

    pub async fn stored(&self, id: &str) -> Option<Value> {
        self.state.users.lock().await.get(id).cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }
}

async fn get_user(State(state): State<StoreState>, Path(id): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if id == GARBAGE_ID {
        return (StatusCode::OK, "not json").into_response();
    }

    match state.users.lock().await.get(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "user not found").into_response(),
    }
}

async fn put_user(
    State(state): State<StoreState>,
    Path(id): Path<String>,
    Json(record): Json<Value>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    state.users.lock().await.insert(id, record.clone());
    Json(record).into_response()
}

async fn delete_user(State(state): State<StoreState>, Path(id): Path<String>) -> StatusCode {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match state.users.lock().await.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
