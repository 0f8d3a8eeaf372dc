#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use common::models::query::{ListDocumentsRequest, QueryResult};
use subscription_gateway::client::DocumentStore;
use subscription_gateway::{create_router, AppState};

pub const DATABASE_ID: &str = "main";
pub const COLLECTION_ID: &str = "subscription";

/// Builds a config from key/value pairs, ignoring the process environment.
pub fn config(pairs: &[(&str, &str)]) -> AppConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup("subscription-gateway", |key| env.get(key).cloned())
        .expect("Failed to build test configuration")
}

/// Config pointing at the test database and subscription collection.
pub fn configured(extra: &[(&str, &str)]) -> AppConfig {
    let mut pairs = vec![
        ("APPWRITE_PROJECT_ID", "test-project"),
        ("APPWRITE_API_KEY", "test-key"),
        ("APPWRITE_DATABASE_ID", DATABASE_ID),
        ("APPWRITE_COLLECTION_ID_SUBSCRIPTION", COLLECTION_ID),
    ];
    pairs.extend_from_slice(extra);
    config(&pairs)
}

/// In-memory collection answering with Appwrite's list shape.
pub struct MemoryStore {
    documents: Vec<Value>,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(documents: Vec<Value>) -> Self {
        Self {
            documents,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, req: &ListDocumentsRequest) -> AppResult<QueryResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if req.database_id != DATABASE_ID || req.collection_id != COLLECTION_ID {
            return Err(AppError::Remote {
                status: 404,
                message: "Collection with the requested ID could not be found.".to_string(),
            });
        }

        let documents: Vec<Value> = self
            .documents
            .iter()
            .filter(|doc| {
                req.filters
                    .iter()
                    .all(|f| doc.get(&f.field).and_then(Value::as_str) == Some(f.value.as_str()))
            })
            .cloned()
            .collect();

        QueryResult::from_value(&json!({ "total": documents.len(), "documents": documents }))
            .map_err(|e| AppError::InvalidResponse(e.to_string()))
    }
}

/// Store whose every call fails.
pub struct FailingStore(pub &'static str);

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list_documents(&self, _req: &ListDocumentsRequest) -> AppResult<QueryResult> {
        Err(AppError::Transport(self.0.to_string()))
    }
}

pub fn app(config: AppConfig, store: Arc<dyn DocumentStore>) -> Router {
    create_router(AppState::with_store(config, store))
}

/// Sends a GET request and returns status plus raw body bytes.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).expect("Failed to parse JSON");
    (status, json)
}

pub fn subscriptions() -> Vec<Value> {
    vec![
        json!({"$id": "1", "name": "netflix", "price": 390}),
        json!({"$id": "2", "name": "spotify", "price": 149}),
        json!({"$id": "3", "name": "netflix", "price": 490}),
    ]
}
