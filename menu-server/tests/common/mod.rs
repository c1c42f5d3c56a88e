//! Shared helpers for router-level tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, TimeZone, Utc};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use menu_server::{Config, FixedClock, ServerState, SupportedTimezone, build_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// 2024-06-03 (Monday) at `hour:minute` São Paulo time
pub fn sao_paulo_monday(hour: u32, minute: u32) -> DateTime<Utc> {
    // São Paulo is UTC-3 all year
    Utc.with_ymd_and_hms(2024, 6, 3, hour + 3, minute, 0).unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    pub fn at(now: DateTime<Utc>) -> Self {
        let clock = Arc::new(FixedClock::new(now));
        let config = Config::with_overrides(0, SupportedTimezone::SaoPaulo);
        let state = ServerState::with_clock(config, clock.clone());
        Self {
            router: build_router(state),
            clock,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Create a product and return its id
    pub async fn create_product(&self, body: Value) -> i64 {
        let (status, json) = self.post("/products", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["product"]["id"].as_i64().unwrap()
    }

    /// Create a promotion and return its id
    pub async fn create_promotion(&self, body: Value) -> i64 {
        let (status, json) = self.post("/promotions", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["promotion"]["id"].as_i64().unwrap()
    }
}
