#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use employee_management_api::auth::generate_secret;
use employee_management_api::config::{AppConfig, StorageBackend};
use employee_management_api::database::Storage;
use employee_management_api::{app, AppState};

pub const EMAIL: &str = "jane.doe@example.com";
pub const PASSWORD: &str = "s3cret-pass";

/// Development preset on the in-memory backend with a cheap bcrypt cost
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database.backend = StorageBackend::Memory;
    config.api.enable_request_logging = false;
    config.security.jwt_secret = generate_secret();
    config.security.bcrypt_cost = 4;
    config
}

pub fn test_app_with(config: AppConfig) -> Result<Router> {
    let state = AppState::new(config, Storage::memory())?;
    Ok(app(state))
}

pub fn test_app() -> Result<Router> {
    test_app_with(test_config())
}

/// Drive the router in-process with `oneshot`. Non-JSON bodies come back as a JSON string.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    send_request(app, request).await
}

/// Send a prebuilt request, for bodies `send` cannot express
pub async fn send_request(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, value))
}

/// Register the default user through the router and return a bearer token
pub async fn login(app: &Router) -> Result<String> {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "firstName": "Jane", "lastName": "Doe", "email": EMAIL, "password": PASSWORD })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "registration failed: {}", status);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": EMAIL, "password": PASSWORD })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {} {}", status, body);

    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response has no token")
}

/// A real server on a free local port, for tests that go through `reqwest`
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;
        let router = test_app()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            port,
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        let payload = json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": email,
            "password": password
        });
        Ok(self.client.post(self.url("/api/register")).json(&payload).send().await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        let payload = json!({ "email": email, "password": password });
        Ok(self.client.post(self.url("/api/auth/login")).json(&payload).send().await?)
    }

    /// Register and log in the default user, returning the bearer token
    pub async fn token(&self) -> Result<String> {
        let res = self.register(EMAIL, PASSWORD).await?;
        anyhow::ensure!(res.status() == reqwest::StatusCode::CREATED, "registration failed: {}", res.status());

        let body: Value = self.login(EMAIL, PASSWORD).await?.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("login response has no token")
    }
}
