//! Shared helpers for route tests: stub engines and router construction.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use tubegrab_axum::{CorsConfig, ServerConfig, bootstrap_with_engine, create_router};
use tubegrab_core::{FetchConfiguration, FetchEngine, FetchEngineError, FetchReport, FetchResult};

/// Engine that writes files into the workspace and reports chosen names,
/// the way yt-dlp reports the pre-merge filename.
#[derive(Clone, Default)]
pub struct WritingEngine {
    /// Files created in the workspace.
    pub writes: Vec<(String, Vec<u8>)>,
    /// Filenames reported back, relative to the workspace.
    pub reports: Vec<String>,
    /// Workspace directories seen, one per call.
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
    /// Workspace listing in directory order, taken after writing.
    pub listed: Arc<Mutex<Vec<String>>>,
}

impl WritingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn writes(mut self, name: &str, contents: &[u8]) -> Self {
        self.writes.push((name.to_string(), contents.to_vec()));
        self
    }

    #[must_use]
    pub fn reports(mut self, name: &str) -> Self {
        self.reports.push(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FetchEngine for WritingEngine {
    async fn fetch(
        &self,
        _url: &str,
        config: &FetchConfiguration,
    ) -> Result<FetchReport, FetchEngineError> {
        let dir = config.output_dir().unwrap().to_path_buf();
        for (name, contents) in &self.writes {
            std::fs::write(dir.join(name), contents).unwrap();
        }

        let listed: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        *self.listed.lock().unwrap() = listed;
        self.calls.lock().unwrap().push(dir.clone());

        // Let concurrent requests overlap
        tokio::time::sleep(Duration::from_millis(20)).await;

        Ok(FetchReport {
            items: self
                .reports
                .iter()
                .map(|name| FetchResult::new(dir.join(name), serde_json::Value::Null))
                .collect(),
        })
    }
}

/// Engine that fails with a fixed message after touching the workspace.
pub struct FailingEngine(pub &'static str);

#[async_trait]
impl FetchEngine for FailingEngine {
    async fn fetch(
        &self,
        _url: &str,
        config: &FetchConfiguration,
    ) -> Result<FetchReport, FetchEngineError> {
        let dir = config.output_dir().unwrap();
        std::fs::write(dir.join("partial.part"), b"half").unwrap();
        Err(FetchEngineError::Failed(self.0.to_string()))
    }
}

/// Engine that never finishes in test time.
pub struct StalledEngine;

#[async_trait]
impl FetchEngine for StalledEngine {
    async fn fetch(
        &self,
        _url: &str,
        _config: &FetchConfiguration,
    ) -> Result<FetchReport, FetchEngineError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(FetchReport::default())
    }
}

pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig::with_defaults().with_workspace_root(root)
}

pub fn app_with_config(engine: impl FetchEngine + 'static, config: &ServerConfig) -> Router {
    let ctx = bootstrap_with_engine(config, Arc::new(engine)).unwrap();
    create_router(ctx, &config.cors)
}

pub fn app(engine: impl FetchEngine + 'static, root: &Path) -> Router {
    app_with_config(engine, &test_config(root))
}

pub fn app_with_cors(engine: impl FetchEngine + 'static, root: &Path, cors: CorsConfig) -> Router {
    let mut config = test_config(root);
    config.cors = cors;
    app_with_config(engine, &config)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn entries(root: &Path) -> usize {
    std::fs::read_dir(root).unwrap().count()
}
