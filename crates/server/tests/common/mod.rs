//! # Common Test Utilities
//!
//! `TestApp` spawns the real server on a random port with a seedable
//! in-memory store, and can be constructed with mock model endpoints or an
//! injected pipeline double for tests that must observe pipeline calls.

// Not every test file uses every helper.
#![allow(unused)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use httpmock::MockServer;
use lorebook::{
    DomainStore, MemoryStore, Notebook, PipelineError, Source, SourcePipeline, Transformation,
    ValidatedIngest,
};
use lorebook_server::{config::AppConfig, router::create_router, state::AppState};
use reqwest::Client;
use serde_json::json;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the server with the default state: in-memory store, no model
    /// endpoints configured.
    pub async fn spawn() -> anyhow::Result<Self> {
        let state = lorebook_server::state::build_app_state(test_config(json!({"port": 0}))).await?;
        Self::spawn_with_state(state).await
    }

    /// Spawns the server with chat and embeddings endpoints pointed at the
    /// given mock server.
    pub async fn spawn_with_model(mock_server: &MockServer) -> anyhow::Result<Self> {
        let config = test_config(json!({
            "port": 0,
            "model": {
                "api_url": mock_server.url("/v1/chat/completions"),
                "model_name": "mock-chat-model",
            },
            "embedding": {
                "api_url": mock_server.url("/v1/embeddings"),
                "model_name": "mock-embedding-model",
            },
        }));
        let state = lorebook_server::state::build_app_state(config).await?;
        Self::spawn_with_state(state).await
    }

    /// Spawns the server with an injected pipeline double.
    pub async fn spawn_with_pipeline(
        pipeline: Arc<dyn SourcePipeline>,
    ) -> anyhow::Result<Self> {
        let store: Arc<dyn DomainStore> = Arc::new(MemoryStore::new());
        let state = AppState {
            config: Arc::new(test_config(json!({"port": 0}))),
            store,
            pipeline,
        };
        Self::spawn_with_state(state).await
    }

    pub async fn spawn_with_state(state: AppState) -> anyhow::Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let state_for_harness = state.clone();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] server error: {e}");
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(Self {
            address,
            client: Client::new(),
            state: state_for_harness,
            shutdown_tx: Some(shutdown_tx),
            _server_handle: server_handle,
        })
    }

    pub async fn seed_notebook(&self) -> Notebook {
        self.state
            .store
            .save_notebook(&Notebook::new("Research", "integration tests"))
            .await
            .expect("failed to seed notebook")
    }

    pub async fn seed_transformation(&self, name: &str, title: &str) -> Transformation {
        self.state
            .store
            .save_transformation(&Transformation::new(name, title, format!("{title}:")))
            .await
            .expect("failed to seed transformation")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn test_config(value: serde_json::Value) -> AppConfig {
    serde_json::from_value(value).expect("invalid test config")
}

/// Pipeline double that records invocations and returns an empty source.
#[derive(Default)]
pub struct CountingPipeline {
    calls: AtomicUsize,
}

impl CountingPipeline {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourcePipeline for CountingPipeline {
    async fn invoke(&self, job: ValidatedIngest) -> Result<Source, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Source::new(&job.notebook.id))
    }
}
