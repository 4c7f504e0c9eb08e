// src/services/database.rs
use std::sync::Arc;

use mongodb::{Client, bson::doc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Outcome of the startup connectivity check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    #[default]
    Pending,
    Connected,
    Failed,
    Disabled,
}

#[derive(Debug, Default)]
struct DatabaseState {
    status: DatabaseStatus,
    client: Option<Client>,
}

/// Shared view of the database connection. Nothing in the request path
/// depends on it; the client is kept alive for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct DatabaseHandle {
    inner: Arc<RwLock<DatabaseState>>,
}

impl DatabaseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status(&self) -> DatabaseStatus {
        self.inner.read().await.status
    }

    pub async fn client(&self) -> Option<Client> {
        self.inner.read().await.client.clone()
    }

    pub async fn mark_disabled(&self) {
        self.inner.write().await.status = DatabaseStatus::Disabled;
    }

    pub async fn mark_failed(&self) {
        let mut state = self.inner.write().await;
        state.status = DatabaseStatus::Failed;
        state.client = None;
    }

    pub async fn set_connected(&self, client: Client) {
        let mut state = self.inner.write().await;
        state.status = DatabaseStatus::Connected;
        state.client = Some(client);
    }
}

/// Opens a client and pings the server once.
pub async fn connect(uri: &str) -> mongodb::error::Result<Client> {
    let client = Client::with_uri_str(uri).await?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    Ok(client)
}

/// Runs the connectivity check in the background. A failure is logged and
/// recorded on the handle; it never stops the HTTP server.
pub fn spawn_connect(handle: DatabaseHandle, uri: Option<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Some(uri) = uri else {
            tracing::warn!("MONGO_URI not set, skipping database connection");
            handle.mark_disabled().await;
            return;
        };

        match connect(&uri).await {
            Ok(client) => {
                tracing::info!("✅ Connected to MongoDB");
                handle.set_connected(client).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "❌ MongoDB connection failed");
                handle.mark_failed().await;
            }
        }
    })
}
