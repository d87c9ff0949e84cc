use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::config::AppConfig;
use crate::error::StorefrontError;
use crate::session::Session;

/// Starts the session actor, hands out its client, and shuts it down.
pub struct StorefrontSystem {
    pub session_client: SessionClient,
    catalog: Arc<Catalog>,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    #[instrument(name = "storefront_system", skip_all, fields(buffer = config.channel_buffer))]
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        info!("Starting storefront system");

        let session_counter = Arc::new(AtomicU64::new(1));
        let next_session_id = move || {
            let id = session_counter.fetch_add(1, Ordering::SeqCst);
            format!("session_{}", id)
        };

        let (session_actor, session_resource_client) =
            ResourceActor::<Session>::new(config.channel_buffer, next_session_id);
        let session_client = SessionClient::new(session_resource_client);
        let handle = tokio::spawn(session_actor.run());

        info!("Storefront system started");
        Self {
            session_client,
            catalog: Arc::new(catalog),
            handle,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Opens a session selling from this system's catalog.
    pub async fn open_session(&self) -> Result<String, StorefrontError> {
        Ok(self.session_client.open_session(self.catalog.clone()).await?)
    }

    /// Drops the client (closing the mailbox) and waits for the actor to finish.
    ///
    /// Clones of the client held elsewhere keep the actor alive until they
    /// are dropped too.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront system");
        drop(self.session_client);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Session actor failed");
            return Err(StorefrontError::System(format!("Session actor failed: {}", e)));
        }

        info!("Storefront system shutdown complete");
        Ok(())
    }
}
