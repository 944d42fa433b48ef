//! Session manager
//!
//! Holds exactly one live automation session referencing the application
//! window. The session is created before the first test of a suite runs,
//! shared by every test case in the suite, and torn down after the last
//! one. Page objects receive it by clone (shared handle), never through a
//! global.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::session::ElementHandle;
use crate::wire::{AutomationClient, LaunchSpec, WindowRect};
use crate::{Error, Result};

/// Live session against the application under test
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    id: Arc<str>,
    client: Arc<dyn AutomationClient>,
    open: Arc<AtomicBool>,
}

impl CalculatorSession {
    /// Launch or attach to the application and open the session.
    ///
    /// Fails with [`Error::SessionStart`] if the application cannot be
    /// launched or the transport cannot attach within the configured
    /// attach timeout.
    pub async fn setup(config: &Config, client: Arc<dyn AutomationClient>) -> Result<Self> {
        let spec = LaunchSpec {
            app: config.app.clone(),
            args: config.app_args.clone(),
        };
        let id: Arc<str> = Uuid::new_v4().to_string().into();

        info!("Setting up calculator session {}: {}", id, spec.app);
        tokio::time::timeout(
            Duration::from_millis(config.attach_timeout),
            client.launch(&spec),
        )
        .await
        .map_err(|_| {
            Error::session_start(format!(
                "Could not attach to {} within {}ms",
                spec.app, config.attach_timeout
            ))
        })??;

        Ok(Self {
            id,
            client,
            open: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Session identifier (logging/diagnostics)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Close the application and release the transport.
    ///
    /// Idempotent: calling this when no session is open is a no-op.
    pub async fn teardown(&self) -> Result<()> {
        if self.open.swap(false, Ordering::SeqCst) {
            info!("Tearing down calculator session {}", self.id);
            self.client.quit().await?;
        }
        Ok(())
    }

    /// Whether the session is still open
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Lazily-resolved handle to a control addressed by accessibility id
    pub fn element(&self, automation_id: &str) -> ElementHandle {
        ElementHandle::by_id(self.client.clone(), automation_id)
    }

    /// All controls sharing an accessibility id (list items), pinned to
    /// their current remote handles, in rendered order
    pub async fn elements(&self, automation_id: &str) -> Result<Vec<ElementHandle>> {
        let remotes = self.client.find_elements(automation_id).await?;
        Ok(remotes
            .into_iter()
            .map(|remote| ElementHandle::pinned(self.client.clone(), remote))
            .collect())
    }

    /// Serialized UI tree of the application window
    pub async fn page_source(&self) -> Result<String> {
        self.client.page_source().await
    }

    /// Application window geometry
    pub async fn window_rect(&self) -> Result<WindowRect> {
        self.client.window_rect().await
    }

    /// Resize/move the application window
    pub async fn set_window_rect(&self, rect: &WindowRect) -> Result<()> {
        self.client.set_window_rect(rect).await
    }

    /// The underlying automation client
    pub fn client(&self) -> Arc<dyn AutomationClient> {
        self.client.clone()
    }
}

impl Drop for CalculatorSession {
    fn drop(&mut self) {
        // Teardown must be explicit; an async quit cannot run here.
        if Arc::strong_count(&self.open) == 1 && self.open.load(Ordering::SeqCst) {
            warn!("CalculatorSession dropped without teardown");
        }
    }
}
