//! Element handles
//!
//! A handle is scoped to the current UI-tree snapshot: the underlying tree
//! mutates between queries (flyouts open and close, modes switch), so
//! handles addressed by accessibility id are re-resolved on every
//! operation rather than cached.

use std::sync::Arc;

use crate::wire::AutomationClient;
use crate::{Error, Result};

#[derive(Debug, Clone)]
enum Target {
    /// Resolved against the current UI tree on every operation
    AutomationId(String),
    /// Pinned remote handle (list items returned by a plural find)
    Remote(String),
}

/// Transient handle to a UI control
#[derive(Debug, Clone)]
pub struct ElementHandle {
    client: Arc<dyn AutomationClient>,
    target: Target,
}

impl ElementHandle {
    pub(crate) fn by_id(client: Arc<dyn AutomationClient>, automation_id: &str) -> Self {
        Self {
            client,
            target: Target::AutomationId(automation_id.to_string()),
        }
    }

    pub(crate) fn pinned(client: Arc<dyn AutomationClient>, remote: String) -> Self {
        Self {
            client,
            target: Target::Remote(remote),
        }
    }

    /// The accessibility id this handle is addressed by, if any
    pub fn automation_id(&self) -> Option<&str> {
        match &self.target {
            Target::AutomationId(id) => Some(id),
            Target::Remote(_) => None,
        }
    }

    async fn resolve(&self) -> Result<String> {
        match &self.target {
            Target::AutomationId(id) => self.client.find_element(id).await,
            Target::Remote(remote) => Ok(remote.clone()),
        }
    }

    /// Click the control
    pub async fn click(&self) -> Result<()> {
        let remote = self.resolve().await?;
        self.client.click(&remote).await
    }

    /// Send keystrokes to the control
    pub async fn send_keys(&self, keys: &str) -> Result<()> {
        let remote = self.resolve().await?;
        self.client.send_keys(&remote, keys).await
    }

    /// Rendered text of the control
    pub async fn text(&self) -> Result<String> {
        let remote = self.resolve().await?;
        self.client.element_text(&remote).await
    }

    /// Attribute value, `None` if the attribute is absent
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let remote = self.resolve().await?;
        self.client.element_attribute(&remote, name).await
    }

    /// Whether the control is present in the current UI tree
    pub async fn exists(&self) -> Result<bool> {
        match self.resolve().await {
            Ok(_) => Ok(true),
            Err(Error::ElementNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
