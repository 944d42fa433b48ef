//! Automation transport traits
//!
//! This module defines the abstract interface for talking to a remote
//! UI-automation endpoint. Every control is addressed by the stable
//! accessibility identifier the application assigns to it; this crate
//! owns none of those identifiers, it only consumes them.

use async_trait::async_trait;

use crate::Result;

/// Application launch specification
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Package identity or executable path
    pub app: String,
    /// Startup arguments
    pub args: Vec<String>,
}

impl LaunchSpec {
    /// Create a launch spec for an application with no arguments
    pub fn new<S: Into<String>>(app: S) -> Self {
        Self {
            app: app.into(),
            args: vec![],
        }
    }
}

/// Window geometry in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size-only constructor, position left to the window manager
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Automation client trait
///
/// A session-oriented connection to the remote automation endpoint. All
/// calls block the caller until the remote application responds or the
/// transport-level timeout elapses; the suite layers no retry policy on
/// top of this.
#[async_trait]
pub trait AutomationClient: Send + Sync + std::fmt::Debug {
    /// Launch or attach to the application under test
    async fn launch(&self, spec: &LaunchSpec) -> Result<()>;

    /// Close the application and release the transport.
    /// Calling this without a live session is a no-op.
    async fn quit(&self) -> Result<()>;

    /// Whether a session is currently attached
    fn is_attached(&self) -> bool;

    /// Find a single element by accessibility id, returning its remote handle
    async fn find_element(&self, automation_id: &str) -> Result<String>;

    /// Find all elements sharing an accessibility id, in rendered order
    async fn find_elements(&self, automation_id: &str) -> Result<Vec<String>>;

    /// Click an element
    async fn click(&self, element: &str) -> Result<()>;

    /// Send keystrokes to an element (literal characters and key codepoints,
    /// see [`crate::wire::keys`])
    async fn send_keys(&self, element: &str, keys: &str) -> Result<()>;

    /// Get the rendered text of an element
    async fn element_text(&self, element: &str) -> Result<String>;

    /// Get an element attribute, `None` if the attribute is absent
    async fn element_attribute(&self, element: &str, name: &str) -> Result<Option<String>>;

    /// Get the serialized UI tree of the application window
    async fn page_source(&self) -> Result<String>;

    /// Get the application window geometry
    async fn window_rect(&self) -> Result<WindowRect>;

    /// Set the application window geometry
    async fn set_window_rect(&self, rect: &WindowRect) -> Result<()>;
}
