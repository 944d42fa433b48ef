//! Automation transport layer
//!
//! This module defines the abstract interface to the remote UI-automation
//! endpoint and its W3C-WebDriver-over-HTTP implementation.

pub mod traits;
pub mod client;
pub mod keys;

pub use client::WireClient;
pub use traits::{AutomationClient, LaunchSpec, WindowRect};
