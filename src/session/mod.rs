//! Session lifecycle and element handles
//!
//! A [`CalculatorSession`] owns the single live automation session and is
//! passed into every page object. Element handles are transient and are
//! re-resolved against the current UI tree on every operation.

pub mod manager;
pub mod element;
pub mod locator;

pub use element::ElementHandle;
pub use locator::{resolve_in_source, resolve_present, source_has_id};
pub use manager::CalculatorSession;
