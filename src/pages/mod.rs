//! Page objects
//!
//! One page object per application view. Each exposes named element
//! accessors (resolved lazily by accessibility id) and the small number of
//! composite gestures that have to read UI state before acting. Page
//! objects receive the session by clone; none of them own it.

pub mod app;
pub mod navigation;
pub mod number_pad;
pub mod results;
pub mod standard;
pub mod scientific;
pub mod memory;
pub mod history;
pub mod aot;

pub use aot::AlwaysOnTopPage;
pub use app::CalculatorApp;
pub use history::HistoryPanel;
pub use memory::MemoryPanel;
pub use navigation::{CalculatorMode, NavigationMenu};
pub use number_pad::NumberPad;
pub use results::CalculatorResults;
pub use scientific::{AngleMode, ScientificCalculatorPage, ScientificOperatorsPanel};
pub use standard::{StandardCalculatorPage, StandardOperatorsPanel};
