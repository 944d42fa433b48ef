//! History panel page object

use crate::session::{CalculatorSession, ElementHandle};
use crate::wire::WindowRect;
use crate::Result;

/// Narrow geometry that collapses the history panel into a flyout button
const NARROW_WINDOW: (u32, u32) = (464, 502);
/// Wide geometry that shows the history label and list
const WIDE_WINDOW: (u32, u32) = (1280, 720);

/// The history panel and its narrow-window flyout twin
#[derive(Debug, Clone)]
pub struct HistoryPanel {
    session: CalculatorSession,
}

impl HistoryPanel {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    /// Flyout opener, present only when the window is narrow
    pub fn history_button(&self) -> ElementHandle {
        self.session.element("HistoryButton")
    }

    pub fn history_label(&self) -> ElementHandle {
        self.session.element("HistoryLabel")
    }

    pub fn clear_history_button(&self) -> ElementHandle {
        self.session.element("ClearHistory")
    }

    /// Marker present when the history is empty
    pub fn history_empty(&self) -> ElementHandle {
        self.session.element("HistoryEmpty")
    }

    /// History entries in the side panel, newest first
    pub async fn all_items(&self) -> Result<Vec<ElementHandle>> {
        self.session.elements("HistoryListViewItem").await
    }

    /// History entries in the flyout, newest first
    pub async fn all_flyout_items(&self) -> Result<Vec<ElementHandle>> {
        self.session.elements("HistoryFlyoutListViewItem").await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        self.history_empty().exists().await
    }

    pub async fn resize_window_to_display_history_button(&self) -> Result<()> {
        self.session
            .set_window_rect(&WindowRect::sized(NARROW_WINDOW.0, NARROW_WINDOW.1))
            .await
    }

    pub async fn resize_window_to_display_history_label(&self) -> Result<()> {
        self.session
            .set_window_rect(&WindowRect::sized(WIDE_WINDOW.0, WIDE_WINDOW.1))
            .await
    }

    /// Clear the history through the wide-panel clear button
    pub async fn clear_history(&self) -> Result<()> {
        self.resize_window_to_display_history_label().await?;
        self.clear_history_button().click().await
    }
}
