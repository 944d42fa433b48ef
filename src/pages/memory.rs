//! Memory panel page object

use crate::session::{source_has_id, CalculatorSession, ElementHandle};
use crate::Result;

/// Window width that keeps the memory/history side panels visible
const PANEL_WINDOW: (u32, u32) = (1280, 720);

/// The memory panel: store/recall buttons and the stored-value list
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    session: CalculatorSession,
}

impl MemoryPanel {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    /// MS
    pub fn mem_button(&self) -> ElementHandle {
        self.session.element("memButton")
    }

    /// M+
    pub fn mem_plus(&self) -> ElementHandle {
        self.session.element("MemPlus")
    }

    /// M−
    pub fn mem_minus(&self) -> ElementHandle {
        self.session.element("MemMinus")
    }

    /// MR
    pub fn mem_recall(&self) -> ElementHandle {
        self.session.element("MemRecall")
    }

    /// MC
    pub fn memory_clear(&self) -> ElementHandle {
        self.session.element("ClearMemoryButton")
    }

    /// Marker present when no values are stored
    pub fn memory_pane_empty(&self) -> ElementHandle {
        self.session.element("MemoryPaneEmpty")
    }

    /// Stored values, newest first
    pub async fn all_items(&self) -> Result<Vec<ElementHandle>> {
        self.session.elements("MemoryListViewItem").await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        self.memory_pane_empty().exists().await
    }

    /// Open the memory flyout when the window is too narrow for the panel
    pub async fn open_memory_panel(&self) -> Result<()> {
        let source = self.session.page_source().await?;
        if source_has_id(&source, "MemoryButton") {
            self.session.element("MemoryButton").click().await?;
        }
        Ok(())
    }

    /// Grow the window until the memory label (and panel) is shown
    pub async fn resize_window_to_display_memory_label(&self) -> Result<()> {
        self.session
            .set_window_rect(&crate::wire::WindowRect::sized(PANEL_WINDOW.0, PANEL_WINDOW.1))
            .await
    }
}
