//! Always-on-top mode page object
//!
//! The enter and exit buttons are mutually exclusive: which one exists
//! tells which mode the window is in, so both probes go through the
//! state-resolving locator rather than a fixed id.

use crate::session::{resolve_present, source_has_id, CalculatorSession, ElementHandle};
use crate::wire::WindowRect;
use crate::{Error, Result};

const ENTER_BUTTON: &str = "AlwaysOnTopButton";
const EXIT_BUTTON: &str = "ExitAlwaysOnTopButton";

/// Size range the always-on-top window is constrained to
const AOT_WIDTH_RANGE: (u32, u32) = (161, 502);
const AOT_HEIGHT_RANGE: (u32, u32) = (168, 502);

/// Geometry wide enough for the invert button in always-on-top mode
const AOT_INVERT_WINDOW: (u32, u32) = (400, 400);

/// Always-on-top (compact overlay) mode of the standard calculator
#[derive(Debug, Clone)]
pub struct AlwaysOnTopPage {
    session: CalculatorSession,
}

impl AlwaysOnTopPage {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    pub fn enter_button(&self) -> ElementHandle {
        self.session.element(ENTER_BUTTON)
    }

    pub fn exit_button(&self) -> ElementHandle {
        self.session.element(EXIT_BUTTON)
    }

    pub async fn enter_always_on_top(&self) -> Result<()> {
        self.enter_button().click().await
    }

    pub async fn exit_always_on_top(&self) -> Result<()> {
        self.exit_button().click().await
    }

    /// Whether the window is currently in always-on-top mode
    pub async fn is_always_on_top(&self) -> Result<bool> {
        let source = self.session.page_source().await?;
        Ok(source_has_id(&source, EXIT_BUTTON))
    }

    /// Whether the current mode offers the always-on-top button at all
    pub async fn button_present(&self) -> Result<bool> {
        let source = self.session.page_source().await?;
        Ok(source_has_id(&source, ENTER_BUTTON))
    }

    /// Tooltip of whichever toggle button the current state shows
    pub async fn tooltip_text(&self) -> Result<String> {
        let resolved = resolve_present(&self.session, &[ENTER_BUTTON, EXIT_BUTTON]).await?;
        self.session
            .element(resolved)
            .attribute("HelpText")
            .await?
            .ok_or_else(|| Error::protocol(format!("{} carries no tooltip", resolved)))
    }

    /// Whether the window size is inside the documented compact range
    pub async fn window_size_within_range(&self) -> Result<bool> {
        let rect = self.session.window_rect().await?;
        Ok(rect.width >= AOT_WIDTH_RANGE.0
            && rect.width <= AOT_WIDTH_RANGE.1
            && rect.height >= AOT_HEIGHT_RANGE.0
            && rect.height <= AOT_HEIGHT_RANGE.1)
    }

    /// Whether the window is positioned on-screen
    pub async fn window_position_within_range(&self) -> Result<bool> {
        let rect = self.session.window_rect().await?;
        Ok(rect.x >= 0 && rect.y >= 0)
    }

    /// Grow the compact window until the invert button is shown
    pub async fn resize_window_to_display_invert_button(&self) -> Result<()> {
        self.session
            .set_window_rect(&WindowRect::sized(AOT_INVERT_WINDOW.0, AOT_INVERT_WINDOW.1))
            .await
    }
}
