//! Application window page object

use crate::session::{CalculatorSession, ElementHandle};
use crate::wire::WindowRect;
use crate::Result;

/// The calculator application window: header, focus, and geometry
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    session: CalculatorSession,
}

impl CalculatorApp {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    /// The mode header ("Standard", "Scientific", ...)
    pub fn header(&self) -> ElementHandle {
        self.session.element("Header")
    }

    pub fn window(&self) -> ElementHandle {
        self.session.element("CalculatorWindow")
    }

    pub async fn header_text(&self) -> Result<String> {
        self.header().text().await
    }

    /// Clicking the header gives the window keyboard focus
    pub async fn ensure_focus(&self) -> Result<()> {
        self.header().click().await
    }

    pub async fn window_size(&self) -> Result<(u32, u32)> {
        let rect = self.session.window_rect().await?;
        Ok((rect.width, rect.height))
    }

    pub async fn window_position(&self) -> Result<(i32, i32)> {
        let rect = self.session.window_rect().await?;
        Ok((rect.x, rect.y))
    }

    pub async fn resize_window(&self, width: u32, height: u32) -> Result<()> {
        self.session
            .set_window_rect(&WindowRect::sized(width, height))
            .await
    }
}
