//! Result and expression display page object

use crate::session::{CalculatorSession, ElementHandle};
use crate::Result;

/// Readers for the rendered result and expression displays.
///
/// The accessible text carries a narration prefix ("Display is 27"); the
/// readers strip it so tests compare against the bare rendered value.
#[derive(Debug, Clone)]
pub struct CalculatorResults {
    session: CalculatorSession,
}

impl CalculatorResults {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    pub fn result_display(&self) -> ElementHandle {
        self.session.element("CalculatorResults")
    }

    pub fn expression_display(&self) -> ElementHandle {
        self.session.element("CalculatorExpression")
    }

    fn strip_prefix(text: &str, prefix: &str) -> String {
        text.strip_prefix(prefix).unwrap_or(text).trim().to_string()
    }

    /// Text of the result display
    pub async fn result_text(&self) -> Result<String> {
        let text = self.result_display().text().await?;
        Ok(Self::strip_prefix(&text, "Display is "))
    }

    /// Text of the result display in always-on-top mode
    pub async fn aot_result_text(&self) -> Result<String> {
        let text = self
            .session
            .element("CalculatorAlwaysOnTopResults")
            .text()
            .await?;
        Ok(Self::strip_prefix(&text, "Display is "))
    }

    /// Text of the expression display
    pub async fn expression_text(&self) -> Result<String> {
        let text = self.expression_display().text().await?;
        Ok(Self::strip_prefix(&text, "Expression is"))
    }

    /// Whether both displays are back to the cleared state
    pub async fn is_cleared(&self) -> Result<bool> {
        Ok(self.result_text().await? == "0" && self.expression_text().await?.is_empty())
    }
}
