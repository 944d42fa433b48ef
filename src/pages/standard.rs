//! Standard mode page objects

use crate::pages::{
    AlwaysOnTopPage, CalculatorApp, CalculatorMode, CalculatorResults, HistoryPanel, MemoryPanel,
    NavigationMenu, NumberPad,
};
use crate::session::{source_has_id, CalculatorSession, ElementHandle};
use crate::Result;

/// Operator buttons of the standard view
#[derive(Debug, Clone)]
pub struct StandardOperatorsPanel {
    session: CalculatorSession,
    pub number_pad: NumberPad,
}

impl StandardOperatorsPanel {
    pub fn new(session: CalculatorSession) -> Self {
        Self {
            number_pad: NumberPad::new(session.clone()),
            session,
        }
    }

    pub fn plus_button(&self) -> ElementHandle {
        self.session.element("plusButton")
    }

    pub fn minus_button(&self) -> ElementHandle {
        self.session.element("minusButton")
    }

    pub fn multiply_button(&self) -> ElementHandle {
        self.session.element("multiplyButton")
    }

    pub fn divide_button(&self) -> ElementHandle {
        self.session.element("divideButton")
    }

    pub fn equal_button(&self) -> ElementHandle {
        self.session.element("equalButton")
    }

    pub fn percent_button(&self) -> ElementHandle {
        self.session.element("percentButton")
    }

    pub fn square_root_button(&self) -> ElementHandle {
        self.session.element("squareRootButton")
    }

    pub fn x_power_2_button(&self) -> ElementHandle {
        self.session.element("xpower2Button")
    }

    pub fn invert_button(&self) -> ElementHandle {
        self.session.element("invertButton")
    }

    pub fn clear_button(&self) -> ElementHandle {
        self.session.element("clearButton")
    }

    pub fn clear_entry_button(&self) -> ElementHandle {
        self.session.element("clearEntryButton")
    }

    pub fn backspace_button(&self) -> ElementHandle {
        self.session.element("backSpaceButton")
    }
}

/// Composite page for the standard calculator view
#[derive(Debug, Clone)]
pub struct StandardCalculatorPage {
    session: CalculatorSession,
    pub app: CalculatorApp,
    pub navigation: NavigationMenu,
    pub operators: StandardOperatorsPanel,
    pub results: CalculatorResults,
    pub memory: MemoryPanel,
    pub history: HistoryPanel,
    pub always_on_top: AlwaysOnTopPage,
}

impl StandardCalculatorPage {
    pub fn new(session: CalculatorSession) -> Self {
        Self {
            app: CalculatorApp::new(session.clone()),
            navigation: NavigationMenu::new(session.clone()),
            operators: StandardOperatorsPanel::new(session.clone()),
            results: CalculatorResults::new(session.clone()),
            memory: MemoryPanel::new(session.clone()),
            history: HistoryPanel::new(session.clone()),
            always_on_top: AlwaysOnTopPage::new(session.clone()),
            session,
        }
    }

    pub async fn navigate_to_standard(&self) -> Result<()> {
        self.navigation.change_mode(CalculatorMode::Standard).await
    }

    /// Bring the application back to standard mode from wherever the
    /// previous test left it (other mode, always-on-top).
    pub async fn ensure_standard_mode(&self) -> Result<()> {
        let source = self.session.page_source().await?;
        if source_has_id(&source, "ExitAlwaysOnTopButton") {
            self.always_on_top.exit_always_on_top().await?;
        }
        if self.app.header_text().await? != CalculatorMode::Standard.header() {
            self.navigate_to_standard().await?;
        }
        Ok(())
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.operators.clear_button().click().await
    }

    /// Reset the display to "0" if the previous test left a value behind
    pub async fn ensure_result_text_is_zero(&self) -> Result<()> {
        if self.results.result_text().await? != "0" {
            self.clear_all().await?;
        }
        Ok(())
    }
}
