//! Navigation menu page object

use crate::session::{CalculatorSession, ElementHandle};
use crate::Result;

/// Application modes reachable through the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorMode {
    Standard,
    Scientific,
    Programmer,
    Date,
}

impl CalculatorMode {
    /// Accessibility id of the menu item
    pub fn automation_id(&self) -> &'static str {
        match self {
            CalculatorMode::Standard => "Standard",
            CalculatorMode::Scientific => "Scientific",
            CalculatorMode::Programmer => "Programmer",
            CalculatorMode::Date => "Date",
        }
    }

    /// Header text shown once the mode is active
    pub fn header(&self) -> &'static str {
        match self {
            CalculatorMode::Standard => "Standard",
            CalculatorMode::Scientific => "Scientific",
            CalculatorMode::Programmer => "Programmer",
            CalculatorMode::Date => "Date Calculation",
        }
    }
}

/// The hamburger menu used to switch between calculator modes
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    session: CalculatorSession,
}

impl NavigationMenu {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    pub fn toggle_button(&self) -> ElementHandle {
        self.session.element("TogglePaneButton")
    }

    /// Open the menu and select a mode
    pub async fn change_mode(&self, mode: CalculatorMode) -> Result<()> {
        self.toggle_button().click().await?;
        self.session.element(mode.automation_id()).click().await
    }
}
