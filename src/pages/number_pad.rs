//! Number pad page object

use crate::session::{CalculatorSession, ElementHandle};
use crate::Result;

/// The digit pad shared by the standard and scientific views
#[derive(Debug, Clone)]
pub struct NumberPad {
    session: CalculatorSession,
}

impl NumberPad {
    pub fn new(session: CalculatorSession) -> Self {
        Self { session }
    }

    pub fn digit_button(&self, digit: u8) -> ElementHandle {
        debug_assert!(digit < 10);
        self.session.element(&format!("num{}Button", digit))
    }

    pub fn num0_button(&self) -> ElementHandle {
        self.digit_button(0)
    }

    pub fn num1_button(&self) -> ElementHandle {
        self.digit_button(1)
    }

    pub fn num2_button(&self) -> ElementHandle {
        self.digit_button(2)
    }

    pub fn num3_button(&self) -> ElementHandle {
        self.digit_button(3)
    }

    pub fn num4_button(&self) -> ElementHandle {
        self.digit_button(4)
    }

    pub fn num5_button(&self) -> ElementHandle {
        self.digit_button(5)
    }

    pub fn num6_button(&self) -> ElementHandle {
        self.digit_button(6)
    }

    pub fn num7_button(&self) -> ElementHandle {
        self.digit_button(7)
    }

    pub fn num8_button(&self) -> ElementHandle {
        self.digit_button(8)
    }

    pub fn num9_button(&self) -> ElementHandle {
        self.digit_button(9)
    }

    pub fn decimal_button(&self) -> ElementHandle {
        self.session.element("decimalSeparatorButton")
    }

    pub fn negate_button(&self) -> ElementHandle {
        self.session.element("negateButton")
    }

    /// Enter a numeric literal through button clicks. The sign is applied
    /// with the negate button after the digits, the way a user would.
    pub async fn input(&self, value: f64) -> Result<()> {
        let text = format!("{}", value.abs());
        for c in text.chars() {
            match c {
                '.' => self.decimal_button().click().await?,
                d if d.is_ascii_digit() => {
                    self.digit_button(d as u8 - b'0').click().await?;
                }
                _ => {}
            }
        }
        if value.is_sign_negative() && value != 0.0 {
            self.negate_button().click().await?;
        }
        Ok(())
    }
}
