//! Scientific mode page objects
//!
//! The scientific view carries the two state-dependent element identities
//! of the application: the angle-mode button (one of three ids, cycling on
//! click) and the trig flyout (four mutually exclusive variants keyed by
//! the shift/hyperbolic toggles).

use tracing::debug;

use crate::pages::{CalculatorApp, CalculatorMode, CalculatorResults, NavigationMenu, NumberPad};
use crate::session::{resolve_present, source_has_id, CalculatorSession, ElementHandle};
use crate::{Error, Result};

/// Angle mode of the scientific calculator. Exactly one of the three
/// buttons exists in the UI tree at a time; a click advances the cycle
/// Degrees → Radians → Gradians → Degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Degrees,
    Radians,
    Gradians,
}

impl AngleMode {
    pub const ALL: [AngleMode; 3] = [AngleMode::Degrees, AngleMode::Radians, AngleMode::Gradians];

    pub fn automation_id(&self) -> &'static str {
        match self {
            AngleMode::Degrees => "degButton",
            AngleMode::Radians => "radButton",
            AngleMode::Gradians => "gradButton",
        }
    }

    fn from_automation_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.automation_id() == id)
    }
}

/// Number of states in the angle-mode cycle; bounds the set-mode loop
const ANGLE_MODE_STATES: usize = 3;

/// Operator buttons of the scientific view
#[derive(Debug, Clone)]
pub struct ScientificOperatorsPanel {
    session: CalculatorSession,
    pub number_pad: NumberPad,
}

impl ScientificOperatorsPanel {
    pub fn new(session: CalculatorSession) -> Self {
        Self {
            number_pad: NumberPad::new(session.clone()),
            session,
        }
    }

    fn button(&self, id: &str) -> ElementHandle {
        self.session.element(id)
    }

    pub fn x_power_2_button(&self) -> ElementHandle {
        self.button("xpower2Button")
    }

    pub fn x_power_3_button(&self) -> ElementHandle {
        self.button("xpower3Button")
    }

    pub fn x_power_y_button(&self) -> ElementHandle {
        self.button("powerButton")
    }

    pub fn power_of_10_button(&self) -> ElementHandle {
        self.button("powerOf10Button")
    }

    pub fn log_button(&self) -> ElementHandle {
        self.button("logBase10Button")
    }

    pub fn ln_button(&self) -> ElementHandle {
        self.button("logBaseEButton")
    }

    pub fn pi_button(&self) -> ElementHandle {
        self.button("piButton")
    }

    pub fn euler_button(&self) -> ElementHandle {
        self.button("eulerButton")
    }

    pub fn abs_button(&self) -> ElementHandle {
        self.button("absButton")
    }

    pub fn exp_button(&self) -> ElementHandle {
        self.button("expButton")
    }

    pub fn mod_button(&self) -> ElementHandle {
        self.button("modButton")
    }

    pub fn invert_button(&self) -> ElementHandle {
        self.button("invertButton")
    }

    pub fn square_root_button(&self) -> ElementHandle {
        self.button("squareRootButton")
    }

    pub fn percent_button(&self) -> ElementHandle {
        self.button("percentButton")
    }

    pub fn parenthesis_left_button(&self) -> ElementHandle {
        self.button("openParenthesisButton")
    }

    pub fn parenthesis_right_button(&self) -> ElementHandle {
        self.button("closeParenthesisButton")
    }

    pub fn factorial_button(&self) -> ElementHandle {
        self.button("factorialButton")
    }

    pub fn plus_button(&self) -> ElementHandle {
        self.button("plusButton")
    }

    pub fn minus_button(&self) -> ElementHandle {
        self.button("minusButton")
    }

    pub fn multiply_button(&self) -> ElementHandle {
        self.button("multiplyButton")
    }

    pub fn divide_button(&self) -> ElementHandle {
        self.button("divideButton")
    }

    pub fn equal_button(&self) -> ElementHandle {
        self.button("equalButton")
    }

    pub fn negate_button(&self) -> ElementHandle {
        self.button("negateButton")
    }

    pub fn clear_button(&self) -> ElementHandle {
        self.button("clearButton")
    }

    pub fn clear_entry_button(&self) -> ElementHandle {
        self.button("clearEntryButton")
    }

    pub fn backspace_button(&self) -> ElementHandle {
        self.button("backSpaceButton")
    }

    pub fn trig_button(&self) -> ElementHandle {
        self.button("trigButton")
    }

    pub fn func_button(&self) -> ElementHandle {
        self.button("funcButton")
    }

    pub fn trig_shift_button(&self) -> ElementHandle {
        self.button("trigShiftButton")
    }

    pub fn hyp_shift_button(&self) -> ElementHandle {
        self.button("hypShiftButton")
    }

    pub fn light_dismiss(&self) -> ElementHandle {
        self.button("LightDismiss")
    }

    pub fn sin_button(&self) -> ElementHandle {
        self.button("sinButton")
    }

    pub fn cos_button(&self) -> ElementHandle {
        self.button("cosButton")
    }

    pub fn tan_button(&self) -> ElementHandle {
        self.button("tanButton")
    }

    pub fn sec_button(&self) -> ElementHandle {
        self.button("secButton")
    }

    pub fn csc_button(&self) -> ElementHandle {
        self.button("cscButton")
    }

    pub fn cot_button(&self) -> ElementHandle {
        self.button("cotButton")
    }

    pub fn inv_sin_button(&self) -> ElementHandle {
        self.button("invsinButton")
    }

    pub fn inv_cos_button(&self) -> ElementHandle {
        self.button("invcosButton")
    }

    pub fn inv_tan_button(&self) -> ElementHandle {
        self.button("invtanButton")
    }

    pub fn inv_sec_button(&self) -> ElementHandle {
        self.button("invsecButton")
    }

    pub fn inv_csc_button(&self) -> ElementHandle {
        self.button("invcscButton")
    }

    pub fn inv_cot_button(&self) -> ElementHandle {
        self.button("invcotButton")
    }

    pub fn sinh_button(&self) -> ElementHandle {
        self.button("sinhButton")
    }

    pub fn cosh_button(&self) -> ElementHandle {
        self.button("coshButton")
    }

    pub fn tanh_button(&self) -> ElementHandle {
        self.button("tanhButton")
    }

    pub fn sech_button(&self) -> ElementHandle {
        self.button("sechButton")
    }

    pub fn csch_button(&self) -> ElementHandle {
        self.button("cschButton")
    }

    pub fn coth_button(&self) -> ElementHandle {
        self.button("cothButton")
    }

    pub fn inv_sinh_button(&self) -> ElementHandle {
        self.button("invsinhButton")
    }

    pub fn inv_cosh_button(&self) -> ElementHandle {
        self.button("invcoshButton")
    }

    pub fn inv_tanh_button(&self) -> ElementHandle {
        self.button("invtanhButton")
    }

    pub fn inv_sech_button(&self) -> ElementHandle {
        self.button("invsechButton")
    }

    pub fn inv_csch_button(&self) -> ElementHandle {
        self.button("invcschButton")
    }

    pub fn inv_coth_button(&self) -> ElementHandle {
        self.button("invcothButton")
    }

    pub fn floor_button(&self) -> ElementHandle {
        self.button("floorButton")
    }

    pub fn ceil_button(&self) -> ElementHandle {
        self.button("ceilButton")
    }

    pub fn rand_button(&self) -> ElementHandle {
        self.button("randButton")
    }

    /// Resolve which angle mode is active from one tree snapshot
    pub async fn current_angle_mode(&self) -> Result<AngleMode> {
        let candidates = [
            AngleMode::Degrees.automation_id(),
            AngleMode::Radians.automation_id(),
            AngleMode::Gradians.automation_id(),
        ];
        let resolved = resolve_present(&self.session, &candidates).await?;
        AngleMode::from_automation_id(resolved)
            .ok_or_else(|| Error::protocol(format!("unexpected angle button id: {}", resolved)))
    }

    /// Drive the angle-mode button until the target mode is active.
    ///
    /// The button cycles through three states, so the target is reachable
    /// within two clicks; the loop is bounded at the cycle length and
    /// fails with a timeout if the control never converges.
    ///
    /// Returns the number of clicks issued.
    pub async fn set_angle_mode(&self, target: AngleMode) -> Result<usize> {
        for clicks in 0..ANGLE_MODE_STATES {
            let current = self.current_angle_mode().await?;
            if current == target {
                return Ok(clicks);
            }
            debug!("Angle mode {:?} -> clicking towards {:?}", current, target);
            self.button(current.automation_id()).click().await?;
        }

        let current = self.current_angle_mode().await?;
        if current == target {
            Ok(ANGLE_MODE_STATES)
        } else {
            Err(Error::timeout(format!(
                "angle mode did not reach {:?} after {} clicks",
                target, ANGLE_MODE_STATES
            )))
        }
    }

    /// Bring the trig flyout toggles back to the baseline (neither shift
    /// nor hyperbolic). Opens the flyout, classifies the visible variant
    /// by its marker id, and issues the toggle clicks needed to return.
    /// The flyout is dismissed only when no toggles were needed.
    ///
    /// Returns the number of toggle clicks issued.
    pub async fn reset_trig_flyout(&self) -> Result<usize> {
        self.trig_button().click().await?;
        let source = self.session.page_source().await?;

        if source_has_id(&source, "sinButton") {
            self.light_dismiss().click().await?;
            Ok(0)
        } else if source_has_id(&source, "invsinButton") {
            self.trig_shift_button().click().await?;
            Ok(1)
        } else if source_has_id(&source, "sinhButton") {
            self.hyp_shift_button().click().await?;
            Ok(1)
        } else if source_has_id(&source, "invsinhButton") {
            self.trig_shift_button().click().await?;
            self.hyp_shift_button().click().await?;
            Ok(2)
        } else {
            // Exhaustiveness check: the flyout must be one of the four
            // known variants.
            Err(Error::element_not_found(
                "no trig flyout variant marker in UI tree",
            ))
        }
    }
}

/// Composite page for the scientific calculator view
#[derive(Debug, Clone)]
pub struct ScientificCalculatorPage {
    pub app: CalculatorApp,
    pub navigation: NavigationMenu,
    pub operators: ScientificOperatorsPanel,
    pub results: CalculatorResults,
}

impl ScientificCalculatorPage {
    pub fn new(session: CalculatorSession) -> Self {
        Self {
            app: CalculatorApp::new(session.clone()),
            navigation: NavigationMenu::new(session.clone()),
            operators: ScientificOperatorsPanel::new(session.clone()),
            results: CalculatorResults::new(session),
        }
    }

    pub async fn navigate_to_scientific(&self) -> Result<()> {
        self.navigation.change_mode(CalculatorMode::Scientific).await
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.operators.clear_button().click().await
    }

    pub async fn result_text(&self) -> Result<String> {
        self.results.result_text().await
    }
}
