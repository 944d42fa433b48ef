//! Simulated calculator application
//!
//! An in-memory implementation of [`AutomationClient`] the test suites run
//! against: it renders a UI tree, routes clicks and keystrokes into a
//! display engine, and mimics the state-dependent element identities of
//! the real application (angle-mode button cycling, trig-flyout variants,
//! window-size-dependent panels, always-on-top mode).

pub mod engine;
mod tree;

use async_trait::async_trait;
use rand::Rng;
use std::sync::Mutex;
use tracing::debug;

use crate::wire::{AutomationClient, LaunchSpec, WindowRect};
use crate::{Error, Result};
use engine::{AngleUnit, BinOp, Engine, UnaryOp};
use tree::{visible_elements, SimElement};

/// Application view modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Standard,
    Scientific,
    Programmer,
    Date,
}

impl Mode {
    fn header(&self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Scientific => "Scientific",
            Mode::Programmer => "Programmer",
            Mode::Date => "Date Calculation",
        }
    }
}

/// Default window geometry (wide enough for the side panels)
const DEFAULT_RECT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    width: 1280,
    height: 720,
};

/// Default always-on-top geometry
const DEFAULT_AOT_RECT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    width: 320,
    height: 320,
};

const AOT_MIN: (u32, u32) = (161, 168);
const AOT_MAX: (u32, u32) = (502, 502);

#[derive(Debug)]
pub(crate) struct SimState {
    attached: bool,
    mode: Mode,
    engine: Engine,
    angle: AngleUnit,
    trig_shift: bool,
    hyp_shift: bool,
    trig_flyout: bool,
    func_flyout: bool,
    nav_open: bool,
    history_flyout: bool,
    memory_panel_open: bool,
    memory: Vec<f64>,
    history: Vec<(String, String)>,
    rect: WindowRect,
    aot: bool,
    normal_rect: WindowRect,
    aot_rect: Option<WindowRect>,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            attached: false,
            mode: Mode::Standard,
            engine: Engine::new(),
            angle: AngleUnit::Degrees,
            trig_shift: false,
            hyp_shift: false,
            trig_flyout: false,
            func_flyout: false,
            nav_open: false,
            history_flyout: false,
            memory_panel_open: false,
            memory: Vec::new(),
            history: Vec::new(),
            rect: DEFAULT_RECT,
            aot: false,
            normal_rect: DEFAULT_RECT,
            aot_rect: None,
        }
    }
}

impl SimState {
    /// Accessibility id of the angle-mode button currently in the tree
    fn angle_button_id(&self) -> &'static str {
        match self.angle {
            AngleUnit::Degrees => "degButton",
            AngleUnit::Radians => "radButton",
            AngleUnit::Gradians => "gradButton",
        }
    }

    fn close_flyouts(&mut self) {
        self.trig_flyout = false;
        self.func_flyout = false;
        self.history_flyout = false;
        self.nav_open = false;
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.close_flyouts();
    }

    fn equals(&mut self) {
        if let Some(entry) = self.engine.equals() {
            self.history.insert(0, entry);
        }
    }

    fn memory_store(&mut self) {
        let value = self.engine.current_value();
        self.memory.insert(0, value);
    }

    fn memory_add(&mut self) {
        let value = self.engine.current_value();
        match self.memory.first_mut() {
            Some(slot) => *slot += value,
            None => self.memory.insert(0, value),
        }
    }

    fn memory_subtract(&mut self) {
        let value = self.engine.current_value();
        match self.memory.first_mut() {
            Some(slot) => *slot -= value,
            None => self.memory.insert(0, -value),
        }
    }

    fn memory_recall(&mut self) {
        if let Some(value) = self.memory.first().copied() {
            self.engine.set_value(value);
        }
    }

    fn enter_aot(&mut self) {
        if self.mode != Mode::Standard || self.aot {
            return;
        }
        self.close_flyouts();
        self.normal_rect = self.rect;
        self.rect = self.aot_rect.unwrap_or(DEFAULT_AOT_RECT);
        self.aot = true;
    }

    fn exit_aot(&mut self) {
        if !self.aot {
            return;
        }
        self.aot_rect = Some(self.rect);
        self.rect = self.normal_rect;
        self.aot = false;
    }

    fn unary(&mut self, op: UnaryOp) {
        let angle = self.angle;
        self.engine.unary(op, angle);
    }

    /// Route a click on a control into the state machine
    fn click(&mut self, id: &str) {
        match id {
            "num0Button" | "num1Button" | "num2Button" | "num3Button" | "num4Button"
            | "num5Button" | "num6Button" | "num7Button" | "num8Button" | "num9Button" => {
                let digit = id.as_bytes()[3] - b'0';
                self.engine.digit(digit);
            }
            "decimalSeparatorButton" => self.engine.decimal(),
            "negateButton" => self.engine.negate(),
            "backSpaceButton" => self.engine.backspace(),
            "clearButton" => self.engine.clear(),
            "clearEntryButton" => self.engine.clear_entry(),

            "plusButton" => self.engine.binary(BinOp::Add),
            "minusButton" => self.engine.binary(BinOp::Subtract),
            "multiplyButton" => self.engine.binary(BinOp::Multiply),
            "divideButton" => self.engine.binary(BinOp::Divide),
            "powerButton" => self.engine.binary(BinOp::Power),
            "expButton" => self.engine.binary(BinOp::Exp),
            "modButton" => self.engine.binary(BinOp::Modulo),
            "equalButton" => self.equals(),

            "percentButton" => self.engine.percent(),
            "squareRootButton" => self.unary(UnaryOp::Sqrt),
            "xpower2Button" => self.unary(UnaryOp::Square),
            "xpower3Button" => self.unary(UnaryOp::Cube),
            "invertButton" => self.unary(UnaryOp::Invert),
            "powerOf10Button" => self.unary(UnaryOp::PowerOf10),
            "logBase10Button" => self.unary(UnaryOp::Log),
            "logBaseEButton" => self.unary(UnaryOp::Ln),
            "absButton" => self.unary(UnaryOp::Abs),
            "factorialButton" => self.unary(UnaryOp::Factorial),
            "piButton" => self.engine.pi(),
            "eulerButton" => self.engine.euler(),
            "openParenthesisButton" => self.engine.paren_open(),
            "closeParenthesisButton" => self.engine.paren_close(),

            // Angle-mode button: each click advances the three-state cycle
            "degButton" => self.angle = AngleUnit::Radians,
            "radButton" => self.angle = AngleUnit::Gradians,
            "gradButton" => self.angle = AngleUnit::Degrees,

            "trigButton" => {
                self.func_flyout = false;
                self.trig_flyout = true;
            }
            "funcButton" => {
                self.trig_flyout = false;
                self.func_flyout = true;
            }
            "trigShiftButton" => self.trig_shift = !self.trig_shift,
            "hypShiftButton" => self.hyp_shift = !self.hyp_shift,
            "LightDismiss" => self.close_flyouts(),

            "floorButton" | "ceilButton" | "randButton" => {
                match id {
                    "floorButton" => self.unary(UnaryOp::Floor),
                    "ceilButton" => self.unary(UnaryOp::Ceil),
                    _ => {
                        let value = rand::thread_rng().gen::<f64>();
                        self.engine.constant(value, "rand()");
                    }
                }
                self.func_flyout = false;
            }

            "sinButton" | "cosButton" | "tanButton" | "secButton" | "cscButton" | "cotButton"
            | "invsinButton" | "invcosButton" | "invtanButton" | "invsecButton"
            | "invcscButton" | "invcotButton" | "sinhButton" | "coshButton" | "tanhButton"
            | "sechButton" | "cschButton" | "cothButton" | "invsinhButton" | "invcoshButton"
            | "invtanhButton" | "invsechButton" | "invcschButton" | "invcothButton" => {
                let op = trig_op(id);
                self.unary(op);
                self.trig_flyout = false;
            }

            "memButton" => self.memory_store(),
            "MemPlus" => self.memory_add(),
            "MemMinus" => self.memory_subtract(),
            "MemRecall" => self.memory_recall(),
            "ClearMemoryButton" => self.memory.clear(),
            "MemoryButton" => self.memory_panel_open = true,

            "HistoryButton" => self.history_flyout = true,
            "ClearHistory" => self.history.clear(),

            "TogglePaneButton" => self.nav_open = true,
            "Standard" => self.set_mode(Mode::Standard),
            "Scientific" => self.set_mode(Mode::Scientific),
            "Programmer" => self.set_mode(Mode::Programmer),
            "Date" => self.set_mode(Mode::Date),

            "AlwaysOnTopButton" => self.enter_aot(),
            "ExitAlwaysOnTopButton" => self.exit_aot(),

            // Displays, labels, list items, focus targets: click is a no-op
            _ => {}
        }
    }

    /// Route a keystroke sequence into the state machine. Modifier keys
    /// toggle within one call and are released when it ends.
    fn send_keys(&mut self, keys: &str) {
        let mut shift = false;
        let mut ctrl = false;
        let mut alt = false;

        for c in keys.chars() {
            match c {
                crate::wire::keys::SHIFT => shift = !shift,
                crate::wire::keys::CONTROL => ctrl = !ctrl,
                crate::wire::keys::ALT => alt = !alt,
                _ => self.key(c, shift, ctrl, alt),
            }
        }
    }

    fn key(&mut self, c: char, shift: bool, ctrl: bool, alt: bool) {
        use crate::wire::keys;

        if ctrl {
            // Memory and history hotkeys are disabled in always-on-top mode
            if self.aot {
                return;
            }
            match c.to_ascii_lowercase() {
                'm' => self.memory_store(),
                'p' => self.memory_add(),
                'q' => self.memory_subtract(),
                'r' => self.memory_recall(),
                'l' => self.memory.clear(),
                'h' => self.history_flyout = true,
                _ => {}
            }
            return;
        }

        if alt {
            match c {
                '1' => self.set_mode(Mode::Standard),
                '2' => self.set_mode(Mode::Scientific),
                '4' => self.set_mode(Mode::Programmer),
                '5' => self.set_mode(Mode::Date),
                _ => {}
            }
            return;
        }

        if shift {
            match c {
                '5' => self.engine.percent(),
                '2' => self.unary(UnaryOp::Sqrt),
                _ => {}
            }
            return;
        }

        match c {
            '0'..='9' => self.engine.digit(c as u8 - b'0'),
            '.' | keys::DECIMAL => self.engine.decimal(),
            '+' | keys::ADD => self.engine.binary(BinOp::Add),
            '-' | keys::SUBTRACT => self.engine.binary(BinOp::Subtract),
            '*' | keys::MULTIPLY => self.engine.binary(BinOp::Multiply),
            '/' | keys::DIVIDE => self.engine.binary(BinOp::Divide),
            '=' | keys::ENTER => self.equals(),
            'r' => self.unary(UnaryOp::Invert),
            'q' => self.unary(UnaryOp::Square),
            keys::ESCAPE => self.engine.clear(),
            keys::DELETE => self.engine.clear_entry(),
            keys::BACKSPACE => self.engine.backspace(),
            keys::F9 => self.engine.negate(),
            _ => {}
        }
    }
}

fn trig_op(id: &str) -> UnaryOp {
    match id {
        "sinButton" => UnaryOp::Sin,
        "cosButton" => UnaryOp::Cos,
        "tanButton" => UnaryOp::Tan,
        "secButton" => UnaryOp::Sec,
        "cscButton" => UnaryOp::Csc,
        "cotButton" => UnaryOp::Cot,
        "invsinButton" => UnaryOp::InvSin,
        "invcosButton" => UnaryOp::InvCos,
        "invtanButton" => UnaryOp::InvTan,
        "invsecButton" => UnaryOp::InvSec,
        "invcscButton" => UnaryOp::InvCsc,
        "invcotButton" => UnaryOp::InvCot,
        "sinhButton" => UnaryOp::Sinh,
        "coshButton" => UnaryOp::Cosh,
        "tanhButton" => UnaryOp::Tanh,
        "sechButton" => UnaryOp::Sech,
        "cschButton" => UnaryOp::Csch,
        "cothButton" => UnaryOp::Coth,
        "invsinhButton" => UnaryOp::InvSinh,
        "invcoshButton" => UnaryOp::InvCosh,
        "invtanhButton" => UnaryOp::InvTanh,
        "invsechButton" => UnaryOp::InvSech,
        "invcschButton" => UnaryOp::InvCsch,
        "invcothButton" => UnaryOp::InvCoth,
        _ => unreachable!("not a trig button: {}", id),
    }
}

/// Simulated calculator implementing the automation transport
#[derive(Debug)]
pub struct SimCalculator {
    state: Mutex<SimState>,
}

impl SimCalculator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SimState::default()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SimState>> {
        self.state
            .lock()
            .map_err(|e| Error::transport(format!("Lock error: {}", e)))
    }

    fn checked(&self) -> Result<std::sync::MutexGuard<'_, SimState>> {
        let state = self.lock()?;
        if !state.attached {
            return Err(Error::transport("No open session"));
        }
        Ok(state)
    }

    fn lookup(state: &SimState, remote: &str) -> Result<SimElement> {
        visible_elements(state)
            .into_iter()
            .find(|el| el.remote == remote)
            .ok_or_else(|| Error::element_not_found(remote.to_string()))
    }
}

impl Default for SimCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomationClient for SimCalculator {
    async fn launch(&self, spec: &LaunchSpec) -> Result<()> {
        debug!("Simulated launch: {}", spec.app);
        let mut state = self.lock()?;
        *state = SimState {
            attached: true,
            ..SimState::default()
        };
        Ok(())
    }

    async fn quit(&self) -> Result<()> {
        let mut state = self.lock()?;
        state.attached = false;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.lock().map(|state| state.attached).unwrap_or(false)
    }

    async fn find_element(&self, automation_id: &str) -> Result<String> {
        let state = self.checked()?;
        visible_elements(&state)
            .into_iter()
            .find(|el| el.id == automation_id)
            .map(|el| el.remote)
            .ok_or_else(|| Error::element_not_found(automation_id.to_string()))
    }

    async fn find_elements(&self, automation_id: &str) -> Result<Vec<String>> {
        let state = self.checked()?;
        Ok(visible_elements(&state)
            .into_iter()
            .filter(|el| el.id == automation_id)
            .map(|el| el.remote)
            .collect())
    }

    async fn click(&self, element: &str) -> Result<()> {
        let mut state = self.checked()?;
        let target = Self::lookup(&state, element)?;
        debug!("Simulated click: {}", target.id);
        state.click(&target.id);
        Ok(())
    }

    async fn send_keys(&self, element: &str, keys: &str) -> Result<()> {
        let mut state = self.checked()?;
        // Keystrokes go to the focused window regardless of target element
        Self::lookup(&state, element)?;
        state.send_keys(keys);
        Ok(())
    }

    async fn element_text(&self, element: &str) -> Result<String> {
        let state = self.checked()?;
        let target = Self::lookup(&state, element)?;
        Ok(target.text.unwrap_or_default())
    }

    async fn element_attribute(&self, element: &str, name: &str) -> Result<Option<String>> {
        let state = self.checked()?;
        let target = Self::lookup(&state, element)?;
        Ok(match name {
            "AutomationId" => Some(target.id),
            "HelpText" => target.help.map(String::from),
            _ => None,
        })
    }

    async fn page_source(&self) -> Result<String> {
        let state = self.checked()?;
        Ok(tree::render_source(&visible_elements(&state)))
    }

    async fn window_rect(&self) -> Result<WindowRect> {
        let state = self.checked()?;
        Ok(state.rect)
    }

    async fn set_window_rect(&self, rect: &WindowRect) -> Result<()> {
        let mut state = self.checked()?;
        let mut rect = *rect;
        if state.aot {
            rect.width = rect.width.clamp(AOT_MIN.0, AOT_MAX.0);
            rect.height = rect.height.clamp(AOT_MIN.1, AOT_MAX.1);
        }
        state.rect = rect;
        Ok(())
    }
}
