//! UI-tree rendering for the simulated calculator
//!
//! Computes the set of controls present for the current application state
//! and serializes it the way the automation endpoint would. Which ids
//! exist depends on mode, window size, flyout state, and the angle-mode /
//! trig-toggle state machines.

use super::{Mode, SimState};

/// Window width at which the memory/history side panels are shown
pub(crate) const PANEL_MIN_WIDTH: u32 = 1200;
/// Window width below which always-on-top mode hides the invert button
pub(crate) const AOT_INVERT_MIN_WIDTH: u32 = 320;

/// A control present in the current UI tree
#[derive(Debug, Clone)]
pub(crate) struct SimElement {
    /// Accessibility id
    pub id: String,
    /// Remote handle ("{id}" or "{id}#{index}" for list items)
    pub remote: String,
    /// Rendered text
    pub text: Option<String>,
    /// Tooltip text
    pub help: Option<&'static str>,
}

impl SimElement {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            remote: id.to_string(),
            text: None,
            help: None,
        }
    }

    fn with_text(id: &str, text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::new(id)
        }
    }

    fn with_help(id: &str, help: &'static str) -> Self {
        Self {
            help: Some(help),
            ..Self::new(id)
        }
    }

    fn item(id: &str, index: usize, text: String) -> Self {
        Self {
            id: id.to_string(),
            remote: format!("{}#{}", id, index),
            text: Some(text),
            help: None,
        }
    }
}

const NUMBER_PAD: &[&str] = &[
    "num0Button",
    "num1Button",
    "num2Button",
    "num3Button",
    "num4Button",
    "num5Button",
    "num6Button",
    "num7Button",
    "num8Button",
    "num9Button",
    "decimalSeparatorButton",
    "negateButton",
];

const BASIC_OPERATORS: &[&str] = &[
    "plusButton",
    "minusButton",
    "multiplyButton",
    "divideButton",
    "equalButton",
    "clearButton",
    "clearEntryButton",
    "backSpaceButton",
];

const STANDARD_OPERATORS: &[&str] = &[
    "percentButton",
    "squareRootButton",
    "xpower2Button",
    "invertButton",
];

const SCIENTIFIC_OPERATORS: &[&str] = &[
    "xpower2Button",
    "xpower3Button",
    "powerButton",
    "powerOf10Button",
    "logBase10Button",
    "logBaseEButton",
    "piButton",
    "eulerButton",
    "absButton",
    "expButton",
    "modButton",
    "invertButton",
    "openParenthesisButton",
    "closeParenthesisButton",
    "factorialButton",
    "trigButton",
    "funcButton",
];

const TRIG_BASELINE: &[&str] = &[
    "sinButton",
    "cosButton",
    "tanButton",
    "secButton",
    "cscButton",
    "cotButton",
];

const TRIG_SHIFTED: &[&str] = &[
    "invsinButton",
    "invcosButton",
    "invtanButton",
    "invsecButton",
    "invcscButton",
    "invcotButton",
];

const TRIG_HYPERBOLIC: &[&str] = &[
    "sinhButton",
    "coshButton",
    "tanhButton",
    "sechButton",
    "cschButton",
    "cothButton",
];

const TRIG_SHIFTED_HYPERBOLIC: &[&str] = &[
    "invsinhButton",
    "invcoshButton",
    "invtanhButton",
    "invsechButton",
    "invcschButton",
    "invcothButton",
];

/// Controls present for the current state, in rendered order
pub(crate) fn visible_elements(state: &SimState) -> Vec<SimElement> {
    let mut els = vec![SimElement::new("CalculatorWindow")];

    if state.aot {
        push_aot(state, &mut els);
        return els;
    }

    els.push(SimElement::with_text("Header", state.mode.header().to_string()));
    els.push(SimElement::new("TogglePaneButton"));
    if state.nav_open {
        for mode in ["Standard", "Scientific", "Programmer", "Date"] {
            els.push(SimElement::new(mode));
        }
    }

    if !matches!(state.mode, Mode::Standard | Mode::Scientific) {
        return els;
    }

    els.push(SimElement::with_text(
        "CalculatorResults",
        format!("Display is {}", state.engine.display()),
    ));
    els.push(SimElement::with_text(
        "CalculatorExpression",
        format!("Expression is {}", state.engine.expression()),
    ));

    for id in NUMBER_PAD.iter().chain(BASIC_OPERATORS) {
        els.push(SimElement::new(id));
    }

    match state.mode {
        Mode::Standard => {
            for id in STANDARD_OPERATORS {
                els.push(SimElement::new(id));
            }
            els.push(SimElement::with_help("AlwaysOnTopButton", "Keep on top"));
        }
        Mode::Scientific => {
            for id in SCIENTIFIC_OPERATORS {
                els.push(SimElement::new(id));
            }
            els.push(SimElement::new("percentButton"));
            els.push(SimElement::new("squareRootButton"));
            els.push(SimElement::new("ScientificAngleOperators"));
            els.push(SimElement::new(state.angle_button_id()));
        }
        _ => {}
    }

    push_memory(state, &mut els);
    push_history(state, &mut els);

    if state.trig_flyout {
        els.push(SimElement::new("TrigFlyout"));
        els.push(SimElement::new("trigShiftButton"));
        els.push(SimElement::new("hypShiftButton"));
        let variant = match (state.trig_shift, state.hyp_shift) {
            (false, false) => TRIG_BASELINE,
            (true, false) => TRIG_SHIFTED,
            (false, true) => TRIG_HYPERBOLIC,
            (true, true) => TRIG_SHIFTED_HYPERBOLIC,
        };
        for id in variant {
            els.push(SimElement::new(id));
        }
    }

    if state.func_flyout {
        els.push(SimElement::new("FuncFlyout"));
        for id in ["floorButton", "ceilButton", "randButton"] {
            els.push(SimElement::new(id));
        }
    }

    if state.trig_flyout || state.func_flyout || state.history_flyout || state.nav_open {
        els.push(SimElement::new("LightDismiss"));
    }

    els
}

fn push_aot(state: &SimState, els: &mut Vec<SimElement>) {
    els.push(SimElement::with_text(
        "CalculatorAlwaysOnTopResults",
        format!("Display is {}", state.engine.display()),
    ));
    els.push(SimElement::with_help(
        "ExitAlwaysOnTopButton",
        "Back to full view",
    ));
    for id in NUMBER_PAD.iter().chain(BASIC_OPERATORS) {
        els.push(SimElement::new(id));
    }
    if state.rect.width >= AOT_INVERT_MIN_WIDTH {
        els.push(SimElement::new("invertButton"));
    }
}

fn push_memory(state: &SimState, els: &mut Vec<SimElement>) {
    for id in [
        "memButton",
        "MemPlus",
        "MemMinus",
        "MemRecall",
        "ClearMemoryButton",
    ] {
        els.push(SimElement::new(id));
    }

    let panel_visible = state.rect.width >= PANEL_MIN_WIDTH || state.memory_panel_open;
    if !panel_visible {
        els.push(SimElement::new("MemoryButton"));
        return;
    }

    if state.memory.is_empty() {
        els.push(SimElement::new("MemoryPaneEmpty"));
    } else {
        els.push(SimElement::new("MemoryListView"));
        for (i, value) in state.memory.iter().enumerate() {
            els.push(SimElement::item(
                "MemoryListViewItem",
                i,
                super::engine::format_display(*value),
            ));
        }
    }
}

fn push_history(state: &SimState, els: &mut Vec<SimElement>) {
    let wide = state.rect.width >= PANEL_MIN_WIDTH;
    if wide {
        els.push(SimElement::new("HistoryLabel"));
        els.push(SimElement::new("ClearHistory"));
        if state.history.is_empty() {
            els.push(SimElement::new("HistoryEmpty"));
        } else {
            els.push(SimElement::new("HistoryListView"));
            for (i, (expr, result)) in state.history.iter().enumerate() {
                els.push(SimElement::item(
                    "HistoryListViewItem",
                    i,
                    format!("{} {}", expr, result),
                ));
            }
        }
    } else {
        els.push(SimElement::new("HistoryButton"));
    }

    if state.history_flyout {
        els.push(SimElement::new("HistoryFlyout"));
        els.push(SimElement::new("ClearHistory"));
        if state.history.is_empty() {
            els.push(SimElement::new("HistoryEmpty"));
        } else {
            for (i, (expr, result)) in state.history.iter().enumerate() {
                els.push(SimElement::item(
                    "HistoryFlyoutListViewItem",
                    i,
                    format!("{} {}", expr, result),
                ));
            }
        }
    }
}

/// Serialize the tree the way the endpoint's page-source command would
pub(crate) fn render_source(elements: &[SimElement]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<Window AutomationId=\"CalculatorWindow\">\n");
    for el in elements.iter().filter(|el| el.id != "CalculatorWindow") {
        match &el.text {
            Some(text) => out.push_str(&format!(
                "  <Element AutomationId=\"{}\">{}</Element>\n",
                el.id, text
            )),
            None => out.push_str(&format!("  <Element AutomationId=\"{}\" />\n", el.id)),
        }
    }
    out.push_str("</Window>\n");
    out
}
