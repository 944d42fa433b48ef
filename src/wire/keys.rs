//! Keyboard input surface
//!
//! WebDriver encodes named keys as private-use-area codepoints embedded in
//! the keystroke string. Modifier keys are toggles: sending the same
//! modifier a second time releases it, which is how chords like
//! Shift+5 are expressed as `SHIFT '5' SHIFT`.

/// Enter key
pub const ENTER: char = '\u{e007}';
/// Shift modifier (toggle)
pub const SHIFT: char = '\u{e008}';
/// Control modifier (toggle)
pub const CONTROL: char = '\u{e009}';
/// Alt modifier (toggle)
pub const ALT: char = '\u{e00a}';
/// Escape key
pub const ESCAPE: char = '\u{e00c}';
/// Backspace key
pub const BACKSPACE: char = '\u{e003}';
/// Delete key
pub const DELETE: char = '\u{e017}';
/// Numpad multiply
pub const MULTIPLY: char = '\u{e024}';
/// Numpad add
pub const ADD: char = '\u{e025}';
/// Numpad subtract
pub const SUBTRACT: char = '\u{e027}';
/// Numpad decimal
pub const DECIMAL: char = '\u{e028}';
/// Numpad divide
pub const DIVIDE: char = '\u{e029}';
/// F9 function key
pub const F9: char = '\u{e039}';

/// Wrap text in a modifier press/release pair, e.g. `chord(SHIFT, "5")`
pub fn chord(modifier: char, text: &str) -> String {
    format!("{}{}{}", modifier, text, modifier)
}

/// Returns true for the modifier toggles
pub fn is_modifier(c: char) -> bool {
    matches!(c, SHIFT | CONTROL | ALT)
}
