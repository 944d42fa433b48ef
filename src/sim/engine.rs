//! Display engine for the simulated calculator
//!
//! Immediate-execution arithmetic with a result display and an expression
//! display, mirroring how a desktop calculator renders its state. The
//! engine knows nothing about UI elements; the `sim` front end maps
//! button ids and keystrokes onto it.

use std::f64::consts::{E, PI};

/// Angle unit for the trigonometric operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
    Gradians,
}

impl AngleUnit {
    fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Degrees => x.to_radians(),
            AngleUnit::Radians => x,
            AngleUnit::Gradians => x * PI / 200.0,
        }
    }

    fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Degrees => x.to_degrees(),
            AngleUnit::Radians => x,
            AngleUnit::Gradians => x * 200.0 / PI,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Exp,
    Modulo,
}

impl BinOp {
    fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "×",
            BinOp::Divide => "÷",
            BinOp::Power => "^",
            BinOp::Exp => "exp",
            BinOp::Modulo => "mod",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, MathError> {
        match self {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Subtract => Ok(lhs - rhs),
            BinOp::Multiply => Ok(lhs * rhs),
            BinOp::Divide | BinOp::Modulo if rhs == 0.0 => {
                if lhs == 0.0 {
                    Err(MathError::Undefined)
                } else {
                    Err(MathError::DivideByZero)
                }
            }
            BinOp::Divide => Ok(lhs / rhs),
            BinOp::Modulo => Ok(lhs % rhs),
            BinOp::Power => Ok(lhs.powf(rhs)),
            BinOp::Exp => Ok(lhs * 10f64.powf(rhs)),
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Sqrt,
    Square,
    Cube,
    Invert,
    PowerOf10,
    Log,
    Ln,
    Abs,
    Factorial,
    Floor,
    Ceil,
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    InvSin,
    InvCos,
    InvTan,
    InvSec,
    InvCsc,
    InvCot,
    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
    InvSinh,
    InvCosh,
    InvTanh,
    InvSech,
    InvCsch,
    InvCoth,
}

impl UnaryOp {
    /// Expression-display rendering, e.g. `√(0.1)` or `square (9)`
    fn wrap(&self, operand: &str) -> String {
        match self {
            UnaryOp::Sqrt => format!("√({})", operand),
            UnaryOp::Square => format!("square ({})", operand),
            UnaryOp::Cube => format!("cube ({})", operand),
            UnaryOp::Invert => format!("1/({})", operand),
            UnaryOp::PowerOf10 => format!("10^({})", operand),
            UnaryOp::Log => format!("log({})", operand),
            UnaryOp::Ln => format!("ln({})", operand),
            UnaryOp::Abs => format!("abs({})", operand),
            UnaryOp::Factorial => format!("fact({})", operand),
            UnaryOp::Floor => format!("floor({})", operand),
            UnaryOp::Ceil => format!("ceil({})", operand),
            UnaryOp::Sin => format!("sin({})", operand),
            UnaryOp::Cos => format!("cos({})", operand),
            UnaryOp::Tan => format!("tan({})", operand),
            UnaryOp::Sec => format!("sec({})", operand),
            UnaryOp::Csc => format!("csc({})", operand),
            UnaryOp::Cot => format!("cot({})", operand),
            UnaryOp::InvSin => format!("asin({})", operand),
            UnaryOp::InvCos => format!("acos({})", operand),
            UnaryOp::InvTan => format!("atan({})", operand),
            UnaryOp::InvSec => format!("asec({})", operand),
            UnaryOp::InvCsc => format!("acsc({})", operand),
            UnaryOp::InvCot => format!("acot({})", operand),
            UnaryOp::Sinh => format!("sinh({})", operand),
            UnaryOp::Cosh => format!("cosh({})", operand),
            UnaryOp::Tanh => format!("tanh({})", operand),
            UnaryOp::Sech => format!("sech({})", operand),
            UnaryOp::Csch => format!("csch({})", operand),
            UnaryOp::Coth => format!("coth({})", operand),
            UnaryOp::InvSinh => format!("asinh({})", operand),
            UnaryOp::InvCosh => format!("acosh({})", operand),
            UnaryOp::InvTanh => format!("atanh({})", operand),
            UnaryOp::InvSech => format!("asech({})", operand),
            UnaryOp::InvCsch => format!("acsch({})", operand),
            UnaryOp::InvCoth => format!("acoth({})", operand),
        }
    }

    fn apply(&self, x: f64, angle: AngleUnit) -> Result<f64, MathError> {
        let checked = |v: f64| {
            if v.is_nan() {
                Err(MathError::InvalidInput)
            } else if v.is_infinite() {
                Err(MathError::Overflow)
            } else {
                Ok(v)
            }
        };

        match self {
            UnaryOp::Sqrt => {
                if x < 0.0 {
                    Err(MathError::InvalidInput)
                } else {
                    Ok(x.sqrt())
                }
            }
            UnaryOp::Square => Ok(x * x),
            UnaryOp::Cube => Ok(x * x * x),
            UnaryOp::Invert => {
                if x == 0.0 {
                    Err(MathError::DivideByZero)
                } else {
                    Ok(1.0 / x)
                }
            }
            UnaryOp::PowerOf10 => checked(10f64.powf(x)),
            UnaryOp::Log => {
                if x <= 0.0 {
                    Err(MathError::InvalidInput)
                } else {
                    Ok(x.log10())
                }
            }
            UnaryOp::Ln => {
                if x <= 0.0 {
                    Err(MathError::InvalidInput)
                } else {
                    Ok(x.ln())
                }
            }
            UnaryOp::Abs => Ok(x.abs()),
            UnaryOp::Factorial => factorial(x),
            UnaryOp::Floor => Ok(x.floor()),
            UnaryOp::Ceil => Ok(x.ceil()),

            UnaryOp::Sin => Ok(angle.to_radians(x).sin()),
            UnaryOp::Cos => Ok(angle.to_radians(x).cos()),
            UnaryOp::Tan => checked(angle.to_radians(x).tan()),
            UnaryOp::Sec => reciprocal(angle.to_radians(x).cos()),
            UnaryOp::Csc => reciprocal(angle.to_radians(x).sin()),
            UnaryOp::Cot => reciprocal(angle.to_radians(x).tan()),

            UnaryOp::InvSin => checked(angle.from_radians(x.asin())),
            UnaryOp::InvCos => checked(angle.from_radians(x.acos())),
            UnaryOp::InvTan => Ok(angle.from_radians(x.atan())),
            UnaryOp::InvSec => {
                reciprocal(x).and_then(|r| checked(angle.from_radians(r.acos())))
            }
            UnaryOp::InvCsc => {
                reciprocal(x).and_then(|r| checked(angle.from_radians(r.asin())))
            }
            UnaryOp::InvCot => reciprocal(x).map(|r| angle.from_radians(r.atan())),

            UnaryOp::Sinh => checked(x.sinh()),
            UnaryOp::Cosh => checked(x.cosh()),
            UnaryOp::Tanh => Ok(x.tanh()),
            UnaryOp::Sech => reciprocal(x.cosh()),
            UnaryOp::Csch => reciprocal(x.sinh()),
            UnaryOp::Coth => reciprocal(x.tanh()),
            UnaryOp::InvSinh => Ok(x.asinh()),
            UnaryOp::InvCosh => checked(x.acosh()),
            UnaryOp::InvTanh => checked(x.atanh()),
            UnaryOp::InvSech => reciprocal(x).and_then(|r| checked(r.acosh())),
            UnaryOp::InvCsch => reciprocal(x).map(|r| r.asinh()),
            UnaryOp::InvCoth => reciprocal(x).and_then(|r| checked(r.atanh())),
        }
    }
}

fn reciprocal(x: f64) -> Result<f64, MathError> {
    if x == 0.0 {
        Err(MathError::DivideByZero)
    } else {
        Ok(1.0 / x)
    }
}

fn factorial(x: f64) -> Result<f64, MathError> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(MathError::InvalidInput);
    }
    if x > 170.0 {
        return Err(MathError::Overflow);
    }
    Ok((1..=(x as u64)).fold(1.0, |acc, n| acc * n as f64))
}

/// Arithmetic failures the display renders as error text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    DivideByZero,
    Undefined,
    InvalidInput,
    Overflow,
}

impl MathError {
    fn message(&self) -> &'static str {
        match self {
            MathError::DivideByZero => "Cannot divide by zero",
            MathError::Undefined => "Result is undefined",
            MathError::InvalidInput => "Invalid input",
            MathError::Overflow => "Overflow",
        }
    }
}

/// Current operand: either keystrokes being typed or a computed value
#[derive(Debug, Clone)]
enum Entry {
    Typing(String),
    Value(f64),
}

const MAX_ENTRY_DIGITS: usize = 16;

/// Immediate-execution display engine
#[derive(Debug, Clone)]
pub struct Engine {
    entry: Entry,
    /// Rendered token for the current operand (set by unary wrapping)
    pending_token: Option<String>,
    acc: f64,
    pending: Option<BinOp>,
    tokens: Vec<String>,
    /// Saved contexts for open parentheses
    stack: Vec<(f64, Option<BinOp>)>,
    error: Option<&'static str>,
    evaluated: bool,
    after_op: bool,
    /// The current operand's token is already in `tokens` (closed group)
    operand_committed: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            entry: Entry::Typing("0".to_string()),
            pending_token: None,
            acc: 0.0,
            pending: None,
            tokens: Vec::new(),
            stack: Vec::new(),
            error: None,
            evaluated: false,
            after_op: false,
            operand_committed: false,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result display text
    pub fn display(&self) -> String {
        if let Some(message) = self.error {
            return message.to_string();
        }
        match &self.entry {
            Entry::Typing(s) => s.clone(),
            Entry::Value(v) => format_display(*v),
        }
    }

    /// Expression display text
    pub fn expression(&self) -> String {
        let mut tokens = self.tokens.clone();
        if let Some(token) = &self.pending_token {
            tokens.push(token.clone());
        }
        render_tokens(&tokens)
    }

    /// Whether the display shows an error message
    pub fn in_error(&self) -> bool {
        self.error.is_some()
    }

    /// Value of the current operand
    pub fn current_value(&self) -> f64 {
        match &self.entry {
            Entry::Typing(s) => {
                let trimmed = s.trim_end_matches('.');
                if trimmed.is_empty() || trimmed == "-" {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(0.0)
                }
            }
            Entry::Value(v) => *v,
        }
    }

    /// Replace the current operand (memory recall)
    pub fn set_value(&mut self, value: f64) {
        if self.error.is_some() {
            self.clear();
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }
        self.entry = Entry::Value(value);
        self.pending_token = None;
        self.after_op = false;
        self.operand_committed = false;
    }

    fn begin_operand(&mut self) {
        if self.error.is_some() {
            self.clear();
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }
        self.pending_token = None;
        self.operand_committed = false;
    }

    pub fn digit(&mut self, d: u8) {
        debug_assert!(d < 10);
        self.begin_operand();
        let fresh = self.after_op || matches!(self.entry, Entry::Value(_));
        self.after_op = false;

        if fresh {
            self.entry = Entry::Typing("0".to_string());
        }
        if let Entry::Typing(s) = &mut self.entry {
            if s.chars().filter(|c| c.is_ascii_digit()).count() >= MAX_ENTRY_DIGITS {
                return;
            }
            if s == "0" {
                s.clear();
            } else if s == "-0" {
                s.truncate(1);
            }
            s.push((b'0' + d) as char);
        }
    }

    pub fn decimal(&mut self) {
        self.begin_operand();
        let fresh = self.after_op || matches!(self.entry, Entry::Value(_));
        self.after_op = false;

        if fresh {
            self.entry = Entry::Typing("0.".to_string());
            return;
        }
        if let Entry::Typing(s) = &mut self.entry {
            if !s.contains('.') {
                s.push('.');
            }
        }
    }

    pub fn negate(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Entry::Typing(s) = &mut self.entry {
            if s == "0" {
                return;
            }
            if let Some(stripped) = s.strip_prefix('-') {
                *s = stripped.to_string();
            } else {
                *s = format!("-{}", s);
            }
            return;
        }

        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }
        let value = self.current_value();
        let operand = self.operand_token();
        if !self.operand_committed {
            self.pending_token = Some(format!("negate({})", operand));
        }
        self.entry = Entry::Value(-value);
        self.after_op = false;
    }

    pub fn backspace(&mut self) {
        if self.error.is_some() {
            self.clear();
            return;
        }
        if let Entry::Typing(s) = &mut self.entry {
            s.pop();
            if s.is_empty() || *s == "-" {
                *s = "0".to_string();
            }
        }
    }

    /// CE: drop the current entry, keep the pending chain
    pub fn clear_entry(&mut self) {
        if self.error.is_some() {
            self.clear();
            return;
        }
        self.entry = Entry::Typing("0".to_string());
        self.pending_token = None;
        self.operand_committed = false;
    }

    /// C: reset the engine entirely
    pub fn clear(&mut self) {
        *self = Engine::default();
    }

    /// Rendered token for the current operand
    fn operand_token(&self) -> String {
        if let Some(token) = &self.pending_token {
            return token.clone();
        }
        match &self.entry {
            Entry::Typing(s) => s.clone(),
            Entry::Value(v) => format_display(*v),
        }
    }

    fn fail(&mut self, err: MathError) {
        self.error = Some(err.message());
    }

    pub fn binary(&mut self, op: BinOp) {
        if self.error.is_some() {
            return;
        }

        // Pressing another operator before an operand replaces it
        if self.after_op && self.pending.is_some() {
            self.tokens.pop();
            self.tokens.push(op.symbol().to_string());
            self.pending = Some(op);
            return;
        }

        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }

        let value = self.current_value();
        let token = self.operand_token();
        self.pending_token = None;
        if !self.operand_committed {
            self.tokens.push(token);
        }
        self.operand_committed = false;

        let result = match self.pending {
            Some(pending) => pending.apply(self.acc, value),
            None => Ok(value),
        };
        match result {
            Ok(acc) => {
                self.acc = acc;
                self.tokens.push(op.symbol().to_string());
                self.pending = Some(op);
                self.entry = Entry::Value(acc);
                self.after_op = true;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Evaluate the pending chain. Returns the history entry (expression,
    /// result) on success.
    pub fn equals(&mut self) -> Option<(String, String)> {
        if self.error.is_some() {
            return None;
        }
        if self.evaluated {
            self.tokens.clear();
        }

        let value = self.current_value();
        let token = self.operand_token();
        self.pending_token = None;
        if !self.operand_committed {
            self.tokens.push(token);
        }
        self.operand_committed = false;

        let mut result = match self.pending {
            Some(pending) => match pending.apply(self.acc, value) {
                Ok(v) => v,
                Err(err) => {
                    self.fail(err);
                    return None;
                }
            },
            None => value,
        };

        // Auto-close any parentheses still open
        while let Some((acc, pending)) = self.stack.pop() {
            self.tokens.push(")".to_string());
            if let Some(pending) = pending {
                match pending.apply(acc, result) {
                    Ok(v) => result = v,
                    Err(err) => {
                        self.fail(err);
                        return None;
                    }
                }
            }
        }

        self.tokens.push("=".to_string());
        self.acc = result;
        self.pending = None;
        self.entry = Entry::Value(result);
        self.evaluated = true;
        self.after_op = false;

        Some((render_tokens(&self.tokens), format_display(result)))
    }

    pub fn unary(&mut self, op: UnaryOp, angle: AngleUnit) {
        if self.error.is_some() {
            return;
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }

        let value = self.current_value();
        let operand = self.operand_token();
        match op.apply(value, angle) {
            Ok(result) => {
                // A closed parenthesis group keeps its committed rendering;
                // only free-standing operands get wrapped in the expression.
                if !self.operand_committed {
                    self.pending_token = Some(op.wrap(&operand));
                }
                self.entry = Entry::Value(result);
                self.after_op = false;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Percent resolves against the pending chain: additive percent is
    /// relative to the accumulator, multiplicative percent is a plain
    /// fraction.
    pub fn percent(&mut self) {
        if self.error.is_some() {
            return;
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }

        let pct = self.current_value();
        let value = match self.pending {
            Some(BinOp::Add) | Some(BinOp::Subtract) => self.acc * pct / 100.0,
            Some(_) => pct / 100.0,
            None => 0.0,
        };
        self.entry = Entry::Value(value);
        self.pending_token = Some(format_display(value));
        self.after_op = false;
        self.operand_committed = false;
    }

    /// Constants (π, e) and the random generator set the operand directly
    pub fn constant(&mut self, value: f64, token: &str) {
        if self.error.is_some() {
            self.clear();
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }
        self.entry = Entry::Value(value);
        self.pending_token = Some(token.to_string());
        self.after_op = false;
        self.operand_committed = false;
    }

    pub fn pi(&mut self) {
        self.constant(PI, "π");
    }

    pub fn euler(&mut self) {
        self.constant(E, "e");
    }

    pub fn paren_open(&mut self) {
        if self.error.is_some() {
            return;
        }
        if self.evaluated {
            self.tokens.clear();
            self.evaluated = false;
        }
        self.stack.push((self.acc, self.pending));
        self.tokens.push("(".to_string());
        self.acc = 0.0;
        self.pending = None;
        self.pending_token = None;
        self.after_op = true;
    }

    pub fn paren_close(&mut self) {
        if self.error.is_some() || self.stack.is_empty() {
            return;
        }

        let value = self.current_value();
        let token = self.operand_token();
        self.pending_token = None;
        self.tokens.push(token);
        self.tokens.push(")".to_string());

        let inner = match self.pending {
            Some(pending) => match pending.apply(self.acc, value) {
                Ok(v) => v,
                Err(err) => {
                    self.fail(err);
                    return;
                }
            },
            None => value,
        };

        let (acc, pending) = self.stack.pop().expect("stack checked non-empty");
        self.acc = acc;
        self.pending = pending;
        self.entry = Entry::Value(inner);
        self.after_op = false;
        self.operand_committed = true;
    }
}

/// Join expression tokens: no space after an opening parenthesis, none
/// before a closing one or the equals sign.
fn render_tokens(tokens: &[String]) -> String {
    let mut out = String::new();
    for token in tokens {
        if out.is_empty() || out.ends_with('(') || token == ")" || token == "=" {
            out.push_str(token);
        } else {
            out.push(' ');
            out.push_str(token);
        }
    }
    out
}

/// Render a value the way the result display shows it: 14 significant
/// digits, thousands grouping for integers.
pub fn format_display(v: f64) -> String {
    if v.is_nan() {
        return MathError::InvalidInput.message().to_string();
    }
    if v.is_infinite() {
        return MathError::Overflow.message().to_string();
    }

    let r = round_significant(v, 14);
    if r == 0.0 {
        return "0".to_string();
    }
    if r.fract() == 0.0 && r.abs() < 1e15 {
        group_thousands(r as i64)
    } else {
        format!("{}", r)
    }
}

fn round_significant(v: f64, digits: i32) -> f64 {
    if v == 0.0 {
        return 0.0;
    }
    let magnitude = v.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    if !factor.is_finite() || !(v * factor).is_finite() {
        return v;
    }
    (v * factor).round() / factor
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_number(engine: &mut Engine, digits: &str) {
        for c in digits.chars() {
            match c {
                '.' => engine.decimal(),
                d => engine.digit(d.to_digit(10).unwrap() as u8),
            }
        }
    }

    #[test]
    fn test_format_integers_group_thousands() {
        assert_eq!(format_display(100000.0), "100,000");
        assert_eq!(format_display(40000.0), "40,000");
        assert_eq!(format_display(-1234567.0), "-1,234,567");
        assert_eq!(format_display(999.0), "999");
    }

    #[test]
    fn test_format_rounds_to_fourteen_significant_digits() {
        assert_eq!(format_display(20.0 / 6.0), "3.3333333333333");
        assert_eq!(format_display(1.0 / 7.0), "0.14285714285714");
        assert_eq!(format_display(0.9999999999999999), "1");
        assert_eq!(format_display(45f64.to_radians().tan()), "1");
    }

    #[test]
    fn test_format_zero_and_negatives() {
        assert_eq!(format_display(0.0), "0");
        assert_eq!(format_display(-0.0), "0");
        assert_eq!(format_display(-0.1), "-0.1");
    }

    #[test]
    fn test_addition_and_expression() {
        let mut engine = Engine::new();
        engine.digit(2);
        engine.binary(BinOp::Add);
        assert_eq!(engine.expression(), "2 +");
        engine.digit(2);
        engine.binary(BinOp::Subtract);
        assert_eq!(engine.display(), "4");
        assert_eq!(engine.expression(), "2 + 2 -");
        engine.digit(3);
        let history = engine.equals().unwrap();
        assert_eq!(engine.display(), "1");
        assert_eq!(history, ("2 + 2 - 3=".to_string(), "1".to_string()));
    }

    #[test]
    fn test_chained_multiply_divide() {
        let mut engine = Engine::new();
        engine.digit(4);
        engine.binary(BinOp::Multiply);
        engine.digit(5);
        engine.binary(BinOp::Divide);
        assert_eq!(engine.display(), "20");
        assert_eq!(engine.expression(), "4 × 5 ÷");
        engine.digit(6);
        engine.equals();
        assert_eq!(engine.display(), "3.3333333333333");
        assert_eq!(engine.expression(), "4 × 5 ÷ 6=");
    }

    #[test]
    fn test_unary_wraps_expression() {
        let mut engine = Engine::new();
        engine.digit(9);
        engine.unary(UnaryOp::Square, AngleUnit::Degrees);
        assert_eq!(engine.display(), "81");
        assert_eq!(engine.expression(), "square (9)");

        let mut engine = Engine::new();
        engine.digit(7);
        engine.unary(UnaryOp::Invert, AngleUnit::Degrees);
        assert_eq!(engine.display(), "0.14285714285714");
        assert_eq!(engine.expression(), "1/(7)");
    }

    #[test]
    fn test_percent_is_relative_for_addition() {
        let mut engine = Engine::new();
        type_number(&mut engine, "10");
        engine.binary(BinOp::Add);
        type_number(&mut engine, "10");
        engine.percent();
        assert_eq!(engine.display(), "1");
        assert_eq!(engine.expression(), "10 + 1");
        engine.equals();
        assert_eq!(engine.display(), "11");
    }

    #[test]
    fn test_percent_is_fraction_for_multiplication() {
        let mut engine = Engine::new();
        type_number(&mut engine, "10");
        engine.binary(BinOp::Multiply);
        type_number(&mut engine, "10");
        engine.percent();
        engine.equals();
        assert_eq!(engine.display(), "1");
    }

    #[test]
    fn test_typing_decimal_and_negate() {
        let mut engine = Engine::new();
        engine.decimal();
        assert_eq!(engine.display(), "0.");
        engine.negate();
        engine.digit(1);
        assert_eq!(engine.display(), "-0.1");
    }

    #[test]
    fn test_backspace_does_not_prefix_zeros() {
        let mut engine = Engine::new();
        engine.decimal();
        engine.digit(1);
        engine.backspace();
        assert_eq!(engine.display(), "0.");
        engine.backspace();
        assert_eq!(engine.display(), "0");
        engine.digit(0);
        engine.digit(0);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_clear_entry_keeps_pending_chain() {
        let mut engine = Engine::new();
        engine.digit(3);
        engine.binary(BinOp::Add);
        engine.digit(9);
        engine.clear_entry();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.expression(), "3 +");
        engine.digit(1);
        engine.equals();
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn test_divide_by_zero_messages() {
        let mut engine = Engine::new();
        engine.binary(BinOp::Divide);
        engine.digit(0);
        assert!(engine.equals().is_none());
        assert_eq!(engine.display(), "Result is undefined");

        let mut engine = Engine::new();
        engine.unary(UnaryOp::Invert, AngleUnit::Degrees);
        assert_eq!(engine.display(), "Cannot divide by zero");
        assert!(engine.in_error());
    }

    #[test]
    fn test_error_clears_on_clear() {
        let mut engine = Engine::new();
        engine.unary(UnaryOp::Invert, AngleUnit::Degrees);
        assert!(engine.in_error());
        engine.clear();
        assert_eq!(engine.display(), "0");
        assert!(!engine.in_error());
    }

    #[test]
    fn test_parentheses_group_evaluation() {
        let mut engine = Engine::new();
        engine.digit(3);
        engine.binary(BinOp::Multiply);
        engine.paren_open();
        engine.digit(2);
        engine.binary(BinOp::Add);
        engine.digit(2);
        engine.paren_close();
        let history = engine.equals().unwrap();
        assert_eq!(engine.display(), "12");
        assert_eq!(history.0, "3 × (2 + 2)=");
    }

    #[test]
    fn test_power_and_exp() {
        let mut engine = Engine::new();
        engine.digit(3);
        engine.binary(BinOp::Power);
        engine.digit(5);
        engine.equals();
        assert_eq!(engine.display(), "243");

        let mut engine = Engine::new();
        engine.digit(4);
        engine.binary(BinOp::Exp);
        engine.digit(4);
        engine.equals();
        assert_eq!(engine.display(), "40,000");
    }

    #[test]
    fn test_factorial() {
        let mut engine = Engine::new();
        engine.digit(4);
        engine.unary(UnaryOp::Factorial, AngleUnit::Degrees);
        assert_eq!(engine.display(), "24");
    }

    #[test]
    fn test_trig_respects_angle_unit() {
        let mut engine = Engine::new();
        type_number(&mut engine, "90");
        engine.unary(UnaryOp::Sin, AngleUnit::Degrees);
        assert_eq!(engine.display(), "1");

        let mut engine = Engine::new();
        type_number(&mut engine, "100");
        engine.unary(UnaryOp::Sin, AngleUnit::Gradians);
        assert_eq!(engine.display(), "1");

        let mut engine = Engine::new();
        engine.pi();
        engine.unary(UnaryOp::Cos, AngleUnit::Radians);
        assert_eq!(engine.display(), "-1");
    }

    #[test]
    fn test_inverse_trig_converts_back() {
        let mut engine = Engine::new();
        engine.digit(1);
        engine.unary(UnaryOp::InvSin, AngleUnit::Degrees);
        assert_eq!(engine.display(), "90");

        let mut engine = Engine::new();
        engine.digit(1);
        engine.unary(UnaryOp::InvTan, AngleUnit::Degrees);
        assert_eq!(engine.display(), "45");
    }

    #[test]
    fn test_hyperbolics_ignore_angle_unit() {
        let mut engine = Engine::new();
        type_number(&mut engine, "90");
        engine.unary(UnaryOp::Tanh, AngleUnit::Degrees);
        assert_eq!(engine.display(), "1");

        let mut engine = Engine::new();
        engine.digit(1);
        engine.unary(UnaryOp::Sinh, AngleUnit::Degrees);
        assert!(engine.display().starts_with("1.175201"));
    }

    #[test]
    fn test_equals_records_history_from_cleared_state() {
        let mut engine = Engine::new();
        let first = engine.equals().unwrap();
        assert_eq!(first, ("0=".to_string(), "0".to_string()));
        let second = engine.equals().unwrap();
        assert_eq!(second, ("0=".to_string(), "0".to_string()));
    }

    #[test]
    fn test_operator_after_equals_continues_with_result() {
        let mut engine = Engine::new();
        engine.digit(2);
        engine.binary(BinOp::Add);
        engine.digit(2);
        engine.equals();
        engine.binary(BinOp::Multiply);
        engine.digit(3);
        engine.equals();
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_typing_after_equals_starts_fresh() {
        let mut engine = Engine::new();
        engine.digit(2);
        engine.binary(BinOp::Add);
        engine.digit(2);
        engine.equals();
        engine.digit(7);
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.expression(), "");
    }
}
