//! Typed flag values and their string conversions.
//!
//! Every value round-trips through a string: [`FlagValue`]'s `Display` is the
//! form compared against configuration file values, and
//! [`FlagValue::parse_as`] converts a string into a value of the same type.

use std::fmt;

use thiserror::Error;

/// A string could not be converted to a flag's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value {input:?}: {reason}")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub input: String,
    pub reason: String,
}

/// The current or default value of a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl FlagValue {
    /// Type name used in help output and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FlagValue::Str(_) => "string",
            FlagValue::Bool(_) => "bool",
            FlagValue::Int(_) => "int",
            FlagValue::Uint(_) => "uint",
            FlagValue::Float(_) => "float",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, FlagValue::Bool(_))
    }

    /// Parse `input` as a value of the same type as `self`.
    pub fn parse_as(&self, input: &str) -> Result<FlagValue, ParseValueError> {
        let kind = self.kind();
        let fail = |reason: &str| ParseValueError {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        };
        match self {
            FlagValue::Str(_) => Ok(FlagValue::Str(input.to_string())),
            FlagValue::Bool(_) => parse_bool(input)
                .map(FlagValue::Bool)
                .ok_or_else(|| fail("expected true or false")),
            FlagValue::Int(_) => parse_int(input).map(FlagValue::Int).map_err(fail),
            FlagValue::Uint(_) => parse_uint(input).map(FlagValue::Uint).map_err(fail),
            FlagValue::Float(_) => input
                .parse::<f64>()
                .map(FlagValue::Float)
                .map_err(|e| fail(&e.to_string())),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Str(s) => write!(f, "{s}"),
            FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Int(i) => write!(f, "{i}"),
            FlagValue::Uint(u) => write!(f, "{u}"),
            FlagValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Str(s.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(s: String) -> Self {
        FlagValue::Str(s)
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl From<i32> for FlagValue {
    fn from(i: i32) -> Self {
        FlagValue::Int(i.into())
    }
}

impl From<i64> for FlagValue {
    fn from(i: i64) -> Self {
        FlagValue::Int(i)
    }
}

impl From<u32> for FlagValue {
    fn from(u: u32) -> Self {
        FlagValue::Uint(u.into())
    }
}

impl From<u64> for FlagValue {
    fn from(u: u64) -> Self {
        FlagValue::Uint(u)
    }
}

impl From<f64> for FlagValue {
    fn from(x: f64) -> Self {
        FlagValue::Float(x)
    }
}

/// A named, typed flag with its usage text.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    name: String,
    usage: String,
    value: FlagValue,
    default: FlagValue,
}

impl Flag {
    pub fn new(name: &str, default: impl Into<FlagValue>, usage: &str) -> Self {
        let default = default.into();
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
            value: default.clone(),
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn value(&self) -> &FlagValue {
        &self.value
    }

    pub fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Convert `input` to this flag's type and store it.
    pub fn set(&mut self, input: &str) -> Result<(), ParseValueError> {
        self.value = self.value.parse_as(input)?;
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Parse an unsigned magnitude with an optional `0x`, `0o`, `0b` or leading
/// `0` (octal) prefix. `_` may separate digits.
fn parse_magnitude(s: &str) -> Result<u64, &'static str> {
    let (radix, digits) = if let Some(rest) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = s.strip_prefix("0o").or(s.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = s.strip_prefix("0b").or(s.strip_prefix("0B")) {
        (2, rest)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    if digits.is_empty() || digits.starts_with(['_', '+', '-']) || digits.ends_with('_') {
        return Err("invalid syntax");
    }
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    u64::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => "value out of range",
        _ => "invalid syntax",
    })
}

fn parse_int(s: &str) -> Result<i64, &'static str> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let magnitude = parse_magnitude(rest)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude).ok_or("value out of range")
    } else {
        i64::try_from(magnitude).map_err(|_| "value out of range")
    }
}

fn parse_uint(s: &str) -> Result<u64, &'static str> {
    parse_magnitude(s)
}
