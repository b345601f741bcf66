use std::fmt;

use serde::{Deserialize, Serialize};

/// One discrete value within a taxonomy: a numeric score, an age, a district
/// number, or a text label such as an ethnicity or an income bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Number(f64),
    Label(String),
}

impl Segment {
    /// Parse raw table text. Finite numbers become `Number`, everything else
    /// (including `"$250000+"`, `"M"`, `"NaN"`) stays a trimmed `Label`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Segment::Number(value),
            _ => Segment::Label(text.to_string()),
        }
    }

    /// Numeric value of the segment. Labels never coerce.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Segment::Number(value) => Some(*value),
            Segment::Label(_) => None,
        }
    }

    /// Numeric value of a district-style code, accepting both `9` and `"09"`.
    /// Leading zeros are stripped before parsing; anything that is not a
    /// non-negative integer code yields `None`.
    pub fn code_value(&self) -> Option<f64> {
        match self {
            Segment::Number(value) => (*value >= 0.0 && value.fract() == 0.0).then_some(*value),
            Segment::Label(text) => {
                let text = text.trim();
                if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) { return None }
                let digits = text.trim_start_matches('0');
                if digits.is_empty() { Some(0.0) } else { digits.parse::<u64>().ok().map(|v| v as f64) }
            }
        }
    }

    /// Zero-padded (width 2) form of a district-style code, e.g. `9` and
    /// `"009"` both normalize to `"09"`.
    pub fn district_code(&self) -> Option<String> {
        self.code_value().map(|value| format!("{:0>2}", value as u64))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => write!(f, "{}", *value as i64),
            Segment::Number(value) => write!(f, "{value}"),
            Segment::Label(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Segment {
    fn from(value: f64) -> Self { Segment::Number(value) }
}

impl From<i32> for Segment {
    fn from(value: i32) -> Self { Segment::Number(value as f64) }
}

impl From<u32> for Segment {
    fn from(value: u32) -> Self { Segment::Number(value as f64) }
}

/// Text is kept verbatim as a label (no numeric parsing); use
/// [`Segment::parse`] for raw table input.
impl From<&str> for Segment {
    fn from(value: &str) -> Self { Segment::Label(value.to_string()) }
}

impl From<String> for Segment {
    fn from(value: String) -> Self { Segment::Label(value) }
}
