use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::data::Segment;

/// Numeric cut on a scaled score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// `segment > t`
    Above(f64),
    /// `segment <= t`
    AtMost(f64),
}

impl Threshold {
    #[inline]
    pub fn admits(self, value: f64) -> bool {
        match self {
            Threshold::Above(t) => value > t,
            Threshold::AtMost(t) => value <= t,
        }
    }
}

/// The rule a row's segment must satisfy to count toward a filter.
/// Every taxonomy's matching logic compiles down to one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPredicate {
    /// Segment text equals the value.
    Exact(String),
    /// Segment text is one of the values.
    Set(BTreeSet<String>),
    /// Integer code within `[min, max]`, leading zeros ignored.
    Range { min: f64, max: f64 },
    /// Numeric segment passes the threshold. Text segments never match.
    Threshold(Threshold),
    /// Matches every segment.
    All,
}

impl SegmentPredicate {
    pub fn exact(value: impl Into<String>) -> Self { SegmentPredicate::Exact(value.into()) }

    pub fn set<I, S>(values: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String> {
        SegmentPredicate::Set(values.into_iter().map(Into::into).collect())
    }

    pub fn range(min: f64, max: f64) -> Self { SegmentPredicate::Range { min, max } }

    pub fn above(threshold: f64) -> Self { SegmentPredicate::Threshold(Threshold::Above(threshold)) }

    pub fn at_most(threshold: f64) -> Self { SegmentPredicate::Threshold(Threshold::AtMost(threshold)) }

    #[inline]
    pub fn is_wildcard(&self) -> bool { matches!(self, SegmentPredicate::All) }

    /// Whether `segment` satisfies this predicate.
    pub fn matches(&self, segment: &Segment) -> bool {
        match self {
            SegmentPredicate::Exact(value) => match segment {
                Segment::Label(text) => text == value,
                Segment::Number(_) => segment.to_string() == *value,
            },
            SegmentPredicate::Set(values) => match segment {
                Segment::Label(text) => values.contains(text),
                Segment::Number(_) => values.contains(&segment.to_string()),
            },
            SegmentPredicate::Range { min, max } => segment.code_value()
                .is_some_and(|value| value >= *min && value <= *max),
            SegmentPredicate::Threshold(threshold) => segment.as_number()
                .is_some_and(|value| threshold.admits(value)),
            SegmentPredicate::All => true,
        }
    }
}

impl fmt::Display for SegmentPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentPredicate::Exact(value) => write!(f, "= '{value}'"),
            SegmentPredicate::Set(values) if values.len() <= 4 => {
                let list = values.iter().map(|v| format!("'{v}'")).collect::<Vec<_>>().join(", ");
                write!(f, "in {{{list}}}")
            }
            SegmentPredicate::Set(values) => write!(f, "in {{{} values}}", values.len()),
            SegmentPredicate::Range { min, max } => write!(f, "in [{min}, {max}]"),
            SegmentPredicate::Threshold(Threshold::Above(t)) => write!(f, "> {t}"),
            SegmentPredicate::Threshold(Threshold::AtMost(t)) => write!(f, "<= {t}"),
            SegmentPredicate::All => write!(f, "*"),
        }
    }
}
