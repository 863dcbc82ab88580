//! Pairwise judgments between criteria.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::criterion::{Criterion, CriterionPair, PAIR_COUNT};
use crate::domain::foundation::ValidationError;

/// Intensity of preference on Saaty's odd-valued scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
#[repr(u8)]
pub enum Intensity {
    Equal = 1,
    Slight = 3,
    Strong = 5,
    VeryStrong = 7,
    Absolute = 9,
}

impl Intensity {
    /// The scale from strongest to weakest, as offered to users.
    pub const SCALE: [Intensity; 5] = [
        Intensity::Absolute,
        Intensity::VeryStrong,
        Intensity::Strong,
        Intensity::Slight,
        Intensity::Equal,
    ];

    /// Creates an Intensity from its numeric value.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Intensity::Equal),
            3 => Ok(Intensity::Slight),
            5 => Ok(Intensity::Strong),
            7 => Ok(Intensity::VeryStrong),
            9 => Ok(Intensity::Absolute),
            _ => Err(ValidationError::not_allowed("value", "1, 3, 5, 7, 9", value)),
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.value())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Equal => "Equally important",
            Intensity::Slight => "Slightly more important",
            Intensity::Strong => "Strongly more important",
            Intensity::VeryStrong => "Very strongly more important",
            Intensity::Absolute => "Absolutely more important",
        }
    }
}

impl TryFrom<f64> for Intensity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
            return Err(ValidationError::not_allowed("value", "1, 3, 5, 7, 9", value));
        }
        Self::try_from_u8(value as u8)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.value()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Which side of a pair is favored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The first criterion of the canonical pair.
    Left,
    /// The second criterion of the canonical pair.
    Right,
}

/// One comparison statement between the two criteria of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub value: Intensity,
    pub direction: Direction,
}

impl PairwiseJudgment {
    pub fn new(value: Intensity, direction: Direction) -> Self {
        Self { value, direction }
    }

    /// The first criterion is favored by `value`.
    pub fn left(value: Intensity) -> Self {
        Self::new(value, Direction::Left)
    }

    /// The second criterion is favored by `value`.
    pub fn right(value: Intensity) -> Self {
        Self::new(value, Direction::Right)
    }

    /// Both criteria matter equally.
    pub fn equal() -> Self {
        Self::left(Intensity::Equal)
    }

    /// Entry for `matrix[first][second]`; its reciprocal goes below the diagonal.
    pub fn upper_entry(&self) -> f64 {
        match self.direction {
            Direction::Left => self.value.as_f64(),
            Direction::Right => 1.0 / self.value.as_f64(),
        }
    }

    /// The criterion this judgment favors within `pair`.
    pub fn favored(&self, pair: CriterionPair) -> Criterion {
        match self.direction {
            Direction::Left => pair.first(),
            Direction::Right => pair.second(),
        }
    }
}

/// Judgments keyed by canonical pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgmentSet {
    judgments: BTreeMap<CriterionPair, PairwiseJudgment>,
}

impl JudgmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete set where every pair is judged equally important.
    pub fn all_equal() -> Self {
        let mut set = Self::new();
        for pair in CriterionPair::canonical() {
            set.record(pair, PairwiseJudgment::equal());
        }
        set
    }

    /// Builder-style variant of [`JudgmentSet::record`].
    pub fn with(mut self, pair: CriterionPair, judgment: PairwiseJudgment) -> Self {
        self.record(pair, judgment);
        self
    }

    /// Stores a judgment, replacing any earlier one for the same pair.
    pub fn record(&mut self, pair: CriterionPair, judgment: PairwiseJudgment) {
        self.judgments.insert(pair, judgment);
    }

    pub fn get(&self, pair: &CriterionPair) -> Option<&PairwiseJudgment> {
        self.judgments.get(pair)
    }

    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }

    /// True once every canonical pair has a judgment.
    pub fn is_complete(&self) -> bool {
        self.judgments.len() == PAIR_COUNT
    }

    /// Canonical pairs still lacking a judgment.
    pub fn missing_pairs(&self) -> Vec<CriterionPair> {
        CriterionPair::canonical()
            .into_iter()
            .filter(|pair| !self.judgments.contains_key(pair))
            .collect()
    }

    pub fn clear(&mut self) {
        self.judgments.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CriterionPair, &PairwiseJudgment)> {
        self.judgments.iter()
    }
}
