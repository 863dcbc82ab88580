//! Criteria - The fixed evaluation criteria and their polarity table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of criteria in every comparison.
pub const CRITERION_COUNT: usize = 4;

/// Number of unique criterion pairs, n·(n−1)/2.
pub const PAIR_COUNT: usize = CRITERION_COUNT * (CRITERION_COUNT - 1) / 2;

/// One of the four smartphone evaluation criteria.
///
/// Declaration order is the canonical enumeration order used for matrix
/// indices and pair keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    Performance,
    Battery,
    Screen,
}

/// Whether a larger raw value is preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    LowerIsBetter,
    HigherIsBetter,
}

/// Static description of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionSpec {
    pub criterion: Criterion,
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub polarity: Polarity,
}

/// The criteria table, in canonical order.
pub const CRITERIA: [CriterionSpec; CRITERION_COUNT] = [
    CriterionSpec {
        criterion: Criterion::Price,
        key: "price",
        label: "Price",
        description: "Purchase cost of the smartphone",
        unit: "million IDR",
        polarity: Polarity::LowerIsBetter,
    },
    CriterionSpec {
        criterion: Criterion::Performance,
        key: "performance",
        label: "Performance",
        description: "Processing speed and capability",
        unit: "score 1-10",
        polarity: Polarity::HigherIsBetter,
    },
    CriterionSpec {
        criterion: Criterion::Battery,
        key: "battery",
        label: "Battery Life",
        description: "Battery capacity and endurance",
        unit: "score 1-10",
        polarity: Polarity::HigherIsBetter,
    },
    CriterionSpec {
        criterion: Criterion::Screen,
        key: "screen",
        label: "Screen Quality",
        description: "Resolution and display quality",
        unit: "score 1-10",
        polarity: Polarity::HigherIsBetter,
    },
];

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; CRITERION_COUNT] = [
        Criterion::Price,
        Criterion::Performance,
        Criterion::Battery,
        Criterion::Screen,
    ];

    /// Position in the canonical order (matrix row/column).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the criterion at a canonical position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the table row for this criterion.
    pub fn spec(&self) -> &'static CriterionSpec {
        &CRITERIA[self.index()]
    }

    /// Stable key used in JSON and pair keys.
    pub fn key(&self) -> &'static str {
        self.spec().key
    }

    pub fn polarity(&self) -> Polarity {
        self.spec().polarity
    }

    /// Looks up a criterion by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        CRITERIA
            .iter()
            .find(|spec| spec.key == key)
            .map(|spec| spec.criterion)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| {
            ValidationError::invalid_format("criterion", format!("unknown criterion '{}'", s))
        })
    }
}

/// An unordered pair of distinct criteria, stored in canonical order.
///
/// Serialized as `"<first>-<second>"`, e.g. `"price-performance"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CriterionPair {
    first: Criterion,
    second: Criterion,
}

impl CriterionPair {
    /// Creates a pair from two distinct criteria in any order.
    pub fn new(a: Criterion, b: Criterion) -> Result<Self, ValidationError> {
        if a == b {
            return Err(ValidationError::invalid_format(
                "pair",
                format!("cannot compare '{}' with itself", a),
            ));
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { first, second })
    }

    /// The six pairs in canonical order: (0,1), (0,2), (0,3), (1,2), (1,3), (2,3).
    pub fn canonical() -> Vec<CriterionPair> {
        let mut pairs = Vec::with_capacity(PAIR_COUNT);
        for i in 0..CRITERION_COUNT {
            for j in (i + 1)..CRITERION_COUNT {
                pairs.push(CriterionPair {
                    first: Criterion::ALL[i],
                    second: Criterion::ALL[j],
                });
            }
        }
        pairs
    }

    /// The criterion earlier in canonical order (the "left" side).
    pub fn first(&self) -> Criterion {
        self.first
    }

    /// The criterion later in canonical order (the "right" side).
    pub fn second(&self) -> Criterion {
        self.second
    }

    pub fn key(&self) -> String {
        format!("{}-{}", self.first.key(), self.second.key())
    }
}

impl fmt::Display for CriterionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CriterionPair {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once('-').ok_or_else(|| {
            ValidationError::invalid_format("pair", format!("'{}' is not '<a>-<b>'", s))
        })?;
        let a: Criterion = a.parse()?;
        let b: Criterion = b.parse()?;
        if a > b {
            return Err(ValidationError::invalid_format(
                "pair",
                format!("'{}' is not in canonical order, use '{}-{}'", s, b, a),
            ));
        }
        Self::new(a, b)
    }
}

impl TryFrom<String> for CriterionPair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CriterionPair> for String {
    fn from(pair: CriterionPair) -> Self {
        pair.key()
    }
}
