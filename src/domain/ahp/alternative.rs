//! Alternatives and their raw attribute values.

use serde::{Deserialize, Deserializer, Serialize};

use super::criterion::Criterion;
use crate::domain::foundation::AlternativeId;

/// Maximum number of alternatives in one comparison.
pub const MAX_ALTERNATIVES: usize = 3;

/// A smartphone being compared, as a snapshot handed to the engine.
///
/// Attribute values accept JSON numbers or strings. Strings go through
/// [`parse_attribute`], so blank or non-numeric input becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub performance: f64,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub battery: f64,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub screen: f64,
}

impl Alternative {
    pub fn new(id: AlternativeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price: 0.0,
            performance: 0.0,
            battery: 0.0,
            screen: 0.0,
        }
    }

    /// Builder-style setter for one attribute.
    pub fn with(mut self, criterion: Criterion, value: f64) -> Self {
        self.set(criterion, value);
        self
    }

    /// Raw value of the given criterion.
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price,
            Criterion::Performance => self.performance,
            Criterion::Battery => self.battery,
            Criterion::Screen => self.screen,
        }
    }

    pub fn set(&mut self, criterion: Criterion, value: f64) {
        let slot = match criterion {
            Criterion::Price => &mut self.price,
            Criterion::Performance => &mut self.performance,
            Criterion::Battery => &mut self.battery,
            Criterion::Screen => &mut self.screen,
        };
        *slot = sanitize(value);
    }
}

/// Parses user-typed attribute text the way a browser `parseFloat` would:
/// the longest leading decimal literal wins, anything unparseable is 0.
pub fn parse_attribute(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().map(sanitize).unwrap_or(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttribute {
    Number(f64),
    Text(String),
}

fn lenient_attribute<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAttribute>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAttribute::Number(n)) => sanitize(n),
        Some(RawAttribute::Text(s)) => parse_attribute(&s),
        None => 0.0,
    })
}
