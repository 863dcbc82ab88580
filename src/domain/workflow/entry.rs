//! AlternativeEntry - an alternative row as it is being typed in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ahp::{parse_attribute, Alternative, Criterion};
use crate::domain::foundation::{AlternativeId, ValidationError};

/// An editable field of an alternative row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AlternativeField {
    Name,
    Attribute(Criterion),
}

impl AlternativeField {
    /// Name first, then the criteria in canonical order.
    pub fn all() -> Vec<AlternativeField> {
        std::iter::once(AlternativeField::Name)
            .chain(Criterion::ALL.iter().map(|c| AlternativeField::Attribute(*c)))
            .collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            AlternativeField::Name => "name",
            AlternativeField::Attribute(c) => c.key(),
        }
    }
}

impl fmt::Display for AlternativeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AlternativeField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "name" {
            return Ok(AlternativeField::Name);
        }
        Criterion::from_key(s)
            .map(AlternativeField::Attribute)
            .ok_or_else(|| ValidationError::invalid_format("field", format!("unknown field '{}'", s)))
    }
}

impl TryFrom<String> for AlternativeField {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlternativeField> for String {
    fn from(field: AlternativeField) -> Self {
        field.key().to_string()
    }
}

/// Raw text of one alternative row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeEntry {
    pub id: AlternativeId,
    pub name: String,
    pub price: String,
    pub performance: String,
    pub battery: String,
    pub screen: String,
}

impl AlternativeEntry {
    /// Creates an empty row.
    pub fn blank(id: AlternativeId) -> Self {
        Self {
            id,
            name: String::new(),
            price: String::new(),
            performance: String::new(),
            battery: String::new(),
            screen: String::new(),
        }
    }

    pub fn get(&self, field: AlternativeField) -> &str {
        match field {
            AlternativeField::Name => &self.name,
            AlternativeField::Attribute(Criterion::Price) => &self.price,
            AlternativeField::Attribute(Criterion::Performance) => &self.performance,
            AlternativeField::Attribute(Criterion::Battery) => &self.battery,
            AlternativeField::Attribute(Criterion::Screen) => &self.screen,
        }
    }

    pub fn set(&mut self, field: AlternativeField, value: impl Into<String>) {
        let slot = match field {
            AlternativeField::Name => &mut self.name,
            AlternativeField::Attribute(Criterion::Price) => &mut self.price,
            AlternativeField::Attribute(Criterion::Performance) => &mut self.performance,
            AlternativeField::Attribute(Criterion::Battery) => &mut self.battery,
            AlternativeField::Attribute(Criterion::Screen) => &mut self.screen,
        };
        *slot = value.into();
    }

    /// Fields holding non-blank text, in display order.
    pub fn filled_fields(&self) -> Vec<AlternativeField> {
        AlternativeField::all()
            .into_iter()
            .filter(|f| !self.get(*f).trim().is_empty())
            .collect()
    }

    /// A row is complete when the name and all four attributes are filled.
    pub fn is_complete(&self) -> bool {
        AlternativeField::all()
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    /// Snapshot for the engine. Unparseable attribute text becomes 0.
    pub fn to_alternative(&self) -> Alternative {
        let mut alternative = Alternative::new(self.id, self.name.trim());
        for criterion in Criterion::ALL {
            alternative.set(
                criterion,
                parse_attribute(self.get(AlternativeField::Attribute(criterion))),
            );
        }
        alternative
    }
}
