use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive upper bound for a plausible human age.
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(pub u32);

impl Age {
    pub fn is_valid(self) -> bool {
        self.is_below(MAX_AGE)
    }

    pub fn is_below(self, max_age: u32) -> bool {
        self.0 < max_age
    }
}

/// Free-form phone number. Never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(pub String);

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        PhoneNumber(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: Age,
    #[serde(default)]
    pub phone_number: PhoneNumber,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, phone_number: impl Into<PhoneNumber>) -> Self {
        Self {
            name: name.into(),
            age: Age(age),
            phone_number: phone_number.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Age,
    Name,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Age => write!(f, "age"),
            Rule::Name => write!(f, "name"),
        }
    }
}

/// Outcome of the two independent person rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub age_ok: bool,
    pub name_ok: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.age_ok && self.name_ok
    }

    /// Failed rules in rule order (age, then name).
    pub fn failures(&self) -> Vec<Rule> {
        let mut failed = Vec::new();
        if !self.age_ok {
            failed.push(Rule::Age);
        }
        if !self.name_ok {
            failed.push(Rule::Name);
        }
        failed
    }
}
