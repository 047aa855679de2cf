use crate::domain::model::{Person, ValidationReport, MAX_AGE};
use serde::Serialize;

/// Age strictly below 120 and a non-empty name.
pub fn is_valid_person(p: &Person) -> bool {
    p.age.is_valid() && !p.name.is_empty()
}

/// The person rules with a configurable age bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonValidator {
    max_age: u32,
}

impl Default for PersonValidator {
    fn default() -> Self {
        Self { max_age: MAX_AGE }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonOutcome {
    pub person: Person,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<PersonOutcome>,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

impl PersonValidator {
    pub fn new(max_age: u32) -> Self {
        Self { max_age }
    }

    pub fn check(&self, person: &Person) -> ValidationReport {
        ValidationReport {
            age_ok: person.age.is_below(self.max_age),
            name_ok: !person.name.is_empty(),
        }
    }

    pub fn is_valid(&self, person: &Person) -> bool {
        self.check(person).is_valid()
    }

    pub fn validate_all(&self, people: &[Person]) -> BatchSummary {
        let mut outcomes = Vec::with_capacity(people.len());
        let mut valid = 0;

        for person in people {
            let report = self.check(person);
            if report.is_valid() {
                valid += 1;
            } else {
                tracing::debug!(
                    "Person '{}' failed rules: {:?}",
                    person.name,
                    report.failures()
                );
            }
            outcomes.push(PersonOutcome {
                person: person.clone(),
                report,
            });
        }

        BatchSummary {
            invalid: outcomes.len() - valid,
            valid,
            outcomes,
        }
    }
}
