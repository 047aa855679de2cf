use crate::domain::model::Person;
use crate::utils::error::Result;

/// Anything that can hand over a batch of people to validate.
pub trait PersonSource {
    fn people(&self) -> Result<Vec<Person>>;
}

pub trait SieveSettings {
    fn numbers(&self) -> &[i64];
    fn less_than(&self) -> i64;
    fn max_age(&self) -> u32;
}
