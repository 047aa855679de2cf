pub mod filter;
pub mod sieve;
pub mod validator;

pub use crate::domain::model::{Age, Person, PhoneNumber, ValidationReport};
pub use crate::domain::ports::{PersonSource, SieveSettings};
pub use crate::utils::error::Result;
