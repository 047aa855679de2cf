use crate::core::{Person, PersonSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::io::Read;
use std::path::PathBuf;

/// People read from a CSV file with a `name,age,phone_number` header.
#[derive(Debug, Clone)]
pub struct CsvPeople {
    path: PathBuf,
}

impl CsvPeople {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Person>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut people = Vec::new();
        for row in csv_reader.deserialize() {
            let person: Person = row?;
            people.push(person);
        }
        Ok(people)
    }
}

impl PersonSource for CsvPeople {
    fn people(&self) -> Result<Vec<Person>> {
        validate_path("path", &self.path.to_string_lossy())?;
        tracing::debug!("Reading people from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        Self::from_reader(file)
    }
}
