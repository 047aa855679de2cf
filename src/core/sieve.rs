use crate::core::filter::{filter, less_than};
use crate::core::validator::{BatchSummary, PersonValidator};
use crate::core::{Person, PersonSource, SieveSettings};
use crate::utils::error::{Result, SieveError};

/// Runs the filter and the person validator against one set of settings.
pub struct SieveEngine<C: SieveSettings> {
    settings: C,
}

impl<C: SieveSettings> SieveEngine<C> {
    pub fn new(settings: C) -> Self {
        Self { settings }
    }

    fn validator(&self) -> PersonValidator {
        PersonValidator::new(self.settings.max_age())
    }

    pub fn run_filter(&self) -> Vec<i64> {
        let numbers = self.settings.numbers();
        let threshold = self.settings.less_than();
        tracing::debug!("Filtering {} numbers by < {}", numbers.len(), threshold);

        let kept = filter(numbers, less_than(threshold));
        tracing::info!("Kept {} of {} numbers", kept.len(), numbers.len());
        kept
    }

    /// Fails with `InvalidPersonError` listing the broken rules.
    pub fn ensure_valid(&self, person: &Person) -> Result<()> {
        let report = self.validator().check(person);
        if report.is_valid() {
            return Ok(());
        }

        let reasons: Vec<String> = report.failures().iter().map(|r| r.to_string()).collect();
        Err(SieveError::InvalidPersonError {
            name: person.name.clone(),
            reasons: reasons.join(", "),
        })
    }

    pub fn run_validation<P: PersonSource>(&self, source: &P) -> Result<BatchSummary> {
        let people = source.people()?;
        tracing::info!("Validating {} people", people.len());

        let summary = self.validator().validate_all(&people);
        tracing::info!(
            "✅ {} valid, ❌ {} invalid",
            summary.valid,
            summary.invalid
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        numbers: Vec<i64>,
        less_than: i64,
        max_age: u32,
    }

    impl SieveSettings for Fixed {
        fn numbers(&self) -> &[i64] {
            &self.numbers
        }

        fn less_than(&self) -> i64 {
            self.less_than
        }

        fn max_age(&self) -> u32 {
            self.max_age
        }
    }

    struct InMemory(Vec<Person>);

    impl PersonSource for InMemory {
        fn people(&self) -> Result<Vec<Person>> {
            Ok(self.0.clone())
        }
    }

    fn engine() -> SieveEngine<Fixed> {
        SieveEngine::new(Fixed {
            numbers: vec![1, 1, 2, 3, 5, 8, 13],
            less_than: 10,
            max_age: 120,
        })
    }

    #[test]
    fn test_run_filter() {
        assert_eq!(engine().run_filter(), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_ensure_valid_reports_rules() {
        let engine = engine();
        assert!(engine.ensure_valid(&Person::new("Alice", 30, "")).is_ok());

        let err = engine
            .ensure_valid(&Person::new("", 150, ""))
            .unwrap_err();
        match err {
            SieveError::InvalidPersonError { reasons, .. } => assert_eq!(reasons, "age, name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_validation() {
        let source = InMemory(vec![
            Person::new("Alice", 30, ""),
            Person::new("Alice", 150, ""),
        ]);
        let summary = engine().run_validation(&source).unwrap();
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
    }
}
