//! Intake form validation.
//!
//! Turns the raw text fields of an intake form into a `PatientRecord`, or
//! reports every problem at once. Detects:
//! - Empty patient name
//! - Non-numeric or negative age
//! - Unknown affiliation plan code
//! - Unknown special condition code
//!
//! A record that fails validation is never enqueued; the scheduler only
//! ever sees well-formed records.

use thiserror::Error;

use crate::models::{AffiliationTier, PatientRecord, SpecialCondition};

/// Validation result: a well-formed record, or all detected issues.
pub type IntakeResult = Result<PatientRecord, Vec<IntakeError>>;

/// A rejected intake field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The name field was empty or all whitespace.
    #[error("patient name must not be empty")]
    EmptyName,
    /// The age field did not parse as a non-negative integer.
    #[error("age '{0}' is not a non-negative integer")]
    InvalidAge(String),
    /// The affiliation field was not a known plan code.
    #[error("unknown affiliation code '{0}' (expected POS or PC)")]
    UnknownAffiliation(String),
    /// The condition field was not a known condition code.
    #[error("unknown condition code '{0}'")]
    UnknownCondition(String),
}

/// Raw intake form fields, as typed.
///
/// # Example
/// ```
/// use clinic_turns::validation::PatientIntake;
///
/// let record = PatientIntake::new("Rosa", "70", "PC", "none")
///     .validate()
///     .unwrap();
/// assert_eq!(record.age, 70);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIntake {
    /// Name as typed.
    pub name: String,
    /// Age as typed; must parse as a non-negative integer.
    pub age: String,
    /// Affiliation plan code (`POS` or `PC`).
    pub affiliation: String,
    /// Condition code (`none`, `pregnancy`, `motor-impairment`).
    pub condition: String,
}

impl PatientIntake {
    /// Captures the four form fields.
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        affiliation: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            affiliation: affiliation.into(),
            condition: condition.into(),
        }
    }

    /// Checks every field and builds a record.
    ///
    /// Fields are checked independently and all failures are returned
    /// together, so a form can highlight each offending input in one pass.
    pub fn validate(&self) -> IntakeResult {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(IntakeError::EmptyName);
        }

        let age = match self.age.trim().parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push(IntakeError::InvalidAge(self.age.clone()));
                None
            }
        };

        let affiliation = match AffiliationTier::from_code(self.affiliation.trim()) {
            Some(tier) => Some(tier),
            None => {
                errors.push(IntakeError::UnknownAffiliation(self.affiliation.clone()));
                None
            }
        };

        let condition = match SpecialCondition::from_code(self.condition.trim()) {
            Some(condition) => Some(condition),
            None => {
                errors.push(IntakeError::UnknownCondition(self.condition.clone()));
                None
            }
        };

        match (age, affiliation, condition) {
            (Some(age), Some(affiliation), Some(condition)) if errors.is_empty() => {
                Ok(PatientRecord {
                    name: name.to_string(),
                    age,
                    affiliation,
                    condition,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_intake() {
        let record = PatientIntake::new("Ana López", "34", "POS", "pregnancy")
            .validate()
            .unwrap();
        assert_eq!(record.name, "Ana López");
        assert_eq!(record.age, 34);
        assert_eq!(record.affiliation, AffiliationTier::Standard);
        assert_eq!(record.condition, SpecialCondition::Pregnancy);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let record = PatientIntake::new(" Rosa ", " 70 ", " pc ", " NONE ")
            .validate()
            .unwrap();
        assert_eq!(record.name, "Rosa");
        assert_eq!(record.age, 70);
        assert_eq!(record.affiliation, AffiliationTier::Complementary);
    }

    #[test]
    fn test_empty_name_rejected() {
        let errors = PatientIntake::new("   ", "34", "POS", "none")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![IntakeError::EmptyName]);
    }

    #[test]
    fn test_bad_age_rejected() {
        for bad in ["", "abc", "-3", "4.5"] {
            let errors = PatientIntake::new("Ana", bad, "POS", "none")
                .validate()
                .unwrap_err();
            assert_eq!(errors, vec![IntakeError::InvalidAge(bad.to_string())]);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        let errors = PatientIntake::new("Ana", "34", "EPS", "asthma")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                IntakeError::UnknownAffiliation("EPS".to_string()),
                IntakeError::UnknownCondition("asthma".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = PatientIntake::new("", "old", "??", "??")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_error_messages_name_the_input() {
        let err = IntakeError::UnknownAffiliation("EPS".to_string());
        assert!(err.to_string().contains("EPS"));
    }
}
