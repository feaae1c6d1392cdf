//! Patient record model.
//!
//! A `PatientRecord` is an immutable value: name, age, affiliation tier,
//! and special condition. The triage policy reads these four fields and
//! nothing else.

use serde::{Deserialize, Serialize};

/// Patients aged `SENIOR_AGE` and over fall in the elevated-priority band.
pub const SENIOR_AGE: u32 = 60;

/// Patients younger than `CHILD_AGE` fall in the elevated-priority band.
pub const CHILD_AGE: u32 = 12;

/// Patient membership class.
///
/// Serialized with the plan codes used by the clinic's affiliation system:
/// `"POS"` for the standard plan, `"PC"` for the complementary plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffiliationTier {
    /// Standard plan (code `POS`).
    #[default]
    #[serde(rename = "POS")]
    Standard,
    /// Complementary plan (code `PC`); always served before standard-plan
    /// patients.
    #[serde(rename = "PC")]
    Complementary,
}

impl AffiliationTier {
    /// Parses a plan code. Codes are matched case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("POS") {
            Some(Self::Standard)
        } else if code.eq_ignore_ascii_case("PC") {
            Some(Self::Complementary)
        } else {
            None
        }
    }

    /// The plan code for this tier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "POS",
            Self::Complementary => "PC",
        }
    }
}

/// A qualifying condition granting elevated priority within a tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialCondition {
    /// No qualifying condition.
    #[default]
    None,
    Pregnancy,
    MotorImpairment,
}

impl SpecialCondition {
    /// Parses a condition code (`"none"`, `"pregnancy"`,
    /// `"motor-impairment"`), case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("none") {
            Some(Self::None)
        } else if code.eq_ignore_ascii_case("pregnancy") {
            Some(Self::Pregnancy)
        } else if code.eq_ignore_ascii_case("motor-impairment") {
            Some(Self::MotorImpairment)
        } else {
            None
        }
    }

    /// Whether this condition grants elevated priority.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One patient waiting for (or holding) a service turn.
///
/// Immutable after construction. Equality is by value; two records with the
/// same four fields are interchangeable for ordering purposes, and the
/// queue keeps duplicates in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Display name. Non-empty; enforced at intake, not here.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Membership class.
    pub affiliation: AffiliationTier,
    /// Qualifying condition, if any.
    pub condition: SpecialCondition,
}

impl PatientRecord {
    /// Creates a standard-plan record with no special condition.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            affiliation: AffiliationTier::default(),
            condition: SpecialCondition::default(),
        }
    }

    /// Sets the affiliation tier.
    pub fn with_affiliation(mut self, affiliation: AffiliationTier) -> Self {
        self.affiliation = affiliation;
        self
    }

    /// Sets the special condition.
    pub fn with_condition(mut self, condition: SpecialCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Whether this patient's age falls in the elevated-priority band
    /// (under [`CHILD_AGE`] or [`SENIOR_AGE`] and over).
    pub fn in_priority_age_band(&self) -> bool {
        self.age >= SENIOR_AGE || self.age < CHILD_AGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let p = PatientRecord::new("Ana", 34)
            .with_affiliation(AffiliationTier::Complementary)
            .with_condition(SpecialCondition::Pregnancy);

        assert_eq!(p.name, "Ana");
        assert_eq!(p.age, 34);
        assert_eq!(p.affiliation, AffiliationTier::Complementary);
        assert_eq!(p.condition, SpecialCondition::Pregnancy);
    }

    #[test]
    fn test_defaults_are_standard_none() {
        let p = PatientRecord::new("Luis", 40);
        assert_eq!(p.affiliation, AffiliationTier::Standard);
        assert_eq!(p.condition, SpecialCondition::None);
        assert!(!p.in_priority_age_band());
    }

    #[test]
    fn test_age_band_edges() {
        assert!(PatientRecord::new("child", 11).in_priority_age_band());
        assert!(!PatientRecord::new("teen", 12).in_priority_age_band());
        assert!(!PatientRecord::new("adult", 59).in_priority_age_band());
        assert!(PatientRecord::new("senior", 60).in_priority_age_band());
        assert!(PatientRecord::new("infant", 0).in_priority_age_band());
    }

    #[test]
    fn test_tier_codes() {
        assert_eq!(AffiliationTier::from_code("POS"), Some(AffiliationTier::Standard));
        assert_eq!(AffiliationTier::from_code("pc"), Some(AffiliationTier::Complementary));
        assert_eq!(AffiliationTier::from_code("EPS"), None);
        assert_eq!(AffiliationTier::Complementary.code(), "PC");
    }

    #[test]
    fn test_condition_codes() {
        assert_eq!(SpecialCondition::from_code("none"), Some(SpecialCondition::None));
        assert_eq!(
            SpecialCondition::from_code("Motor-Impairment"),
            Some(SpecialCondition::MotorImpairment)
        );
        assert_eq!(SpecialCondition::from_code("asthma"), None);
        assert!(SpecialCondition::Pregnancy.is_elevated());
        assert!(!SpecialCondition::None.is_elevated());
    }

    #[test]
    fn test_serde_wire_codes() {
        let p = PatientRecord::new("Rosa", 70).with_affiliation(AffiliationTier::Complementary);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"PC\""));

        let back: PatientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let standard: AffiliationTier = serde_json::from_str("\"POS\"").unwrap();
        assert_eq!(standard, AffiliationTier::Standard);
    }
}
