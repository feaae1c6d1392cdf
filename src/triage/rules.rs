//! Built-in clinic triage rules.
//!
//! The three criteria of the clinic policy, in their intended precedence:
//!
//! 1. [`AffiliationRank`] — complementary plan before standard plan
//! 2. [`ConditionRank`] — special condition before none
//! 3. [`AgeBandRank`] — under 12 / 60 and over before ages in between
//!
//! # Score Convention
//! All rules return lower scores for patients served earlier; each returns
//! only 0 (elevated) or 1 (not elevated).

use super::{RuleScore, TriageRule};
use crate::models::{AffiliationTier, PatientRecord};

/// Complementary-plan affiliation outranks the standard plan.
#[derive(Debug, Clone, Copy)]
pub struct AffiliationRank;

impl TriageRule for AffiliationRank {
    fn name(&self) -> &'static str {
        "AFFILIATION"
    }

    fn evaluate(&self, patient: &PatientRecord) -> RuleScore {
        match patient.affiliation {
            AffiliationTier::Complementary => 0,
            AffiliationTier::Standard => 1,
        }
    }

    fn description(&self) -> &'static str {
        "Complementary plan before standard plan"
    }
}

/// A special condition (pregnancy, motor impairment) outranks none.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRank;

impl TriageRule for ConditionRank {
    fn name(&self) -> &'static str {
        "CONDITION"
    }

    fn evaluate(&self, patient: &PatientRecord) -> RuleScore {
        if patient.condition.is_elevated() {
            0
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "Special condition before none"
    }
}

/// The elevated age band (under 12, 60 and over) outranks ages in between.
#[derive(Debug, Clone, Copy)]
pub struct AgeBandRank;

impl TriageRule for AgeBandRank {
    fn name(&self) -> &'static str {
        "AGE_BAND"
    }

    fn evaluate(&self, patient: &PatientRecord) -> RuleScore {
        if patient.in_priority_age_band() {
            0
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "Children and seniors before other ages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpecialCondition;

    #[test]
    fn test_affiliation_rank() {
        let pos = PatientRecord::new("pos", 30);
        let pc = PatientRecord::new("pc", 30).with_affiliation(AffiliationTier::Complementary);
        assert_eq!(AffiliationRank.evaluate(&pc), 0);
        assert_eq!(AffiliationRank.evaluate(&pos), 1);
    }

    #[test]
    fn test_condition_rank() {
        let plain = PatientRecord::new("plain", 30);
        let pregnant =
            PatientRecord::new("pregnant", 30).with_condition(SpecialCondition::Pregnancy);
        let impaired =
            PatientRecord::new("impaired", 30).with_condition(SpecialCondition::MotorImpairment);
        assert_eq!(ConditionRank.evaluate(&pregnant), 0);
        assert_eq!(ConditionRank.evaluate(&impaired), 0);
        assert_eq!(ConditionRank.evaluate(&plain), 1);
    }

    #[test]
    fn test_age_band_rank() {
        assert_eq!(AgeBandRank.evaluate(&PatientRecord::new("child", 5)), 0);
        assert_eq!(AgeBandRank.evaluate(&PatientRecord::new("senior", 82)), 0);
        assert_eq!(AgeBandRank.evaluate(&PatientRecord::new("adult", 40)), 1);
    }
}
