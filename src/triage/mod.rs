//! Triage rules and the priority policy.
//!
//! Adapts classic priority-dispatching structure to clinic triage: each
//! criterion is a small rule scoring one patient, and a policy evaluates an
//! ordered chain of rules, using the next rule only on ties.
//!
//! # Usage
//!
//! ```
//! use clinic_turns::models::{AffiliationTier, PatientRecord};
//! use clinic_turns::triage::TriagePolicy;
//!
//! let policy = TriagePolicy::clinic();
//! let a = PatientRecord::new("A", 30);
//! let b = PatientRecord::new("B", 30).with_affiliation(AffiliationTier::Complementary);
//! // B is served first: lower score sorts earlier.
//! assert!(policy.compare(&b, &a).is_lt());
//! ```
//!
//! # Reference
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod policy;
pub mod rules;

pub use policy::TriagePolicy;

use crate::models::PatientRecord;
use std::fmt::Debug;

/// Score returned by a triage rule.
///
/// Lower scores = higher priority (served first). Each built-in clinic rule
/// returns a small rank, not a measurement, so scores are exact integers.
pub type RuleScore = i64;

/// A triage rule that ranks one patient on a single criterion.
///
/// # Score Convention
/// **Lower score = served earlier.** Rules should return smaller values for
/// patients that should be admitted first.
pub trait TriageRule: Send + Sync + Debug {
    /// Rule name (e.g., "AFFILIATION").
    fn name(&self) -> &'static str;

    /// Ranks the patient under this criterion. Lower = served earlier.
    fn evaluate(&self, patient: &PatientRecord) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
