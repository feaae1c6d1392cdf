//! Clinic domain models.
//!
//! Value types describing one patient and the attributes the triage policy
//! reads. Records are immutable after construction; priority is always
//! re-derivable from the four fields alone.

mod patient;

pub use patient::{AffiliationTier, PatientRecord, SpecialCondition, CHILD_AGE, SENIOR_AGE};
