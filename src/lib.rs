//! Clinic turn assignment.
//!
//! Orders a clinic waiting queue by a multi-tier triage policy and advances
//! through it on a discrete, tick-driven state machine. The crate is the
//! core of a turn-display application: a presentation layer (out of scope
//! here) builds patient records, enqueues them, drives one tick per unit of
//! wall time, and renders the current turn and remaining time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PatientRecord`, `AffiliationTier`,
//!   `SpecialCondition`
//! - **`triage`**: Priority policy — `TriageRule`, built-in clinic rules,
//!   `TriagePolicy`
//! - **`scheduler`**: `TurnQueue`, `TurnScheduler`, `TickEvent`, `TurnKpi`,
//!   `SharedTurnScheduler`
//! - **`validation`**: Intake form checks (`PatientIntake`, `IntakeError`)
//!
//! # Ordering rules
//!
//! Applied in strict precedence; the first non-tie decides, and full ties
//! fall back to arrival order (first enqueued, first served):
//!
//! 1. Complementary-plan affiliation outranks the standard plan.
//! 2. A special condition (pregnancy, motor impairment) outranks none.
//! 3. Ages under 12 or 60 and over outrank ages in between.
//!
//! # Reference
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//!   (priority dispatching)

pub mod models;
pub mod scheduler;
pub mod triage;
pub mod validation;
