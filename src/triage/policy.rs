//! Triage policy: an ordered chain of rules yielding a total order.
//!
//! Rules are evaluated in sequence; the first non-tie decides. A full tie
//! leaves `Ordering::Equal`, which the queue resolves by arrival sequence,
//! so the composite order over queued patients is total and deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, TriageRule};
use crate::models::PatientRecord;

/// An ordered chain of triage rules.
///
/// Each rule is itself transitive, and rules are applied in fixed
/// precedence, so the composite comparison is transitive as well.
///
/// # Example
/// ```
/// use clinic_turns::triage::{rules, TriagePolicy};
///
/// // Same chain as `TriagePolicy::clinic()`.
/// let policy = TriagePolicy::new()
///     .with_rule(rules::AffiliationRank)
///     .with_rule(rules::ConditionRank)
///     .with_rule(rules::AgeBandRank);
/// ```
#[derive(Clone)]
pub struct TriagePolicy {
    rules: Vec<Arc<dyn TriageRule>>,
}

impl TriagePolicy {
    /// Creates an empty policy. With no rules, every pair compares equal
    /// and the queue degenerates to plain FIFO.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The clinic's standard policy: affiliation, then special condition,
    /// then age band.
    pub fn clinic() -> Self {
        Self::new()
            .with_rule(super::rules::AffiliationRank)
            .with_rule(super::rules::ConditionRank)
            .with_rule(super::rules::AgeBandRank)
    }

    /// Appends a rule at the lowest precedence position.
    pub fn with_rule<R: TriageRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules in the chain.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluates every rule for one patient, in precedence order.
    ///
    /// The resulting vector compares lexicographically: lower = served
    /// earlier. The queue stores this as the heap key so a record's
    /// priority is fixed at enqueue time.
    pub fn score(&self, patient: &PatientRecord) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(patient)).collect()
    }

    /// Compares two patients under this policy.
    ///
    /// `Ordering::Less` means `a` is served before `b`. Returns
    /// `Ordering::Equal` only when every rule ties.
    pub fn compare(&self, a: &PatientRecord, b: &PatientRecord) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Default for TriagePolicy {
    fn default() -> Self {
        Self::clinic()
    }
}

impl std::fmt::Debug for TriagePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriagePolicy")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
