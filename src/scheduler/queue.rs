//! Stable priority queue over patient records.
//!
//! A `BinaryHeap` keyed by the triage score vector, with a monotonically
//! increasing arrival sequence as the final key. The sequence guarantees
//! FIFO order among patients that tie on every rule; a heap keyed on the
//! rules alone would reorder them arbitrarily.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::PatientRecord;
use crate::triage::{RuleScore, TriagePolicy};

/// One queued patient with its frozen heap key.
///
/// The score is computed once at enqueue time; records are immutable, so
/// the score cannot go stale.
#[derive(Debug, Clone)]
struct QueuedPatient {
    patient: PatientRecord,
    score: Vec<RuleScore>,
    seq: u64,
    arrival_tick: u64,
}

// BinaryHeap is a max-heap; reverse both keys so the lowest score vector
// (and, on ties, the earliest arrival) surfaces first.
impl Ord for QueuedPatient {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedPatient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedPatient {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedPatient {}

/// Priority-ordered waiting queue.
///
/// Duplicates by value are permitted; the arrival sequence keeps them
/// distinct and ordered. `enqueue` and `admit_next` are the only mutators.
///
/// # Example
/// ```
/// use clinic_turns::models::{AffiliationTier, PatientRecord};
/// use clinic_turns::scheduler::TurnQueue;
/// use clinic_turns::triage::TriagePolicy;
///
/// let mut queue = TurnQueue::new(TriagePolicy::clinic());
/// queue.enqueue(PatientRecord::new("standard", 30), 0);
/// queue.enqueue(
///     PatientRecord::new("complementary", 30)
///         .with_affiliation(AffiliationTier::Complementary),
///     0,
/// );
/// assert_eq!(queue.peek_next().unwrap().name, "complementary");
/// ```
#[derive(Debug, Clone)]
pub struct TurnQueue {
    policy: TriagePolicy,
    heap: BinaryHeap<QueuedPatient>,
    next_seq: u64,
}

impl TurnQueue {
    /// Creates an empty queue ordered by the given policy.
    pub fn new(policy: TriagePolicy) -> Self {
        Self {
            policy,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Inserts a patient, tagged with the tick of arrival. Always succeeds.
    pub fn enqueue(&mut self, patient: PatientRecord, arrival_tick: u64) {
        let score = self.policy.score(&patient);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedPatient {
            patient,
            score,
            seq,
            arrival_tick,
        });
    }

    /// The highest-priority waiting patient, without removing it.
    pub fn peek_next(&self) -> Option<&PatientRecord> {
        self.heap.peek().map(|q| &q.patient)
    }

    /// Removes and returns the highest-priority waiting patient together
    /// with the tick it arrived on.
    pub fn admit_next(&mut self) -> Option<(PatientRecord, u64)> {
        self.heap.pop().map(|q| (q.patient, q.arrival_tick))
    }

    /// The ordering policy in use.
    pub fn policy(&self) -> &TriagePolicy {
        &self.policy
    }

    /// Number of waiting patients.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no patient is waiting.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for TurnQueue {
    fn default() -> Self {
        Self::new(TriagePolicy::clinic())
    }
}
