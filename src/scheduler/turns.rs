//! Tick-driven turn scheduler.
//!
//! # State machine
//!
//! Two states: **Idle** (no current turn, `remaining_ticks == 0`) and
//! **Serving** (a current turn with a countdown). Each `advance_tick()`:
//!
//! - countdown above zero: burn one tick;
//! - countdown at zero: admit the highest-priority waiting patient and
//!   reset the countdown, or go (or stay) Idle when nobody waits.
//!
//! # Countdown policy
//!
//! The tick that admits a patient does not consume a countdown unit: after
//! the admitting tick `remaining_ticks` equals the full service duration
//! and decrements begin on the next tick, so every patient is served for
//! exactly `service_ticks` ticks (plus extensions).

use thiserror::Error;

use super::kpi::{KpiCounters, TurnKpi};
use super::queue::TurnQueue;
use crate::models::PatientRecord;
use crate::triage::TriagePolicy;

/// Default per-patient service duration, in ticks.
pub const DEFAULT_SERVICE_TICKS: u32 = 5;

/// Outcome of one `advance_tick()` call, for the display collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The current turn continues; one tick was burned.
    Serving { remaining_ticks: u32 },
    /// A new patient was admitted and the countdown reset.
    Admitted(PatientRecord),
    /// Nobody is waiting and no turn is active.
    Idle,
}

/// Rejected time extension. The countdown is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtendError {
    /// No patient is currently being served.
    #[error("no patient is currently being served")]
    NoActiveTurn,
    /// An extension must add at least one tick.
    #[error("extension must add at least one tick")]
    ZeroTicks,
}

/// The turn scheduler: waiting queue, current turn, and countdown.
///
/// One instance is owned by the application session and lives for its
/// duration. When a UI thread and a timer thread share it, wrap it in
/// [`SharedTurnScheduler`](super::SharedTurnScheduler); every operation
/// here is O(log n) or O(1) and never blocks.
///
/// # Example
/// ```
/// use clinic_turns::models::PatientRecord;
/// use clinic_turns::scheduler::{TickEvent, TurnScheduler};
///
/// let mut scheduler = TurnScheduler::new();
/// scheduler.enqueue(PatientRecord::new("Ana", 34));
///
/// match scheduler.advance_tick() {
///     TickEvent::Admitted(patient) => assert_eq!(patient.name, "Ana"),
///     other => panic!("expected admission, got {other:?}"),
/// }
/// assert_eq!(scheduler.remaining_ticks(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct TurnScheduler {
    queue: TurnQueue,
    current: Option<PatientRecord>,
    remaining_ticks: u32,
    service_ticks: u32,
    tick: u64,
    counters: KpiCounters,
}

impl TurnScheduler {
    /// Creates an idle scheduler with the clinic policy and the default
    /// service duration.
    pub fn new() -> Self {
        Self {
            queue: TurnQueue::new(TriagePolicy::clinic()),
            current: None,
            remaining_ticks: 0,
            service_ticks: DEFAULT_SERVICE_TICKS,
            tick: 0,
            counters: KpiCounters::default(),
        }
    }

    /// Sets the per-patient service duration in ticks.
    pub fn with_service_ticks(mut self, service_ticks: u32) -> Self {
        self.service_ticks = service_ticks;
        self
    }

    /// Sets the triage policy. Applies to patients enqueued afterwards.
    pub fn with_policy(mut self, policy: TriagePolicy) -> Self {
        self.queue = TurnQueue::new(policy);
        self
    }

    /// Adds a patient to the waiting queue. Always succeeds; the current
    /// turn and countdown are unaffected.
    pub fn enqueue(&mut self, patient: PatientRecord) {
        self.queue.enqueue(patient, self.tick);
    }

    /// The highest-priority waiting patient, without removing it.
    pub fn peek_next(&self) -> Option<&PatientRecord> {
        self.queue.peek_next()
    }

    /// Removes and returns the highest-priority waiting patient.
    ///
    /// Only mutates the waiting queue; the current turn and countdown are
    /// owned by [`advance_tick`](Self::advance_tick).
    pub fn admit_next(&mut self) -> Option<PatientRecord> {
        let (patient, arrival_tick) = self.queue.admit_next()?;
        self.counters.record_admission(self.tick - arrival_tick);
        Some(patient)
    }

    /// Advances the state machine by one discrete time unit.
    ///
    /// Call once per tick from the external tick source (a one-second
    /// timer in the reference setup, or a test harness). Never fails; the
    /// returned event tells the display what changed.
    pub fn advance_tick(&mut self) -> TickEvent {
        let event = if self.remaining_ticks > 0 {
            self.remaining_ticks -= 1;
            self.counters.record_serving_tick();
            TickEvent::Serving {
                remaining_ticks: self.remaining_ticks,
            }
        } else {
            match self.admit_next() {
                Some(patient) => {
                    self.current = Some(patient.clone());
                    self.remaining_ticks = self.service_ticks;
                    TickEvent::Admitted(patient)
                }
                None => {
                    self.current = None;
                    self.counters.record_idle_tick();
                    TickEvent::Idle
                }
            }
        };
        self.tick += 1;
        event
    }

    /// Grants the current turn `extra_ticks` more ticks.
    ///
    /// Rejected with no state change while idle or for a zero extension,
    /// so an orphaned countdown can never exist.
    pub fn extend_current_turn(&mut self, extra_ticks: u32) -> Result<(), ExtendError> {
        if self.current.is_none() {
            return Err(ExtendError::NoActiveTurn);
        }
        if extra_ticks == 0 {
            return Err(ExtendError::ZeroTicks);
        }
        self.remaining_ticks += extra_ticks;
        self.counters.record_extension(extra_ticks);
        Ok(())
    }

    /// The patient presently being served, if any.
    pub fn current_turn(&self) -> Option<&PatientRecord> {
        self.current.as_ref()
    }

    /// Ticks left before the current turn completes.
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    /// Configured per-patient service duration.
    pub fn service_ticks(&self) -> u32 {
        self.service_ticks
    }

    /// Number of waiting patients.
    pub fn waiting_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether no patient is being served.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Ticks elapsed since the scheduler was created.
    pub fn ticks_elapsed(&self) -> u64 {
        self.tick
    }

    /// Service metrics accumulated so far.
    pub fn kpi(&self) -> TurnKpi {
        self.counters.kpi(self.tick)
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new()
    }
}
