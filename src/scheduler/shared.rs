//! Mutex-guarded scheduler handle for two-thread use.
//!
//! Event-driven toolkits typically fire their timer callback on one thread
//! while button handlers run on another. Both mutate scheduler state, so a
//! single lock guards every operation. All operations are O(log n) or O(1)
//! and hold the lock only for that long.

use std::sync::{Arc, Mutex, MutexGuard};

use super::turns::{ExtendError, TickEvent, TurnScheduler};
use crate::models::PatientRecord;

/// A cloneable, thread-safe handle to one [`TurnScheduler`].
///
/// Clones share the same underlying scheduler. Hand one clone to the tick
/// source and one to the UI.
///
/// # Example
/// ```
/// use clinic_turns::models::PatientRecord;
/// use clinic_turns::scheduler::{SharedTurnScheduler, TurnScheduler};
///
/// let shared = SharedTurnScheduler::new(TurnScheduler::new());
/// let for_timer = shared.clone();
///
/// shared.enqueue(PatientRecord::new("Ana", 34));
/// for_timer.advance_tick();
/// assert_eq!(shared.current_turn().unwrap().name, "Ana");
/// ```
#[derive(Debug, Clone)]
pub struct SharedTurnScheduler {
    inner: Arc<Mutex<TurnScheduler>>,
}

impl SharedTurnScheduler {
    /// Wraps a scheduler in a shared handle.
    pub fn new(scheduler: TurnScheduler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    // Scheduler state stays consistent across every operation, so a
    // poisoned lock (a panicking holder) loses nothing; recover the guard.
    fn lock(&self) -> MutexGuard<'_, TurnScheduler> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// See [`TurnScheduler::enqueue`].
    pub fn enqueue(&self, patient: PatientRecord) {
        self.lock().enqueue(patient);
    }

    /// See [`TurnScheduler::peek_next`]. Returns a clone; the lock is not
    /// held after the call.
    pub fn peek_next(&self) -> Option<PatientRecord> {
        self.lock().peek_next().cloned()
    }

    /// See [`TurnScheduler::admit_next`].
    pub fn admit_next(&self) -> Option<PatientRecord> {
        self.lock().admit_next()
    }

    /// See [`TurnScheduler::advance_tick`].
    pub fn advance_tick(&self) -> TickEvent {
        self.lock().advance_tick()
    }

    /// See [`TurnScheduler::extend_current_turn`].
    pub fn extend_current_turn(&self, extra_ticks: u32) -> Result<(), ExtendError> {
        self.lock().extend_current_turn(extra_ticks)
    }

    /// See [`TurnScheduler::current_turn`]. Returns a clone.
    pub fn current_turn(&self) -> Option<PatientRecord> {
        self.lock().current_turn().cloned()
    }

    /// See [`TurnScheduler::remaining_ticks`].
    pub fn remaining_ticks(&self) -> u32 {
        self.lock().remaining_ticks()
    }

    /// See [`TurnScheduler::waiting_count`].
    pub fn waiting_count(&self) -> usize {
        self.lock().waiting_count()
    }

    /// See [`TurnScheduler::kpi`].
    pub fn kpi(&self) -> super::TurnKpi {
        self.lock().kpi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedTurnScheduler::new(TurnScheduler::new());
        let other = shared.clone();

        shared.enqueue(PatientRecord::new("Ana", 34));
        assert_eq!(other.waiting_count(), 1);

        other.advance_tick();
        assert_eq!(shared.current_turn().unwrap().name, "Ana");
        assert_eq!(shared.remaining_ticks(), 5);
    }

    #[test]
    fn test_extension_through_handle() {
        let shared = SharedTurnScheduler::new(TurnScheduler::new());
        assert_eq!(
            shared.extend_current_turn(5),
            Err(ExtendError::NoActiveTurn)
        );

        shared.enqueue(PatientRecord::new("Ana", 34));
        shared.advance_tick();
        shared.extend_current_turn(5).unwrap();
        assert_eq!(shared.remaining_ticks(), 10);
    }

    #[test]
    fn test_timer_thread_and_ui_thread() {
        let shared = SharedTurnScheduler::new(TurnScheduler::new());
        let for_timer = shared.clone();

        // UI thread enqueues while the timer thread ticks.
        let ui = thread::spawn({
            let shared = shared.clone();
            move || {
                for i in 0..50 {
                    shared.enqueue(PatientRecord::new(format!("p{i}"), 40));
                }
            }
        });
        let timer = thread::spawn(move || {
            for _ in 0..50 {
                for_timer.advance_tick();
            }
        });
        ui.join().unwrap();
        timer.join().unwrap();

        // Every patient is either still waiting or was admitted; ticks all
        // happened.
        let kpi = shared.kpi();
        assert_eq!(kpi.ticks_elapsed, 50);
        assert_eq!(shared.waiting_count() + kpi.patients_admitted, 50);
    }
}
