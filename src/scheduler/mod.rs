//! Turn queue, tick-driven scheduler, and service metrics.
//!
//! # Algorithm
//!
//! `TurnQueue` is a stable priority queue: the heap key is the triage score
//! vector plus a monotonically increasing arrival sequence, so patients who
//! tie on every rule are served first-come, first-served.
//!
//! `TurnScheduler` owns the queue and a countdown. One `advance_tick()`
//! call per discrete time unit either burns one tick of the current turn or
//! admits the next patient; the machine idles while the queue is empty and
//! re-checks on every tick.
//!
//! # KPI
//!
//! `TurnKpi` reports admissions, idle/serving tick split, waiting times,
//! and granted extensions.

mod kpi;
mod queue;
mod shared;
mod turns;

pub use kpi::TurnKpi;
pub use queue::TurnQueue;
pub use shared::SharedTurnScheduler;
pub use turns::{ExtendError, TickEvent, TurnScheduler, DEFAULT_SERVICE_TICKS};
