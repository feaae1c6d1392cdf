//! Service metrics (KPIs).
//!
//! Accumulated while the scheduler runs and snapshotted on demand.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Patients Admitted | Turns handed out so far |
//! | Idle Ticks | Ticks with an empty queue and no turn |
//! | Serving Ticks | Countdown ticks burned (extensions included) |
//! | Extension Ticks | Extra ticks granted via manual extension |
//! | Avg / Max Wait | Ticks between a patient's arrival and admission |

/// Service performance indicators.
///
/// All durations are in ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnKpi {
    /// Patients admitted so far.
    pub patients_admitted: usize,
    /// Ticks elapsed since the scheduler was created.
    pub ticks_elapsed: u64,
    /// Ticks spent idle (empty queue, no turn).
    pub idle_ticks: u64,
    /// Countdown ticks burned serving patients.
    pub serving_ticks: u64,
    /// Extra ticks granted through manual extensions.
    pub extension_ticks_granted: u64,
    /// Mean admission wait across admitted patients. Zero when nobody has
    /// been admitted yet.
    pub avg_wait_ticks: f64,
    /// Longest admission wait of any single patient.
    pub max_wait_ticks: u64,
}

/// Raw accumulators kept by the scheduler.
#[derive(Debug, Clone, Default)]
pub(crate) struct KpiCounters {
    admitted: usize,
    idle_ticks: u64,
    serving_ticks: u64,
    extension_ticks: u64,
    total_wait_ticks: u64,
    max_wait_ticks: u64,
}

impl KpiCounters {
    pub(crate) fn record_admission(&mut self, wait_ticks: u64) {
        self.admitted += 1;
        self.total_wait_ticks += wait_ticks;
        self.max_wait_ticks = self.max_wait_ticks.max(wait_ticks);
    }

    pub(crate) fn record_idle_tick(&mut self) {
        self.idle_ticks += 1;
    }

    pub(crate) fn record_serving_tick(&mut self) {
        self.serving_ticks += 1;
    }

    pub(crate) fn record_extension(&mut self, extra_ticks: u32) {
        self.extension_ticks += u64::from(extra_ticks);
    }

    /// Snapshots the counters into derived metrics.
    pub(crate) fn kpi(&self, ticks_elapsed: u64) -> TurnKpi {
        let avg_wait_ticks = if self.admitted == 0 {
            0.0
        } else {
            self.total_wait_ticks as f64 / self.admitted as f64
        };
        TurnKpi {
            patients_admitted: self.admitted,
            ticks_elapsed,
            idle_ticks: self.idle_ticks,
            serving_ticks: self.serving_ticks,
            extension_ticks_granted: self.extension_ticks,
            avg_wait_ticks,
            max_wait_ticks: self.max_wait_ticks,
        }
    }
}
