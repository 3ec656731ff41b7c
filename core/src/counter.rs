//! Count-up animation for numeric readouts.
//!
//! An [`AnimatedCounter`] is bound to one displayed metric. It sits dormant
//! until the readout is first seen, then steps from zero to its target over a
//! fixed duration and stops for good:
//!
//! ```text
//! Dormant --mark_visible--> Running --last tick--> Completed
//!    \__________________________\___cancel___> Cancelled
//! ```
//!
//! The state machine owns no timer. Hosts call [`AnimatedCounter::tick`] every
//! [`AnimatedCounter::step_interval_ms`]: the web front-end from a component
//! task, native code through [`runner::spawn_counter`].

use morph_types::config::DEFAULT_COUNTER_STEPS;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting for the readout to become visible.
    Dormant,
    Running,
    /// Reached the target. Terminal.
    Completed,
    /// The readout was destroyed first. Terminal.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CounterError {
    #[error("counter duration must be greater than zero")]
    ZeroDuration,
    #[error("counter needs at least one step")]
    ZeroSteps,
    #[error("counter target must be finite, got {0}")]
    NonFiniteTarget(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedCounter {
    target: f64,
    duration_ms: u32,
    steps: u32,
    frame: u32,
    display: f64,
    phase: CounterPhase,
}

impl AnimatedCounter {
    pub fn new(target: f64, duration_ms: u32) -> Result<Self, CounterError> {
        if duration_ms == 0 {
            return Err(CounterError::ZeroDuration);
        }
        if !target.is_finite() {
            return Err(CounterError::NonFiniteTarget(target));
        }
        Ok(Self {
            target,
            duration_ms,
            steps: DEFAULT_COUNTER_STEPS,
            frame: 0,
            display: 0.0,
            phase: CounterPhase::Dormant,
        })
    }

    pub fn with_steps(mut self, steps: u32) -> Result<Self, CounterError> {
        if steps == 0 {
            return Err(CounterError::ZeroSteps);
        }
        self.steps = steps;
        Ok(self)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Ticks performed so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Value the readout should show right now.
    pub fn display_value(&self) -> f64 {
        self.display
    }

    pub fn is_running(&self) -> bool {
        self.phase == CounterPhase::Running
    }

    /// Completed or cancelled; no tick will ever change the value again.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CounterPhase::Completed | CounterPhase::Cancelled)
    }

    /// Delay between ticks, never below 1 ms.
    pub fn step_interval_ms(&self) -> u32 {
        (self.duration_ms / self.steps).max(1)
    }

    /// Visibility signal. Only the first call while dormant starts the run;
    /// returns whether this call did.
    pub fn mark_visible(&mut self) -> bool {
        if self.phase != CounterPhase::Dormant {
            return false;
        }
        self.phase = CounterPhase::Running;
        tracing::trace!(target_value = self.target, "Counter armed");
        true
    }

    /// Advance one step. Returns the new display value, or `None` when the
    /// counter is not running.
    pub fn tick(&mut self) -> Option<f64> {
        if self.phase != CounterPhase::Running {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.steps {
            self.display = self.target;
            self.phase = CounterPhase::Completed;
        } else {
            let raw = self.target * self.frame as f64 / self.steps as f64;
            self.display = round_step(raw, self.target);
        }
        Some(self.display)
    }

    /// Replace the target before the run starts. Once armed, a counter keeps
    /// its target; a fresh counter is needed to animate again.
    pub fn retarget(&mut self, target: f64) -> bool {
        if self.phase != CounterPhase::Dormant || !target.is_finite() {
            return false;
        }
        self.target = target;
        true
    }

    /// The bound readout went away. Stops any further ticks.
    pub fn cancel(&mut self) {
        if self.phase != CounterPhase::Completed {
            self.phase = CounterPhase::Cancelled;
        }
    }
}

/// Whole targets round each step; fractional targets truncate to one decimal.
fn round_step(value: f64, target: f64) -> f64 {
    if target.fract() == 0.0 {
        value.round()
    } else {
        (value * 10.0).trunc() / 10.0
    }
}

#[cfg(feature = "runtime")]
pub mod runner {
    //! tokio host for [`AnimatedCounter`].

    use std::time::Duration;

    use tokio::sync::{oneshot, watch};
    use tokio::task::JoinHandle;
    use tokio::time::MissedTickBehavior;

    use super::{AnimatedCounter, CounterPhase};

    /// Live binding of a running counter. Dropping it cancels all pending ticks.
    #[derive(Debug)]
    pub struct CounterHandle {
        values: watch::Receiver<f64>,
        task: Option<JoinHandle<CounterPhase>>,
    }

    impl CounterHandle {
        pub fn display_value(&self) -> f64 {
            *self.values.borrow()
        }

        /// Stream of display values. Closes once the counter stops.
        pub fn subscribe(&self) -> watch::Receiver<f64> {
            self.values.clone()
        }

        pub fn is_finished(&self) -> bool {
            self.task.as_ref().is_none_or(JoinHandle::is_finished)
        }

        /// Destroy the binding now.
        pub fn cancel(mut self) {
            if let Some(task) = self.task.take() {
                task.abort();
            }
        }

        /// Wait for the counter to stop and report how it ended.
        pub async fn wait(mut self) -> CounterPhase {
            match self.task.take() {
                Some(task) => task.await.unwrap_or(CounterPhase::Cancelled),
                None => CounterPhase::Cancelled,
            }
        }
    }

    impl Drop for CounterHandle {
        fn drop(&mut self) {
            if let Some(task) = self.task.take() {
                task.abort();
            }
        }
    }

    /// Run `counter` on the current tokio runtime.
    ///
    /// Nothing happens until `visible` fires. If its sender is dropped
    /// without firing, the readout never became visible and the counter
    /// ends dormant.
    pub fn spawn_counter(
        mut counter: AnimatedCounter,
        visible: oneshot::Receiver<()>,
    ) -> CounterHandle {
        let (tx, rx) = watch::channel(counter.display_value());

        let task = tokio::spawn(async move {
            if visible.await.is_err() {
                return counter.phase();
            }
            counter.mark_visible();

            let period = Duration::from_millis(counter.step_interval_ms() as u64);
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick is immediate; the first step lands one period in
            interval.tick().await;

            while counter.is_running() {
                interval.tick().await;
                if let Some(value) = counter.tick()
                    && tx.send(value).is_err()
                {
                    counter.cancel();
                }
            }

            tracing::trace!(phase = ?counter.phase(), "Counter stopped");
            counter.phase()
        });

        CounterHandle {
            values: rx,
            task: Some(task),
        }
    }
}
