//! Timer Scheduling
//!
//! Toast and dialog lifecycles advance on timers. The browser uses
//! `setTimeout` through gloo-timers; tests step a manual clock.

use std::time::Duration;

/// Deferred task runner
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}

/// `setTimeout`-backed scheduler
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        let _ = gloo_timers::callback::Timeout::new(timeout_millis(delay), task).forget();
    }
}

/// `setTimeout` takes a signed 32-bit delay; larger values fire at once.
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(u32::MAX)
        .min(i32::MAX as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis_passthrough() {
        assert_eq!(timeout_millis(Duration::ZERO), 0);
        assert_eq!(timeout_millis(Duration::from_millis(4000)), 4000);
    }

    #[test]
    fn test_timeout_millis_stays_positive_as_i32() {
        let thirty_days = Duration::from_secs(30 * 24 * 60 * 60);
        let millis = timeout_millis(thirty_days);
        assert_eq!(millis, i32::MAX as u32);
        assert!(millis as i32 > 0);
        assert!((timeout_millis(Duration::MAX) as i32) > 0);
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Task = Box<dyn FnOnce() + Send + 'static>;

    #[derive(Default)]
    struct Inner {
        now: Duration,
        seq: u64,
        queue: Vec<(Duration, u64, Task)>,
    }

    /// Deterministic scheduler: tasks run only when the clock is advanced
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Arc<Mutex<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.inner.lock().unwrap().queue.len()
        }

        /// Advance the clock, running every task that falls due in order
        pub fn advance(&self, by: Duration) {
            let target = self.inner.lock().unwrap().now + by;
            loop {
                let next = {
                    let mut inner = self.inner.lock().unwrap();
                    let due = inner
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                        .map(|(index, _)| index);
                    match due {
                        Some(index) => {
                            let (at, _, task) = inner.queue.remove(index);
                            inner.now = at;
                            Some(task)
                        }
                        None => {
                            inner.now = target;
                            None
                        }
                    }
                };
                // Lock released: tasks may schedule follow-ups
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }

        pub fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            let mut inner = self.inner.lock().unwrap();
            let at = inner.now + delay;
            let seq = inner.seq;
            inner.seq += 1;
            inner.queue.push((at, seq, task));
        }
    }
}
