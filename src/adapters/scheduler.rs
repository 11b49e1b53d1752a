use crate::domain::ports::{Scheduler, Task};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinSet;

/// Real-time scheduler backed by `tokio::time::sleep`.
///
/// Must be used from inside a tokio runtime.
#[derive(Default)]
pub struct TokioScheduler {
    tasks: Mutex<JoinSet<()>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn tasks(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        tracing::debug!("Scheduling task in {:?}", delay);
        self.tasks().spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }

    async fn settle_all(&self) {
        // Tasks may schedule more tasks while we wait, so drain until empty.
        loop {
            let mut pending = std::mem::take(&mut *self.tasks());
            if pending.is_empty() {
                break;
            }
            while let Some(joined) = pending.join_next().await {
                if let Err(e) = joined {
                    tracing::warn!("Scheduled task did not complete: {}", e);
                }
            }
        }
    }
}

struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

impl ManualState {
    /// Removes the earliest entry due at or before `limit`, ties broken by insertion order.
    fn pop_due(&mut self, limit: Option<Duration>) -> Option<Entry> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| limit.map_or(true, |limit| entry.due <= limit))
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.queue.remove(index);
        self.now = self.now.max(entry.due);
        Some(entry)
    }
}

/// Virtual-clock scheduler: nothing runs until the clock is advanced.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn now(&self) -> Duration {
        self.state().now
    }

    pub fn pending(&self) -> usize {
        self.state().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.state().now + by;
        self.run_until(Some(target));
        let mut state = self.state();
        state.now = state.now.max(target);
    }

    fn run_until(&self, limit: Option<Duration>) {
        // The lock is released before each task runs so tasks can reschedule.
        loop {
            let next = self.state().pop_due(limit);
            let Some(entry) = next else { break };
            (entry.task)();
        }
    }
}

#[async_trait]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Entry { due, seq, task });
    }

    async fn settle_all(&self) {
        self.run_until(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let make = move |label: &'static str| -> Task {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().unwrap().push(label))
        };
        (seen, make)
    }

    #[test]
    fn test_manual_scheduler_waits_for_clock() {
        let scheduler = ManualScheduler::new();
        let (seen, task) = recorder();

        scheduler.schedule(Duration::from_millis(3000), task("late"));
        scheduler.advance(Duration::from_millis(2999));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*seen.lock().unwrap(), vec!["late"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(3000));
    }

    #[test]
    fn test_manual_scheduler_orders_by_due_then_insertion() {
        let scheduler = ManualScheduler::new();
        let (seen, task) = recorder();

        scheduler.schedule(Duration::from_millis(20), task("b"));
        scheduler.schedule(Duration::from_millis(10), task("a"));
        scheduler.schedule(Duration::from_millis(20), task("c"));
        scheduler.advance(Duration::from_millis(50));

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_delay_is_not_inline() {
        let scheduler = ManualScheduler::new();
        let (seen, task) = recorder();

        scheduler.schedule(Duration::ZERO, task("now"));
        assert!(seen.lock().unwrap().is_empty());

        scheduler.advance(Duration::ZERO);
        assert_eq!(*seen.lock().unwrap(), vec!["now"]);
    }

    #[tokio::test]
    async fn test_manual_settle_all_runs_everything() {
        let scheduler = ManualScheduler::new();
        let (seen, task) = recorder();

        scheduler.schedule(Duration::from_secs(60), task("x"));
        scheduler.schedule(Duration::from_secs(1), task("y"));
        scheduler.settle_all().await;

        assert_eq!(*seen.lock().unwrap(), vec!["y", "x"]);
        assert_eq!(scheduler.now(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_runs_after_delay() {
        let scheduler = TokioScheduler::new();
        let (seen, task) = recorder();

        scheduler.schedule(Duration::from_millis(3000), task("done"));
        assert!(seen.lock().unwrap().is_empty());

        scheduler.settle_all().await;
        assert_eq!(*seen.lock().unwrap(), vec!["done"]);
    }
}
