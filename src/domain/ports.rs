use async_trait::async_trait;
use std::time::Duration;

/// A one-shot unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Line-oriented output sink the demonstrations write to.
pub trait Console: Send + Sync {
    fn log(&self, line: &str);
}

/// Injectable timer: enqueue a task to run after a delay.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Enqueues `task`. Never runs it inline, even for a zero delay.
    fn schedule(&self, delay: Duration, task: Task);

    /// Resolves once every task scheduled so far has run.
    async fn settle_all(&self);
}

pub trait DemoSettings: Send + Sync {
    fn joke_endpoint(&self) -> &str;
    fn timer_delay(&self) -> Duration;
    fn will_pay_back(&self) -> bool;
    fn question(&self) -> &str;
}
