use crate::domain::ports::{Console, Scheduler};
use std::sync::Arc;
use std::time::Duration;

/// Logs 1 through 5 before returning.
pub fn count_to_five(console: &dyn Console) {
    for n in 1..=5 {
        console.log(&n.to_string());
    }
}

/// Logs 1 and 2, defers 3 and 4 by `delay`, then logs 5 and returns.
///
/// The deferred half always lands after 5 because the scheduler only enqueues.
pub fn count_to_five_deferred(console: Arc<dyn Console>, scheduler: &dyn Scheduler, delay: Duration) {
    console.log("1");
    console.log("2");

    let deferred = Arc::clone(&console);
    scheduler.schedule(
        delay,
        Box::new(move || {
            deferred.log("3");
            deferred.log("4");
        }),
    );

    console.log("5");
}
