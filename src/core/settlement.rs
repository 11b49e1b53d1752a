use crate::domain::model::Repayment;
use crate::domain::ports::Console;
use std::future::Future;

pub const PAYBACK_AMOUNT: u32 = 5;
pub const REFUSAL_REASON: &str = ":(";

/// Runs the wrapped closure when dropped, at most once.
struct Finally<Z: FnOnce()>(Option<Z>);

impl<Z: FnOnce()> Drop for Finally<Z> {
    fn drop(&mut self) {
        if let Some(on_settled) = self.0.take() {
            on_settled();
        }
    }
}

/// Awaits `deferred` and runs exactly one of `on_success` / `on_failure`,
/// then `on_settled`.
///
/// `on_settled` is armed on first poll and still runs if the returned future
/// is dropped before completion or a handler panics.
pub async fn settle<T, E, Fut, S, F, Z>(deferred: Fut, on_success: S, on_failure: F, on_settled: Z)
where
    Fut: Future<Output = std::result::Result<T, E>>,
    S: FnOnce(T),
    F: FnOnce(E),
    Z: FnOnce(),
{
    let _finally = Finally(Some(on_settled));
    match deferred.await {
        Ok(value) => on_success(value),
        Err(reason) => on_failure(reason),
    }
}

/// Settles with the repayment when `will_pay_back` is set, otherwise with a refusal.
pub async fn promise_to_pay(will_pay_back: bool) -> Repayment {
    if will_pay_back {
        Ok(PAYBACK_AMOUNT)
    } else {
        Err(REFUSAL_REASON.to_string())
    }
}

pub async fn pay_back_demo(console: &dyn Console, will_pay_back: bool) {
    tracing::debug!("Settling repayment with will_pay_back={}", will_pay_back);
    settle(
        promise_to_pay(will_pay_back),
        |money| console.log(&format!("I was paid back {}! Thanks!", money)),
        |reason| console.log(&format!("I was not paid back! {}", reason)),
        || console.log("Nice to see you again."),
    )
    .await;
}
