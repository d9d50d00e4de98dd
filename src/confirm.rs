//! Bounded polling for transaction receipts.

use crate::{
    api::Eth,
    error::{Error, Result},
    types::{TransactionReceipt, H256},
    Transport,
};
use futures::{future::BoxFuture, Future};
use std::time::Duration;

/// Suspends the caller between polling attempts.
pub trait Sleep {
    /// Returns a future resolving once `duration` has passed.
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Wall-clock sleep backed by `futures_timer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timer;

impl Sleep for Timer {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(futures_timer::Delay::new(duration))
    }
}

/// Fixed-interval polling bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retry {
    /// Pause between two consecutive attempts.
    pub interval: Duration,
    /// Attempts made before giving up.
    pub max_attempts: usize,
}

impl Default for Retry {
    fn default() -> Self {
        Retry {
            interval: Duration::from_secs(1),
            max_attempts: 40,
        }
    }
}

/// Runs `check` until it yields a value or `retry.max_attempts` are used up.
///
/// Sleeps `retry.interval` between attempts, never after the last one.
/// Resolves to `Ok(None)` when every attempt came back empty; the first error aborts.
pub async fn poll_until<S, F, Fut, R>(retry: Retry, sleeper: &S, mut check: F) -> Result<Option<R>>
where
    S: Sleep + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<R>>>,
{
    for attempt in 1..=retry.max_attempts {
        if let Some(value) = check().await? {
            log::trace!("Poll succeeded on attempt {}/{}", attempt, retry.max_attempts);
            return Ok(Some(value));
        }
        if attempt < retry.max_attempts {
            log::trace!(
                "Attempt {}/{} came back empty, retrying in {:?}",
                attempt,
                retry.max_attempts,
                retry.interval
            );
            sleeper.sleep(retry.interval).await;
        }
    }
    Ok(None)
}

/// Polls `eth_getTransactionReceipt` for `hash` within the `retry` bound.
///
/// Running out of attempts is `Error::NoReceipt`; the transaction may still get mined afterwards.
pub async fn wait_for_receipt<T, S>(eth: &Eth<T>, hash: H256, retry: Retry, sleeper: &S) -> Result<TransactionReceipt>
where
    T: Transport,
    S: Sleep + ?Sized,
{
    match poll_until(retry, sleeper, || eth.transaction_receipt(hash)).await? {
        Some(receipt) => Ok(receipt),
        None => {
            log::warn!("No receipt for {:?} after {} attempts", hash, retry.max_attempts);
            Err(Error::NoReceipt {
                hash,
                attempts: retry.max_attempts,
            })
        }
    }
}
