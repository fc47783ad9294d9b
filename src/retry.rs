//! Bounded retry with exponential backoff.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Default retry budget beyond the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default first backoff window in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 1_000;

/// Suspend the current task for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Run `operation` up to `max_retries + 1` times, doubling the wait after
/// each failure. The first success wins; the last failure is returned to
/// the caller unchanged. No timeout is placed around `operation` itself.
pub async fn retry_with_backoff<T, E, F, Fut>(
    mut operation: F,
    max_retries: u32,
    base_delay_ms: u64,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries => {
                let backoff_ms = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
                warn!(
                    "attempt {}/{} failed: {}, retrying in {}ms",
                    attempt + 1,
                    max_retries + 1,
                    err,
                    backoff_ms
                );
                delay(backoff_ms).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio_test::assert_ok;

    #[tokio::test(start_paused = true)]
    async fn test_returns_first_success() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result: Result<u32, anyhow::Error> = retry_with_backoff(
            move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(42)
                }
            },
            3,
            1_000,
        )
        .await;

        assert_eq!(assert_ok!(result), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failures() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result = retry_with_backoff(
            move || {
                let counter = Arc::clone(&counter);
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    if n < 3 {
                        Err(anyhow!("transient failure {}", n))
                    } else {
                        Ok("done")
                    }
                }
            },
            3,
            1_000,
        )
        .await;

        assert_eq!(assert_ok!(result), "done");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_last_failure_when_exhausted() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result: Result<(), anyhow::Error> = retry_with_backoff(
            move || {
                let counter = Arc::clone(&counter);
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    Err(anyhow!("failure {}", n))
                }
            },
            2,
            1_000,
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(result.unwrap_err().to_string(), "failure 3");
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_doubles_between_attempts() {
        let start = tokio::time::Instant::now();
        let offsets = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&offsets);

        let _: Result<(), anyhow::Error> = retry_with_backoff(
            move || {
                let sink = Arc::clone(&sink);
                async move {
                    sink.lock().unwrap().push(start.elapsed());
                    Err(anyhow!("nope"))
                }
            },
            2,
            1_000,
        )
        .await;

        let offsets = offsets.lock().unwrap();
        assert_eq!(
            *offsets,
            vec![
                Duration::from_millis(0),
                Duration::from_millis(1_000),
                Duration::from_millis(3_000),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_suspends_for_requested_time() {
        let start = tokio::time::Instant::now();
        delay(250).await;
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }
}
