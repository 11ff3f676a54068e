use std::{
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use microservice_toolkit::shared::domain::model::retry_policy::{RetryDelay, RetryPolicy};

#[tokio::test]
async fn run_retries_until_success() {
    let calls = Arc::new(AtomicU32::new(0));
    let policy = RetryPolicy::fixed(5, Duration::from_millis(1));

    let result = policy
        .run("flaky", |attempt| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if attempt < 3 {
                    Err(format!("attempt {attempt} failed"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

    assert_eq!(result, Ok(3));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn run_returns_last_error_when_attempts_are_used_up() {
    let calls = Arc::new(AtomicU32::new(0));
    let policy = RetryPolicy::fixed(4, Duration::from_millis(1));

    let result: Result<(), String> = policy
        .run("always_failing", |attempt| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(format!("attempt {attempt} failed"))
            }
        })
        .await;

    assert_eq!(result, Err("attempt 4 failed".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn exponential_delay_doubles_up_to_max() {
    let policy = RetryPolicy::exponential(
        10,
        Duration::from_millis(100),
        Duration::from_secs(1),
    );

    assert_eq!(policy.delay_after(1), Duration::from_millis(100));
    assert_eq!(policy.delay_after(2), Duration::from_millis(200));
    assert_eq!(policy.delay_after(3), Duration::from_millis(400));
    assert_eq!(policy.delay_after(5), Duration::from_secs(1));
    assert_eq!(policy.delay_after(40), Duration::from_secs(1));
}

#[test]
fn policy_defaults_to_five_attempts_five_seconds_apart() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.max_attempts(), 5);
    assert_eq!(policy.delay(), RetryDelay::Fixed(Duration::from_secs(5)));
    assert_eq!(RetryPolicy::fixed(0, Duration::ZERO).max_attempts(), 1);
}
