use std::{fmt::Display, future::Future, time::Duration};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryDelay {
    Fixed(Duration),
    /// Doubles after every failed attempt, never above `max`.
    Exponential { initial: Duration, max: Duration },
}

/// How often and how patiently an operation is attempted again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: RetryDelay,
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: RetryDelay::Fixed(delay),
        }
    }

    pub fn exponential(max_attempts: u32, initial: Duration, max: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: RetryDelay::Exponential { initial, max },
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> RetryDelay {
        self.delay
    }

    /// Pause that follows the failed attempt number `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.delay {
            RetryDelay::Fixed(delay) => delay,
            RetryDelay::Exponential { initial, max } => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                initial.saturating_mul(factor).min(max)
            }
        }
    }

    /// Runs `operation` until it succeeds or the attempts are used up, and
    /// returns the last error in that case. No pause follows the final
    /// attempt.
    pub async fn run<T, E, F, Fut>(&self, operation_name: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) if attempt >= self.max_attempts => {
                    tracing::error!(
                        operation = operation_name,
                        attempts = attempt,
                        error = %error,
                        "giving up"
                    );
                    return Err(error);
                }
                Err(error) => {
                    let delay = self.delay_after(attempt);
                    tracing::warn!(
                        operation = operation_name,
                        attempt,
                        max_attempts = self.max_attempts,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %error,
                        "still trying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(5, Duration::from_secs(5))
    }
}
