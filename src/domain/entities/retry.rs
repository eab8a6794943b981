//! Bounded retry bookkeeping.

/// Default number of attempts for one generation request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// What the caller should do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    /// Attempts remain; run the sequence again.
    Retry,
    /// The bound was reached; report the last error.
    Exhausted,
}

/// Retry state machine with `attempt` in `[0, max_attempts]`.
#[derive(Debug)]
pub struct RetryState<E> {
    attempt: u32,
    max_attempts: u32,
    last_error: Option<E>,
}

impl<E> RetryState<E> {
    /// Creates a fresh state. A bound of zero is treated as one attempt.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempt: 0,
            max_attempts: max_attempts.max(1),
            last_error: None,
        }
    }

    /// Records a failed attempt and decides whether another one is allowed.
    pub fn record_failure(&mut self, error: E) -> RetryStep {
        self.attempt += 1;
        self.last_error = Some(error);

        if self.attempt < self.max_attempts {
            RetryStep::Retry
        } else {
            RetryStep::Exhausted
        }
    }

    /// Number of failed attempts so far.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Most recent failure.
    #[must_use]
    pub const fn last_error(&self) -> Option<&E> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_until_bound() {
        let mut state = RetryState::new(DEFAULT_MAX_ATTEMPTS);

        assert_eq!(state.record_failure("first"), RetryStep::Retry);
        assert_eq!(state.record_failure("second"), RetryStep::Retry);
        assert_eq!(state.attempt(), 2);
        assert_eq!(state.record_failure("third"), RetryStep::Exhausted);

        assert_eq!(state.attempt(), 3);
        assert_eq!(state.last_error(), Some(&"third"));
    }

    #[test]
    fn test_zero_bound_allows_single_attempt() {
        let mut state = RetryState::new(0);
        assert_eq!(state.record_failure(()), RetryStep::Exhausted);
        assert_eq!(state.attempt(), 1);
    }
}
