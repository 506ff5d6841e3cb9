// src/pipeline/supervisor.rs

//! The retrying loop around the poll cycle.
//!
//! Every cycle failure is retryable: the supervisor logs it, reports it
//! to the chat best-effort, and tries again after the fixed delay. Only
//! missing credentials at startup terminate the process, and those never
//! reach this module.

use chrono::Utc;
use tokio::time::sleep;

use crate::config::RETRY_TIME;
use crate::error::AppError;
use crate::pipeline::run_cycle;
use crate::services::{Notifier, ReviewApiClient};

/// Supervisor loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Last cycle succeeded
    Running,
    /// Last cycle failed; retrying on the fixed interval
    Degraded,
}

impl LoopState {
    /// Next state after observing one cycle outcome.
    pub fn observe(self, success: bool) -> Self {
        if success {
            Self::Running
        } else {
            Self::Degraded
        }
    }
}

/// Run the poll loop until the process is terminated.
pub async fn run_forever(api: &ReviewApiClient, notifier: &dyn Notifier) {
    let mut watermark = Utc::now().timestamp();
    let mut state = LoopState::Running;
    log::info!("Supervisor started, initial watermark {watermark}");

    loop {
        match run_cycle(api, notifier, watermark).await {
            Ok(next_watermark) => {
                // Never rewound, even if the clock misbehaves.
                watermark = watermark.max(next_watermark);
                if state == LoopState::Degraded {
                    log::info!("Cycle succeeded, leaving degraded state");
                }
                state = state.observe(true);
            }
            Err(error) => {
                log::error!("Poll cycle failed: {error}");
                report_failure(notifier, &error).await;
                state = state.observe(false);
            }
        }

        sleep(RETRY_TIME).await;
    }
}

/// Best-effort failure notification; its own failure is only logged.
async fn report_failure(notifier: &dyn Notifier, error: &AppError) {
    let message = format!("Сбой в работе программы: {error}");
    if let Err(delivery_error) = notifier.deliver(&message).await {
        log::error!("Failed to deliver failure notification: {delivery_error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::cycle::tests::{FailingNotifier, RecordingNotifier};

    #[test]
    fn test_state_transitions() {
        let state = LoopState::Running;
        let state = state.observe(false);
        assert_eq!(state, LoopState::Degraded);

        // Stays degraded across consecutive failures.
        let state = state.observe(false);
        assert_eq!(state, LoopState::Degraded);

        let state = state.observe(true);
        assert_eq!(state, LoopState::Running);
    }

    #[tokio::test]
    async fn test_report_failure_message() {
        let notifier = RecordingNotifier::default();
        let error = AppError::ResponseStatus { status: Some(500) };
        report_failure(&notifier, &error).await;

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            "Сбой в работе программы: unexpected API response status: 500"
        );
    }

    #[tokio::test]
    async fn test_report_failure_swallows_delivery_error() {
        // Must not panic or escalate.
        let error = AppError::Shape("missing key");
        report_failure(&FailingNotifier, &error).await;
    }
}
