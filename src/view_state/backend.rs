use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::submission::ContactMessage;

/// Acknowledgement that a message reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("The message could not be delivered (simulated network failure)")]
    Simulated,
}

/// Somewhere a validated contact message can be sent.
///
/// The returned future is not required to be `Send`, so browser timers and fetches can back it.
pub trait SubmissionBackend: Send + Sync {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Delivered, NetworkError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulatedOutcome {
    #[default]
    Succeed,
    Fail,
}

pub type SleepFn = fn(Duration) -> LocalBoxFuture<'static, ()>;

/// Stand-in for a contact endpoint: waits out a fixed latency, then reports a fixed outcome.
#[derive(Clone)]
pub struct SimulatedBackend {
    latency: Duration,
    outcome: SimulatedOutcome,
    sleep: SleepFn,
}

impl SimulatedBackend {
    pub fn new(latency: Duration, outcome: SimulatedOutcome, sleep: SleepFn) -> Self {
        Self {
            latency,
            outcome,
            sleep,
        }
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Delivered, NetworkError>> {
        let delay = (self.sleep)(self.latency);
        let outcome = self.outcome;
        async move {
            delay.await;
            match outcome {
                SimulatedOutcome::Succeed => {
                    log::info!("simulated delivery of message from {}", message.email);
                    Ok(Delivered)
                }
                SimulatedOutcome::Fail => {
                    log::warn!("simulated failure for message from {}", message.email);
                    Err(NetworkError::Simulated)
                }
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;

    pub(crate) fn no_sleep(_: Duration) -> LocalBoxFuture<'static, ()> {
        futures::future::ready(()).boxed_local()
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: None,
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_simulated_success() {
        let backend = SimulatedBackend::new(
            Duration::from_millis(1500),
            SimulatedOutcome::Succeed,
            no_sleep,
        );
        assert_eq!(block_on(backend.send(message())), Ok(Delivered));
    }

    #[test]
    fn test_simulated_failure() {
        let backend = SimulatedBackend::new(Duration::ZERO, SimulatedOutcome::Fail, no_sleep);
        assert_eq!(
            block_on(backend.send(message())),
            Err(NetworkError::Simulated)
        );
    }
}
