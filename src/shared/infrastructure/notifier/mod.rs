use async_trait::async_trait;

/// Outbound confirmation messages. Best effort by contract: `send` reports
/// whether the transport accepted the message and never errors into the
/// reservation path. Invoked strictly after a successful commit, with no
/// store lock held.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> bool;
}

pub mod in_memory;
pub mod log_only;
pub mod twilio;
