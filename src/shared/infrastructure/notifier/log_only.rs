// Fallback notifier for deployments without SMS credentials. Keeps the
// reservation path identical whether or not a transport is configured.

use async_trait::async_trait;

use super::Notifier;

pub struct LogOnlyNotifier;

#[async_trait]
impl Notifier for LogOnlyNotifier {
    async fn send(&self, to: &str, body: &str) -> bool {
        tracing::info!(to, body, "sms transport not configured, message logged only");
        false
    }
}
