// Recording notifier for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::Notifier;

pub struct InMemoryNotifier {
    sent: Mutex<Vec<(String, String)>>,
    accept: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            accept: true,
        }
    }

    /// Records the message but reports it as not delivered.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, to: &str, body: &str) -> bool {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((to.to_string(), body.to_string()));
        self.accept
    }
}
