// SMS delivery through the Twilio Messages REST API.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use super::Notifier;

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

pub struct TwilioNotifier {
    config: TwilioConfig,
    client: Client,
}

impl TwilioNotifier {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, to: &str, body: &str) -> bool {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        );

        let mut form: HashMap<&str, &str> = HashMap::new();
        form.insert("To", to);
        form.insert("From", self.config.from_number.as_str());
        form.insert("Body", body);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                tracing::info!(to, "sms accepted by twilio");
                true
            }
            Ok(response) => {
                let status = response.status();
                let detail = response.text().await.unwrap_or_default();
                tracing::warn!(to, %status, detail, "twilio rejected sms");
                false
            }
            Err(err) => {
                tracing::warn!(to, error = %err, "twilio request failed");
                false
            }
        }
    }
}
