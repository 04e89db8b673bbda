// Environment-driven configuration.
//
// The operating window, step and dock list are deployment preconditions:
// changing them inconsistently (a step that no longer divides the window)
// silently drops the closing slot rather than failing at runtime.

use std::env;

use chrono::NaiveTime;
use thiserror::Error;

use crate::modules::reservations::core::slots::OperatingWindow;
use crate::shared::infrastructure::notifier::twilio::TwilioConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub log_path: String,
    pub docks: Vec<String>,
    pub window: OperatingWindow,
    pub admin_token: Option<String>,
    pub twilio: Option<TwilioConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("DOCKFLOW_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_path = env::var("DOCKFLOW_LOG_PATH").unwrap_or_else(|_| "citas.csv".to_string());

        let docks = match env::var("DOCKFLOW_DOCKS") {
            Ok(raw) => parse_docks(&raw),
            Err(_) => Vec::new(),
        };
        let docks = if docks.is_empty() {
            default_docks()
        } else {
            docks
        };

        let open = time_var("DOCKFLOW_OPEN", "08:00")?;
        let close = time_var("DOCKFLOW_CLOSE", "17:00")?;
        let step = step_var("DOCKFLOW_STEP_MIN", 30)?;
        let window = OperatingWindow::new(open, close, step);

        let admin_token = env::var("DOCKFLOW_ADMIN_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            bind_addr,
            log_path,
            docks,
            window,
            admin_token,
            twilio: twilio_from_env(),
        })
    }

    /// Rows from the single-dock era normalize to this dock.
    pub fn default_dock(&self) -> &str {
        &self.docks[0]
    }
}

fn parse_docks(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

fn default_docks() -> Vec<String> {
    (1..=5).map(|n| format!("Dock {n}")).collect()
}

fn time_var(name: &'static str, default: &str) -> Result<NaiveTime, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ConfigError::Invalid {
        name,
        value,
    })
}

fn step_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(step) if step > 0 => Ok(step),
            _ => Err(ConfigError::Invalid { name, value }),
        },
        Err(_) => Ok(default),
    }
}

/// All three credentials or nothing; a partial set degrades to the
/// log-only notifier like an absent one.
fn twilio_from_env() -> Option<TwilioConfig> {
    let var = |name: &str| {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    Some(TwilioConfig {
        account_sid: var("TWILIO_ACCOUNT_SID")?,
        auth_token: var("TWILIO_AUTH_TOKEN")?,
        from_number: var("TWILIO_FROM_NUMBER")?,
    })
}
