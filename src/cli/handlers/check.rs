//! Check command handler
//!
//! Reports what the configured host can do without showing anything.

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::host::{NotificationHost, Permission, host_from_settings};

/// Host capabilities as seen by the check command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub host: &'static str,
    pub supported: bool,
    pub permission: Permission,
}

/// Handler for the check command
pub struct CheckCommandHandler {
    host: Arc<dyn NotificationHost>,
}

impl CheckCommandHandler {
    pub fn new(config: &Settings) -> Self {
        Self::with_host(host_from_settings(&config.host))
    }

    pub fn with_host(host: Arc<dyn NotificationHost>) -> Self {
        Self { host }
    }

    pub fn report(&self) -> HostReport {
        HostReport {
            host: self.host.name(),
            supported: self.host.is_supported(),
            permission: self.host.permission(),
        }
    }

    pub async fn execute(&self) -> AppResult<()> {
        let report = self.report();
        tracing::debug!(?report, "Host check");

        println!("Host: {}", report.host);
        if report.supported {
            println!("✓ Native notifications supported");
        } else {
            println!("✗ Native notifications not supported, notifications close without rendering");
        }
        println!("Permission: {}", report.permission);

        Ok(())
    }
}
