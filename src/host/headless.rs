//! Host without any native notification capability.

use async_trait::async_trait;

use super::provider::{NativeEvents, NativeNotification, NotificationHost, Permission};
use crate::error::HostError;
use crate::notify::NotifyOptions;

/// Host for environments without notification support
///
/// Every handle driven by this host takes the fallback path and closes
/// without producing anything visible.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost;

impl HeadlessHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationHost for HeadlessHost {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn permission(&self) -> Permission {
        Permission::Denied
    }

    async fn show(
        &self,
        _title: &str,
        _options: &NotifyOptions,
        _events: NativeEvents,
    ) -> Result<Box<dyn NativeNotification>, HostError> {
        Err(HostError::Unsupported)
    }
}
