//! Notification options.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::settings::NotificationDefaults;

fn default_silent() -> bool {
    true
}

/// Options for a single notification
///
/// `silent` and `timeout` are interpreted by the handle. Every other field
/// lands in `extra` and is handed to the host untouched, which lets callers
/// use host specific fields (`body`, `icon`, `tag`, `lang`, ...) without this
/// type knowing about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyOptions {
    /// Suppress sound and vibration
    #[serde(default = "default_silent")]
    pub silent: bool,

    /// Auto-close after this long unless the notification was seen first
    #[serde(
        default,
        with = "timeout_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,

    /// Fields passed through to the host
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            silent: default_silent(),
            timeout: None,
            extra: Map::new(),
        }
    }
}

impl NotifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options seeded from configured defaults
    pub fn from_defaults(defaults: &NotificationDefaults) -> Self {
        Self {
            silent: defaults.silent,
            timeout: defaults.timeout_ms.map(Duration::from_millis),
            extra: Map::new(),
        }
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets an arbitrary pass-through field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn body(self, body: impl Into<String>) -> Self {
        self.with("body", Value::String(body.into()))
    }

    pub fn icon(self, icon: impl Into<String>) -> Self {
        self.with("icon", Value::String(icon.into()))
    }

    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.with("tag", Value::String(tag.into()))
    }

    /// Reads a pass-through field as a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    pub fn get_body(&self) -> Option<&str> {
        self.get_str("body")
    }

    pub fn get_icon(&self) -> Option<&str> {
        self.get_str("icon")
    }

    pub fn get_tag(&self) -> Option<&str> {
        self.get_str("tag")
    }
}

/// `Option<Duration>` as whole milliseconds
mod timeout_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => {
                serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Option::<u64>::deserialize(deserializer)?;
        // A zero timeout means "no timeout", as it does for native APIs
        Ok(millis.filter(|ms| *ms > 0).map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_silent_defaults_to_true() {
        assert!(NotifyOptions::default().silent);

        let parsed: NotifyOptions = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.silent);
        assert!(parsed.timeout.is_none());
    }

    #[test]
    fn test_explicit_silent_false_is_kept() {
        let parsed: NotifyOptions = serde_json::from_value(json!({ "silent": false })).unwrap();
        assert!(!parsed.silent);
    }

    #[test]
    fn test_timeout_in_milliseconds() {
        let parsed: NotifyOptions = serde_json::from_value(json!({ "timeout": 1500 })).unwrap();
        assert_eq!(parsed.timeout, Some(Duration::from_millis(1500)));

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["timeout"], 1500);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let parsed: NotifyOptions = serde_json::from_value(json!({ "timeout": 0 })).unwrap();
        assert!(parsed.timeout.is_none());
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let parsed: NotifyOptions = serde_json::from_value(json!({
            "body": "Build finished",
            "icon": "/tmp/icon.png",
            "requireInteraction": true
        }))
        .unwrap();

        assert_eq!(parsed.get_body(), Some("Build finished"));
        assert_eq!(parsed.get_icon(), Some("/tmp/icon.png"));
        assert_eq!(parsed.extra["requireInteraction"], json!(true));

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["requireInteraction"], json!(true));
        assert!(value.get("timeout").is_none());
    }

    #[test]
    fn test_builder_setters() {
        let options = NotifyOptions::new()
            .silent(false)
            .timeout(Duration::from_secs(3))
            .body("hello")
            .tag("build");

        assert!(!options.silent);
        assert_eq!(options.timeout, Some(Duration::from_secs(3)));
        assert_eq!(options.get_body(), Some("hello"));
        assert_eq!(options.get_tag(), Some("build"));
    }

    #[test]
    fn test_from_defaults() {
        let defaults = NotificationDefaults {
            silent: false,
            timeout_ms: Some(2000),
        };
        let options = NotifyOptions::from_defaults(&defaults);
        assert!(!options.silent);
        assert_eq!(options.timeout, Some(Duration::from_millis(2000)));
    }
}
