use thiserror::Error;

/// Failure reported by the native notification capability.
///
/// This is the only error class a notification handle ever surfaces to its
/// listeners: it travels in the `error` event and in the payload of the
/// `close` event that follows it. Listeners all observe the same value, so
/// the type is `Clone` and carries rendered messages rather than sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host has no native notification capability
    #[error("Native notifications are not supported by this host")]
    Unsupported,

    /// Asking the user for permission failed
    #[error("Permission request failed: {message}")]
    PermissionRequest { message: String },

    /// The host could not display the notification
    #[error("Failed to render notification: {message}")]
    Render { message: String },

    /// The displayed notification reported an error
    #[error("Native notification error: {message}")]
    Native { message: String },

    /// Closing the native notification failed
    #[error("Failed to close notification: {message}")]
    Close { message: String },
}

impl HostError {
    pub fn permission_request(message: impl Into<String>) -> Self {
        Self::PermissionRequest {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn native(message: impl Into<String>) -> Self {
        Self::Native {
            message: message.into(),
        }
    }

    pub fn close(message: impl Into<String>) -> Self {
        Self::Close {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = HostError::render("daemon unavailable");
        assert_eq!(
            err.to_string(),
            "Failed to render notification: daemon unavailable"
        );
    }

    #[test]
    fn test_clone_is_equal() {
        let err = HostError::native("boom");
        assert_eq!(err.clone(), err);
    }
}
