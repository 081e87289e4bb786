//! Adapter for callback-style permission APIs.

use std::future::Future;

use tokio::sync::oneshot;

use super::provider::Permission;
use crate::error::HostError;

/// Callback handed to a callback-style permission API
pub type PermissionCallback = Box<dyn FnOnce(Permission) + Send + 'static>;

/// Turns a callback-style permission request into a future.
///
/// `request` is invoked immediately with a callback that resolves the
/// returned future. If the callback is dropped without being called the
/// request counts as failed.
///
/// # Example
/// ```ignore
/// async fn request_permission(&self) -> Result<Permission, HostError> {
///     callback_permission(|done| self.bridge.ask_user(done)).await
/// }
/// ```
pub fn callback_permission<F>(
    request: F,
) -> impl Future<Output = Result<Permission, HostError>> + Send + 'static
where
    F: FnOnce(PermissionCallback),
{
    let (tx, rx) = oneshot::channel();
    request(Box::new(move |permission| {
        let _ = tx.send(permission);
    }));

    async move {
        rx.await.map_err(|_| {
            HostError::permission_request("permission callback dropped without an answer")
        })
    }
}
