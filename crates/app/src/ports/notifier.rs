//! Notifier port — messages the user must see.

use std::future::Future;

/// Shows a message to the user.
///
/// The returned future completes only once the message has been disclosed
/// (written and flushed, acknowledged, …), so callers can rely on the user
/// having seen it before they continue.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> impl Future<Output = ()> + Send;
}

impl<T: Notifier> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str) -> impl Future<Output = ()> + Send {
        (**self).notify(message)
    }
}
