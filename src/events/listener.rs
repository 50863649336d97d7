use async_trait::async_trait;

use super::SessionEvent;

/// Trait for handling session and catalog events asynchronously.
///
/// Implement this trait to create custom event listeners. Listeners can
/// perform any async operation: logging, sending notifications, updating
/// metrics, etc.
///
/// # Example
///
/// ```rust,ignore
/// use marquee::events::{Listener, SessionEvent};
/// use async_trait::async_trait;
///
/// struct FailedLoginAlert {
///     webhook_url: String,
/// }
///
/// #[async_trait]
/// impl Listener for FailedLoginAlert {
///     async fn handle(&self, event: &SessionEvent) {
///         if let SessionEvent::LoginFailed { email, reason, .. } = event {
///             // post the alert somewhere
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handle an event.
    ///
    /// This method is called for every event dispatched. Filter by matching
    /// on the event variant to handle specific events.
    async fn handle(&self, event: &SessionEvent);
}
