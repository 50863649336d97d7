use async_trait::async_trait;

use crate::events::{Listener, SessionEvent};

/// Emits events as tracing events.
///
/// Requires the `tracing` feature to be enabled.
///
/// # Example
///
/// ```rust,ignore
/// use marquee::events::register_event_listeners;
/// use marquee::events::listeners::TracingListener;
///
/// register_event_listeners(|registry| {
///     registry.listen(TracingListener);
/// });
/// ```
pub struct TracingListener;

#[async_trait]
impl Listener for TracingListener {
    async fn handle(&self, event: &SessionEvent) {
        tracing::info!(
            target: "marquee::events",
            event_name = event.name(),
            ?event,
            "session event"
        );
    }
}
