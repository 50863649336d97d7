//! Event system for session and catalog activity.
//!
//! Events are fired from the session store, actions, and dashboards. If
//! no listeners are registered, they are silently ignored (zero
//! overhead).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use marquee::events::register_event_listeners;
//! use marquee::events::listeners::LoggingListener;
//!
//! fn main() {
//!     // register listeners at startup
//!     register_event_listeners(|registry| {
//!         registry.listen(LoggingListener::new());
//!     });
//!
//!     // events will now be logged
//! }
//! ```
//!
//! # Custom Listeners
//!
//! Implement the [`Listener`] trait to create custom event handlers:
//!
//! ```rust,ignore
//! use marquee::events::{Listener, SessionEvent};
//! use async_trait::async_trait;
//!
//! struct MetricsListener;
//!
//! #[async_trait]
//! impl Listener for MetricsListener {
//!     async fn handle(&self, event: &SessionEvent) {
//!         match event {
//!             SessionEvent::LoginSuccess { .. } => {
//!                 // increment login success counter
//!             }
//!             SessionEvent::LoginFailed { .. } => {
//!                 // increment login failure counter
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

mod event;
mod listener;
mod registry;

pub mod listeners;

pub use event::SessionEvent;
pub use listener::Listener;
pub use registry::{dispatch, register_event_listeners};
