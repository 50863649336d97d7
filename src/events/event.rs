use chrono::{DateTime, Utc};

/// Events emitted by the session store, auth actions, and dashboards.
///
/// Events are always fired. If no listeners are registered, they are
/// silently ignored (no-op). Register listeners via
/// [`register_event_listeners`](crate::events::register_event_listeners)
/// to handle events.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // session lifecycle
    SessionRestored {
        email: String,
        at: DateTime<Utc>,
    },
    SessionRestoreFailed {
        reason: String,
        at: DateTime<Utc>,
    },

    // authentication
    LoginSuccess {
        email: String,
        is_admin: bool,
        at: DateTime<Utc>,
    },
    LoginFailed {
        email: String,
        reason: String,
        at: DateTime<Utc>,
    },
    LogoutSuccess {
        email: Option<String>,
        at: DateTime<Utc>,
    },
    RegistrationSuccess {
        email: String,
        at: DateTime<Utc>,
    },

    // catalog mutations
    MovieAdded {
        title: String,
        at: DateTime<Utc>,
    },
    MovieUpdated {
        movie_id: String,
        at: DateTime<Utc>,
    },
    MovieDeleted {
        movie_id: String,
        at: DateTime<Utc>,
    },
    CommentAdded {
        movie_id: String,
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionRestored { .. } => "session.restored",
            Self::SessionRestoreFailed { .. } => "session.restore_failed",
            Self::LoginSuccess { .. } => "auth.login.success",
            Self::LoginFailed { .. } => "auth.login.failed",
            Self::LogoutSuccess { .. } => "auth.logout.success",
            Self::RegistrationSuccess { .. } => "auth.registration.success",
            Self::MovieAdded { .. } => "catalog.movie.added",
            Self::MovieUpdated { .. } => "catalog.movie.updated",
            Self::MovieDeleted { .. } => "catalog.movie.deleted",
            Self::CommentAdded { .. } => "catalog.comment.added",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SessionRestored { at, .. }
            | Self::SessionRestoreFailed { at, .. }
            | Self::LoginSuccess { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LogoutSuccess { at, .. }
            | Self::RegistrationSuccess { at, .. }
            | Self::MovieAdded { at, .. }
            | Self::MovieUpdated { at, .. }
            | Self::MovieDeleted { at, .. }
            | Self::CommentAdded { at, .. } => *at,
        }
    }
}
