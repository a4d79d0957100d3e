//! Navigation error definitions.
//!
//! # Responsibilities
//! - One error type covering every failure kind in the pipeline
//! - Stable cause tags for the `on_error` channel
//! - Carry application-supplied failures (guards, factories) as sources
//!
//! # Design Decisions
//! - Errors are reported, never thrown past the navigation controller
//! - A vetoing `before_resolve` hook is not an error and has no variant
//! - Cause tags render kebab-case for log filtering

use std::fmt;

use thiserror::Error;

/// Boxed application error, as produced by guards and element factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during registration or navigation.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Registration was attempted with an empty route list.
    #[error("no routes were registered")]
    NoRoutes,

    /// A string mount target did not resolve to a live element.
    #[error("target selector {selector:?} did not resolve to an element")]
    InvalidTarget { selector: String },

    /// No registered route matches the current location.
    #[error("no route matches {path:?}")]
    NoMatch { path: String },

    /// A layout matched but no index or child route could be resolved.
    #[error("layout matched {path:?} but no child route could be resolved")]
    NoLayoutMatch { path: String },

    /// A per-route guard vetoed navigation, by returning false or failing.
    #[error("guard rejected navigation to {path:?}")]
    GuardRejected {
        path: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Element resolution or mounting failed.
    #[error("failed to render route {path:?}: {reason}")]
    RenderRoute {
        path: String,
        reason: String,
        #[source]
        source: Option<BoxError>,
    },
}

/// Result type for navigation operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Cause tag identifying a failure kind on the `on_error` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoRoutes,
    InvalidTarget,
    NoMatch,
    NoLayoutMatch,
    GuardRejected,
    RenderRoute,
}

impl RouterError {
    /// The cause tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoRoutes => ErrorKind::NoRoutes,
            Self::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::NoLayoutMatch { .. } => ErrorKind::NoLayoutMatch,
            Self::GuardRejected { .. } => ErrorKind::GuardRejected,
            Self::RenderRoute { .. } => ErrorKind::RenderRoute,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::NoRoutes => "no-routes",
            Self::InvalidTarget => "invalid-target",
            Self::NoMatch => "no-match",
            Self::NoLayoutMatch => "no-layout-match",
            Self::GuardRejected => "guard-rejected",
            Self::RenderRoute => "render-route",
        };
        f.write_str(tag)
    }
}
