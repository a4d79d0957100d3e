//! Router configuration subsystem.
//!
//! # Data Flow
//! ```text
//! RouterOptions (author-supplied, partial)
//!     → options.rs (merge into the resolved RouterConfig)
//!     → string targets resolved via DomHost::select
//!     → hooks stored reference-counted, cloned out per navigation
//! ```
//!
//! # Design Decisions
//! - Options merge: absent fields keep their current value
//! - A failing target selector reports `invalid-target` and keeps the
//!   previous target rather than leaving the router unmountable
//! - Hooks are plain `Rc` closures; the engine snapshots them before any
//!   await point so a mid-navigation reconfiguration cannot tear state

pub mod options;

pub use options::{ErrorHook, NavigateHook, ResolveHook, RouterOptions};

pub(crate) use options::RouterConfig;
