//! Client-side navigation engine for single-page applications.
//!
//! Given a declarative tree of routes (possibly nested inside shared
//! layouts), the engine resolves the current location to a concrete
//! subtree of the host document, mounts and unmounts content as the user
//! navigates, and exposes parameters, guards, and lifecycle hooks to
//! application code.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌────────────────────────────────────────────────┐
//!                        │                NAVIGATION ENGINE                │
//!                        │                                                 │
//!   Navigate(path) /     │  ┌──────────┐   ┌──────────┐   ┌────────────┐  │
//!   pop-state ───────────┼─▶│navigation│──▶│ resolve  │──▶│  registry  │  │
//!                        │  │controller│   │ matcher  │   │ (instances)│  │
//!                        │  └────┬─────┘   └──────────┘   └────────────┘  │
//!                        │       │ guard / before_resolve                  │
//!                        │       ▼                                         │
//!                        │  ┌──────────┐   ┌──────────────────────────┐   │
//!                        │  │  render  │──▶│ host seam (DomHost /     │   │
//!                        │  │ (outlets)│   │ HistoryHost traits)      │   │
//!                        │  └──────────┘   └──────────────────────────┘   │
//!                        │                                                 │
//!                        │  Cross-cutting: config (options/hooks),         │
//!                        │  error (single on_error channel), tracing       │
//!                        └────────────────────────────────────────────────┘
//! ```
//!
//! # Design Decisions
//! - Routes are flattened and compiled at registration, then frozen as an
//!   immutable snapshot; re-registration swaps the whole snapshot
//! - No regex in the match path (per-segment comparison only)
//! - Every failure funnels into one configured `on_error` channel; nothing
//!   escapes the navigation pipeline as a panic or unhandled error
//! - Single-threaded by contract: `Rc`, `RefCell`, local (non-`Send`)
//!   futures; the host event loop drives all navigation futures
//! - The browser is a trait seam ([`DomHost`] / [`HistoryHost`]); the
//!   in-memory [`MemoryHost`] replays the engine headlessly for tests

pub mod config;
pub mod error;
pub mod host;
pub mod navigation;
pub mod path;
pub mod registry;
pub mod resolve;

mod render;

pub use config::{ErrorHook, NavigateHook, ResolveHook, RouterOptions};
pub use error::{BoxError, ErrorKind, RouterError, RouterResult};
pub use host::{DomHost, HistoryHost, MemoryHost, NodeRef};
pub use navigation::Router;
pub use path::{PathCaptures, PathPattern};
pub use registry::{
    ElementFuture, ElementSource, Guard, GuardFuture, MountTarget, RouteDeclaration, RouteId,
    RouteInstance,
};
pub use resolve::ParamValue;
