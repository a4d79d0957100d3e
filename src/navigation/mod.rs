//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Initial mount / Navigate(path) / pop-state
//!     → controller.rs (one navigation pipeline):
//!         1. best match for the current pathname
//!         2. before_resolve hook (false = silent veto)
//!         3. no-match check
//!         4. per-route guard (false or error = guard-rejected)
//!         5. layout → index-child resolution
//!         6. render (see render module)
//!     → on_navigate on success, on_error on any failure
//! ```
//!
//! # Design Decisions
//! - Steps run strictly in sequence within one navigation
//! - Overlapping navigations both run to completion; a generation token
//!   compared before the final mount keeps a stale one from clobbering
//!   the newer result
//! - Nothing escapes the pipeline: every failure funnels to `on_error`

pub mod controller;

pub use controller::Router;
