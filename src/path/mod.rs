//! Path handling subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration:
//!     declaration path + ancestor prefix + global prefix
//!     → normalize.rs (join, collapse slashes, trim trailing)
//!     → pattern.rs (compile into per-segment matcher)
//!     → frozen on the RouteInstance
//!
//! Navigation:
//!     location pathname
//!     → normalize.rs
//!     → pattern.rs (test + named-capture extraction)
//! ```
//!
//! # Design Decisions
//! - No regex engine: patterns compile to literal/param segments and match
//!   segment-by-segment, deterministically
//! - `:name` matches exactly one non-slash segment
//! - Normalization is idempotent; the root path stays `/`

pub mod normalize;
pub mod pattern;

pub use normalize::{normalize_path, qualify};
pub use pattern::{PathCaptures, PathPattern};
