//! Match resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (normalized pathname)
//!     → matches.rs (candidate discovery over the route table)
//!     → first-match tie-break, or the no-match sentinel
//!     → for layouts: index-child resolution
//!
//! Parameter retrieval:
//!     → matches.rs (re-run the winning match)
//!     → params.rs (named captures + query string, query wins)
//! ```
//!
//! # Design Decisions
//! - Candidates are iterated in registry insertion order (parents before
//!   children); the first match wins
//! - No match is a sentinel, not an error: the controller decides how to
//!   report it
//! - Index-child preference is an explicit rule, not a positional accident

pub mod matches;
pub mod params;

pub use params::ParamValue;

pub(crate) use matches::{best_match, index_match};
pub(crate) use params::{query_params, route_params};
