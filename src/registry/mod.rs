//! Route registry subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (Router::mount):
//!     RouteDeclaration[] (author-supplied tree)
//!     → builder.rs (recursive flatten: qualify paths, assign ids,
//!       wire parent-layout linkage, resolve explicit targets)
//!     → RouteTable (flat, declaration-ordered, frozen)
//!     → swapped wholesale into the Router
//! ```
//!
//! # Design Decisions
//! - Instances are compiled at registration and immutable afterwards
//! - Every registration rebuilds the table from scratch; ids from a
//!   previous pass become invalid by design
//! - Element-less declarations are grouping nodes: they register nothing
//!   but still propagate prefix and layout context to their children

pub mod builder;
pub mod declaration;
pub mod instance;

pub use declaration::{ElementFuture, ElementSource, Guard, GuardFuture, MountTarget, RouteDeclaration};
pub use instance::{RouteId, RouteInstance};

pub(crate) use builder::{build_table, RouteTable};
