//! The spanalloc crate.
//!
//! A free-list virtual address range allocator: it tracks which intervals of
//! a numeric address space are free and which are occupied, without ever
//! touching the bytes those addresses denote. It's meant for managing
//! address-space-like resources that have their own backing (page tables,
//! GPU heaps, object ID ranges, block device extents) where a conventional
//! byte-moving allocator doesn't apply.
//!
//! For getting started:
//! - [`Allocator`] is the engine; call [`Allocator::new`], then
//!   [`Allocator::allocate`]/[`Allocator::free`].
//! - Pick a node-storage strategy from [`store`] — [`FreelistStore`] (the
//!   default) or [`PoolStore`] — depending on whether you want amortized
//!   growth or a hard, pre-sized capacity bound.
//! - If you need to share an [`Allocator`] across threads, wrap it in
//!   [`sync::Lock`] (requires the `lock_api` feature, enabled by default).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod engine;
pub mod error;
pub mod span;
pub mod store;

#[cfg(feature = "lock_api")]
pub mod sync;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use engine::{Allocator, Placement};
pub use error::ConstructError;
pub use span::Span;
pub use store::{FreelistStore, PoolStore, SpanStore};

/// A numeric address in the space an [`Allocator`] manages.
///
/// This is a plain integer, not a pointer: the engine never dereferences it.
pub type VAddr = usize;
