//! [`Lock`] wraps an [`Allocator`] behind a [`lock_api`] mutex for use across
//! threads.
//!
//! The engine itself (`&mut self` throughout) has no notion of concurrency;
//! this module is the thinnest possible seam for sharing it, mirroring how
//! this crate's teacher separates its single-threaded cell wrapper from its
//! mutex-guarded one rather than baking locking into the core type.

use crate::engine::Allocator;
use crate::store::SpanStore;

/// An [`Allocator`] guarded by a [`lock_api::Mutex`].
///
/// `R` is the raw mutex implementation (e.g. `spin::Mutex`'s raw type, or
/// `std::sync::Mutex`'s via an adapter); this crate takes no position on
/// which one to use.
///
/// # Example
/// ```rust
/// use spanalloc::sync::Lock;
/// use spanalloc::{Allocator, FreelistStore, Placement};
///
/// let allocator = Allocator::<FreelistStore>::new(0x1000, 0x10000, 0x10).unwrap();
/// let lock = Lock::<spin::Mutex<()>, _>::new(allocator);
///
/// let addr = lock.lock().allocate(0x20, Placement::Any, 0);
/// assert!(addr.is_some());
/// ```
#[derive(Debug)]
pub struct Lock<R: lock_api::RawMutex, St: SpanStore> {
    mutex: lock_api::Mutex<R, Allocator<St>>,
}

impl<R: lock_api::RawMutex, St: SpanStore> Lock<R, St> {
    /// Wraps `allocator` behind a new mutex.
    #[inline]
    pub const fn new(allocator: Allocator<St>) -> Self {
        Self { mutex: lock_api::Mutex::new(allocator) }
    }

    /// Locks the mutex, blocking until it's available, and returns a guard
    /// granting access to the inner [`Allocator`].
    #[inline]
    #[track_caller]
    pub fn lock(&self) -> lock_api::MutexGuard<'_, R, Allocator<St>> {
        self.mutex.lock()
    }

    /// Attempts to lock the mutex without blocking.
    #[inline]
    pub fn try_lock(&self) -> Option<lock_api::MutexGuard<'_, R, Allocator<St>>> {
        self.mutex.try_lock()
    }

    /// Returns a mutable reference to the inner [`Allocator`], bypassing the
    /// lock (a `&mut self` statically proves no other borrow is live).
    #[inline]
    pub fn get_mut(&mut self) -> &mut Allocator<St> {
        self.mutex.get_mut()
    }

    /// Consumes the [`Lock`], returning the inner [`Allocator`].
    #[inline]
    pub fn into_inner(self) -> Allocator<St> {
        self.mutex.into_inner()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{FreelistStore, Placement};

    #[test]
    fn lock_allows_allocate_and_free() {
        let allocator = Allocator::<FreelistStore>::new(0x1000, 0x1000, 0x10).unwrap();
        let lock = Lock::<spin::Mutex<()>, _>::new(allocator);

        let addr = lock.lock().allocate(0x20, Placement::Any, 0).unwrap();
        lock.lock().free(addr, 0x20);

        assert_eq!(lock.lock().free_bytes(), 0x1000);
    }

    #[test]
    fn try_lock_fails_while_held() {
        let allocator = Allocator::<FreelistStore>::new(0x1000, 0x1000, 0x10).unwrap();
        let lock = Lock::<spin::Mutex<()>, _>::new(allocator);

        let guard = lock.lock();
        assert!(lock.try_lock().is_none());
        drop(guard);
        assert!(lock.try_lock().is_some());
    }
}
