//! C-ABI boundary shim: four opaque-handle entry points for consumers outside
//! the Rust type system.
//!
//! This module is a thin, deliberately dumb wrapper around [`Allocator`]. It
//! owns no logic of its own beyond validating the handle and routing calls;
//! all algorithmic weight lives in [`crate::engine`]. Built as part of the
//! `staticlib` crate-type.

use alloc::boxed::Box;

use crate::engine::{Allocator, Placement};
use crate::store::FreelistStore;
use crate::VAddr;

/// The sentinel address returned by [`vra_allocate`] on failure: the
/// all-ones value of the address type.
pub const VRA_SENTINEL: VAddr = VAddr::MAX;

/// Placement flags for [`vra_allocate`], mirrored from [`Placement`].
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VraFlag {
    /// See [`Placement::Any`].
    Any = 0,
    /// See [`Placement::Exact`].
    Exact = 1,
    /// See [`Placement::Above`].
    Above = 2,
    /// See [`Placement::Below`].
    Below = 3,
}

impl From<VraFlag> for Placement {
    #[inline]
    fn from(flag: VraFlag) -> Self {
        match flag {
            VraFlag::Any => Placement::Any,
            VraFlag::Exact => Placement::Exact,
            VraFlag::Above => Placement::Above,
            VraFlag::Below => Placement::Below,
        }
    }
}

/// Opaque handle to an [`Allocator`], as returned by [`vra_create`].
///
/// The handle is a boxed, heap-allocated [`Allocator<FreelistStore>`]; the
/// caller must treat it as opaque and pass it only to the other three
/// entry points in this module. Forging or reusing a handle after
/// [`vra_destroy`] has already consumed it is undefined behavior — the shim
/// has no way to validate anything beyond non-null.
#[repr(transparent)]
pub struct VraHandle(Allocator<FreelistStore>);

/// Creates a new allocator managing `[base, base + length)` at the given
/// `granularity`.
///
/// Returns null if `base`, `length`, or `granularity` is zero, or if
/// `granularity` exceeds `length` (see [`crate::ConstructError`]).
///
/// # Safety
/// The returned pointer, if non-null, must eventually be passed to exactly
/// one call of [`vra_destroy`], and to no other deallocation routine.
#[no_mangle]
pub unsafe extern "C" fn vra_create(base: VAddr, length: usize, granularity: usize) -> *mut VraHandle {
    match Allocator::<FreelistStore>::new(base, length, granularity) {
        Ok(allocator) => Box::into_raw(Box::new(VraHandle(allocator))),
        Err(_) => core::ptr::null_mut(),
    }
}

/// Destroys `handle`, releasing all internal storage. No-op on null.
///
/// # Safety
/// `handle` must be either null or a pointer previously returned by
/// [`vra_create`] that has not already been passed to this function.
#[no_mangle]
pub unsafe extern "C" fn vra_destroy(handle: *mut VraHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Attempts to allocate `length` addresses under `flag`, returning the base
/// address on success or [`VRA_SENTINEL`] on failure.
///
/// `hint` is ignored under [`VraFlag::Any`].
///
/// # Safety
/// `handle` must be a live pointer previously returned by [`vra_create`] and
/// not yet passed to [`vra_destroy`].
#[no_mangle]
pub unsafe extern "C" fn vra_allocate(
    handle: *mut VraHandle,
    length: usize,
    flag: VraFlag,
    hint: VAddr,
) -> VAddr {
    let handle = unsafe { &mut *handle };
    handle.0.allocate(length, flag.into(), hint).unwrap_or(VRA_SENTINEL)
}

/// Releases `[base, base + length)` back to `handle`'s free list.
///
/// Invalid arguments and overlapping releases are silently ignored.
///
/// # Safety
/// `handle` must be a live pointer previously returned by [`vra_create`] and
/// not yet passed to [`vra_destroy`].
#[no_mangle]
pub unsafe extern "C" fn vra_free(handle: *mut VraHandle, base: VAddr, length: usize) {
    let handle = unsafe { &mut *handle };
    handle.0.free(base, length);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_destroy_round_trip() {
        let handle = unsafe { vra_create(0x1000, 4096, 64) };
        assert!(!handle.is_null());
        unsafe { vra_destroy(handle) };
    }

    #[test]
    fn create_rejects_bad_params() {
        assert!(unsafe { vra_create(0, 4096, 64) }.is_null());
        assert!(unsafe { vra_create(0x1000, 0, 64) }.is_null());
        assert!(unsafe { vra_create(0x1000, 4096, 0) }.is_null());
    }

    #[test]
    fn destroy_null_is_noop() {
        unsafe { vra_destroy(core::ptr::null_mut()) };
    }

    #[test]
    fn allocate_and_free_round_trip() {
        let handle = unsafe { vra_create(0x1000, 4096, 64) };

        let addr = unsafe { vra_allocate(handle, 64, VraFlag::Any, 0) };
        assert_ne!(addr, VRA_SENTINEL);

        unsafe { vra_free(handle, addr, 64) };

        let addr2 = unsafe { vra_allocate(handle, 4096, VraFlag::Any, 0) };
        assert_eq!(addr2, 0x1000);

        unsafe { vra_destroy(handle) };
    }

    #[test]
    fn allocate_exhaustion_returns_sentinel() {
        let handle = unsafe { vra_create(0x1000, 64, 64) };

        assert_ne!(unsafe { vra_allocate(handle, 64, VraFlag::Any, 0) }, VRA_SENTINEL);
        assert_eq!(unsafe { vra_allocate(handle, 64, VraFlag::Any, 0) }, VRA_SENTINEL);

        unsafe { vra_destroy(handle) };
    }
}
