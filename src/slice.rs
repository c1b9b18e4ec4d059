//! Element moves within and between blocks
//!
//! All of these are bitwise moves. The source slots are logically
//! uninitialized afterwards and must not be dropped.

use core::ptr;

/// Relocates `count` elements from `src` into `dst`
///
/// # Safety
///
/// * `src` must be valid to read `count` initialized elements
/// * `dst` must be valid to write `count` elements
/// * the two ranges must not overlap
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

/// Shifts the `count` elements starting at `ptr` one slot toward the end
///
/// Afterwards `ptr` is a vacated slot and `ptr.add(count)` holds the old
/// last element.
///
/// # Safety
///
/// `ptr..ptr.add(count)` must hold initialized elements and
/// `ptr.add(count)` must be a writable slot
pub(crate) unsafe fn shift_right<T>(ptr: *mut T, count: usize) {
    // back to front, so every element is read before its slot is reused
    let mut index = count;
    while index != 0 {
        index -= 1;
        unsafe { ptr::copy_nonoverlapping(ptr.add(index), ptr.add(index + 1), 1) }
    }
}

/// Shifts the `count` elements starting at `ptr.add(1)` one slot toward the front
///
/// `ptr` must be a vacated slot. Afterwards `ptr.add(count)` is vacated.
///
/// # Safety
///
/// `ptr.add(1)..ptr.add(count + 1)` must hold initialized elements and
/// `ptr` must be a writable slot
pub(crate) unsafe fn shift_left<T>(ptr: *mut T, count: usize) {
    // front to back, the mirror of `shift_right`
    for index in 0..count {
        unsafe { ptr::copy_nonoverlapping(ptr.add(index + 1), ptr.add(index), 1) }
    }
}
