#![cfg_attr(not(any(doc, feature = "std")), no_std)]
#![allow(unused_unsafe)]
#![forbid(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! A growable contiguous array, built in two layers.
//!
//! [`RawStorage`](raw::RawStorage) owns a block of uninitialized slots and
//! nothing more. [`DynamicArray`] sits on top of it, tracks how many of those
//! slots hold live elements, and decides when and how the block is replaced.
//!
//! This crate is `no_std` compatible (it still needs `alloc`), just turn off
//! all default features.
//!
//! # Features
//!
//! * `std` (default) - implements [`std::error::Error`] for [`AllocError`]
//! * `tracing` - emits a `trace` level event for every reallocation
//!
//! # Basic Usage
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//! assert_eq!(array, [1, 2, 3]);
//! assert_eq!(array.capacity(), 4);
//!
//! array.insert(1, 9);
//! assert_eq!(array, [1, 9, 2, 3]);
//!
//! array.erase(0);
//! assert_eq!(array, [9, 2, 3]);
//! ```
//!
//! # Growth
//!
//! When a push or insert finds the array full, a *growth cycle* runs: a new
//! block of `max(1, 2 * capacity)` slots is allocated, the new element is
//! built straight into its final slot there, the existing elements are
//! relocated around it, and only then does the new block replace the old
//! one. If building the element panics, the new block is released and the
//! array is untouched.
//!
//! # Panic safety
//!
//! `push`, `insert`, `reserve`, growth, `clone` and `assign` into a too-small
//! array give the strong guarantee: if an element constructor or `Clone`
//! panics, the array is left exactly as it was. `erase`, `truncate` and the
//! in-place cases of `assign` only keep the length and capacity consistent.

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! trace_storage {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_storage {
    ($($arg:tt)*) => {{}};
}

use core::{
    iter::repeat_with,
    ops::{Deref, DerefMut},
    ptr,
};

mod impls;
mod slice;

pub mod iter;
pub mod raw;

pub use raw::{AllocError, AllocResult};
use raw::RawStorage;

/// Create a new [`DynamicArray`]
///
/// ```rust
/// # use dynamic_array::{dynarray, DynamicArray};
/// let x: DynamicArray<i32> = dynarray![1, 2, 3, 4];
/// assert_eq!(x, [1, 2, 3, 4]);
/// assert_eq!(x.capacity(), 4);
///
/// let y = dynarray![0u8; 3];
/// assert_eq!(y, [0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarray {
    ($expr:expr; $n:expr) => {{
        let mut array = $crate::DynamicArray::new();
        array.resize($n, $expr);
        array
    }};
    ($($expr:expr),* $(,)?) => {
        $crate::DynamicArray::from([$($expr),*])
    };
}

/// A contiguous growable array backed by a [`RawStorage`]
///
/// The first `len` slots of the storage hold live elements, the rest are
/// uninitialized.
pub struct DynamicArray<T> {
    len: usize,
    storage: RawStorage<T>,
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // The first `len` elements are guaranteed to be initialized
        unsafe { core::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // The first `len` elements are guaranteed to be initialized
        unsafe { core::slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // The storage releases the block on its own drop
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

/// Truncates the array back to the length it had on creation, unless committed
///
/// Used while appending elements whose constructors may panic, so a
/// panic drops exactly the elements added so far.
struct TruncateOnUnwind<'a, T> {
    array: &'a mut DynamicArray<T>,
    len: usize,
}

impl<'a, T> TruncateOnUnwind<'a, T> {
    fn new(array: &'a mut DynamicArray<T>) -> Self {
        let len = array.len;
        Self { array, len }
    }

    fn commit(self) { core::mem::forget(self) }
}

impl<T> Drop for TruncateOnUnwind<'_, T> {
    fn drop(&mut self) { self.array.truncate(self.len) }
}

impl<T> DynamicArray<T> {
    /// Create a new empty `DynamicArray`, this doesn't allocate
    pub const fn new() -> Self {
        Self {
            len: 0,
            storage: RawStorage::new(),
        }
    }

    /// Create a new empty `DynamicArray` with exactly the given capacity
    ///
    /// # Panic/Abort
    ///
    /// Panics on capacity overflow, aborts if the allocation fails
    pub fn with_capacity(capacity: usize) -> Self { Self::with_storage(RawStorage::with_capacity(capacity)) }

    /// Create a new empty `DynamicArray` with exactly the given capacity
    ///
    /// # Errors
    ///
    /// If the block can't be allocated
    pub fn try_with_capacity(capacity: usize) -> AllocResult<Self> {
        RawStorage::try_with_capacity(capacity).map(Self::with_storage)
    }

    /// Create a `DynamicArray` of `len` default values, with a capacity of exactly `len`
    ///
    /// ```rust
    /// # use dynamic_array::DynamicArray;
    /// let array = DynamicArray::<u32>::with_len(5);
    /// assert_eq!(array, [0; 5]);
    /// assert_eq!(array.capacity(), 5);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);
        array.fill_from(repeat_with(T::default).take(len));
        array
    }

    /// Create a `DynamicArray` holding clones of `slice`, with a capacity of exactly `slice.len()`
    ///
    /// If a `clone` panics, the clones made so far are dropped and the block is released.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(slice.len());
        array.fill_from(slice.iter().cloned());
        array
    }

    fn with_storage(storage: RawStorage<T>) -> Self { Self { len: 0, storage } }

    /// Convert a `DynamicArray` into a length-storage pair
    pub fn into_raw_parts(self) -> (usize, RawStorage<T>) {
        let mut this = core::mem::ManuallyDrop::new(self);
        (this.len, this.storage.take())
    }

    /// Create a `DynamicArray` from a length-storage pair
    ///
    /// # Safety
    ///
    /// the length must be at most `storage.capacity()` and
    /// all elements in the range `0..length` must be initialized
    pub unsafe fn from_raw_parts(len: usize, storage: RawStorage<T>) -> Self { Self { len, storage } }

    /// Returns the number of elements in the array
    pub fn len(&self) -> usize { self.len }

    /// Returns the number of elements the array can hold without reallocating
    pub fn capacity(&self) -> usize { self.storage.capacity() }

    /// Returns true if and only if the array contains no elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns true if and only if the array's length is equal to it's capacity.
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Returns the number of uninitialized slots after the last element
    pub fn remaining_capacity(&self) -> usize { self.capacity() - self.len }

    /// Set the length of the array
    ///
    /// # Safety
    ///
    /// * `len` must be less than or equal to `capacity()`.
    /// * The elements at `old_len..len` must be initialized.
    pub unsafe fn set_len_unchecked(&mut self, len: usize) {
        debug_assert!(
            len <= self.capacity(),
            "Tried to set the length past the capacity! This is UB in release mode"
        );
        self.len = len;
    }

    /// Extracts a slice containing the entire array.
    pub fn as_slice(&self) -> &[T] { self }

    /// Extracts a mutable slice containing the entire array.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self }

    /// A pointer to the first slot of the storage
    pub fn as_ptr(&self) -> *const T { self.storage.as_ptr() }

    /// A mutable pointer to the first slot of the storage, valid for all `capacity()` slots
    pub fn as_mut_ptr(&mut self) -> *mut T { self.storage.as_mut_ptr() }

    /// Returns the underlying storage
    pub fn storage(&self) -> &RawStorage<T> { &self.storage }

    /// Exchange contents with `other`, the blocks themselves change hands so no element moves
    pub fn swap_with(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out into a new `DynamicArray`, leaving `self` empty and without a block
    #[must_use]
    pub fn take(&mut self) -> Self { core::mem::take(self) }

    /// Make the capacity at least `new_capacity`
    ///
    /// Unlike `Vec::reserve` this takes the total capacity, not the number of
    /// additional elements. If the capacity is already large enough this does
    /// nothing, otherwise a block of exactly `new_capacity` slots replaces the
    /// current one.
    ///
    /// # Panic/Abort
    ///
    /// Panics on capacity overflow, aborts if the allocation fails
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_reserve(new_capacity) {
            error.handle()
        }
    }

    /// Make the capacity at least `new_capacity`, see [`DynamicArray::reserve`]
    ///
    /// # Errors
    ///
    /// If the block can't be allocated. The array is left unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> AllocResult {
        if new_capacity <= self.capacity() {
            Ok(())
        } else {
            self.reallocate(new_capacity)
        }
    }

    /// Make room for `additional` more elements, growing by at least the growth policy
    pub(crate) fn try_reserve_amortized(&mut self, additional: usize) -> AllocResult {
        if self.remaining_capacity() >= additional {
            return Ok(())
        }

        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow)?;
        let new_capacity = raw::grown_capacity(self.capacity()).map_or(required, |grown| grown.max(required));

        self.reallocate(new_capacity)
    }

    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) -> AllocResult {
        let mut storage = RawStorage::try_with_capacity(new_capacity)?;

        // Safety
        //
        // * the new block has at least `len` slots
        // * the two blocks are distinct allocations
        unsafe { slice::relocate(self.storage.as_ptr(), storage.as_mut_ptr(), self.len) }

        trace_storage!(
            old_capacity = self.capacity(),
            new_capacity,
            len = self.len,
            "reallocated storage"
        );

        // the old block now holds only relocated slots and is released without dropping anything
        self.storage.swap(&mut storage);
        Ok(())
    }

    /// Runs a growth cycle that places the value built by `value` at `index`
    ///
    /// # Safety
    ///
    /// `index` must be at most `len`
    #[cold]
    #[inline(never)]
    unsafe fn grow_and_insert_with<F>(&mut self, index: usize, value: F) -> AllocResult<&mut T>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        let old_capacity = self.capacity();
        let new_capacity = raw::grown_capacity(old_capacity)?;
        let mut storage: RawStorage<T> = RawStorage::try_with_capacity(new_capacity)?;

        // Safety
        //
        // * `index <= len < new_capacity`, so every write is in bounds
        // * if `value` panics, only the new block exists to clean up
        //   and it is released by its own drop
        unsafe {
            storage.offset(index).write(value());

            let src = self.storage.as_ptr();
            let dst = storage.as_mut_ptr();
            slice::relocate(src, dst, index);
            slice::relocate(src.add(index), dst.add(index + 1), len - index);
        }

        trace_storage!(old_capacity, new_capacity, len, "growth cycle");

        self.storage.swap(&mut storage);
        self.len = len + 1;

        // Safety: the slot at `index` was just written
        Ok(unsafe { &mut *self.storage.offset(index) })
    }

    /// Appends the values of `values` to the end
    ///
    /// If producing a value panics, the values appended so far are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `values` yields more items than the remaining capacity,
    /// so the capacity must be reserved up front.
    pub(crate) fn fill_from<I>(&mut self, values: I)
    where
        I: Iterator<Item = T>,
    {
        let guard = TruncateOnUnwind::new(self);

        for value in values {
            assert!(
                !guard.array.is_full(),
                "Tried to fill past the reserved capacity"
            );
            // Safety: we just checked there is a free slot
            unsafe {
                guard.array.push_unchecked(value);
            }
        }

        guard.commit();
    }

    /// Shortens the array, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than the array's current length, this has no effect.
    ///
    /// Note that this method has no effect on the allocated capacity of the array.
    pub fn truncate(&mut self, len: usize) {
        if let Some(diff) = self.len.checked_sub(len) {
            // # Safety
            //
            // * the given length is smaller than the current length, so
            //   all the elements must be initialized
            // * the elements from `len..self.len()` are valid,
            //   and should be dropped
            // * the length is set first, so a panicking drop can't
            //   leave dropped elements inside the array
            unsafe {
                self.len = len;
                let ptr = self.storage.offset(len);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, diff));
            }
        }
    }

    /// Clears the array, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the array.
    pub fn clear(&mut self) { self.truncate(0); }

    /// Resizes the array in-place so that len is equal to `new_len`.
    ///
    /// If `new_len` is greater than `len`, the capacity is raised to at least
    /// `new_len` and each additional slot is filled with the result of
    /// calling `value`. If `new_len` is less than `len`, the array is simply
    /// truncated. If they are equal nothing is built or dropped.
    ///
    /// # Panic behavor
    ///
    /// If `value` panics, then all added items will be dropped and the length
    /// is restored. The capacity may already have grown.
    pub fn resize_with<F>(&mut self, new_len: usize, value: F)
    where
        F: FnMut() -> T,
    {
        match new_len.checked_sub(self.len) {
            Some(0) => (),
            Some(additional) => {
                self.reserve(new_len);
                self.fill_from(repeat_with(value).take(additional));
            }
            None => self.truncate(new_len),
        }
    }

    /// Resizes the array in-place so that len is equal to `new_len`, filling new slots with clones of `value`
    ///
    /// See [`DynamicArray::resize_with`]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes the array in-place so that len is equal to `new_len`, filling new slots with `T::default()`
    ///
    /// See [`DynamicArray::resize_with`]
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Appends an element to the back of the array.
    ///
    /// # Panic/Abort
    ///
    /// Panics on capacity overflow, aborts if a growth allocation fails
    pub fn push(&mut self, value: T) -> &mut T { self.push_with(|| value) }

    /// Appends the element built by `value` to the back of the array.
    ///
    /// When the array is full, `value` runs after the new block is
    /// allocated and writes straight into it.
    ///
    /// # Panic/Abort
    ///
    /// Panics on capacity overflow, aborts if a growth allocation fails.
    /// If `value` panics the array is unchanged.
    pub fn push_with<F>(&mut self, value: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_push_with(value) {
            Ok(slot) => slot,
            Err(error) => error.handle(),
        }
    }

    /// Appends the element built by `value` to the back of the array.
    ///
    /// # Errors
    ///
    /// If the array is full and a bigger block can't be allocated. `value`
    /// is not called and the array is unchanged.
    pub fn try_push_with<F>(&mut self, value: F) -> AllocResult<&mut T>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            let len = self.len;
            // Safety: `len` is a valid insertion index
            unsafe { self.grow_and_insert_with(len, value) }
        } else {
            // Safety: the array isn't full
            Ok(unsafe { self.push_unchecked(value()) })
        }
    }

    /// Appends an element to the back of the array.
    ///
    /// # Safety
    ///
    /// the array must not be full
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert_ne!(
            self.len,
            self.capacity(),
            "Tried to `push_unchecked` past capacity! This is UB in release mode"
        );

        // Safety
        //
        // the array isn't full, so `ptr.add(len)` is valid to write
        unsafe {
            let len = self.len;
            let ptr = self.storage.offset(len);
            ptr.write(value);
            self.len = len + 1;
            &mut *ptr
        }
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    ///
    /// * Panics if `index > len`
    /// * Panics on capacity overflow, aborts if a growth allocation fails
    pub fn insert(&mut self, index: usize, value: T) -> &mut T { self.insert_with(index, || value) }

    /// Inserts the element built by `value` at position `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    ///
    /// * Panics if `index > len`
    /// * Panics on capacity overflow, aborts if a growth allocation fails
    /// * If `value` panics the array is unchanged
    pub fn insert_with<F>(&mut self, index: usize, value: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_insert_with(index, value) {
            Ok(slot) => slot,
            Err(error) => error.handle(),
        }
    }

    /// Inserts the element built by `value` at position `index`, shifting all elements after it to the right.
    ///
    /// # Errors
    ///
    /// If the array is full and a bigger block can't be allocated. `value`
    /// is not called and the array is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`
    pub fn try_insert_with<F>(&mut self, index: usize, value: F) -> AllocResult<&mut T>
    where
        F: FnOnce() -> T,
    {
        #[cold]
        #[inline(never)]
        fn insert_fail(index: usize, len: usize) -> ! {
            panic!("Tried to insert at {index}, but length is {len}");
        }

        let len = self.len;

        if index > len {
            insert_fail(index, len)
        }

        if self.is_full() {
            // Safety: we verified that index is in bounds
            return unsafe { self.grow_and_insert_with(index, value) }
        }

        // Build the value before any slot moves
        let value = value();

        // Safety
        //
        // * the array isn't full
        // * we verified that index is in bounds
        Ok(unsafe { self.insert_unchecked(index, value) })
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Safety
    ///
    /// * the array must not be full
    /// * `index` must be at most `len`
    pub unsafe fn insert_unchecked(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;

        debug_assert_ne!(
            len,
            self.capacity(),
            "Tried to `insert_unchecked` past capacity! This is UB in release mode"
        );
        debug_assert!(
            index <= len,
            "Tried to insert at {index}, but length is {len}! This is UB in release mode"
        );

        // Safety
        //
        // * the index is in bounds
        // * the array isn't full so `ptr.add(len)` is valid to write 1 element
        unsafe {
            let ptr = self.storage.offset(index);
            slice::shift_right(ptr, len - index);
            ptr.write(value);
            self.len = len + 1;
            &mut *ptr
        }
    }

    /// Removes the last element from the array and returns it
    ///
    /// # Panics
    ///
    /// Panics if the array is empty
    pub fn pop(&mut self) -> T {
        #[cold]
        #[inline(never)]
        fn pop_fail() -> ! {
            panic!("Tried to pop an element from an empty array");
        }

        if self.is_empty() {
            pop_fail()
        }

        // Safety
        //
        // * we verified we are not empty
        unsafe { self.pop_unchecked() }
    }

    /// Removes the last element from the array and returns it,
    /// Returns `None` if the array is empty
    pub fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // Safety
            //
            // * we verified we are not empty
            unsafe { Some(self.pop_unchecked()) }
        }
    }

    /// Removes the last element from the array and returns it
    ///
    /// # Safety
    ///
    /// the array must not be empty
    pub unsafe fn pop_unchecked(&mut self) -> T {
        let len = self.len;
        debug_assert_ne!(
            len, 0,
            "Tried to `pop_unchecked` an empty array! This is UB in release mode"
        );

        // Safety
        //
        // * the array isn't empty, so `ptr.add(len - 1)` is valid to read
        unsafe {
            let len = len - 1;
            self.len = len;
            self.storage.offset(len).read()
        }
    }

    /// Removes and returns the element at position `index`,
    /// shifting all elements after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        fn remove_fail(index: usize, len: usize) -> ! {
            panic!("Tried to remove an element at {index}, but length is {len}");
        }

        if index >= self.len {
            remove_fail(index, self.len)
        }

        // Safety
        //
        // * we verified that the index is in bounds
        unsafe { self.remove_unchecked(index) }
    }

    /// Removes and returns the element at position `index`,
    /// shifting all elements after it to the left.
    /// Returns `None` if `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Option<T> {
        if index < self.len {
            // Safety
            //
            // * we verified that the index is in bounds
            unsafe { Some(self.remove_unchecked(index)) }
        } else {
            None
        }
    }

    /// Removes and returns the element at position `index`,
    /// shifting all elements after it to the left.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`
    pub unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        let len = self.len;

        debug_assert!(
            index < len,
            "Tried to remove an element at index {index} from a {len} length array! This is UB in release mode"
        );

        // Safety
        //
        // * the index is in bounds
        // * `ptr.add(1)..ptr.add(len - index)` are the initialized elements after `index`
        unsafe {
            let ptr = self.storage.offset(index);
            let value = ptr.read();
            slice::shift_left(ptr, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops the element at position `index` and shifts all elements after it to the left.
    ///
    /// Returns the element that now occupies `index`, or `None` if the
    /// erased element was the last one.
    ///
    /// # Panic behavor
    ///
    /// If the element's `Drop` panics, the gap is still closed and the length
    /// is still reduced, so the array stays usable, but the erased value is
    /// gone. This operation does not restore the array on panic.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        #[cold]
        #[inline(never)]
        fn erase_fail(index: usize, len: usize) -> ! {
            panic!("Tried to erase an element at {index}, but length is {len}");
        }

        struct CloseGap<'a, T> {
            array: &'a mut DynamicArray<T>,
            index: usize,
        }

        impl<T> Drop for CloseGap<'_, T> {
            fn drop(&mut self) {
                let len = self.array.len;
                // Safety: the slot at `index` is dead, everything after it is live
                unsafe {
                    slice::shift_left(self.array.storage.offset(self.index), len - self.index - 1);
                }
                self.array.len = len - 1;
            }
        }

        if index >= self.len {
            erase_fail(index, self.len)
        }

        let gap = CloseGap { array: &mut *self, index };
        // Safety: the index is in bounds, and `gap` closes the slot even if this panics
        unsafe { ptr::drop_in_place(gap.array.storage.offset(index)) }
        drop(gap);

        self.get_mut(index)
    }

    /// Clones and appends all elements in a slice to the array.
    ///
    /// # Panic behavor
    ///
    /// If `T::clone` panics, then all newly added items will be dropped. The
    /// capacity may already have grown.
    pub fn extend_from_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        if let Err(error) = self.try_reserve_amortized(slice.len()) {
            error.handle()
        }

        self.fill_from(slice.iter().cloned());
    }

    /// Replaces all of the current elements with clones of the ones in `source`
    ///
    /// * If `source` is longer than the capacity, a full copy is built in a
    ///   new block and swapped in. A panicking `clone` leaves `self` unchanged.
    /// * Otherwise the existing elements are overwritten with
    ///   [`Clone::clone_from`], surplus elements are dropped and missing ones
    ///   are cloned into the free slots. The capacity doesn't change. A
    ///   panicking `clone` leaves a consistent array whose values may be a
    ///   mix of old and new.
    pub fn assign(&mut self, source: &[T])
    where
        T: Clone,
    {
        if source.len() > self.capacity() {
            let mut copy = Self::from_slice(source);
            self.swap_with(&mut copy);
        } else if source.len() <= self.len {
            self.as_mut_slice()[..source.len()].clone_from_slice(source);
            self.truncate(source.len());
        } else {
            let (init, tail) = source.split_at(self.len);
            self.as_mut_slice().clone_from_slice(init);
            self.fill_from(tail.iter().cloned());
        }
    }
}
