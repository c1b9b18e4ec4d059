//! The raw storage type that backs up the [`DynamicArray`](crate::DynamicArray)
//!
//! A [`RawStorage`] owns a single block of uninitialized slots. It knows how
//! big the block is and how to give it back to the allocator, and nothing
//! else: it never constructs or drops a `T`.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr::NonNull,
};

mod capacity;

pub(crate) use capacity::grown_capacity;

/// Error on failure to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity can't be described by a [`Layout`]
    CapacityOverflow,
    /// The global allocator could not satisfy the request
    OutOfMemory {
        /// The layout that was requested
        layout: Layout,
    },
}

/// Result of an allocation
pub type AllocResult<T = ()> = Result<T, AllocError>;

impl AllocError {
    /// Diverge the way the infallible operations do: a panic for overflow,
    /// [`handle_alloc_error`] when the allocator refused
    #[cold]
    #[inline(never)]
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::OutOfMemory { layout } => handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("requested capacity overflows the address space"),
            Self::OutOfMemory { layout } => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

/// A block of `capacity` uninitialized slots for `T`
///
/// Nothing is allocated when the block would be zero bytes long, either
/// because the capacity is zero or because `T` is zero-sized. In that case
/// the pointer is dangling, but the capacity is still tracked so the growth
/// policy behaves the same for every `T`.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// Create a new zero-capacity storage, this doesn't allocate
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a block of exactly `capacity` slots
    ///
    /// # Panic/Abort
    ///
    /// Panics if the layout overflows, calls [`handle_alloc_error`] if
    /// the allocator fails
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(storage) => storage,
            Err(error) => error.handle(),
        }
    }

    /// Allocate a block of exactly `capacity` slots
    ///
    /// # Errors
    ///
    /// If the block can't be allocated, returns the reason
    pub fn try_with_capacity(capacity: usize) -> AllocResult<Self> {
        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            })
        }

        // Safety: the layout has a non-zero size
        let ptr = unsafe { alloc(layout) };

        match NonNull::new(ptr) {
            Some(ptr) => Ok(Self {
                ptr: ptr.cast(),
                capacity,
                _marker: PhantomData,
            }),
            None => Err(AllocError::OutOfMemory { layout }),
        }
    }

    /// The number of slots in the block
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns true if there is an allocated block behind this storage
    pub fn is_allocated(&self) -> bool { self.capacity != 0 && mem::size_of::<T>() != 0 }

    /// A pointer to the first slot
    pub fn as_ptr(&self) -> *const T { self.ptr.as_ptr() }

    /// A mutable pointer to the first slot
    pub fn as_mut_ptr(&mut self) -> *mut T { self.ptr.as_ptr() }

    /// The address of the slot at `offset`
    ///
    /// # Safety
    ///
    /// `offset` must be at most `capacity`. An offset equal to the capacity
    /// is the one-past-the-end address: it may be computed but never read
    /// or written.
    pub unsafe fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "Tried to address slot {offset} of a {} slot storage! This is UB in release mode",
            self.capacity
        );

        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchange the blocks owned by `self` and `other`
    pub fn swap(&mut self, other: &mut Self) { mem::swap(self, other) }

    /// Move the block out, leaving `self` empty
    #[must_use]
    pub fn take(&mut self) -> Self { mem::take(self) }

    /// Give the block back to the allocator and leave `self` empty
    ///
    /// Releasing an empty storage does nothing.
    pub fn release(&mut self) {
        if self.is_allocated() {
            // Safety
            //
            // * the layout was validated by `Layout::array` when the block was allocated
            // * the block was allocated by the global allocator with that layout
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>().wrapping_mul(self.capacity),
                    mem::align_of::<T>(),
                );
                dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }

        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) { self.release() }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self { Self::new() }
}

impl<T> AsRef<[MaybeUninit<T>]> for RawStorage<T> {
    fn as_ref(&self) -> &[MaybeUninit<T>] {
        // Safety: `MaybeUninit<T>` has no validity requirements and the block
        // is valid for `capacity` slots
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr().cast(), self.capacity) }
    }
}

impl<T> AsMut<[MaybeUninit<T>]> for RawStorage<T> {
    fn as_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // Safety: see `as_ref`
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
