use crate::DynamicArray;

use alloc::vec::Vec;
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    ptr,
    slice::SliceIndex,
};

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self { Self::from_slice(self) }

    fn clone_from(&mut self, source: &Self) { self.assign(source); }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self { Self::new() }
}

impl<O: ?Sized + AsRef<[T]>, T> PartialEq<O> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &O) -> bool { self.as_slice() == other.as_ref() }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<O: ?Sized + AsRef<[T]>, T> PartialOrd<O> for DynamicArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &O) -> Option<core::cmp::Ordering> { self.as_slice().partial_cmp(other.as_ref()) }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.as_slice().fmt(f) }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] { self }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] { self }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(slice: &[T]) -> Self { Self::from_slice(slice) }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(array: [T; N]) -> Self {
        let mut this = Self::with_capacity(N);
        this.fill_from(IntoIterator::into_iter(array));
        this
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut this = Self::with_capacity(len);

        // Safety
        //
        // * `this` has exactly `len` free slots
        // * the vector forgets its elements before they are relocated,
        //   so each one is dropped exactly once, by `this`
        unsafe {
            vec.set_len(0);
            ptr::copy_nonoverlapping(vec.as_ptr(), this.as_mut_ptr(), len);
            this.set_len_unchecked(len);
        }

        this
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(mut array: DynamicArray<T>) -> Self {
        let len = array.len();
        let mut vec = Vec::with_capacity(len);

        // Safety: see `From<Vec<T>> for DynamicArray<T>`
        unsafe {
            array.set_len_unchecked(0);
            ptr::copy_nonoverlapping(array.as_ptr(), vec.as_mut_ptr(), len);
            vec.set_len(len);
        }

        vec
    }
}

impl<T, I> Index<I> for DynamicArray<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { self.as_slice().index(index) }
}

impl<T, I> IndexMut<I> for DynamicArray<T>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output { self.as_mut_slice().index_mut(index) }
}
