use crate::{raw::RawStorage, DynamicArray};
use core::{
    iter::{ExactSizeIterator, FusedIterator},
    mem::ManuallyDrop,
    ptr,
};

/// This struct is created by [`DynamicArray::into_iter`](crate::DynamicArray::into_iter).
/// See its documentation for more.
pub struct IntoIter<T> {
    index: usize,
    array: ManuallyDrop<DynamicArray<T>>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // releases the block even if one of the remaining elements panics on drop
        struct ReleaseStorage<'a, T>(&'a mut RawStorage<T>);

        impl<T> Drop for ReleaseStorage<'_, T> {
            fn drop(&mut self) { self.0.release() }
        }

        unsafe {
            let len = self.array.len;
            let index = self.index;

            let release = ReleaseStorage(&mut self.array.storage);
            let data = release.0.as_mut_ptr().add(index);
            ptr::slice_from_raw_parts_mut(data, len - index).drop_in_place();
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            index: 0,
            array: ManuallyDrop::new(self),
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Get a slice to the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] { &self.array[self.index..] }

    /// Get a mutable slice to the remaining elements in the iterator
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let index = self.index;
        &mut self.array[index..]
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.array.len {
            None
        } else {
            unsafe {
                let value = self.array.get_unchecked(self.index);
                self.index += 1;
                Some(ptr::read(value))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len - self.index;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let n = self.len().min(n);
        let old_index = self.index;
        self.index += n;

        unsafe {
            ptr::drop_in_place(self.array.get_unchecked_mut(old_index..self.index));
        }

        self.next()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.array.len {
            None
        } else {
            unsafe { Some(self.array.pop_unchecked()) }
        }
    }
}
