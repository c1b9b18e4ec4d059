//! The [`Iterator`] types that can be created from a [`DynamicArray`]
//!
//! Borrowing iteration goes through the slice, see
//! [`slice::iter`](https://doc.rust-lang.org/std/primitive.slice.html#method.iter),
//! so it can be restarted as often as needed.

mod into_iter;

pub use into_iter::IntoIter;

use core::iter::FromIterator;

use crate::DynamicArray;

impl<T> FromIterator<T> for DynamicArray<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let _ = self.try_reserve_amortized(iter.size_hint().0);
        iter.for_each(|item| {
            self.push(item);
        });
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) { self.extend(iter.into_iter().copied()) }
}
