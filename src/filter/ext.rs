//! Method-call forms of the operations in [`filter`](super), as extension traits over slices and
//! [`Vec`].
//!
//! ```
//! # use slice_filter::filter::ext::{SliceFilter, VecFilter};
//! let mut values = vec![1, 2, 3, 4, 5];
//! assert_eq!(values.apply(|i| i * 2), [2, 4, 6, 8, 10]);
//! assert_eq!(values.choose(|i| i % 2 == 0), [2, 4]);
//! assert_eq!(values.drop_where(|i| i % 2 == 0), [1, 3, 5]);
//!
//! values.drop_in_place(|i| i % 2 == 0);
//! assert_eq!(values, [1, 3, 5]);
//! ```

use super::{apply, select};

pub trait SliceFilter<T> {
    /// See [`filter::apply`](super::apply()).
    fn apply<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&T) -> R;

    /// See [`filter::apply_in_place`](super::apply_in_place).
    fn apply_in_place<F>(&mut self, function: F)
    where
        F: FnMut(&T) -> T;

    /// See [`filter::choose`](super::choose).
    fn choose<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`filter::drop`](super::drop). Named so that it doesn't read like [`Drop::drop`].
    fn drop_where<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`filter::compact`](super::compact).
    fn compact<F>(&mut self, predicate: F, keep: bool) -> usize
    where
        F: FnMut(&T) -> bool;
}

impl<T> SliceFilter<T> for [T] {
    fn apply<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        apply::apply(self, function)
    }

    fn apply_in_place<F>(&mut self, function: F)
    where
        F: FnMut(&T) -> T,
    {
        apply::apply_in_place(self, function)
    }

    fn choose<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        select::choose(self, predicate)
    }

    fn drop_where<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        select::drop(self, predicate)
    }

    fn compact<F>(&mut self, predicate: F, keep: bool) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        select::compact(self, predicate, keep)
    }
}

pub trait VecFilter<T> {
    /// See [`filter::apply_into`](super::apply_into).
    fn apply_into<R, F>(self, function: F) -> Vec<R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R;

    /// See [`filter::choose_in_place`](super::choose_in_place).
    fn choose_in_place<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool;

    /// See [`filter::drop_in_place`](super::drop_in_place).
    fn drop_in_place<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool;
}

impl<T> VecFilter<T> for Vec<T> {
    fn apply_into<R, F>(self, function: F) -> Vec<R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R,
    {
        apply::apply_into(self, function)
    }

    fn choose_in_place<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        select::choose_in_place(self, predicate)
    }

    fn drop_in_place<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        select::drop_in_place(self, predicate)
    }
}
