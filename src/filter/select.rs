#[cfg(feature = "checked")]
use std::any::Any;

#[cfg(feature = "checked")]
use crate::error::NotAReference;
#[cfg(feature = "checked")]
use crate::util::result::ResultExtension;

/// Returns a newly allocated [`Vec`] containing clones of the elements of `slice` for which
/// `predicate` returns `keep`, in their original order.
///
/// An empty input, or one where nothing matches, produces an empty [`Vec`].
///
/// # Examples
/// ```
/// # use slice_filter::filter::select;
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(select(&values, |i| i % 2 == 0, true), [2, 4]);
/// assert_eq!(select(&values, |i| i % 2 == 0, false), [1, 3, 5]);
/// ```
pub fn select<T, F>(slice: &[T], mut predicate: F, keep: bool) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::new();

    for item in slice {
        if predicate(item) == keep {
            out.push(item.clone());
        }
    }

    out
}

/// Returns a newly allocated [`Vec`] containing only the elements of `slice` that satisfy
/// `predicate`.
///
/// # Examples
/// ```
/// # use slice_filter::filter::choose;
/// assert_eq!(choose(&[1, 2, 3, 4, 5], |i| i % 2 == 0), [2, 4]);
/// ```
pub fn choose<T, F>(slice: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    select(slice, predicate, true)
}

/// Returns a newly allocated [`Vec`] containing only the elements of `slice` that don't satisfy
/// `predicate`, that is, it removes the elements that do.
///
/// # Examples
/// ```
/// # use slice_filter::filter;
/// assert_eq!(filter::drop(&[1, 2, 3, 4, 5], |i| i % 2 == 0), [1, 3, 5]);
/// ```
pub fn drop<T, F>(slice: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    select(slice, predicate, false)
}

/// Moves the elements of `slice` for which `predicate` returns `keep` to the front, preserving
/// their order, and returns how many there are.
///
/// The scan is a single forward pass. Each kept element is swapped into the next free slot, which
/// is never ahead of the element being read, so every element is seen by `predicate` exactly once
/// and with its original value. After the call, `slice[..len]` holds the kept elements and
/// `slice[len..]` holds the rest in an unspecified order.
///
/// # Examples
/// ```
/// # use slice_filter::filter::compact;
/// let mut values = [1, 2, 3, 4, 5];
/// let len = compact(&mut values, |i| i % 2 == 0, true);
/// assert_eq!(&values[..len], [2, 4]);
/// ```
pub fn compact<T, F>(slice: &mut [T], mut predicate: F, keep: bool) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut write = 0;

    for read in 0..slice.len() {
        if predicate(&slice[read]) == keep {
            // write <= read, so the slot being replaced has already been scanned.
            slice.swap(write, read);
            write += 1;
        }
    }

    write
}

/// Like [`select`], but compacts `vec` itself rather than allocating. The length of `vec` is
/// reduced to the number of kept elements, which is also returned. Rejected elements are dropped,
/// and the capacity of `vec` is left as it was.
///
/// # Examples
/// ```
/// # use slice_filter::filter::select_in_place;
/// let mut values = Vec::with_capacity(8);
/// values.extend([1, 2, 3, 4, 5]);
/// assert_eq!(select_in_place(&mut values, |i| i % 2 == 0, true), 2);
/// assert_eq!(values, [2, 4]);
/// assert_eq!(values.capacity(), 8);
/// ```
pub fn select_in_place<T, F>(vec: &mut Vec<T>, predicate: F, keep: bool) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = compact(vec.as_mut_slice(), predicate, keep);
    vec.truncate(len);
    len
}

/// Like [`choose`], but overwrites `vec` rather than returning a newly allocated [`Vec`]. Since
/// the length has to change, this takes a mutable reference to the [`Vec`] rather than a slice.
///
/// # Examples
/// ```
/// # use slice_filter::filter::choose_in_place;
/// let mut values = vec![1, 2, 3, 4, 5];
/// choose_in_place(&mut values, |i| i % 2 == 0);
/// assert_eq!(values, [2, 4]);
/// ```
pub fn choose_in_place<T, F>(vec: &mut Vec<T>, predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    select_in_place(vec, predicate, true)
}

/// Like [`drop`], but overwrites `vec` rather than returning a newly allocated [`Vec`]. Since the
/// length has to change, this takes a mutable reference to the [`Vec`] rather than a slice.
///
/// # Examples
/// ```
/// # use slice_filter::filter::drop_in_place;
/// let mut values = vec![1, 2, 3, 4, 5];
/// drop_in_place(&mut values, |i| i % 2 == 0);
/// assert_eq!(values, [1, 3, 5]);
/// ```
pub fn drop_in_place<T, F>(vec: &mut Vec<T>, predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    select_in_place(vec, predicate, false)
}

/// The runtime-checked form of [`select_in_place`], for callers holding a type-erased handle.
///
/// # Errors
/// Returns [`NotAReference`] if `handle` isn't a `Vec<T>`. The check happens before `predicate` is
/// called.
///
/// # Examples
/// ```
/// # use std::any::Any;
/// # use slice_filter::filter::try_select_in_place;
/// let mut values = vec![1, 2, 3, 4, 5];
/// let handle: &mut dyn Any = &mut values;
/// assert_eq!(try_select_in_place(handle, |i: &i32| i % 2 == 0, true), Ok(2));
/// assert_eq!(values, [2, 4]);
///
/// let mut array = [1, 2, 3];
/// assert!(try_select_in_place(&mut array, |i: &i32| i % 2 == 0, true).is_err());
/// ```
#[cfg(feature = "checked")]
pub fn try_select_in_place<T, F>(
    handle: &mut dyn Any,
    predicate: F,
    keep: bool,
) -> Result<usize, NotAReference>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    let vec = handle.downcast_mut::<Vec<T>>().ok_or_else(NotAReference::of::<T>)?;
    Ok(select_in_place(vec, predicate, keep))
}

/// Like [`try_select_in_place`], but treats a bad handle as the contract violation it is.
///
/// # Panics
/// Panics if `handle` isn't a `Vec<T>`, before any element is touched.
#[cfg(feature = "checked")]
pub fn select_in_place_checked<T, F>(handle: &mut dyn Any, predicate: F, keep: bool) -> usize
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    try_select_in_place(handle, predicate, keep).throw()
}
