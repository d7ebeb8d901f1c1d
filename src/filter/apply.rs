use std::any::{self, Any, TypeId};

#[cfg(feature = "checked")]
use crate::error::TypeMismatch;
#[cfg(feature = "checked")]
use crate::util::result::ResultExtension;

/// Returns a newly allocated [`Vec`] where each element is the result of calling `function` on
/// the element of `slice` at the same index.
///
/// The output always has the same length as the input. If `function` panics, the panic propagates
/// to the caller and `slice` is left untouched.
///
/// # Examples
/// ```
/// # use slice_filter::filter::apply;
/// let doubled = apply(&[1, 2, 3, 4, 5], |i| i * 2);
/// assert_eq!(doubled, [2, 4, 6, 8, 10]);
///
/// let lengths = apply(&["a", "bb", "ccc"], |s| s.len());
/// assert_eq!(lengths, [1, 2, 3]);
/// ```
pub fn apply<T, R, F>(slice: &[T], mut function: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    let mut out = Vec::with_capacity(slice.len());

    for item in slice {
        out.push(function(item));
    }

    out
}

/// Like [`apply`], but overwrites the elements of `slice` rather than allocating a new [`Vec`].
/// Because the results are written back into the same storage, `function` has to return the
/// element type.
///
/// Elements are visited in index order, exactly once each, and `function` always receives the
/// original value at that index.
///
/// # Examples
/// ```
/// # use slice_filter::filter::apply_in_place;
/// let mut values = [1, 2, 3, 4, 5];
/// apply_in_place(&mut values, |i| i * 2);
/// assert_eq!(values, [2, 4, 6, 8, 10]);
/// ```
pub fn apply_in_place<T, F>(slice: &mut [T], mut function: F)
where
    F: FnMut(&T) -> T,
{
    for item in slice.iter_mut() {
        *item = function(&*item);
    }
}

/// Consumes `vec` and maps every element through `function`. When `R` is `T` the results are
/// written back into the allocation of `vec`, so no new storage is needed. Any other result type
/// gets a freshly allocated [`Vec`]. This never fails, regardless of whether `R` is the element
/// type.
///
/// # Examples
/// ```
/// # use slice_filter::filter::apply_into;
/// let words = vec![String::from("in"), String::from("place")];
/// let ptr = words.as_ptr() as usize;
/// let shouted = apply_into(words, |s| s + "!");
/// assert_eq!(shouted, ["in!", "place!"]);
/// assert_eq!(shouted.as_ptr() as usize, ptr);
///
/// let numbers = vec![1_u32, 2, 3];
/// assert_eq!(apply_into(numbers, |i| i as f32 / 2.0), [0.5, 1.0, 1.5]);
/// ```
pub fn apply_into<T, R, F>(vec: Vec<T>, mut function: F) -> Vec<R>
where
    T: 'static,
    R: 'static,
    F: FnMut(T) -> R,
{
    if TypeId::of::<T>() == TypeId::of::<R>() {
        let mapped = overwrite_owned(vec, |item| cast::<R, T>(function(item)));
        return cast::<Vec<T>, Vec<R>>(mapped);
    }

    let mut out = Vec::with_capacity(vec.len());

    for item in vec {
        out.push(function(item));
    }

    out
}

/// Replaces every element of `vec` with `function` applied to it by value, reusing the
/// allocation. If `function` panics, the remaining elements are leaked rather than dropped twice.
fn overwrite_owned<T, F>(mut vec: Vec<T>, mut function: F) -> Vec<T>
where
    F: FnMut(T) -> T,
{
    let len = vec.len();
    // SAFETY: 0 <= capacity and no elements are exposed while the length is 0. Slots below len
    // stay initialized, they are only read out and written back by the loop below.
    unsafe { vec.set_len(0); }
    let ptr = vec.as_mut_ptr();

    for i in 0..len {
        // SAFETY: i < len <= capacity, so the slot is in bounds, properly aligned and
        // initialized. Each slot is read exactly once and written back before moving on, so no
        // value is duplicated.
        unsafe {
            let slot = ptr.add(i);
            slot.write(function(slot.read()));
        }
    }

    // SAFETY: All len slots have been written back by the loop above.
    unsafe { vec.set_len(len); }
    vec
}

/// Moves `value` out as `B`, for callers that have already checked `A` and `B` to be the same
/// type with [`TypeId`].
fn cast<A: 'static, B: 'static>(value: A) -> B {
    let mut value = Some(value);
    let Some(value) = (&mut value as &mut dyn Any)
        .downcast_mut::<Option<B>>()
        .and_then(Option::take)
    else {
        unreachable!("{} was checked to be {}", any::type_name::<A>(), any::type_name::<B>())
    };
    value
}

/// The runtime-checked form of [`apply_in_place`], for generic callers where `R` might not be the
/// element type.
///
/// # Errors
/// Returns [`TypeMismatch`] if `R` isn't `T`. The check happens before `function` is called, so the
/// slice is left untouched.
///
/// # Examples
/// ```
/// # use slice_filter::filter::try_apply_in_place;
/// let mut values = [1_u8, 2, 3];
/// assert!(try_apply_in_place(&mut values, |i| *i as u16).is_err());
/// assert_eq!(values, [1, 2, 3]);
///
/// assert!(try_apply_in_place(&mut values, |i| i + 1).is_ok());
/// assert_eq!(values, [2, 3, 4]);
/// ```
#[cfg(feature = "checked")]
pub fn try_apply_in_place<T, R, F>(slice: &mut [T], mut function: F) -> Result<(), TypeMismatch>
where
    T: 'static,
    R: 'static,
    F: FnMut(&T) -> R,
{
    if TypeId::of::<T>() != TypeId::of::<R>() {
        return Err(TypeMismatch::of::<T, R>());
    }

    for item in slice.iter_mut() {
        *item = cast::<R, T>(function(&*item));
    }

    Ok(())
}

/// Like [`try_apply_in_place`], but treats a type mismatch as the contract violation it is.
///
/// # Panics
/// Panics if `R` isn't `T`, before any element is touched.
#[cfg(feature = "checked")]
pub fn apply_in_place_checked<T, R, F>(slice: &mut [T], function: F)
where
    T: 'static,
    R: 'static,
    F: FnMut(&T) -> R,
{
    try_apply_in_place(slice, function).throw()
}
