//! Applying functions to slices and filtering them by predicate.
//!
//! # Method
//! All operations are strict: they run over the whole input before returning and materialize the
//! full result. Nothing here is lazy or parallel, for that, reach for [`Iterator`] or a dedicated
//! crate.
//!
//! The allocating operations borrow a slice and return a [`Vec`]. The in-place operations take
//! `&mut [T]` when the length stays the same and `&mut Vec<T>` when it has to shrink.
//!
//! | Operation | Allocating | In place |
//! |-|-|-|
//! | Apply | [`apply`](apply()) | [`apply_in_place`], [`apply_into`] |
//! | Choose | [`choose`] | [`choose_in_place`] |
//! | Drop | [`drop`] | [`drop_in_place`] |
//!
//! [`select`](select()), [`compact`] and [`select_in_place`] take the `keep` flag directly.

pub mod apply;
#[cfg(feature = "ext")]
pub mod ext;
pub mod select;

#[doc(inline)]
pub use apply::*;
#[doc(inline)]
pub use select::*;
