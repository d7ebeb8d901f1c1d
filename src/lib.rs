//! This crate is my attempt at writing slice filtering helpers: apply a function to every element,
//! choose the elements that satisfy a predicate, or drop them.
//!
//! # Purpose
//! This crate is an experiment to see how easy it is to write such things in Rust. It is easy, but
//! a `for` loop (or [`Iterator::map`] / [`Vec::retain`]) is just as easy and usually more
//! efficient. You probably shouldn't use this crate.
//!
//! # Method
//! Every operation comes in two flavours. The plain version borrows its input and returns a newly
//! allocated [`Vec`]. The in-place version reuses the caller's storage:
//! - [`apply_in_place`](filter::apply_in_place) overwrites a slice element by element and only
//!   compiles when the function returns the element type.
//! - [`choose_in_place`](filter::choose_in_place) and [`drop_in_place`](filter::drop_in_place)
//!   compact a [`Vec`] in a single forward pass and shrink its length, keeping its capacity.
//!
//! The plain versions of [`choose`](filter::choose) and [`drop`](filter::drop) need `T: Clone`,
//! because the input is only borrowed.
//!
//! # Error Handling
//! Misusing the in-place operations is a programmer error, not something a caller should be
//! expected to recover from. For statically typed calls the compiler rules misuse out entirely. For
//! generic or type-erased callers, the `checked` feature adds `try_*` functions returning one of the
//! small error structs in [`error`], and `*_checked` functions which panic with the error's
//! message.
//!
//! # Features
//! - `checked` (default): runtime-checked in-place operations for generic and type-erased callers.
//! - `ext` (default): the [`SliceFilter`](filter::ext::SliceFilter) and
//!   [`VecFilter`](filter::ext::VecFilter) extension traits.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod filter;

pub(crate) mod util;
