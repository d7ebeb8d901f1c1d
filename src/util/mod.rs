#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod panic;
#[cfg(feature = "checked")]
pub mod result;
