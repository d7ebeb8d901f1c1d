//! Contract violations for the in-place operations.
//!
//! None of these are business errors. They only surface through the runtime-checked operations
//! and indicate that the caller asked for something that can't be done in place.

use std::any;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An in-place map was requested with a function returning a type other than the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    pub element: &'static str,
    pub result: &'static str,
}

impl TypeMismatch {
    pub fn of<T: ?Sized, R: ?Sized>() -> TypeMismatch {
        TypeMismatch {
            element: any::type_name::<T>(),
            result: any::type_name::<R>(),
        }
    }
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "apply: can't overwrite elements of type {} with values of type {} in place!",
            self.element, self.result
        )
    }
}

impl Error for TypeMismatch {}

/// An in-place choose or drop was given a handle that isn't a mutable reference to a [`Vec`] of
/// the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAReference {
    pub expected: &'static str,
}

impl NotAReference {
    pub fn of<T>() -> NotAReference {
        NotAReference {
            expected: any::type_name::<Vec<T>>(),
        }
    }
}

impl Display for NotAReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "choose/drop: not a mutable reference to {}!", self.expected)
    }
}

impl Error for NotAReference {}

/// Any contract violation raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContractViolation {
    TypeMismatch(TypeMismatch),
    NotAReference(NotAReference),
}
