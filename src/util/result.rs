use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Turns the contract violation carried by an [`Err`] into the panic of a `*_checked`
    /// operation. The panic message names the violation and the operation that raised it.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("contract violation: {}", error),
        }
    }
}
