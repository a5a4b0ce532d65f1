use std::error::Error;

/// Renders an error as `"{TypeName}: {message}"`, using the unqualified type name.
///
/// # Example
/// ```rust
/// use satchel_kernel::{UtilError, exception::get_message};
///
/// let err = UtilError::illegal_argument("bad size");
/// assert_eq!(get_message(&err), "UtilError: Illegal argument: bad size");
/// ```
#[must_use]
pub fn get_message<E: Error>(error: &E) -> String {
    format!("{}: {error}", short_type_name::<E>())
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
