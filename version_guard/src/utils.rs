//! Utility functions.

/// Leak a value into the heap,getting a `'static` reference to it.
pub fn leak_value<T>(value: T) -> &'static T
where
    T: 'static,
{
    Box::leak(Box::new(value))
}
