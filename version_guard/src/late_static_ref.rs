//! A late-initialized static reference.

use once_cell::sync::OnceCell;

/// A late-initialized `&'static T`.
///
/// Used for the statics of [`GuardedLibrary`](crate::library::GuardedLibrary)
/// implementors,so that a library handle is initialized at most once.
pub struct LateStaticRef<T: 'static> {
    cell: OnceCell<&'static T>,
}

impl<T> LateStaticRef<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Attempts to initialize the `&'static T` reference this contains,
    /// if it is not already initialized.
    ///
    /// If `initializer` returns an `Err(...)` this returns the error and
    /// allows the reference to be initialized later.
    ///
    /// If this is already initialized,`initializer` won't be run.
    pub fn try_init<F, E>(&self, initializer: F) -> Result<&'static T, E>
    where
        F: FnOnce() -> Result<&'static T, E>,
    {
        self.cell.get_or_try_init(initializer).map(|x| *x)
    }

    /// Returns `Some(x:&'static T)` if it was initialized,otherwise returns None.
    pub fn get(&self) -> Option<&'static T> {
        self.cell.get().copied()
    }
}

impl<T> Default for LateStaticRef<T> {
    fn default() -> Self {
        Self::new()
    }
}

//////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    static N_100: u32 = 100;

    #[test]
    fn test_try_init() {
        let ptr = LateStaticRef::<u32>::new();

        assert_eq!(None, ptr.get());

        assert_eq!(Err(10), ptr.try_init(|| -> Result<_, i32> { Err(10) }));
        assert_eq!(None, ptr.get());

        assert_eq!(Ok(&100), ptr.try_init(|| -> Result<_, i32> { Ok(&N_100) }));
        assert_eq!(
            Ok(&100),
            ptr.try_init(|| -> Result<_, i32> { panic!("this should not run") }),
        );

        assert_eq!(
            (&N_100) as *const u32,
            ptr.get().unwrap() as *const u32,
        );
    }
}
