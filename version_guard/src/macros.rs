/// Instantiates a [`VersionStrings`](crate::version::VersionStrings) with the
/// major.minor.patch version of the crate where it is invoked.
#[macro_export]
macro_rules! package_version_strings {
    () => {
        $crate::version::VersionStrings::new(env!("CARGO_PKG_VERSION"))
    };
}

/// Defines the `guarded_library_statics` method of a
/// [`GuardedLibrary`](crate::library::GuardedLibrary) impl.
///
/// Use this inside the trait impl,passing the implementing type
/// (`Self` won't work,statics cannot be generic):
///
/// ```ignore
/// impl GuardedLibrary for Hellolib {
///     version_guard::declare_guarded_library_statics! {Hellolib}
///     /* the associated constants */
/// }
/// ```
#[macro_export]
macro_rules! declare_guarded_library_statics {
    ( $ty:ty ) => {
        fn guarded_library_statics() -> &'static $crate::library::GuardedLibraryStatics<$ty> {
            static STATICS: $crate::library::GuardedLibraryStatics<$ty> =
                $crate::library::GuardedLibraryStatics::new();
            &STATICS
        }
    };
}
