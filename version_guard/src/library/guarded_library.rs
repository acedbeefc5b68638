use super::*;

/// The statics of a [`GuardedLibrary`] implementor,
/// which make loading the library a load-at-most-once operation.
///
/// To define the `guarded_library_statics` method use
/// [`declare_guarded_library_statics!{TypeOfSelf}`](crate::declare_guarded_library_statics).
pub struct GuardedLibraryStatics<T: 'static> {
    raw_library: LateStaticRef<RawLibrary>,
    guard: LateStaticRef<VersionGuard>,
    root: LateStaticRef<T>,
}

impl<T> GuardedLibraryStatics<T> {
    pub const fn new() -> Self {
        Self {
            raw_library: LateStaticRef::new(),
            guard: LateStaticRef::new(),
            root: LateStaticRef::new(),
        }
    }
}

/// A handle type for a dynamic library that exports version guard symbols.
///
/// This is implemented by `interface crate`s,
/// for an example look at the `hellolib_interface` crate
/// in this crate's repository.
///
/// Loading the library with `load_from_directory`/`load_from_file`
/// mounts a [`VersionGuard`] before any of the library's symbols are
/// handed out:if the binary was built from a different version than
/// this crate was compiled with,loading fails with a
/// [`LibraryError::IncompatibleVersionNumber`].
pub trait GuardedLibrary: Sized + 'static {
    /// The base name of the dynamic library,which is the same on all platforms.
    /// This is generally the name of the `implementation crate`'s library.
    const BASE_NAME: &'static str;

    /// The name of the library used in error messages.
    const NAME: &'static str = Self::BASE_NAME;

    /// The version number of the library's interface that this was compiled with.
    ///
    /// Initialize this with
    /// [`package_version_strings!()`](crate::package_version_strings).
    const VERSION_STRINGS: VersionStrings;

    /// Gets the statics for Self.
    ///
    /// To define this associated function use:
    /// [`declare_guarded_library_statics!{TypeOfSelf}`](crate::declare_guarded_library_statics).
    /// Passing `Self` instead of `TypeOfSelf` won't work.
    fn guarded_library_statics() -> &'static GuardedLibraryStatics<Self>;

    /// Resolves the symbols this handle exposes,
    /// called once the version guard was mounted successfully.
    fn symbols_from_library(library: &'static RawLibrary) -> Result<Self, LibraryError>;

    /// Gets the loaded handle,returning None if the library is not yet loaded.
    #[inline]
    fn loaded() -> Option<&'static Self> {
        Self::guarded_library_statics().root.get()
    }

    /// Gets the mounted guard,returning None if the library is not yet loaded.
    #[inline]
    fn mounted_guard() -> Option<&'static VersionGuard> {
        Self::guarded_library_statics().guard.get()
    }

    /// Returns the path the library would be loaded from,given a directory(folder).
    fn get_library_path(directory: &Path) -> PathBuf {
        RawLibrary::path_in_directory(directory, Self::BASE_NAME)
    }

    /// Loads the library from the `directory`,if it wasn't already loaded.
    fn load_from_directory(directory: &Path) -> Result<&'static Self, LibraryError> {
        Self::load_from_file(&Self::get_library_path(directory))
    }

    /// Loads the library at `path`,if it wasn't already loaded.
    ///
    /// The binary is leaked,it stays loaded for the lifetime of the process.
    fn load_from_file(path: &Path) -> Result<&'static Self, LibraryError> {
        let statics = Self::guarded_library_statics();

        let library = statics
            .raw_library
            .try_init(|| RawLibrary::load_at(path).map(leak_value))?;

        statics
            .guard
            .try_init(|| VersionGuard::mount::<Self>(library).map(leak_value))?;

        statics
            .root
            .try_init(|| Self::symbols_from_library(library).map(leak_value))
    }
}
