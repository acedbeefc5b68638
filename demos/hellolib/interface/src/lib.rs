/*!
This is the `interface crate` of the hellolib demo,
the analogue of the header package a library would ship.

It declares the [`Hellolib`] handle with the symbols the library
exports,and the version this crate was compiled as.Loading the handle
mounts the version guard:a `hellolib` binary of a different version
does not define the counter symbol this crate expects,and loading
fails before any of the binary's functions are handed out.
*/

use std::path::Path;

use version_guard::{
    declare_guarded_library_statics,
    library::{GuardedLibrary, LibraryError, RawLibrary},
    package_version_strings,
    version::VersionStrings,
};

/// A handle to the loaded hellolib dynamic library.
pub struct Hellolib {
    greet: extern "C" fn(bool),
}

impl GuardedLibrary for Hellolib {
    declare_guarded_library_statics! {Hellolib}

    const BASE_NAME: &'static str = "hellolib";

    const VERSION_STRINGS: VersionStrings = package_version_strings!();

    fn symbols_from_library(library: &'static RawLibrary) -> Result<Self, LibraryError> {
        let greet: extern "C" fn(bool) =
            *unsafe { library.get::<extern "C" fn(bool)>(b"hellolib_greet")? };
        Ok(Hellolib { greet })
    }
}

impl Hellolib {
    /// Loads the hellolib binary from `directory`,if it wasn't already loaded.
    pub fn load_in(directory: &Path) -> Result<&'static Self, LibraryError> {
        <Self as GuardedLibrary>::load_from_directory(directory)
    }

    /// Prints a greeting.
    ///
    /// If `fatal` is true this does not return:
    /// the library aborts the process,simulating a fatal fault.
    pub fn greet(&self, fatal: bool) {
        (self.greet)(fatal)
    }
}
