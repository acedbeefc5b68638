/*!
Traits and types related to loading a guarded dynamic library,
as well as the symbols within.
*/

use std::path::{Path, PathBuf};

use crate::{
    guard::VersionGuard, late_static_ref::LateStaticRef, utils::leak_value,
    version::VersionStrings,
};

pub mod development_utils;
mod errors;
mod guarded_library;
mod raw_library;

pub use self::{
    errors::LibraryError,
    guarded_library::{GuardedLibrary, GuardedLibraryStatics},
    raw_library::RawLibrary,
};
