/*!
A load-time version guard for dynamic libraries.

An `implementation crate` (compiled as a `cdylib`) exports two symbols,
generated by its build script from the version in its `Cargo.toml`:

- a fixed-name [`GuardHeader`], carrying a magic number and the version
    the binary was built as.

- a [`GuardCounter`] whose symbol name embeds the version token
    (for example `HELLOLIB_VERSION_GUARD_1_0_1`).

An `interface crate` declares a handle type implementing
[`GuardedLibrary`],with the version it was compiled with.
Loading the library mounts a [`VersionGuard`]:the expected counter symbol
name is computed from the interface's own version and resolved in the
loaded binary.If the binary was built from a different version,the symbol
is absent and loading fails with an error naming the missing symbol and
both versions,instead of misbehaving at some later point.

This is the load-time rendition of the classic link-time trick of
referencing a versioned symbol from a header;the detection signal is the
same:a definition must exist for every reference.
*/

#![allow(unused_unsafe)]
#![warn(rust_2018_idioms)]

#[macro_use]
mod macros;

pub mod codegen;
pub mod guard;
pub mod late_static_ref;
pub mod library;
pub mod utils;
pub mod version;

pub use crate::{
    guard::{GuardCounter, GuardHeader, VersionGuard},
    late_static_ref::LateStaticRef,
    library::{GuardedLibrary, LibraryError, RawLibrary},
    version::{ParseVersionError, VersionNumber, VersionStrings},
};
