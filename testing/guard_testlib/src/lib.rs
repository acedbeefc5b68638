/*!
This crate is built solely so that tests can load a real guarded binary.

Besides its own guard symbols (generated by the build script),it exports
a header with a corrupted magic number under the `corruptlib` prefix,
so that the invalid-magic path can be exercised against the same binary.
*/

use version_guard::{GuardHeader, VersionNumber};

include!(concat!(env!("OUT_DIR"), "/guard_symbols.rs"));

/// The version this binary was built as,
/// for tests to pair a matching interface with.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The magic number `CORRUPTLIB_VERSION_HEADER` carries instead of the real one.
pub const CORRUPTED_MAGIC: usize = 0xBAD_C0DE;

// A header that did not come from the build-script support.
#[no_mangle]
pub static CORRUPTLIB_VERSION_HEADER: GuardHeader = GuardHeader {
    magic: CORRUPTED_MAGIC,
    version: VersionNumber {
        major: 0,
        minor: 3,
        patch: 0,
    },
};

/// Returns a fixed value,resolved by tests to check that symbols are
/// only handed out after the guard passes.
#[no_mangle]
pub extern "C" fn guard_testlib_value() -> u32 {
    100
}
