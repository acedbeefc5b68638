/*!
This is the `implementation crate` of the hellolib demo,
compiled as the `hellolib` dynamic library.

It exports the guard symbols its build script generated
(`HELLOLIB_VERSION_HEADER`,and a counter whose name embeds this
crate's version token),and the placeholder `hellolib_greet` function
that `hellolib_interface` resolves after the guard passes.
*/

use std::io::{self, Write};

include!(concat!(env!("OUT_DIR"), "/guard_symbols.rs"));

/// Prints a greeting on stdout and returns.
///
/// If `fatal` is true the process is aborted instead,
/// with no greeting and no cleanup.This simulates a fatal fault,
/// it is not a real feature.
#[no_mangle]
pub extern "C" fn hellolib_greet(fatal: bool) {
    if fatal {
        std::process::abort();
    }

    let stdout = io::stdout();
    greet_to(&mut stdout.lock()).expect("failed printing to stdout");
}

fn greet_to(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Hello World!")
}

// To count in-process uses of this library version,mount a guard over
// the exported counter from the binary that links this crate as an rlib:
//
// let _guard = version_guard::VersionGuard::over_counter(&HELLOLIB_VERSION_GUARD_1_0_1);

#[cfg(test)]
mod tests {
    use super::*;

    use version_guard::package_version_strings;

    #[test]
    fn greet_returns_normally_when_not_fatal() {
        hellolib_greet(false);
    }

    #[test]
    fn greet_writes_exactly_the_greeting() {
        let mut out = Vec::new();
        greet_to(&mut out).unwrap();
        assert_eq!(out, b"Hello World!\n".to_vec());
    }

    #[test]
    fn exported_header_is_valid() {
        assert!(HELLOLIB_VERSION_HEADER.is_valid());
    }

    #[test]
    fn exported_header_carries_the_package_version() {
        let own_version = package_version_strings!().parsed().unwrap();
        assert_eq!(HELLOLIB_VERSION_HEADER.version, own_version);
    }
}
