/*!
Build-script support for implementation crates.

An implementation crate's `build.rs` calls [`emit_guard_symbols`],
which derives the version token from the version in its own `Cargo.toml`
and writes the guard symbol definitions into `OUT_DIR`.
The crate then includes them with:

```ignore
include!(concat!(env!("OUT_DIR"), "/guard_symbols.rs"));
```

This replaces textually rewriting the token in the sources:the binary
and its interface always carry the token of the version their own
manifest declares.
*/

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::{
    guard::{counter_symbol, header_symbol},
    version::{VersionNumber, VersionStrings},
};

/// The name of the file written into `OUT_DIR`.
pub const GENERATED_FILE: &str = "guard_symbols.rs";

/// Writes the guard symbol definitions for `base_name` into `OUT_DIR`,
/// with the version token taken from `CARGO_PKG_VERSION`.
///
/// Must be called from a build script,
/// those are the only processes cargo gives both variables to.
pub fn emit_guard_symbols(base_name: &str) -> io::Result<PathBuf> {
    let out_dir = env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "OUT_DIR is not set,emit_guard_symbols must be called from a build script",
        )
    })?;
    let version = env::var("CARGO_PKG_VERSION").map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("could not read CARGO_PKG_VERSION:{}", e),
        )
    })?;

    // Leaked so that a parse error can carry the string,
    // a build script runs once and exits.
    let version: &'static str = Box::leak(version.into_boxed_str());
    let version = VersionStrings::new(version)
        .parsed()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    emit_guard_symbols_to(Path::new(&out_dir), base_name, version)
}

/// Writes the guard symbol definitions into `out_dir`,
/// returning the path of the written file.
pub fn emit_guard_symbols_to(
    out_dir: &Path,
    base_name: &str,
    version: VersionNumber,
) -> io::Result<PathBuf> {
    let path = out_dir.join(GENERATED_FILE);
    fs::write(&path, render_guard_symbols(base_name, version))?;
    Ok(path)
}

fn render_guard_symbols(base_name: &str, version: VersionNumber) -> String {
    format!(
        "\
// Generated by version_guard::codegen::emit_guard_symbols. Do not edit.

#[no_mangle]
pub static {header}: ::version_guard::GuardHeader =
    ::version_guard::GuardHeader::new(::version_guard::VersionNumber {{
        major: {major},
        minor: {minor},
        patch: {patch},
    }});

#[no_mangle]
pub static {counter}: ::version_guard::GuardCounter =
    ::version_guard::GuardCounter::new();
",
        header = header_symbol(base_name),
        counter = counter_symbol(base_name, version),
        major = version.major,
        minor = version.minor,
        patch = version.patch,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_1_0_1() -> VersionNumber {
        VersionNumber {
            major: 1,
            minor: 0,
            patch: 1,
        }
    }

    #[test]
    fn renders_both_symbol_definitions() {
        let rendered = render_guard_symbols("hellolib", version_1_0_1());

        assert_eq!(rendered.matches("#[no_mangle]").count(), 2);
        assert!(rendered.contains("pub static HELLOLIB_VERSION_HEADER"));
        assert!(rendered.contains("pub static HELLOLIB_VERSION_GUARD_1_0_1"));
        assert!(rendered.contains("major: 1"));
        assert!(rendered.contains("patch: 1"));
    }

    #[test]
    fn writes_the_generated_file() {
        let dir = env::temp_dir().join("version_guard_codegen_test");
        fs::create_dir_all(&dir).unwrap();

        let path = emit_guard_symbols_to(&dir, "hellolib", version_1_0_1()).unwrap();
        assert_eq!(path.file_name().unwrap(), GENERATED_FILE);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("HELLOLIB_VERSION_GUARD_1_0_1"));
    }
}
