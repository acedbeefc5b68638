use crate::version::{ParseVersionError, VersionNumber};

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

/// All the possible errors that could happen when loading a guarded library.
#[derive(Debug)]
pub enum LibraryError {
    /// When a library can't be loaded, because it doesn't exist.
    OpenError {
        /// The path to the library
        path: PathBuf,
        /// The cause of the error
        err: Box<libloading::Error>,
    },
    /// When a function/static does not exist.
    GetSymbolError {
        /// The path to the library
        library: PathBuf,
        /// The name of the function/static.Does not have to be utf-8.
        symbol: Vec<u8>,
        /// The cause of the error
        err: Box<libloading::Error>,
    },
    /// The version string could not be parsed into a version number.
    ParseVersionError(ParseVersionError),
    /// The guard header symbol did not carry the magic number,
    /// the binary was not built with this crate's build-script support.
    InvalidMagicNumber {
        ///
        library_name: &'static str,
        ///
        found: usize,
    },
    /// The versioned counter symbol was absent,
    /// the interface and the binary were built from different versions.
    IncompatibleVersionNumber {
        ///
        library_name: &'static str,
        /// The counter symbol the interface expected the binary to define.
        expected_symbol: String,
        /// The version the interface was compiled with.
        expected_version: VersionNumber,
        /// The version the binary advertises in its guard header.
        actual_version: VersionNumber,
    },
}

impl From<ParseVersionError> for LibraryError {
    fn from(v: ParseVersionError) -> LibraryError {
        LibraryError::ParseVersionError(v)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;
        match self {
            LibraryError::OpenError { path, err } => writeln!(
                f,
                "Could not open library at:\n\t{}\nbecause:\n\t{}",
                path.display(),
                err
            ),
            LibraryError::GetSymbolError {
                library,
                symbol,
                err,
            } => writeln!(
                f,
                "Could not load symbol:\n\t{}\nin library:\n\t{}\nbecause:\n\t{}",
                String::from_utf8_lossy(symbol),
                library.display(),
                err
            ),
            LibraryError::ParseVersionError(x) => Display::fmt(x, f),
            LibraryError::InvalidMagicNumber {
                library_name,
                found,
            } => writeln!(
                f,
                "The guard header of the '{}' library carried the magic number {:#x},\
                 \nwhen {:#x} was expected.",
                library_name,
                found,
                crate::guard::MAGIC_NUMBER,
            ),
            LibraryError::IncompatibleVersionNumber {
                library_name,
                expected_symbol,
                expected_version,
                actual_version,
            } => writeln!(
                f,
                "\n'{name}' library version mismatch:\
                 \nthis symbol does not exist in the library:\n\t{symbol}\
                 \nuser version:\n\t{expected}\
                 \nlibrary version:\n\t{actual}\
                 \n\nYou have compiled against the interface of version {expected} of \
                 '{name}',and are binding the result to a binary of version {actual}.\
                 \nRe-pair a matching interface and binary.",
                name = library_name,
                symbol = expected_symbol,
                expected = expected_version,
                actual = actual_version,
            ),
        }?;
        f.write_str("\n")?;
        Ok(())
    }
}

impl std::error::Error for LibraryError {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::version::VersionStrings;

    #[test]
    fn mismatch_error_names_the_symbol_and_both_versions() {
        let e = LibraryError::IncompatibleVersionNumber {
            library_name: "hellolib",
            expected_symbol: "HELLOLIB_VERSION_GUARD_1_0_1".to_string(),
            expected_version: VersionStrings::new("1.0.1").parsed().unwrap(),
            actual_version: VersionStrings::new("1.0.2").parsed().unwrap(),
        };
        let text = e.to_string();
        assert!(text.contains("HELLOLIB_VERSION_GUARD_1_0_1"));
        assert!(text.contains("1.0.1"));
        assert!(text.contains("1.0.2"));
    }

    #[test]
    fn parse_errors_convert() {
        let e = VersionStrings::new("one.two.three").parsed().unwrap_err();
        let e = LibraryError::from(e);
        assert!(matches!(e, LibraryError::ParseVersionError(_)));
    }
}
