//! Types representing the version number of a library.

use std::{
    error,
    fmt::{self, Display},
    num::ParseIntError,
};

/// The `<major>.<minor>.<patch>` version of a library,unparsed.
///
/// Initialize this with [`package_version_strings!()`](crate::package_version_strings),
/// so that it always carries the version in the invoking crate's `Cargo.toml`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VersionStrings {
    /// The `major.minor.patch` version string.
    pub version: &'static str,
}

/// The parsed (`<major>.<minor>.<patch>`) version number of a library.
///
/// # Post 1.0 major version
///
/// Major versions are mutually incompatible for both users and implementors.
///
/// Minor allow users to have a version less than or equal to that of the implementor.
///
/// Patch cannot change the api/abi of the library at all,fixes only.
///
/// # Pre 1.0 version
///
/// Minor versions are mutually incompatible for both users and implementors.
///
/// Patch cannot change the api/abi of the library at all,fixes only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct VersionNumber {
    ///
    pub major: u32,
    ///
    pub minor: u32,
    ///
    pub patch: u32,
}

impl VersionStrings {
    /// Constructs a VersionStrings from a string with the
    /// "major.minor.patch" format.
    ///
    /// This does not check whether the string is correctly formatted,
    /// that check is done inside `VersionStrings::parsed`.
    pub const fn new(version: &'static str) -> Self {
        Self { version }
    }

    /// Attempts to convert a `VersionStrings` into a `VersionNumber`.
    ///
    /// # Errors
    ///
    /// This returns a `ParseVersionError` if the string is not correctly formatted.
    pub fn parsed(self) -> Result<VersionNumber, ParseVersionError> {
        VersionNumber::new(self)
    }
}

impl VersionNumber {
    /// Attempts to convert a `VersionStrings` into a `VersionNumber`.
    ///
    /// The patch field tolerates a missing component (`"1.0"`) and
    /// pre-release suffixes (`"1.0.5-rc.1"`),which parse as `0` and `5`.
    ///
    /// # Errors
    ///
    /// This returns a `ParseVersionError` if the string is not correctly formatted.
    pub fn new(vn: VersionStrings) -> Result<Self, ParseVersionError> {
        let mut iter = vn.version.splitn(3, '.');

        Ok(VersionNumber {
            major: iter
                .next()
                .unwrap_or("")
                .parse()
                .map_err(|x| ParseVersionError::new(vn, "major", x))?,
            minor: iter
                .next()
                .unwrap_or("")
                .parse()
                .map_err(|x| ParseVersionError::new(vn, "minor", x))?,
            patch: {
                let comp = iter.next().unwrap_or("0");
                let digits = comp
                    .split(|c: char| !c.is_ascii_digit())
                    .next()
                    .unwrap_or("0");
                let digits = if digits.is_empty() { "0" } else { digits };
                digits
                    .parse()
                    .map_err(|x| ParseVersionError::new(vn, "patch", x))?
            },
        })
    }

    /// Whether the `self` version number is compatible with the
    /// `library_implementor` version number.
    ///
    /// This uses the same semver rules as cargo:
    ///
    /// - For 0.y.z ,y is interpreted as a major version,
    ///     z is interpreted as the minor version,
    ///
    /// - For x.y.z ,x>=1,y is interpreted as a minor version.
    ///
    /// - Libraries are compatible so long as they are the same
    ///     major version with a minor_version >=`self`.
    pub fn is_compatible(self, library_implementor: VersionNumber) -> bool {
        if self.major == 0 && library_implementor.major == 0 {
            self.minor == library_implementor.minor && self.patch <= library_implementor.patch
        } else {
            self.major == library_implementor.major && self.minor <= library_implementor.minor
        }
    }
}

impl Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Display for VersionStrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.version, f)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// When a `VersionStrings` could not be converted into a `VersionNumber`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseVersionError {
    version_strings: VersionStrings,
    which_field: &'static str,
    parse_error: ParseIntError,
}

impl ParseVersionError {
    fn new(
        version_strings: VersionStrings,
        which_field: &'static str,
        parse_error: ParseIntError,
    ) -> Self {
        Self {
            version_strings,
            which_field,
            parse_error,
        }
    }

    /// The version string that failed to parse.
    pub fn version_strings(&self) -> VersionStrings {
        self.version_strings
    }
}

impl Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\nInvalid version string:'{}'\nerror at the {} field:{}",
            self.version_strings, self.which_field, self.parse_error,
        )
    }
}

impl error::Error for ParseVersionError {}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn version(s: &'static str) -> VersionNumber {
        VersionStrings::new(s).parsed().unwrap()
    }

    #[test]
    fn parses_version_strings() {
        assert_eq!(
            version("1.0.1"),
            VersionNumber {
                major: 1,
                minor: 0,
                patch: 1
            }
        );
        assert_eq!(
            version("10.5.20"),
            VersionNumber {
                major: 10,
                minor: 5,
                patch: 20
            }
        );
    }

    #[test]
    fn patch_is_lenient() {
        assert_eq!(version("1.0").patch, 0);
        assert_eq!(version("1.0.5-rc.1").patch, 5);
    }

    #[test]
    fn rejects_invalid_version_strings() {
        for s in ["", "not a version", "1", "1.x.0", "x.0.0"] {
            assert!(
                VersionStrings::new(s).parsed().is_err(),
                "'{}' should not parse",
                s
            );
        }
    }

    #[test]
    fn compatibility_post_1_0() {
        assert!(version("1.0.0").is_compatible(version("1.0.5")));
        assert!(version("1.0.5").is_compatible(version("1.1.0")));
        assert!(!version("1.1.0").is_compatible(version("1.0.5")));
        assert!(!version("1.1.0").is_compatible(version("2.0.0")));
    }

    #[test]
    fn compatibility_pre_1_0() {
        assert!(version("0.1.0").is_compatible(version("0.1.5")));
        assert!(!version("0.1.8").is_compatible(version("0.2.0")));
        assert!(!version("0.2.0").is_compatible(version("0.1.8")));
    }
}
