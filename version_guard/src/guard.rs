/*!
The version guard itself:the exported counter/header symbols,
and the `VersionGuard` mounted over them when a library is loaded.
*/

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{
    library::{GuardedLibrary, LibraryError, RawLibrary},
    version::VersionNumber,
};

/// Identifies libraries that participate in the guard convention.
pub const MAGIC_NUMBER: usize = 0x5647_5244;

/// A process-wide counter,defined once per library binary under a
/// versioned symbol name.
///
/// It starts at zero,and is incremented by one each time a
/// [`VersionGuard`] is constructed over it.Nothing reads the count for
/// program logic;the symbol exists so that a reference to it must be
/// resolved.
#[repr(C)]
pub struct GuardCounter {
    count: AtomicU32,
}

impl GuardCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    /// How many guards were constructed over this counter.
    pub fn get(&self) -> u32 {
        // Relaxed:nothing synchronizes with the count.
        self.count.load(Ordering::Relaxed)
    }

    fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for GuardCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed-name symbol exported next to the counter,
/// letting mismatch errors report the binary's actual version.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GuardHeader {
    /// Must be [`MAGIC_NUMBER`].
    pub magic: usize,
    /// The version the binary was built as.
    pub version: VersionNumber,
}

impl GuardHeader {
    pub const fn new(version: VersionNumber) -> Self {
        Self {
            magic: MAGIC_NUMBER,
            version,
        }
    }

    /// Whether this header was exported by a library following
    /// the guard convention.
    pub fn is_valid(&self) -> bool {
        self.magic == MAGIC_NUMBER
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The name of the counter symbol for `base_name` at `version`,
/// eg:`HELLOLIB_VERSION_GUARD_1_0_1` for `hellolib` at 1.0.1.
///
/// The version token is part of the name,so interface and binary only
/// agree on it when they were built from the same version.
pub fn counter_symbol(base_name: &str, version: VersionNumber) -> String {
    format!(
        "{}_VERSION_GUARD_{}_{}_{}",
        symbol_prefix(base_name),
        version.major,
        version.minor,
        version.patch,
    )
}

/// The name of the header symbol for `base_name`,
/// eg:`HELLOLIB_VERSION_HEADER` for `hellolib`.
pub fn header_symbol(base_name: &str) -> String {
    format!("{}_VERSION_HEADER", symbol_prefix(base_name))
}

fn symbol_prefix(base_name: &str) -> String {
    base_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////

/// A resolved reference to the counter symbol of a loaded library.
///
/// Constructing one performs the entire detection mechanism:
/// the expected symbol name is computed from the version the interface
/// was compiled with,and resolved in the binary.A binary built from a
/// different version does not define that name,and construction fails
/// with [`LibraryError::IncompatibleVersionNumber`].
///
/// Construction also increments the counter by exactly one.
pub struct VersionGuard {
    counter: &'static GuardCounter,
}

impl VersionGuard {
    /// Mounts the guard for `L` over `library`.
    ///
    /// # Errors
    ///
    /// - [`LibraryError::GetSymbolError`]:the header symbol is absent,
    ///     the binary does not follow the guard convention at all.
    ///
    /// - [`LibraryError::InvalidMagicNumber`]:the header symbol exists
    ///     but was not exported by this crate's build-script support.
    ///
    /// - [`LibraryError::IncompatibleVersionNumber`]:the counter symbol
    ///     for `L::VERSION_STRINGS` is absent,the binary was built from
    ///     a different version than the interface.
    pub fn mount<L: GuardedLibrary>(library: &'static RawLibrary) -> Result<Self, LibraryError> {
        let expected_version = L::VERSION_STRINGS.parsed()?;

        let header: &'static GuardHeader = {
            let name = header_symbol(L::BASE_NAME);
            let ptr: *const GuardHeader =
                *unsafe { library.get::<*const GuardHeader>(name.as_bytes())? };
            unsafe { &*ptr }
        };

        if !header.is_valid() {
            return Err(LibraryError::InvalidMagicNumber {
                library_name: L::NAME,
                found: header.magic,
            });
        }

        let expected_symbol = counter_symbol(L::BASE_NAME, expected_version);
        let counter: &'static GuardCounter =
            match unsafe { library.get::<*const GuardCounter>(expected_symbol.as_bytes()) } {
                Ok(sym) => {
                    let ptr: *const GuardCounter = *sym;
                    unsafe { &*ptr }
                }
                Err(_) => {
                    return Err(LibraryError::IncompatibleVersionNumber {
                        library_name: L::NAME,
                        expected_symbol,
                        expected_version,
                        actual_version: header.version,
                    });
                }
            };

        Ok(Self::over_counter(counter))
    }

    /// Constructs a guard over an already-resolved counter,
    /// incrementing it by one.
    ///
    /// `mount` uses this after resolving the symbol;it is also the way
    /// to instantiate a guard in the same binary that defines the
    /// counter.
    pub fn over_counter(counter: &'static GuardCounter) -> Self {
        counter.increment();
        Self { counter }
    }

    /// The current value of the guarded counter.
    pub fn count(&self) -> u32 {
        self.counter.get()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use crate::version::VersionStrings;

    fn version(s: &'static str) -> VersionNumber {
        VersionStrings::new(s).parsed().unwrap()
    }

    #[test]
    fn counter_symbol_embeds_the_version_token() {
        assert_eq!(
            counter_symbol("hellolib", version("1.0.1")),
            "HELLOLIB_VERSION_GUARD_1_0_1",
        );
        assert_eq!(
            counter_symbol("text-operations", version("0.10.2")),
            "TEXT_OPERATIONS_VERSION_GUARD_0_10_2",
        );
    }

    #[test]
    fn differing_tokens_give_differing_symbols() {
        let a = counter_symbol("hellolib", version("1.0.1"));
        let b = counter_symbol("hellolib", version("1.0.2"));
        assert_ne!(a, b);
    }

    #[test]
    fn header_symbol_is_version_independent() {
        assert_eq!(header_symbol("hellolib"), "HELLOLIB_VERSION_HEADER");
    }

    #[test]
    fn header_magic() {
        assert!(GuardHeader::new(version("1.0.1")).is_valid());
        let corrupted = GuardHeader {
            magic: 0,
            version: version("1.0.1"),
        };
        assert!(!corrupted.is_valid());
    }

    #[test]
    fn unguarded_counter_stays_at_zero() {
        static COUNTER: GuardCounter = GuardCounter::new();
        assert_eq!(COUNTER.get(), 0);
    }

    #[test]
    fn each_guard_increments_the_counter_once() {
        static COUNTER: GuardCounter = GuardCounter::new();

        let first = VersionGuard::over_counter(&COUNTER);
        assert_eq!(first.count(), 1);

        let second = VersionGuard::over_counter(&COUNTER);
        assert_eq!(first.count(), 2);
        assert_eq!(second.count(), 2);
        assert_eq!(COUNTER.get(), 2);
    }
}
