use super::*;

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};

use libloading::{Library as LibLoadingLibrary, Symbol as LLSymbol};

/// A handle to any dynamically loaded library,
/// not necessarily ones that export version guard symbols.
pub struct RawLibrary {
    path: PathBuf,
    library: LibLoadingLibrary,
}

impl RawLibrary {
    /// Gets the full path a library would be loaded from,
    /// given a directory(folder).
    pub fn path_in_directory(directory: &Path, base_name: &str) -> PathBuf {
        directory.join(format!("{}{}{}", DLL_PREFIX, base_name, DLL_SUFFIX))
    }

    /// The path this library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dynamic library at the `full_path` path.
    pub fn load_at(full_path: &Path) -> Result<Self, LibraryError> {
        // safety: not my problem if libraries have problematic static initializers
        match unsafe { LibLoadingLibrary::new(full_path) } {
            Ok(library) => Ok(Self {
                path: full_path.to_owned(),
                library,
            }),
            Err(err) => Err(LibraryError::OpenError {
                path: full_path.to_owned(),
                err: Box::new(err),
            }),
        }
    }

    /// Gets access to a static/function declared by the library.
    ///
    /// # Safety
    ///
    /// Passing a `T` of a type different than the compiled library declared is
    /// undefined behavior.
    pub unsafe fn get<T>(&self, symbol_name: &[u8]) -> Result<LLSymbol<'_, T>, LibraryError> {
        match unsafe { self.library.get::<T>(symbol_name) } {
            Ok(symbol) => Ok(symbol),
            Err(err) => {
                let symbol = symbol_name.to_owned();
                Err(LibraryError::GetSymbolError {
                    library: self.path.clone(),
                    symbol,
                    err: Box::new(err),
                })
            }
        }
    }
}
