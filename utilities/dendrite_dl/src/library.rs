//! Handle to a library mapped into the process.
use crate::error::{DlError, DlOp, Result};
use libloading::{Library, Symbol};
use log::{debug, trace};
use std::fs::File;
use std::path::{Path, PathBuf};

/// An exclusively owned handle to a loaded library.
///
/// A handle is created by [`open`] and stays valid until it is consumed by
/// [`close`] or dropped; both unload the library exactly once. Symbols
/// resolved through [`get`] borrow the handle, so they cannot outlive the
/// mapping.
///
/// The handle keeps no cache of resolved symbols and no registry of loaded
/// libraries. Loader error-state access is serialized by [`libloading`], so
/// handles may be used from multiple threads.
///
/// [`open`]: LibraryHandle::open
/// [`close`]: LibraryHandle::close
/// [`get`]: LibraryHandle::get
#[derive(Debug)]
pub struct LibraryHandle {
    lib: Library,
    path: PathBuf,
}

impl LibraryHandle {
    /// Maps the library at `path` into the process.
    ///
    /// The file must exist and be readable, otherwise
    /// [`DlError::FileNotFound`] is returned without invoking the platform
    /// loader. On POSIX platforms the library is opened with lazy binding,
    /// deferring resolution of its undefined symbols to first use.
    ///
    /// # Errors
    ///
    /// [`DlError::FileNotFound`] if `path` does not name a readable file,
    /// [`DlError::Loader`] if the platform loader rejects the file.
    ///
    /// # Safety
    ///
    /// Loading a library executes its load-time initializers. The caller
    /// must ensure those are sound to run in the current process.
    pub unsafe fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if File::open(path).is_err() {
            return Err(DlError::FileNotFound(path.to_path_buf()));
        }

        trace!("opening library at {}", path.display());
        // SAFETY: guaranteed by the caller.
        let lib = unsafe { open_native(path) }.map_err(|e| DlError::loader(DlOp::Open, e))?;
        debug!("loaded library {}", path.display());

        Ok(Self {
            lib,
            path: path.to_path_buf(),
        })
    }

    /// Path the library was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the exported symbol `symbol` as a value of type `T`.
    ///
    /// A symbol whose value is null is distinguished from a missing symbol
    /// by interrogating the loader's error state, not the returned address.
    /// Resolving the same name repeatedly within one load yields the same
    /// address.
    ///
    /// # Errors
    ///
    /// [`DlError::Loader`] if the library exports no symbol named `symbol`.
    ///
    /// # Safety
    ///
    /// `T` must match the actual type of the exported symbol. No runtime
    /// check is performed; a mismatch is undefined behavior at first use of
    /// the returned value.
    pub unsafe fn get<T>(&self, symbol: &str) -> Result<Symbol<'_, T>> {
        trace!("resolving symbol `{}` in {}", symbol, self.path.display());
        // SAFETY: guaranteed by the caller.
        unsafe { self.lib.get(symbol.as_bytes()) }
            .map_err(|e| DlError::loader(DlOp::Resolve, e))
    }

    /// Unloads the library, consuming the handle.
    ///
    /// Failures reported by the platform loader are surfaced; callers that
    /// want fire-and-forget unloading can drop the handle instead, which
    /// discards them.
    ///
    /// # Errors
    ///
    /// [`DlError::Loader`] if the platform loader reports an unload failure.
    pub fn close(self) -> Result<()> {
        debug!("unloading library {}", self.path.display());
        self.lib
            .close()
            .map_err(|e| DlError::loader(DlOp::Close, e))
    }
}

#[cfg(unix)]
unsafe fn open_native(path: &Path) -> std::result::Result<Library, libloading::Error> {
    use libloading::os::unix;
    // SAFETY: guaranteed by the caller.
    let lib = unsafe { unix::Library::open(Some(path), unix::RTLD_LAZY | unix::RTLD_LOCAL)? };
    Ok(Library::from(lib))
}

#[cfg(windows)]
unsafe fn open_native(path: &Path) -> std::result::Result<Library, libloading::Error> {
    // LoadLibraryExW has no lazy-binding equivalent; default flags apply.
    // SAFETY: guaranteed by the caller.
    unsafe { Library::new(path) }
}

#[cfg(test)]
mod tests {
    use super::LibraryHandle;
    use crate::error::{DlError, DlOp};
    use std::path::Path;

    #[test]
    fn open_missing_file() {
        let missing = Path::new("/nonexistent/path.so");
        let err = unsafe { LibraryHandle::open(missing) }.unwrap_err();
        assert_eq!(err, DlError::FileNotFound(missing.to_path_buf()));
        assert!(err.to_string().contains("/nonexistent/path.so"));
    }

    #[test]
    fn open_invalid_library() {
        let path = std::env::temp_dir().join("dendrite_dl_invalid_library.so");
        std::fs::write(&path, b"not a shared object").unwrap();

        let err = unsafe { LibraryHandle::open(&path) }.unwrap_err();
        match err {
            DlError::Loader { op, ref detail } => {
                assert_eq!(op, DlOp::Open);
                assert!(!detail.is_empty());
            }
            other => panic!("expected loader error, got {:?}", other),
        }

        std::fs::remove_file(&path).unwrap();
    }
}
