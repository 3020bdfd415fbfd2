use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type for dynamic library operations.
pub type Result<T> = std::result::Result<T, DlError>;

/// Platform family tag embedded in loader diagnostics.
#[cfg(unix)]
pub(crate) const PLATFORM: &str = "posix";
#[cfg(windows)]
pub(crate) const PLATFORM: &str = "windows";

/// Loader operations that can fail.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DlOp {
    /// Mapping a library into the process.
    Open,
    /// Resolving an exported symbol.
    Resolve,
    /// Unloading a library.
    Close,
}

impl DlOp {
    fn as_str(self) -> &'static str {
        match self {
            DlOp::Open => "dl_open",
            DlOp::Resolve => "dl_get_symbol",
            DlOp::Close => "dl_close",
        }
    }
}

impl Display for DlOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors of the dynamic library api.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum DlError {
    /// The library path does not name a readable file.
    ///
    /// Reported before the platform loader is invoked, so a mistyped path
    /// produces the path instead of an opaque loader diagnostic.
    FileNotFound(PathBuf),
    /// The platform loader reported a failure.
    Loader {
        /// Operation that failed.
        op: DlOp,
        /// Diagnostic reported by the platform loader.
        detail: String,
    },
}

impl DlError {
    pub(crate) fn loader(op: DlOp, error: libloading::Error) -> Self {
        DlError::Loader {
            op,
            detail: error.to_string(),
        }
    }
}

impl Display for DlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DlError::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            DlError::Loader { op, detail } => {
                write!(f, "[{}] {} failed with: {}", PLATFORM, op, detail)
            }
        }
    }
}

impl std::error::Error for DlError {}

#[cfg(test)]
mod tests {
    use super::{DlError, DlOp, PLATFORM};
    use std::path::PathBuf;

    #[test]
    fn file_not_found_carries_path() {
        let err = DlError::FileNotFound(PathBuf::from("/nonexistent/path.so"));
        assert!(err.to_string().contains("/nonexistent/path.so"));
    }

    #[test]
    fn loader_error_tags_operation_and_platform() {
        let err = DlError::Loader {
            op: DlOp::Resolve,
            detail: String::from("undefined symbol: foo"),
        };
        let msg = err.to_string();
        assert_eq!(
            msg,
            format!("[{}] dl_get_symbol failed with: undefined symbol: foo", PLATFORM)
        );
    }
}
