//! Locates the test kernel artifact built alongside the workspace.
use std::error::Error;
use std::path::PathBuf;

/// Path to the built `test_kernel` cdylib.
///
/// Test binaries live in `target/<profile>/deps`, the cdylib one level up.
pub fn test_kernel_path() -> Result<PathBuf, Box<dyn Error>> {
    let artifact_dir = PathBuf::from(std::env::current_exe()?.parent().unwrap().parent().unwrap());

    let kernel_path = if cfg!(target_os = "windows") {
        artifact_dir.join("test_kernel.dll").canonicalize()?
    } else if cfg!(target_os = "macos") {
        artifact_dir.join("libtest_kernel.dylib").canonicalize()?
    } else {
        artifact_dir.join("libtest_kernel.so").canonicalize()?
    };

    Ok(kernel_path)
}
