//! Dynamic library loading utilities of the dendrite engine.
//!
//! The engine can extend itself at runtime with user-supplied mechanism
//! kernels, shipped as shared libraries. This crate is the platform shim the
//! engine's plugin facilities build on: it maps a library file into the
//! process, resolves exported symbols by name and unloads the mapping again.
//! It deliberately stops there; discovery, registration and dispatch of
//! kernels live with the callers.
//!
//! ```no_run
//! use dendrite_dl::LibraryHandle;
//!
//! # fn main() -> dendrite_dl::Result<()> {
//! // SAFETY: loading a library runs its initializers.
//! let lib = unsafe { LibraryHandle::open("mechanisms/libfoo.so")? };
//! // SAFETY: `compute_kernel` is exported with this exact signature.
//! let kernel = unsafe { lib.get::<unsafe extern "C" fn(f64) -> f64>("compute_kernel")? };
//! // SAFETY: the kernel is safe to call with any finite input.
//! let _ = unsafe { kernel(0.5) };
//! lib.close()?;
//! # Ok(())
//! # }
//! ```
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    rustdoc::broken_intra_doc_links
)]

mod error;
mod library;

pub use error::{DlError, DlOp, Result};
pub use library::LibraryHandle;

pub use libloading::Symbol;
