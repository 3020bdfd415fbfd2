//! Mechanism kernel used by the dynamic loading tests.

/// ABI revision of the exported kernel.
#[no_mangle]
pub static KERNEL_ABI_VERSION: u32 = 1;

/// Affine map with coefficients the tests can verify a call against.
#[no_mangle]
pub extern "C" fn compute_kernel(x: f64) -> f64 {
    2.0 * x + 1.0
}
