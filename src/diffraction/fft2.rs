//! Shared 2D FFT plumbing for the propagation and convolution kernels.
//!
//! Buffers are square `m×m` complex meshes stored column-major (matching
//! `nalgebra::DMatrix::as_slice`). A 2D transform is two passes of 1D FFTs
//! separated by in-place transposition; `rustfft` leaves both directions
//! unnormalized, so callers rescale by `1/(m·m)` after a forward/inverse
//! round trip.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Frequency of DFT bin `i` for a mesh of physical width `width` [1/m].
pub(crate) fn dft_frequency(i: usize, m: usize, width: f64) -> f64 {
    let k = if i < m.div_ceil(2) {
        i as f64
    } else {
        i as f64 - m as f64
    };
    k / width
}

/// In-place square transpose.
fn transpose(buf: &mut [Complex64], m: usize) {
    for i in 0..m {
        for j in (i + 1)..m {
            buf.swap(i * m + j, j * m + i);
        }
    }
}

/// In-place unnormalized 2D FFT over a square `m×m` buffer.
pub(crate) fn fft_2d(buf: &mut [Complex64], m: usize, inverse: bool) {
    debug_assert_eq!(buf.len(), m * m);
    let mut planner = FftPlanner::new();
    let fft = if inverse {
        planner.plan_fft_inverse(m)
    } else {
        planner.plan_fft_forward(m)
    };
    for line in buf.chunks_exact_mut(m) {
        fft.process(line);
    }
    transpose(buf, m);
    for line in buf.chunks_exact_mut(m) {
        fft.process(line);
    }
    transpose(buf, m);
}
