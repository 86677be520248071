//! Boundary extensions and linear convolution for the FFT analysis path.
//!
//! The stride kernels in [`crate::kernels`] fold boundary handling into
//! their index arithmetic; the FFT path instead materializes an extended
//! signal, convolves in the frequency domain and slices the decimated
//! taps back out. Both routes produce identical coefficients.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::{FftError, ScalarFftImpl};
use crate::num::Complex64;

/// Periodic extension by `a` samples on both ends. Odd-length signals are
/// periodized first by repeating the final sample once. Returns the
/// extended buffer and the periodized core length (`len` or `len + 1`).
pub fn periodic_extension(signal: &[f64], a: usize) -> (Vec<f64>, usize) {
    let n = signal.len();
    let len2 = n + n % 2;
    let mut out = vec![0.0; 2 * a + len2];
    out[a..a + n].copy_from_slice(signal);
    if n % 2 == 1 {
        out[a + n] = signal[n - 1];
    }
    for i in 0..a {
        out[a - 1 - i] = out[a + len2 - 1 - i];
        out[len2 + a + i] = out[a + i];
    }
    (out, len2)
}

/// Half-sample symmetric extension by `a` samples on both ends: the edge
/// sample is mirrored, so `[1 2 3]` with `a = 2` becomes `[2 1 1 2 3 3 2]`.
pub fn symmetric_extension(signal: &[f64], a: usize) -> Vec<f64> {
    let n = signal.len();
    let mut out = vec![0.0; 2 * a + n];
    out[a..a + n].copy_from_slice(signal);
    for i in 0..a {
        out[a - 1 - i] = out[a + i];
        out[n + a + i] = out[a + n - 1 - i];
    }
    out
}

/// Dyadic upsampling: zeros in the odd slots.
pub(crate) fn upsample_even(x: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; 2 * x.len()];
    for (i, &v) in x.iter().enumerate() {
        out[2 * i] = v;
    }
    out
}

/// Insert `m - 1` zeros between filter taps (à trous dilation).
pub(crate) fn dilate_filter(f: &[f64], m: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * f.len()];
    for (i, &v) in f.iter().enumerate() {
        out[m * i] = v;
    }
    out
}

/// Full linear convolution via zero-padded real FFTs. The planner inside
/// [`ScalarFftImpl`] caches twiddles, so repeated calls at one size plan
/// only once.
#[derive(Debug)]
pub struct FftConvolver {
    fft: ScalarFftImpl<f64>,
}

impl Default for FftConvolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FftConvolver {
    pub fn new() -> Self {
        Self {
            fft: ScalarFftImpl::default(),
        }
    }

    /// `output.len() == a.len() + b.len() - 1`, same taps as the direct sum
    /// `y[k] = Σ a[i] b[k - i]`.
    pub fn convolve(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, FftError> {
        if a.is_empty() || b.is_empty() {
            return Err(FftError::EmptyInput);
        }
        let out_len = a.len() + b.len() - 1;
        let n = out_len.next_power_of_two();
        let bins = n / 2 + 1;

        let mut pa = vec![0.0; n];
        pa[..a.len()].copy_from_slice(a);
        let mut pb = vec![0.0; n];
        pb[..b.len()].copy_from_slice(b);

        let mut sa = vec![Complex64::zero(); bins];
        let mut sb = vec![Complex64::zero(); bins];
        self.fft.rfft(&pa, &mut sa)?;
        self.fft.rfft(&pb, &mut sb)?;
        for (x, y) in sa.iter_mut().zip(sb.iter()) {
            *x = *x * *y;
        }
        let mut out = vec![0.0; n];
        self.fft.irfft(&sa, &mut out)?;
        out.truncate(out_len);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv_direct(a: &[f64], b: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[i + j] += x * y;
            }
        }
        out
    }

    #[test]
    fn periodic_extension_wraps() {
        let (ext, len2) = periodic_extension(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(len2, 4);
        assert_eq!(ext, vec![3.0, 4.0, 1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn periodic_extension_pads_odd_lengths() {
        let (ext, len2) = periodic_extension(&[1.0, 2.0, 3.0], 2);
        assert_eq!(len2, 4);
        assert_eq!(ext, vec![3.0, 3.0, 1.0, 2.0, 3.0, 3.0, 1.0, 2.0]);
    }

    #[test]
    fn symmetric_extension_mirrors_edges() {
        let ext = symmetric_extension(&[1.0, 2.0, 3.0], 2);
        assert_eq!(ext, vec![2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn upsampling_interleaves_zeros() {
        assert_eq!(upsample_even(&[1.0, 2.0]), vec![1.0, 0.0, 2.0, 0.0]);
        assert_eq!(
            dilate_filter(&[1.0, 2.0], 3),
            vec![1.0, 0.0, 0.0, 2.0, 0.0, 0.0]
        );
    }

    #[test]
    fn fft_convolution_matches_direct() {
        let conv = FftConvolver::new();
        let a: Vec<f64> = (0..37).map(|i| (i as f64 * 0.31).sin()).collect();
        let b: Vec<f64> = (0..8).map(|i| (i as f64 * 0.77).cos()).collect();
        let got = conv.convolve(&a, &b).unwrap();
        let want = conv_direct(&a, &b);
        assert_eq!(got.len(), want.len());
        for (x, y) in got.iter().zip(want.iter()) {
            assert!((x - y).abs() < 1e-10, "{x} vs {y}");
        }
    }

    #[test]
    fn empty_operands_are_rejected() {
        let conv = FftConvolver::new();
        assert_eq!(conv.convolve(&[], &[1.0]), Err(FftError::EmptyInput));
    }
}
