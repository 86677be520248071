//! Fast Fourier Transform support for the FFT convolution path.
//!
//! A [`FftPlanner`] caches per-stage twiddle tables keyed by butterfly size
//! so repeated transforms of the same length reuse them. [`ScalarFftImpl`]
//! is an iterative radix-2 Cooley-Tukey implementation restricted to
//! power-of-two lengths; the convolution layer always zero-pads to a power
//! of two before calling in, so no Bluestein fallback is carried. Real
//! input is handled by [`ScalarFftImpl::rfft`]/[`ScalarFftImpl::irfft`],
//! which expose the packed half spectrum of `n/2 + 1` bins.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    EmptyInput,
    NonPowerOfTwo,
    MismatchedLengths,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "empty input"),
            FftError::NonPowerOfTwo => write!(f, "length is not a power of two"),
            FftError::MismatchedLengths => write!(f, "input and output lengths disagree"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[derive(Debug)]
pub struct FftPlanner<T: Float> {
    /// Per-stage twiddle tables. The entry for butterfly size `len` holds
    /// `len/2` factors `exp(-2πi k / len)`, `k = 0..len/2`, stored
    /// contiguously so stages load them without striding.
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Twiddle table for stage size `n`, computed once by the recurrence
    /// `w_{k+1} = w_k * exp(-2πi/n)` and shared thereafter.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if !self.cache.contains_key(&n) {
            let half = n / 2;
            let angle = -T::from_f32(2.0) * T::pi() / T::from_f32(n as f32);
            let (sin_step, cos_step) = angle.sin_cos();

            let mut table: Vec<Complex<T>> = Vec::with_capacity(half);
            let mut w_re = T::one();
            let mut w_im = T::zero();
            for _ in 0..half {
                table.push(Complex::new(w_re, w_im));
                let tmp = w_re;
                w_re = w_re.mul_add(cos_step, -(w_im * sin_step));
                w_im = w_im.mul_add(cos_step, tmp * sin_step);
            }
            self.cache.insert(n, Arc::from(table));
        }
        Arc::clone(self.cache.get(&n).unwrap())
    }
}

#[derive(Debug)]
pub struct ScalarFftImpl<T: Float> {
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for ScalarFftImpl<T> {
    fn default() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }
}

impl<T: Float> ScalarFftImpl<T> {
    /// In-place forward transform. Power-of-two lengths only.
    pub fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if !n.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo);
        }
        if n == 1 {
            return Ok(());
        }

        bit_reverse_permute(input);

        let mut len = 2;
        while len <= n {
            let twiddles = self.planner.borrow_mut().get_twiddles(len);
            let half = len / 2;
            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let u = input[start + k];
                    let v = input[start + k + half] * twiddles[k];
                    input[start + k] = u + v;
                    input[start + k + half] = u - v;
                }
            }
            len <<= 1;
        }
        Ok(())
    }

    /// In-place inverse transform with `1/n` normalization.
    pub fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        for c in input.iter_mut() {
            *c = c.conj();
        }
        self.fft(input)?;
        let scale = T::one() / T::from_usize(n).ok_or(FftError::MismatchedLengths)?;
        for c in input.iter_mut() {
            *c = Complex::new(c.re * scale, -(c.im * scale));
        }
        Ok(())
    }

    /// Forward transform of real input into the packed half spectrum.
    /// `output` must hold `input.len()/2 + 1` bins.
    pub fn rfft(&self, input: &[T], output: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if !n.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo);
        }
        if output.len() != n / 2 + 1 {
            return Err(FftError::MismatchedLengths);
        }
        let mut buf: Vec<Complex<T>> = input
            .iter()
            .map(|&x| Complex::new(x, T::zero()))
            .collect();
        self.fft(&mut buf)?;
        output.copy_from_slice(&buf[..n / 2 + 1]);
        Ok(())
    }

    /// Inverse of [`ScalarFftImpl::rfft`]: expands the half spectrum by
    /// Hermitian symmetry and keeps the real part. `output.len()` is the
    /// transform length and must be a power of two.
    pub fn irfft(&self, spectrum: &[Complex<T>], output: &mut [T]) -> Result<(), FftError> {
        let n = output.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if !n.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo);
        }
        if spectrum.len() != n / 2 + 1 {
            return Err(FftError::MismatchedLengths);
        }
        let mut buf: Vec<Complex<T>> = vec![Complex::zero(); n];
        buf[..n / 2 + 1].copy_from_slice(spectrum);
        for k in 1..n / 2 {
            buf[n - k] = spectrum[k].conj();
        }
        self.ifft(&mut buf)?;
        for (o, c) in output.iter_mut().zip(buf.iter()) {
            *o = c.re;
        }
        Ok(())
    }
}

fn bit_reverse_permute<T: Float>(data: &mut [Complex<T>]) {
    let n = data.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} vs {b}");
    }

    #[test]
    fn rejects_bad_lengths() {
        let fft = ScalarFftImpl::<f64>::default();
        let mut empty: [Complex64; 0] = [];
        assert_eq!(fft.fft(&mut empty), Err(FftError::EmptyInput));
        let mut three = [Complex64::zero(); 3];
        assert_eq!(fft.fft(&mut three), Err(FftError::NonPowerOfTwo));
    }

    #[test]
    fn impulse_transforms_flat() {
        let fft = ScalarFftImpl::<f64>::default();
        let mut buf = [Complex64::zero(); 8];
        buf[0] = Complex64::new(1.0, 0.0);
        fft.fft(&mut buf).unwrap();
        for c in buf {
            assert_close(c.re, 1.0, 1e-12);
            assert_close(c.im, 0.0, 1e-12);
        }
    }

    #[test]
    fn fft_ifft_round_trip() {
        let fft = ScalarFftImpl::<f64>::default();
        let orig: Vec<Complex64> = (0..64)
            .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 0.11).cos()))
            .collect();
        let mut buf = orig.clone();
        fft.fft(&mut buf).unwrap();
        fft.ifft(&mut buf).unwrap();
        for (a, b) in buf.iter().zip(orig.iter()) {
            assert_close(a.re, b.re, 1e-10);
            assert_close(a.im, b.im, 1e-10);
        }
    }

    #[test]
    fn rfft_matches_complex_fft() {
        let fft = ScalarFftImpl::<f64>::default();
        let sig: Vec<f64> = (0..32).map(|i| (i as f64 * 0.73).sin()).collect();
        let mut half = vec![Complex64::zero(); 17];
        fft.rfft(&sig, &mut half).unwrap();
        let mut full: Vec<Complex64> = sig.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        fft.fft(&mut full).unwrap();
        for (a, b) in half.iter().zip(full.iter()) {
            assert_close(a.re, b.re, 1e-10);
            assert_close(a.im, b.im, 1e-10);
        }
        let mut back = vec![0.0; 32];
        fft.irfft(&half, &mut back).unwrap();
        for (a, b) in back.iter().zip(sig.iter()) {
            assert_close(*a, *b, 1e-10);
        }
    }
}
