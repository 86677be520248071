//! # mallat - discrete wavelet transforms for Rust
//!
//! One- and two-dimensional DWT, SWT and MODWT with periodic and
//! symmetric boundary handling, direct or FFT-based convolution, and a
//! registry of standard filter banks (Haar/Daubechies, Symlets, Coiflets,
//! FIR Meyer, biorthogonal and reverse-biorthogonal splines).
//!
//! All transforms share the same shape: build a [`Wavelet`] by name, bind
//! it to a signal length and decomposition depth in a [`WaveletTransform`]
//! (or [`WaveletTransform2D`]), run `forward`, inspect the flat
//! coefficient buffer through the band accessors, and call `inverse` to
//! reconstruct. Configuration problems surface as [`WaveletError`] values,
//! never as process exits.
//!
//! ```
//! use mallat::{TransformKind, Wavelet, WaveletTransform};
//!
//! let signal: Vec<f64> = (0..256).map(|i| (i as f64 * 0.1).sin()).collect();
//! let wave = Wavelet::new("db4")?;
//! let mut wt = WaveletTransform::new(wave, TransformKind::Dwt, signal.len(), 3)?;
//! wt.forward(&signal)?;
//! let detail = wt.detail(1)?;
//! assert_eq!(detail.len(), 128);
//! let rec = wt.inverse()?;
//! assert!((rec[10] - signal[10]).abs() < 1e-10);
//! # Ok::<(), mallat::WaveletError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library integration (`std::error::Error`)
//! - `parallel`: rayon-parallel row filtering in the 2-D engine
//! - `verbose-logging`: per-pass tracing through the `log` facade
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
#![allow(clippy::needless_range_loop)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Boundary extensions and FFT-based linear convolution.
pub mod convolve;

/// Radix-2 FFT with a twiddle-caching planner, used by the FFT
/// convolution path.
pub mod fft;

mod filters;

mod kernels;

/// Coefficient buffer layouts and decomposition depth bounds.
pub mod layout;

/// Float abstraction and complex arithmetic for the FFT.
pub mod num;

/// One-dimensional DWT, SWT and MODWT.
pub mod transform;

/// Two-dimensional separable transforms over row-major images.
pub mod transform2d;

/// Filter bank construction and the crate error type.
pub mod wavelet;

pub use layout::{max_levels, Subband};
pub use transform::{ConvolutionMethod, SignalExtension, TransformKind, WaveletTransform};
pub use transform2d::{Subband2d, WaveletTransform2D};
pub use wavelet::{Wavelet, WaveletError};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn crate_level_round_trip() {
        let signal: Vec<f64> = (0..128).map(|i| (i as f64 * 0.21).sin()).collect();
        let wave = Wavelet::new("sym4").unwrap();
        let mut wt = WaveletTransform::new(wave, TransformKind::Dwt, 128, 3).unwrap();
        wt.forward(&signal).unwrap();
        let rec = wt.inverse().unwrap();
        let err = rec
            .iter()
            .zip(signal.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(err < 1e-10, "err={err}");
    }

    #[cfg(feature = "internal-tests")]
    mod random {
        use super::super::*;
        use alloc::vec::Vec;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        #[test]
        fn stationary_round_trip_random_signal() {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let signal: Vec<f64> = (0..256).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let wave = Wavelet::new("db2").unwrap();
            let mut wt = WaveletTransform::new(wave, TransformKind::Swt, 256, 3).unwrap();
            wt.forward(&signal).unwrap();
            let rec = wt.inverse().unwrap();
            let err = rec
                .iter()
                .zip(signal.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            assert!(err < 1e-8, "err={err}");
        }
    }
}
