//! Filter bank construction and the crate-wide error type.
//!
//! A [`Wavelet`] holds the four analysis/synthesis filters of a named
//! family. Orthogonal banks are derived from a stored reconstruction
//! low-pass `c` by quadrature mirror relations: `lpd = reverse(c)`,
//! `hpd = qmf_wrev(c)`, `lpr = c`, `hpr = qmf_even(c)`. Biorthogonal banks
//! pair a primal low-pass with a dual low-pass; the `rbior*` names swap
//! the two roles.

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::fft::FftError;
use crate::filters::{self, FilterSpec};

/// Errors reported by transform configuration and execution. Invalid
/// requests never terminate the process; they surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveletError {
    /// The name does not resolve to a filter bank in the registry.
    UnknownWavelet(String),
    /// A transform/extension/method selector string did not parse.
    UnknownSelector(String),
    /// MODWT is defined for orthogonal banks only.
    RequiresOrthogonal(String),
    /// Requested decomposition depth exceeds what the signal supports.
    InvalidLevels { requested: usize, max: usize },
    /// SWT needs the signal length divisible by `2^levels`.
    SwtLength { len: usize, levels: usize },
    /// The extension mode is not valid for this transform kind.
    UnsupportedExtension,
    /// The convolution method is not valid for this transform kind.
    UnsupportedMethod,
    /// Signal length differs from the length the transform was built for.
    MismatchedLengths,
    EmptyInput,
    /// Subband accessor asked for a level or band outside the layout.
    BadSubband,
    Fft(FftError),
}

impl core::fmt::Display for WaveletError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WaveletError::UnknownWavelet(name) => write!(f, "unknown wavelet `{name}`"),
            WaveletError::UnknownSelector(s) => write!(f, "unknown selector `{s}`"),
            WaveletError::RequiresOrthogonal(name) => {
                write!(f, "`{name}` is not orthogonal; modwt needs an orthogonal bank")
            }
            WaveletError::InvalidLevels { requested, max } => {
                write!(f, "requested {requested} levels, signal supports {max}")
            }
            WaveletError::SwtLength { len, levels } => {
                write!(f, "swt needs length {len} divisible by 2^{levels}")
            }
            WaveletError::UnsupportedExtension => {
                write!(f, "extension mode not valid for this transform")
            }
            WaveletError::UnsupportedMethod => {
                write!(f, "convolution method not valid for this transform")
            }
            WaveletError::MismatchedLengths => write!(f, "signal length mismatch"),
            WaveletError::EmptyInput => write!(f, "empty input"),
            WaveletError::BadSubband => write!(f, "no such subband"),
            WaveletError::Fft(e) => write!(f, "fft: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaveletError {}

impl From<FftError> for WaveletError {
    fn from(e: FftError) -> Self {
        WaveletError::Fft(e)
    }
}

/// Alternating-sign time reversal: `out[k] = f[n-1-k] * (-1)^k`.
fn qmf_even(f: &[f64]) -> Vec<f64> {
    let n = f.len();
    (0..n)
        .map(|k| {
            let v = f[n - 1 - k];
            if k % 2 == 0 {
                v
            } else {
                -v
            }
        })
        .collect()
}

/// [`qmf_even`] followed by reversal.
fn qmf_wrev(f: &[f64]) -> Vec<f64> {
    let mut out = qmf_even(f);
    out.reverse();
    out
}

fn reversed(f: &[f64]) -> Vec<f64> {
    let mut out = f.to_vec();
    out.reverse();
    out
}

/// A named four-filter bank, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelet {
    name: String,
    orthogonal: bool,
    lpd: Vec<f64>,
    hpd: Vec<f64>,
    lpr: Vec<f64>,
    hpr: Vec<f64>,
}

impl Wavelet {
    /// Builds the bank for a registry name such as `"db4"`, `"sym6"`,
    /// `"coif1"`, `"meyer"`, `"bior3.5"` or `"rbior2.4"`. Unknown names
    /// fail with [`WaveletError::UnknownWavelet`].
    pub fn new(name: &str) -> Result<Self, WaveletError> {
        let spec = filters::lookup(name)
            .ok_or_else(|| WaveletError::UnknownWavelet(name.to_string()))?;
        Ok(match spec {
            FilterSpec::Orthogonal(c) => Self {
                name: name.to_string(),
                orthogonal: true,
                lpd: reversed(c),
                hpd: qmf_wrev(c),
                lpr: c.to_vec(),
                hpr: qmf_even(c),
            },
            FilterSpec::Biorthogonal {
                h,
                hm,
                len,
                reverse,
            } => {
                // The padded primal table centers the live taps.
                let off = (h.len() - len) / 2;
                let h = &h[off..off + len];
                let (primal, dual) = if reverse { (hm, h) } else { (h, hm) };
                Self {
                    name: name.to_string(),
                    orthogonal: false,
                    lpd: reversed(dual),
                    hpd: qmf_wrev(primal),
                    lpr: primal.to_vec(),
                    hpr: qmf_even(dual),
                }
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the orthogonal families (haar/db, sym, coif, meyer).
    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// Filter length, identical for all four filters.
    pub fn filt_len(&self) -> usize {
        self.lpd.len()
    }

    /// Decomposition low-pass.
    pub fn lpd(&self) -> &[f64] {
        &self.lpd
    }

    /// Decomposition high-pass.
    pub fn hpd(&self) -> &[f64] {
        &self.hpd
    }

    /// Reconstruction low-pass.
    pub fn lpr(&self) -> &[f64] {
        &self.lpr
    }

    /// Reconstruction high-pass.
    pub fn hpr(&self) -> &[f64] {
        &self.hpr
    }

    /// Concatenated `[lpd/√2 ‖ hpd/√2]` filter pair used by the MODWT
    /// kernels.
    pub(crate) fn modwt_filter(&self) -> Vec<f64> {
        let s = core::f64::consts::SQRT_2;
        self.lpd
            .iter()
            .chain(self.hpd.iter())
            .map(|&v| v / s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQRT2: f64 = core::f64::consts::SQRT_2;

    #[test]
    fn db4_bank_is_consistent() {
        let w = Wavelet::new("db4").unwrap();
        assert_eq!(w.filt_len(), 8);
        assert!(w.orthogonal());
        let sum: f64 = w.lpr().iter().sum();
        assert!((sum - SQRT2).abs() < 1e-12);
        // decomposition low-pass is the reversed reconstruction low-pass
        for k in 0..8 {
            assert_eq!(w.lpd()[k], w.lpr()[7 - k]);
        }
        // high-pass taps alternate sign against the low-pass
        for k in 0..8 {
            let expect = if k % 2 == 0 {
                w.lpr()[7 - k]
            } else {
                -w.lpr()[7 - k]
            };
            assert_eq!(w.hpr()[k], expect);
        }
    }

    #[test]
    fn haar_aliases_db1() {
        let a = Wavelet::new("haar").unwrap();
        let b = Wavelet::new("db1").unwrap();
        assert_eq!(a.lpd(), b.lpd());
        assert_eq!(a.hpr(), b.hpr());
    }

    #[test]
    fn orthogonal_banks_satisfy_perfect_reconstruction() {
        // sum over k of lpd[k] lpr[k] + hpd[k] hpr[k] equals 2 for the
        // zero-lag term of the PR condition
        for name in ["db2", "db7", "sym5", "coif2"] {
            let w = Wavelet::new(name).unwrap();
            let dot: f64 = (0..w.filt_len())
                .map(|k| {
                    let r = w.filt_len() - 1 - k;
                    w.lpd()[r] * w.lpr()[k] + w.hpd()[r] * w.hpr()[k]
                })
                .sum();
            assert!((dot - 2.0).abs() < 1e-10, "{name}: {dot}");
        }
    }

    #[test]
    fn bior_banks_have_equal_filter_lengths() {
        for name in ["bior1.1", "bior3.5", "bior6.8", "rbior4.4"] {
            let w = Wavelet::new(name).unwrap();
            assert!(!w.orthogonal());
            assert_eq!(w.lpd().len(), w.hpd().len());
            assert_eq!(w.lpr().len(), w.hpr().len());
            assert_eq!(w.lpd().len(), w.lpr().len());
        }
    }

    #[test]
    fn rbior_swaps_the_bior_bank() {
        let f = Wavelet::new("bior2.4").unwrap();
        let r = Wavelet::new("rbior2.4").unwrap();
        // primal and dual trade places between analysis and synthesis
        let f_lpd_rev: Vec<f64> = f.lpd().iter().rev().copied().collect();
        assert_eq!(r.lpr(), f_lpd_rev.as_slice());
    }

    #[test]
    fn unknown_names_error() {
        match Wavelet::new("db99") {
            Err(WaveletError::UnknownWavelet(name)) => assert_eq!(name, "db99"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn modwt_filter_is_scaled_concatenation() {
        let w = Wavelet::new("db2").unwrap();
        let f = w.modwt_filter();
        assert_eq!(f.len(), 8);
        assert!((f[0] - w.lpd()[0] / SQRT2).abs() < 1e-15);
        assert!((f[4] - w.hpd()[0] / SQRT2).abs() < 1e-15);
    }
}
