//! One-dimensional wavelet transforms.
//!
//! [`WaveletTransform`] binds a filter bank to a fixed signal length and
//! decomposition depth, validates the configuration up front and then
//! runs forward/inverse passes into a flat coefficient buffer laid out as
//! `[cA_J, cD_J, .., cD_1]`. Three transform kinds are supported:
//!
//! * `dwt` — decimating, periodic or symmetric boundary, direct or FFT
//!   convolution;
//! * `swt` — stationary (à trous), length divisible by `2^levels`,
//!   direct (periodic) or FFT (periodic or symmetric) analysis;
//! * `modwt` — maximal overlap, orthogonal banks only, direct (periodic)
//!   or FFT (periodic or symmetric) analysis.
//!
//! Under symmetric extension the stationary transforms reflect the whole
//! signal once up front; every band then carries the doubled length and
//! the inverse truncates back to the original signal.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::convolve::{
    dilate_filter, periodic_extension, symmetric_extension, upsample_even, FftConvolver,
};
use crate::kernels;
use crate::layout::{self, Layout1d, Subband};
use crate::wavelet::{Wavelet, WaveletError};

#[cfg(feature = "verbose-logging")]
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Dwt,
    Swt,
    Modwt,
}

impl core::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            TransformKind::Dwt => "dwt",
            TransformKind::Swt => "swt",
            TransformKind::Modwt => "modwt",
        })
    }
}

impl core::str::FromStr for TransformKind {
    type Err = WaveletError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dwt" => Ok(TransformKind::Dwt),
            "swt" => Ok(TransformKind::Swt),
            "modwt" => Ok(TransformKind::Modwt),
            _ => Err(WaveletError::UnknownSelector(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalExtension {
    Periodic,
    Symmetric,
}

impl core::fmt::Display for SignalExtension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SignalExtension::Periodic => "per",
            SignalExtension::Symmetric => "sym",
        })
    }
}

impl core::str::FromStr for SignalExtension {
    type Err = WaveletError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per" => Ok(SignalExtension::Periodic),
            "sym" => Ok(SignalExtension::Symmetric),
            _ => Err(WaveletError::UnknownSelector(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionMethod {
    Direct,
    Fft,
}

impl core::fmt::Display for ConvolutionMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ConvolutionMethod::Direct => "direct",
            ConvolutionMethod::Fft => "fft",
        })
    }
}

impl core::str::FromStr for ConvolutionMethod {
    type Err = WaveletError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(ConvolutionMethod::Direct),
            "fft" => Ok(ConvolutionMethod::Fft),
            _ => Err(WaveletError::UnknownSelector(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct WaveletTransform {
    wave: Wavelet,
    kind: TransformKind,
    ext: SignalExtension,
    method: ConvolutionMethod,
    siglength: usize,
    levels: usize,
    layout: Layout1d,
    output: Vec<f64>,
    conv: FftConvolver,
}

impl WaveletTransform {
    /// Binds `wave` to a signal of `siglength` samples decomposed
    /// `levels` times. Depth and length constraints are checked here, so
    /// `forward` only ever fails on a length mismatch.
    pub fn new(
        wave: Wavelet,
        kind: TransformKind,
        siglength: usize,
        levels: usize,
    ) -> Result<Self, WaveletError> {
        if siglength == 0 {
            return Err(WaveletError::EmptyInput);
        }
        let max = layout::max_levels(siglength, wave.filt_len());
        if levels == 0 || levels > max {
            return Err(WaveletError::InvalidLevels {
                requested: levels,
                max,
            });
        }
        if kind == TransformKind::Swt && !layout::swt_length_valid(siglength, levels) {
            return Err(WaveletError::SwtLength {
                len: siglength,
                levels,
            });
        }
        if kind == TransformKind::Modwt && !wave.orthogonal() {
            return Err(WaveletError::RequiresOrthogonal(wave.name().to_string()));
        }
        let layout = Layout1d::new(
            siglength,
            levels,
            wave.filt_len(),
            kind,
            SignalExtension::Periodic,
        );
        Ok(Self {
            wave,
            kind,
            ext: SignalExtension::Periodic,
            method: ConvolutionMethod::Direct,
            siglength,
            levels,
            layout,
            output: Vec::new(),
            conv: FftConvolver::new(),
        })
    }

    /// For the decimating transform symmetric extension is always
    /// available. The stationary transforms run symmetric only on the FFT
    /// path, where the signal is reflected to twice its length up front
    /// and every band carries that length.
    pub fn set_extension(&mut self, ext: SignalExtension) -> Result<(), WaveletError> {
        if ext == SignalExtension::Symmetric
            && self.kind != TransformKind::Dwt
            && self.method != ConvolutionMethod::Fft
        {
            return Err(WaveletError::UnsupportedExtension);
        }
        self.ext = ext;
        self.layout = Layout1d::new(
            self.siglength,
            self.levels,
            self.wave.filt_len(),
            self.kind,
            ext,
        );
        self.output.clear();
        Ok(())
    }

    /// Direct kernels handle periodic boundaries only for the stationary
    /// transforms, so switching back to `direct` under `sym` is rejected.
    pub fn set_convolution_method(&mut self, method: ConvolutionMethod) -> Result<(), WaveletError> {
        if method == ConvolutionMethod::Direct
            && self.kind != TransformKind::Dwt
            && self.ext == SignalExtension::Symmetric
        {
            return Err(WaveletError::UnsupportedMethod);
        }
        self.method = method;
        Ok(())
    }

    pub fn wavelet(&self) -> &Wavelet {
        &self.wave
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    pub fn extension(&self) -> SignalExtension {
        self.ext
    }

    pub fn convolution_method(&self) -> ConvolutionMethod {
        self.method
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn signal_length(&self) -> usize {
        self.siglength
    }

    /// Total coefficient count of the flat buffer.
    pub fn outlength(&self) -> usize {
        self.layout.outlength
    }

    /// Band sizes in storage order, approximation first, finest detail
    /// last.
    pub fn lengths(&self) -> &[usize] {
        &self.layout.lengths
    }

    /// The full coefficient buffer, empty before the first `forward`.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Position of `cA_J` inside the flat buffer, available before the
    /// first `forward`. Callers slicing [`output`](Self::output)
    /// themselves use this together with [`detail_band`](Self::detail_band).
    pub fn approx_band(&self) -> Subband {
        self.layout.approx
    }

    /// Position of `cD_level` inside the flat buffer; level 1 is the
    /// finest.
    pub fn detail_band(&self, level: usize) -> Result<Subband, WaveletError> {
        if level == 0 || level > self.levels {
            return Err(WaveletError::BadSubband);
        }
        Ok(self.layout.details[level - 1])
    }

    /// Coarsest approximation band `cA_J`, empty before the first
    /// `forward`.
    pub fn approx(&self) -> &[f64] {
        if self.output.is_empty() {
            return &[];
        }
        let b = self.layout.approx;
        &self.output[b.offset..b.offset + b.size]
    }

    /// Detail band `cD_level`; level 1 is the finest.
    pub fn detail(&self, level: usize) -> Result<&[f64], WaveletError> {
        if level == 0 || level > self.levels || self.output.is_empty() {
            return Err(WaveletError::BadSubband);
        }
        let b = self.layout.details[level - 1];
        Ok(&self.output[b.offset..b.offset + b.size])
    }

    /// One-line description of the configured decomposition.
    pub fn summary(&self) -> String {
        alloc::format!(
            "{} {} levels={} n={} ext={} conv={} outlength={}",
            self.wave.name(),
            self.kind,
            self.levels,
            self.siglength,
            self.ext,
            self.method,
            self.layout.outlength,
        )
    }

    /// Runs the analysis pass, filling the coefficient buffer. The signal
    /// must match the length the transform was built for.
    pub fn forward(&mut self, signal: &[f64]) -> Result<(), WaveletError> {
        if signal.is_empty() {
            return Err(WaveletError::EmptyInput);
        }
        if signal.len() != self.siglength {
            return Err(WaveletError::MismatchedLengths);
        }
        #[cfg(feature = "verbose-logging")]
        debug!("forward {}", self.summary());

        let mut buf = vec![0.0; self.layout.outlength];
        match self.kind {
            TransformKind::Dwt => self.forward_dwt(signal, &mut buf)?,
            TransformKind::Swt => self.forward_stationary(signal, &mut buf, false)?,
            TransformKind::Modwt => self.forward_stationary(signal, &mut buf, true)?,
        }
        self.output = buf;
        Ok(())
    }

    fn forward_dwt(&self, signal: &[f64], buf: &mut [f64]) -> Result<(), WaveletError> {
        let w = &self.wave;
        let lf = w.filt_len();
        let mut cur = signal.to_vec();
        for lev in 1..=self.levels {
            let ni = self.layout.lvl[lev - 1];
            let no = self.layout.lvl[lev];
            let band = self.layout.details[lev - 1];
            let mut ca = vec![0.0; no];
            let cd = &mut buf[band.offset..band.offset + band.size];
            match (self.ext, self.method) {
                (SignalExtension::Periodic, ConvolutionMethod::Direct) => {
                    kernels::dwt_per_stride(&cur, ni, w.lpd(), w.hpd(), &mut ca, no, cd, 1, 1);
                }
                (SignalExtension::Symmetric, ConvolutionMethod::Direct) => {
                    kernels::dwt_sym_stride(&cur, ni, w.lpd(), w.hpd(), &mut ca, no, cd, 1, 1);
                }
                (SignalExtension::Periodic, ConvolutionMethod::Fft) => {
                    let (ext, _) = periodic_extension(&cur, lf / 2);
                    let ya = self.conv.convolve(&ext, w.lpd())?;
                    let yd = self.conv.convolve(&ext, w.hpd())?;
                    for i in 0..no {
                        ca[i] = ya[2 * i + lf];
                        cd[i] = yd[2 * i + lf];
                    }
                }
                (SignalExtension::Symmetric, ConvolutionMethod::Fft) => {
                    let ext = symmetric_extension(&cur, lf - 1);
                    let ya = self.conv.convolve(&ext, w.lpd())?;
                    let yd = self.conv.convolve(&ext, w.hpd())?;
                    for i in 0..no {
                        ca[i] = ya[2 * i + lf];
                        cd[i] = yd[2 * i + lf];
                    }
                }
            }
            cur = ca;
        }
        buf[..self.layout.approx.size].copy_from_slice(&cur);
        Ok(())
    }

    fn forward_stationary(
        &self,
        signal: &[f64],
        buf: &mut [f64],
        maximal_overlap: bool,
    ) -> Result<(), WaveletError> {
        let w = &self.wave;
        let lf = w.filt_len();
        let filt = if maximal_overlap {
            w.modwt_filter()
        } else {
            Vec::new()
        };
        let mut cur = signal.to_vec();
        if self.ext == SignalExtension::Symmetric {
            // whole-signal reflection; the analysis stays periodic over
            // the doubled signal
            cur.extend(signal.iter().rev());
        }
        let n = cur.len();
        let scale = core::f64::consts::SQRT_2;
        let mut m = 1usize;
        for lev in 1..=self.levels {
            if lev > 1 {
                m *= 2;
            }
            let band = self.layout.details[lev - 1];
            let mut ca = vec![0.0; n];
            let cd = &mut buf[band.offset..band.offset + band.size];
            if maximal_overlap {
                match self.method {
                    ConvolutionMethod::Direct => {
                        kernels::modwt_per_stride(m, &cur, &filt, lf, &mut ca, n, cd, 1, 1);
                    }
                    ConvolutionMethod::Fft => {
                        // circular convolution with the dilated half-band
                        // filters, realized as a linear convolution over a
                        // wrapped left extension
                        let a = m * (lf - 1);
                        let mut ext = Vec::with_capacity(n + a);
                        ext.extend_from_slice(&cur[n - a..]);
                        ext.extend_from_slice(&cur);
                        let fl: Vec<f64> =
                            dilate_filter(w.lpd(), m).iter().map(|v| v / scale).collect();
                        let fh: Vec<f64> =
                            dilate_filter(w.hpd(), m).iter().map(|v| v / scale).collect();
                        let ya = self.conv.convolve(&ext, &fl)?;
                        let yd = self.conv.convolve(&ext, &fh)?;
                        for i in 0..n {
                            ca[i] = ya[i + a];
                            cd[i] = yd[i + a];
                        }
                    }
                }
            } else {
                match self.method {
                    ConvolutionMethod::Direct => {
                        kernels::swt_per_stride(m, &cur, n, w.lpd(), w.hpd(), &mut ca, n, cd, 1, 1);
                    }
                    ConvolutionMethod::Fft => {
                        let (ext, _) = periodic_extension(&cur, m * lf / 2);
                        let fl = dilate_filter(w.lpd(), m);
                        let fh = dilate_filter(w.hpd(), m);
                        let ya = self.conv.convolve(&ext, &fl)?;
                        let yd = self.conv.convolve(&ext, &fh)?;
                        for i in 0..n {
                            ca[i] = ya[i + m * lf];
                            cd[i] = yd[i + m * lf];
                        }
                    }
                }
            }
            cur = ca;
        }
        buf[..n].copy_from_slice(&cur);
        Ok(())
    }

    /// Reconstructs the signal from the coefficient buffer. The buffer is
    /// left untouched, so repeated calls return the same result.
    pub fn inverse(&self) -> Result<Vec<f64>, WaveletError> {
        if self.output.is_empty() {
            return Err(WaveletError::EmptyInput);
        }
        #[cfg(feature = "verbose-logging")]
        debug!("inverse {}", self.summary());
        match self.kind {
            TransformKind::Dwt => self.inverse_dwt(),
            TransformKind::Swt => self.inverse_swt(),
            TransformKind::Modwt => self.inverse_modwt(),
        }
    }

    fn inverse_dwt(&self) -> Result<Vec<f64>, WaveletError> {
        let w = &self.wave;
        let lf = w.filt_len();
        let l2 = lf / 2;
        let mut ca = self.output[..self.layout.approx.size].to_vec();
        for lev in (1..=self.levels).rev() {
            let len_ca = self.layout.lvl[lev];
            let target = self.layout.lvl[lev - 1];
            let band = self.layout.details[lev - 1];
            let cd = &self.output[band.offset..band.offset + band.size];
            let mut out = match (self.ext, self.method) {
                (SignalExtension::Periodic, ConvolutionMethod::Direct) => {
                    let mut x = vec![0.0; 2 * (len_ca + l2 - 1)];
                    kernels::idwt_per_stride(&ca, len_ca, cd, w.lpr(), w.hpr(), &mut x, 1, 1);
                    x[l2 - 1..2 * len_ca + l2 - 1].to_vec()
                }
                (SignalExtension::Symmetric, ConvolutionMethod::Direct) => {
                    let mut x = vec![0.0; 2 * len_ca];
                    kernels::idwt_sym_stride(&ca, len_ca, cd, w.lpr(), w.hpr(), &mut x, 1, 1);
                    x[lf - 2..2 * len_ca].to_vec()
                }
                (SignalExtension::Periodic, ConvolutionMethod::Fft) => {
                    let (ua, _) = periodic_extension(&upsample_even(&ca), l2);
                    let (ud, _) = periodic_extension(&upsample_even(cd), l2);
                    let ya = self.conv.convolve(&ua, w.lpr())?;
                    let yd = self.conv.convolve(&ud, w.hpr())?;
                    (0..2 * len_ca).map(|r| ya[r + lf - 1] + yd[r + lf - 1]).collect()
                }
                (SignalExtension::Symmetric, ConvolutionMethod::Fft) => {
                    let ya = self.conv.convolve(&upsample_even(&ca), w.lpr())?;
                    let yd = self.conv.convolve(&upsample_even(cd), w.hpr())?;
                    (lf - 2..2 * len_ca).map(|r| ya[r] + yd[r]).collect()
                }
            };
            out.truncate(target);
            ca = out;
        }
        Ok(ca)
    }

    /// Shift-and-average stationary inverse: each dyadic phase is
    /// synthesized twice, once from the even subsequence and once from the
    /// odd one rotated back into place, and the two estimates are
    /// averaged.
    fn inverse_swt(&self) -> Result<Vec<f64>, WaveletError> {
        let w = &self.wave;
        let lf = w.filt_len();
        let l2 = lf / 2;
        let n = self.layout.approx.size;
        let mut out = self.output[..n].to_vec();
        for it in (1..=self.levels).rev() {
            let doff = self.layout.details[it - 1].offset;
            let m = 1usize << (it - 1);
            for phase in 0..m {
                let ln = n / (2 * m);
                let gather = |base: &[f64], start: usize| -> Vec<f64> {
                    (0..ln).map(|k| base[start + k * 2 * m]).collect()
                };
                let ca1 = gather(&out, phase);
                let cd1 = gather(&self.output[doff..], phase);
                let ca2 = gather(&out, phase + m);
                let cd2 = gather(&self.output[doff..], phase + m);

                let mut x1 = vec![0.0; 2 * (ln + l2 - 1)];
                kernels::idwt_per_stride(&ca1, ln, &cd1, w.lpr(), w.hpr(), &mut x1, 1, 1);
                let o1 = &x1[l2 - 1..2 * ln + l2 - 1];
                let mut x2 = vec![0.0; 2 * (ln + l2 - 1)];
                kernels::idwt_per_stride(&ca2, ln, &cd2, w.lpr(), w.hpr(), &mut x2, 1, 1);
                let mut o2 = x2[l2 - 1..2 * ln + l2 - 1].to_vec();
                o2.rotate_right(1);

                for k in 0..2 * ln {
                    out[phase + k * m] = 0.5 * (o1[k] + o2[k]);
                }
            }
        }
        out.truncate(self.siglength);
        Ok(out)
    }

    fn inverse_modwt(&self) -> Result<Vec<f64>, WaveletError> {
        let w = &self.wave;
        let lf = w.filt_len();
        let n = self.layout.approx.size;
        let filt = w.modwt_filter();
        let mut ca = self.output[..n].to_vec();
        let mut m = 1usize << (self.levels - 1);
        for it in 0..self.levels {
            if it > 0 {
                m /= 2;
            }
            let level = self.levels - it;
            let band = self.layout.details[level - 1];
            let cd = &self.output[band.offset..band.offset + band.size];
            let mut x = vec![0.0; n];
            kernels::imodwt_per_stride(m, &ca, n, cd, &filt, lf, &mut x, 1, 1);
            ca = x;
        }
        ca.truncate(self.siglength);
        Ok(ca)
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod coverage_tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_dwt_roundtrip(
            n in 32usize..300,
            ref signal in proptest::collection::vec(-1000.0f64..1000.0, 300),
        ) {
            let sig: Vec<f64> = signal.iter().take(n).cloned().collect();
            let wave = Wavelet::new("db3").unwrap();
            let levels = layout::max_levels(n, wave.filt_len()).min(3);
            let mut wt = WaveletTransform::new(wave, TransformKind::Dwt, n, levels).unwrap();
            wt.forward(&sig).unwrap();
            let rec = wt.inverse().unwrap();
            for (a, b) in rec.iter().zip(sig.iter()) {
                prop_assert!((a - b).abs() < 1e-6, "{a} vs {b}");
            }
        }

        #[test]
        fn prop_modwt_roundtrip(
            n in 16usize..200,
            ref signal in proptest::collection::vec(-1000.0f64..1000.0, 200),
        ) {
            let sig: Vec<f64> = signal.iter().take(n).cloned().collect();
            let wave = Wavelet::new("db2").unwrap();
            let levels = layout::max_levels(n, wave.filt_len()).min(2);
            prop_assume!(levels >= 1);
            let mut wt = WaveletTransform::new(wave, TransformKind::Modwt, n, levels).unwrap();
            wt.forward(&sig).unwrap();
            let rec = wt.inverse().unwrap();
            for (a, b) in rec.iter().zip(sig.iter()) {
                prop_assert!((a - b).abs() < 1e-6, "{a} vs {b}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.61).sin() + 0.1 * i as f64).collect()
    }

    fn max_err(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn rejects_excess_levels() {
        let w = Wavelet::new("db4").unwrap();
        match WaveletTransform::new(w, TransformKind::Dwt, 100, 5) {
            Err(WaveletError::InvalidLevels { requested, max }) => {
                assert_eq!(requested, 5);
                assert_eq!(max, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_swt_on_indivisible_length() {
        let w = Wavelet::new("db2").unwrap();
        match WaveletTransform::new(w, TransformKind::Swt, 100, 3) {
            Err(WaveletError::SwtLength { len, levels }) => {
                assert_eq!(len, 100);
                assert_eq!(levels, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn stationary_symmetric_needs_fft() {
        for kind in [TransformKind::Swt, TransformKind::Modwt] {
            let w = Wavelet::new("db2").unwrap();
            let mut t = WaveletTransform::new(w, kind, 64, 2).unwrap();
            // direct kernels are periodic only
            assert_eq!(
                t.set_extension(SignalExtension::Symmetric),
                Err(WaveletError::UnsupportedExtension)
            );
            t.set_convolution_method(ConvolutionMethod::Fft).unwrap();
            t.set_extension(SignalExtension::Symmetric).unwrap();
            // and switching back to direct under sym is rejected too
            assert_eq!(
                t.set_convolution_method(ConvolutionMethod::Direct),
                Err(WaveletError::UnsupportedMethod)
            );
        }
    }

    #[test]
    fn symmetric_stationary_bands_carry_doubled_length() {
        let w = Wavelet::new("db4").unwrap();
        let mut t = WaveletTransform::new(w, TransformKind::Modwt, 150, 2).unwrap();
        t.set_convolution_method(ConvolutionMethod::Fft).unwrap();
        t.set_extension(SignalExtension::Symmetric).unwrap();
        assert_eq!(t.lengths(), &[300, 300, 300]);
        assert_eq!(t.outlength(), 900);
    }

    #[test]
    fn rejects_modwt_with_biorthogonal_bank() {
        let w = Wavelet::new("bior3.5").unwrap();
        match WaveletTransform::new(w, TransformKind::Modwt, 256, 2) {
            Err(WaveletError::RequiresOrthogonal(name)) => assert_eq!(name, "bior3.5"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn forward_checks_signal_length() {
        let w = Wavelet::new("haar").unwrap();
        let mut t = WaveletTransform::new(w, TransformKind::Dwt, 16, 2).unwrap();
        assert_eq!(t.forward(&[1.0; 15]), Err(WaveletError::MismatchedLengths));
        assert_eq!(t.forward(&[]), Err(WaveletError::EmptyInput));
    }

    #[test]
    fn haar_round_trip() {
        let sig = ramp(16);
        let w = Wavelet::new("haar").unwrap();
        let mut t = WaveletTransform::new(w, TransformKind::Dwt, 16, 3).unwrap();
        t.forward(&sig).unwrap();
        assert_eq!(t.outlength(), 2 + 2 + 4 + 8);
        assert_eq!(t.approx().len(), 2);
        assert_eq!(t.detail(1).unwrap().len(), 8);
        assert_eq!(t.detail(3).unwrap().len(), 2);
        assert!(t.detail(4).is_err());
        let rec = t.inverse().unwrap();
        assert!(max_err(&rec, &sig) < 1e-10);
    }

    #[test]
    fn inverse_is_repeatable() {
        let sig = ramp(64);
        let w = Wavelet::new("db3").unwrap();
        let mut t = WaveletTransform::new(w, TransformKind::Dwt, 64, 2).unwrap();
        t.forward(&sig).unwrap();
        let first = t.inverse().unwrap();
        let second = t.inverse().unwrap();
        assert_eq!(first, second);
        assert!(max_err(&first, &sig) < 1e-10);
    }

    #[test]
    fn band_descriptors_index_the_flat_buffer() {
        let sig = ramp(64);
        let w = Wavelet::new("db3").unwrap();
        let mut t = WaveletTransform::new(w, TransformKind::Dwt, 64, 3).unwrap();
        t.forward(&sig).unwrap();
        let a = t.approx_band();
        assert_eq!(a.offset, 0);
        assert_eq!(&t.output()[a.offset..a.offset + a.size], t.approx());
        for level in 1..=3 {
            let b = t.detail_band(level).unwrap();
            assert_eq!(
                &t.output()[b.offset..b.offset + b.size],
                t.detail(level).unwrap()
            );
        }
        assert_eq!(t.detail_band(0), Err(WaveletError::BadSubband));
        assert_eq!(t.detail_band(4), Err(WaveletError::BadSubband));
    }

    #[test]
    fn transform_is_debug_formattable() {
        let w = Wavelet::new("db2").unwrap();
        let t = WaveletTransform::new(w, TransformKind::Dwt, 32, 2).unwrap();
        let s = alloc::format!("{t:?}");
        assert!(s.contains("WaveletTransform"));
        assert!(s.contains("siglength: 32"));
    }

    #[test]
    fn inverse_before_forward_errors() {
        let w = Wavelet::new("db2").unwrap();
        let t = WaveletTransform::new(w, TransformKind::Dwt, 32, 2).unwrap();
        assert_eq!(t.inverse(), Err(WaveletError::EmptyInput));
    }

    #[test]
    fn selector_strings_round_trip() {
        use core::str::FromStr;
        assert_eq!(TransformKind::from_str("modwt").unwrap(), TransformKind::Modwt);
        assert_eq!(
            SignalExtension::from_str("sym").unwrap(),
            SignalExtension::Symmetric
        );
        assert_eq!(
            ConvolutionMethod::from_str("fft").unwrap(),
            ConvolutionMethod::Fft
        );
        assert_eq!(alloc::format!("{}", TransformKind::Swt), "swt");
        match SignalExtension::from_str("zero") {
            Err(WaveletError::UnknownSelector(s)) => assert_eq!(s, "zero"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
