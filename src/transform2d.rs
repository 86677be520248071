//! Two-dimensional separable wavelet transforms.
//!
//! Row-major images are filtered along rows into low/high intermediates
//! and then along columns straight into the flat coefficient buffer,
//! producing the LL/LH/HL/HH quadrants of each level; LL feeds the next
//! level. The buffer is laid out coarsest-first,
//! `[LL_J, LH_J, HL_J, HH_J, .., HH_1]`, with offsets assigned from the
//! tail backward. All 2-D filtering runs the direct stride kernels; with
//! the `parallel` feature the row stage fans out over rayon.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::kernels;
use crate::layout::{self, Layout2d, Subband};
use crate::transform::{SignalExtension, TransformKind};
use crate::wavelet::{Wavelet, WaveletError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "verbose-logging")]
use log::debug;

/// Subband selector for [`WaveletTransform2D::coeffs`]. `Horizontal` is
/// the row-lowpass/column-highpass band (LH), `Vertical` its transpose
/// (HL), `Diagonal` the double-highpass (HH).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subband2d {
    Approx,
    Horizontal,
    Vertical,
    Diagonal,
}

#[derive(Debug)]
pub struct WaveletTransform2D {
    wave: Wavelet,
    kind: TransformKind,
    ext: SignalExtension,
    rows: usize,
    cols: usize,
    levels: usize,
    layout: Layout2d,
    output: Vec<f64>,
}

impl WaveletTransform2D {
    /// Binds `wave` to a `rows x cols` image decomposed `levels` times.
    /// The depth bound uses the smaller image axis; SWT needs both axes
    /// divisible by `2^levels`.
    pub fn new(
        wave: Wavelet,
        kind: TransformKind,
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<Self, WaveletError> {
        if rows == 0 || cols == 0 {
            return Err(WaveletError::EmptyInput);
        }
        let max = layout::max_levels(rows.min(cols), wave.filt_len());
        if levels == 0 || levels > max {
            return Err(WaveletError::InvalidLevels {
                requested: levels,
                max,
            });
        }
        if kind == TransformKind::Swt
            && !(layout::swt_length_valid(rows, levels) && layout::swt_length_valid(cols, levels))
        {
            return Err(WaveletError::SwtLength {
                len: rows.min(cols),
                levels,
            });
        }
        if kind == TransformKind::Modwt && !wave.orthogonal() {
            return Err(WaveletError::RequiresOrthogonal(wave.name().to_string()));
        }
        let layout = Layout2d::new(
            rows,
            cols,
            levels,
            wave.filt_len(),
            kind,
            SignalExtension::Periodic,
        );
        Ok(Self {
            wave,
            kind,
            ext: SignalExtension::Periodic,
            rows,
            cols,
            levels,
            layout,
            output: Vec::new(),
        })
    }

    /// Symmetric extension is only defined for the decimating transform.
    pub fn set_extension(&mut self, ext: SignalExtension) -> Result<(), WaveletError> {
        if ext == SignalExtension::Symmetric && self.kind != TransformKind::Dwt {
            return Err(WaveletError::UnsupportedExtension);
        }
        self.ext = ext;
        self.layout = Layout2d::new(
            self.rows,
            self.cols,
            self.levels,
            self.wave.filt_len(),
            self.kind,
            ext,
        );
        self.output.clear();
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

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn outlength(&self) -> usize {
        self.layout.outlength
    }

    /// The full coefficient buffer, empty before the first `forward`.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Quadrant dimensions `(rows, cols)` at `level`; level 1 is the
    /// finest.
    pub fn band_dims(&self, level: usize) -> Result<(usize, usize), WaveletError> {
        if level == 0 || level > self.levels {
            return Err(WaveletError::BadSubband);
        }
        Ok(self.layout.dims[self.levels - level])
    }

    /// Position of a quadrant inside the flat buffer, available before
    /// the first `forward`. The approximation exists only at the coarsest
    /// level.
    pub fn band(&self, level: usize, band: Subband2d) -> Result<Subband, WaveletError> {
        if level == 0 || level > self.levels {
            return Err(WaveletError::BadSubband);
        }
        let idx = self.levels - level;
        Ok(match band {
            Subband2d::Approx => {
                if level != self.levels {
                    return Err(WaveletError::BadSubband);
                }
                self.layout.approx
            }
            Subband2d::Horizontal => self.layout.detail[idx][0],
            Subband2d::Vertical => self.layout.detail[idx][1],
            Subband2d::Diagonal => self.layout.detail[idx][2],
        })
    }

    /// Coefficient quadrant at `level` together with its dimensions. The
    /// approximation exists only at the coarsest level.
    pub fn coeffs(
        &self,
        level: usize,
        band: Subband2d,
    ) -> Result<(&[f64], usize, usize), WaveletError> {
        if level == 0 || level > self.levels || self.output.is_empty() {
            return Err(WaveletError::BadSubband);
        }
        let idx = self.levels - level;
        let (r, c) = self.layout.dims[idx];
        let sub = match band {
            Subband2d::Approx => {
                if level != self.levels {
                    return Err(WaveletError::BadSubband);
                }
                self.layout.approx
            }
            Subband2d::Horizontal => self.layout.detail[idx][0],
            Subband2d::Vertical => self.layout.detail[idx][1],
            Subband2d::Diagonal => self.layout.detail[idx][2],
        };
        Ok((&self.output[sub.offset..sub.offset + sub.size], r, c))
    }

    /// One-line description of the configured decomposition.
    pub fn summary(&self) -> String {
        alloc::format!(
            "{} {} levels={} size={}x{} ext={} outlength={}",
            self.wave.name(),
            self.kind,
            self.levels,
            self.rows,
            self.cols,
            self.ext,
            self.layout.outlength,
        )
    }

    /// One analysis pass along one axis: `src` is a pre-offset slice read
    /// with `istride`, `ca`/`cd` pre-offset outputs written with
    /// `ostride`.
    #[allow(clippy::too_many_arguments)]
    fn filter_pass(
        &self,
        m: usize,
        filt: &[f64],
        src: &[f64],
        n: usize,
        ca: &mut [f64],
        len_ca: usize,
        cd: &mut [f64],
        istride: usize,
        ostride: usize,
    ) {
        let w = &self.wave;
        match self.kind {
            TransformKind::Dwt => match self.ext {
                SignalExtension::Periodic => kernels::dwt_per_stride(
                    src,
                    n,
                    w.lpd(),
                    w.hpd(),
                    ca,
                    len_ca,
                    cd,
                    istride,
                    ostride,
                ),
                SignalExtension::Symmetric => kernels::dwt_sym_stride(
                    src,
                    n,
                    w.lpd(),
                    w.hpd(),
                    ca,
                    len_ca,
                    cd,
                    istride,
                    ostride,
                ),
            },
            TransformKind::Swt => kernels::swt_per_stride(
                m,
                src,
                n,
                w.lpd(),
                w.hpd(),
                ca,
                len_ca,
                cd,
                istride,
                ostride,
            ),
            TransformKind::Modwt => kernels::modwt_per_stride(
                m,
                src,
                filt,
                w.filt_len(),
                ca,
                len_ca,
                cd,
                istride,
                ostride,
            ),
        }
    }

    /// Runs the analysis pass over a row-major `rows x cols` image.
    pub fn forward(&mut self, data: &[f64]) -> Result<(), WaveletError> {
        if data.is_empty() {
            return Err(WaveletError::EmptyInput);
        }
        if data.len() != self.rows * self.cols {
            return Err(WaveletError::MismatchedLengths);
        }
        #[cfg(feature = "verbose-logging")]
        debug!("forward {}", self.summary());

        let filt = if self.kind == TransformKind::Modwt {
            self.wave.modwt_filter()
        } else {
            Vec::new()
        };
        let mut buf = vec![0.0; self.layout.outlength];
        let mut cur = data.to_vec();
        let mut ir = self.rows;
        let mut ic = self.cols;
        let mut m = 1usize;

        for it in 0..self.levels {
            if self.kind != TransformKind::Dwt && it > 0 {
                m *= 2;
            }
            let idx = self.levels - 1 - it;
            let (rows_i, cols_i) = self.layout.dims[idx];
            let cdim = rows_i * cols_i;
            let [lh, hl, hh] = self.layout.detail[idx];
            let a_ll = lh.offset - cdim;

            // rows: stride 1, one output row per input row
            let mut lp_dn = vec![0.0; ir * cols_i];
            let mut hp_dn = vec![0.0; ir * cols_i];
            let row_pass = |i: usize, la: &mut [f64], ld: &mut [f64]| {
                self.filter_pass(m, &filt, &cur[i * ic..], ic, la, cols_i, ld, 1, 1);
            };
            #[cfg(feature = "parallel")]
            lp_dn
                .par_chunks_mut(cols_i)
                .zip(hp_dn.par_chunks_mut(cols_i))
                .enumerate()
                .for_each(|(i, (la, ld))| row_pass(i, la, ld));
            #[cfg(not(feature = "parallel"))]
            for (i, (la, ld)) in lp_dn
                .chunks_mut(cols_i)
                .zip(hp_dn.chunks_mut(cols_i))
                .enumerate()
            {
                row_pass(i, la, ld);
            }

            // columns: stride cols_i, straight into the quadrants
            for i in 0..cols_i {
                {
                    let (left, right) = buf.split_at_mut(lh.offset);
                    self.filter_pass(
                        m,
                        &filt,
                        &lp_dn[i..],
                        ir,
                        &mut left[a_ll + i..],
                        rows_i,
                        &mut right[i..],
                        cols_i,
                        cols_i,
                    );
                }
                {
                    let (left, right) = buf.split_at_mut(hh.offset);
                    self.filter_pass(
                        m,
                        &filt,
                        &hp_dn[i..],
                        ir,
                        &mut left[hl.offset + i..],
                        rows_i,
                        &mut right[i..],
                        cols_i,
                        cols_i,
                    );
                }
            }

            cur = buf[a_ll..a_ll + cdim].to_vec();
            ir = rows_i;
            ic = cols_i;
        }
        self.output = buf;
        Ok(())
    }

    /// Reconstructs the image from the coefficient buffer, leaving the
    /// buffer untouched.
    pub fn inverse(&self) -> Result<Vec<f64>, WaveletError> {
        if self.output.is_empty() {
            return Err(WaveletError::EmptyInput);
        }
        #[cfg(feature = "verbose-logging")]
        debug!("inverse {}", self.summary());
        match self.kind {
            TransformKind::Dwt => Ok(self.inverse_dwt()),
            TransformKind::Swt => Ok(self.inverse_swt()),
            TransformKind::Modwt => Ok(self.inverse_modwt()),
        }
    }

    fn inverse_dwt(&self) -> Vec<f64> {
        let w = &self.wave;
        let lf = w.filt_len();
        let l2 = lf / 2;
        let per = self.ext == SignalExtension::Periodic;
        let mut cur = self.output[..self.layout.approx.size].to_vec();

        for it in 0..self.levels {
            let (ir, ic) = self.layout.dims[it];
            let [lh, hl, hh] = self.layout.detail[it];
            let cd_h = &self.output[lh.offset..];
            let cd_v = &self.output[hl.offset..];
            let cd_d = &self.output[hh.offset..];

            let mut c_l = vec![0.0; 2 * ir * ic];
            let mut c_h = vec![0.0; 2 * ir * ic];

            // columns first
            let xlen = if per { 2 * (ir + l2 - 1) } else { 2 * ir };
            let mut x = vec![0.0; xlen];
            for i in 0..ic {
                if per {
                    kernels::idwt_per_stride(&cur[i..], ir, &cd_h[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
                    for k in l2 - 1..2 * ir + l2 - 1 {
                        c_l[(k + 1 - l2) * ic + i] = x[k];
                    }
                    kernels::idwt_per_stride(&cd_v[i..], ir, &cd_d[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
                    for k in l2 - 1..2 * ir + l2 - 1 {
                        c_h[(k + 1 - l2) * ic + i] = x[k];
                    }
                } else {
                    kernels::idwt_sym_stride(&cur[i..], ir, &cd_h[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
                    for k in lf - 2..2 * ir {
                        c_l[(k + 2 - lf) * ic + i] = x[k];
                    }
                    kernels::idwt_sym_stride(&cd_v[i..], ir, &cd_d[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
                    for k in lf - 2..2 * ir {
                        c_h[(k + 2 - lf) * ic + i] = x[k];
                    }
                }
            }

            // then rows
            let ir2 = 2 * ir;
            let ic2 = 2 * ic;
            let mut out = vec![0.0; ir2 * ic2];
            let xlen = if per { 2 * (ic + l2 - 1) } else { 2 * ic };
            let mut x = vec![0.0; xlen];
            for i in 0..ir2 {
                if per {
                    kernels::idwt_per_stride(&c_l[i * ic..], ic, &c_h[i * ic..], w.lpr(), w.hpr(), &mut x, 1, 1);
                    for k in l2 - 1..2 * ic + l2 - 1 {
                        out[(k + 1 - l2) + i * ic2] = x[k];
                    }
                } else {
                    kernels::idwt_sym_stride(&c_l[i * ic..], ic, &c_h[i * ic..], w.lpr(), w.hpr(), &mut x, 1, 1);
                    for k in lf - 2..2 * ic {
                        out[(k + 2 - lf) + i * ic2] = x[k];
                    }
                }
            }

            // trim to the dimensions of the next finer level
            let (tr, tc) = if it == self.levels - 1 {
                (self.rows, self.cols)
            } else {
                self.layout.dims[it + 1]
            };
            let mut next = vec![0.0; tr * tc];
            for i in 0..tr {
                next[i * tc..(i + 1) * tc].copy_from_slice(&out[i * ic2..i * ic2 + tc]);
            }
            cur = next;
        }
        cur
    }

    /// Periodic synthesis of one quadrant set into a `2ir x 2ic` grid;
    /// `shift_odd` rotates the result one step down and right to realign
    /// the odd-phase estimate.
    #[allow(clippy::too_many_arguments)]
    fn synthesize_quad(
        &self,
        shift_odd: bool,
        ir: usize,
        ic: usize,
        a: &[f64],
        h: &[f64],
        v: &[f64],
        d: &[f64],
        oup: &mut [f64],
    ) {
        let w = &self.wave;
        let lf = w.filt_len();
        let l2 = lf / 2;
        let mut c_l = vec![0.0; 2 * ir * ic];
        let mut c_h = vec![0.0; 2 * ir * ic];

        let mut x = vec![0.0; 2 * (ir + l2 - 1)];
        for i in 0..ic {
            kernels::idwt_per_stride(&a[i..], ir, &h[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
            for k in l2 - 1..2 * ir + l2 - 1 {
                c_l[(k + 1 - l2) * ic + i] = x[k];
            }
            kernels::idwt_per_stride(&v[i..], ir, &d[i..], w.lpr(), w.hpr(), &mut x, ic, 1);
            for k in l2 - 1..2 * ir + l2 - 1 {
                c_h[(k + 1 - l2) * ic + i] = x[k];
            }
        }
        let mut x = vec![0.0; 2 * (ic + l2 - 1)];
        for i in 0..2 * ir {
            kernels::idwt_per_stride(&c_l[i * ic..], ic, &c_h[i * ic..], w.lpr(), w.hpr(), &mut x, 1, 1);
            for k in l2 - 1..2 * ic + l2 - 1 {
                oup[(k + 1 - l2) + i * 2 * ic] = x[k];
            }
        }
        if shift_odd {
            kernels::rotate_grid_one(oup, 2 * ir, 2 * ic);
        }
    }

    fn inverse_swt(&self) -> Vec<f64> {
        let rows = self.rows;
        let cols = self.cols;
        let mut out = self.output[..rows * cols].to_vec();

        for it in (1..=self.levels).rev() {
            let idx = self.levels - it;
            let [lh, hl, hh] = self.layout.detail[idx];
            let m = 1usize << (it - 1);
            for phase in 0..m {
                let ir = rows / (2 * m);
                let ic = cols / (2 * m);
                let gather = |base: &[f64], r0: usize, c0: usize| -> Vec<f64> {
                    let mut g = Vec::with_capacity(ir * ic);
                    for i in (r0..rows).step_by(2 * m) {
                        for k in (c0..cols).step_by(2 * m) {
                            g.push(base[i * cols + k]);
                        }
                    }
                    g
                };

                let mut o1 = vec![0.0; 4 * ir * ic];
                {
                    let a = gather(&out, phase, phase);
                    let h = gather(&self.output[lh.offset..], phase, phase);
                    let v = gather(&self.output[hl.offset..], phase, phase);
                    let d = gather(&self.output[hh.offset..], phase, phase);
                    self.synthesize_quad(false, ir, ic, &a, &h, &v, &d, &mut o1);
                }
                let mut o2 = vec![0.0; 4 * ir * ic];
                {
                    let a = gather(&out, phase + m, phase + m);
                    let h = gather(&self.output[lh.offset..], phase + m, phase + m);
                    let v = gather(&self.output[hl.offset..], phase + m, phase + m);
                    let d = gather(&self.output[hh.offset..], phase + m, phase + m);
                    self.synthesize_quad(true, ir, ic, &a, &h, &v, &d, &mut o2);
                }

                let mut i1 = 0;
                for i in (phase..rows).step_by(m) {
                    let mut k1 = 0;
                    for k in (phase..cols).step_by(m) {
                        out[i * cols + k] = 0.5 * (o1[i1 * 2 * ic + k1] + o2[i1 * 2 * ic + k1]);
                        k1 += 1;
                    }
                    i1 += 1;
                }
            }
        }
        out
    }

    fn inverse_modwt(&self) -> Vec<f64> {
        let w = &self.wave;
        let lf = w.filt_len();
        let filt = w.modwt_filter();
        let mut cur = self.output[..self.layout.approx.size].to_vec();
        let mut m = 1usize << (self.levels - 1);

        for it in 0..self.levels {
            if it > 0 {
                m /= 2;
            }
            let (ir, ic) = self.layout.dims[it];
            let [lh, hl, hh] = self.layout.detail[it];
            let cd_h = &self.output[lh.offset..];
            let cd_v = &self.output[hl.offset..];
            let cd_d = &self.output[hh.offset..];

            let mut c_l = vec![0.0; ir * ic];
            let mut c_h = vec![0.0; ir * ic];
            for i in 0..ic {
                kernels::imodwt_per_stride(m, &cur[i..], ir, &cd_h[i..], &filt, lf, &mut c_l[i..], ic, ic);
                kernels::imodwt_per_stride(m, &cd_v[i..], ir, &cd_d[i..], &filt, lf, &mut c_h[i..], ic, ic);
            }
            let mut oup = vec![0.0; ir * ic];
            for i in 0..ir {
                kernels::imodwt_per_stride(
                    m,
                    &c_l[i * ic..],
                    ic,
                    &c_h[i * ic..],
                    &filt,
                    lf,
                    &mut oup[i * ic..],
                    1,
                    1,
                );
            }
            cur = oup;
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(rows: usize, cols: usize) -> Vec<f64> {
        (0..rows * cols)
            .map(|i| (i as f64 * 0.43).sin() + (i as f64 * 0.11).cos())
            .collect()
    }

    fn max_err(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn depth_bound_uses_smaller_axis() {
        let w = Wavelet::new("db4").unwrap();
        // min(200, 20) = 20, 20/7 = 2 -> one level only
        match WaveletTransform2D::new(w, TransformKind::Dwt, 200, 20, 2) {
            Err(WaveletError::InvalidLevels { requested, max }) => {
                assert_eq!(requested, 2);
                assert_eq!(max, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn swt_needs_both_axes_divisible() {
        let w = Wavelet::new("haar").unwrap();
        assert!(matches!(
            WaveletTransform2D::new(w, TransformKind::Swt, 64, 50, 2),
            Err(WaveletError::SwtLength { .. })
        ));
    }

    #[test]
    fn haar_round_trip_odd_dims() {
        let img = image(9, 7);
        let w = Wavelet::new("haar").unwrap();
        let mut t = WaveletTransform2D::new(w, TransformKind::Dwt, 9, 7, 2).unwrap();
        t.forward(&img).unwrap();
        let rec = t.inverse().unwrap();
        assert_eq!(rec.len(), img.len());
        assert!(max_err(&rec, &img) < 1e-10);
    }

    #[test]
    fn quadrant_accessor_checks_levels() {
        let img = image(16, 16);
        let w = Wavelet::new("haar").unwrap();
        let mut t = WaveletTransform2D::new(w, TransformKind::Dwt, 16, 16, 2).unwrap();
        t.forward(&img).unwrap();
        let (a, r, c) = t.coeffs(2, Subband2d::Approx).unwrap();
        assert_eq!((r, c), (4, 4));
        assert_eq!(a.len(), 16);
        let (d, r, c) = t.coeffs(1, Subband2d::Diagonal).unwrap();
        assert_eq!((r, c), (8, 8));
        assert_eq!(d.len(), 64);
        // approximation only exists at the coarsest level
        assert_eq!(
            t.coeffs(1, Subband2d::Approx).unwrap_err(),
            WaveletError::BadSubband
        );
        assert_eq!(
            t.coeffs(3, Subband2d::Diagonal).unwrap_err(),
            WaveletError::BadSubband
        );
    }

    #[test]
    fn symmetric_round_trip_with_longer_filter() {
        // filters past two taps make the first output rows land below the
        // filter tail; the write index must stay in range from row zero on
        let img = image(40, 30);
        let w = Wavelet::new("db3").unwrap();
        let mut t = WaveletTransform2D::new(w, TransformKind::Dwt, 40, 30, 2).unwrap();
        t.set_extension(SignalExtension::Symmetric).unwrap();
        t.forward(&img).unwrap();
        let rec = t.inverse().unwrap();
        assert!(max_err(&rec, &img) < 1e-8);
    }

    #[test]
    fn engine_is_debug_formattable() {
        let w = Wavelet::new("db2").unwrap();
        let t = WaveletTransform2D::new(w, TransformKind::Dwt, 16, 16, 1).unwrap();
        let s = alloc::format!("{t:?}");
        assert!(s.contains("WaveletTransform2D"));
    }

    #[test]
    fn quadrants_tile_the_output() {
        let img = image(12, 10);
        let w = Wavelet::new("db2").unwrap();
        let mut t = WaveletTransform2D::new(w, TransformKind::Dwt, 12, 10, 1).unwrap();
        t.forward(&img).unwrap();
        assert_eq!(t.outlength(), 4 * 6 * 5);
        assert_eq!(t.output().len(), t.outlength());
        let (h, r, c) = t.coeffs(1, Subband2d::Horizontal).unwrap();
        assert_eq!((r, c), (6, 5));
        assert_eq!(h.len(), 30);
    }
}
