//! Decimating and stationary filter kernels with explicit strides.
//!
//! Each kernel walks a 1-D sequence through both halves of a filter bank
//! in a single pass, folding the boundary rule into its index arithmetic
//! instead of materializing an extended signal. Inputs and outputs are
//! pre-offset slices; `istride`/`ostride` are element strides, so the 2-D
//! engine can run the same kernels down rows (stride 1) and columns
//! (stride = row width) of a flat buffer.
//!
//! Synthesis kernels produce interleaved even/odd output pairs; the caller
//! trims the filter delay off both ends (`filt_len/2 - 1` leading samples
//! for the periodic rule, `filt_len - 2` for the symmetric one).

/// Periodic analysis: `output[i]` taps the circle at `2i + filt_len/2`.
/// Odd input lengths behave as if the last sample were repeated once.
#[allow(clippy::too_many_arguments)]
pub(crate) fn dwt_per_stride(
    inp: &[f64],
    n: usize,
    lpd: &[f64],
    hpd: &[f64],
    ca: &mut [f64],
    len_ca: usize,
    cd: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    let lf = lpd.len();
    let l2 = (lf / 2) as isize;
    let ni = n as isize;
    let is_odd = n % 2 == 1;
    for i in 0..len_ca {
        let t = 2 * i as isize + l2;
        let os = i * ostride;
        let mut sa = 0.0;
        let mut sd = 0.0;
        for l in 0..lf {
            let k = t - l as isize;
            let src = if (k >= l2 && k < ni) || (k >= 0 && k < l2) {
                k as usize
            } else if k < 0 && !is_odd {
                (k + ni) as usize
            } else if k < 0 {
                if k == -1 {
                    n - 1
                } else {
                    (k + ni + 1) as usize
                }
            } else if !is_odd {
                (k - ni) as usize
            } else if k == ni {
                n - 1
            } else {
                (k - ni - 1) as usize
            };
            let v = inp[src * istride];
            sa += lpd[l] * v;
            sd += hpd[l] * v;
        }
        ca[os] = sa;
        cd[os] = sd;
    }
}

/// Symmetric analysis: half-sample reflection at both ends, output taps at
/// `2i + 1`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn dwt_sym_stride(
    inp: &[f64],
    n: usize,
    lpd: &[f64],
    hpd: &[f64],
    ca: &mut [f64],
    len_ca: usize,
    cd: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    let lf = lpd.len();
    let ni = n as isize;
    for i in 0..len_ca {
        let t = 2 * i as isize + 1;
        let os = i * ostride;
        let mut sa = 0.0;
        let mut sd = 0.0;
        for l in 0..lf {
            let k = t - l as isize;
            let src = if k >= 0 && k < ni {
                k as usize
            } else if k < 0 {
                (-k - 1) as usize
            } else {
                (2 * ni - k - 1) as usize
            };
            let v = inp[src * istride];
            sa += lpd[l] * v;
            sd += hpd[l] * v;
        }
        ca[os] = sa;
        cd[os] = sd;
    }
}

/// Stationary analysis at dilation `m`: no decimation, filter taps spread
/// `m` apart on the periodic circle.
#[allow(clippy::too_many_arguments)]
pub(crate) fn swt_per_stride(
    m: usize,
    inp: &[f64],
    n: usize,
    lpd: &[f64],
    hpd: &[f64],
    ca: &mut [f64],
    len_ca: usize,
    cd: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    let lf = lpd.len();
    let len_avg = m * lf;
    let l2 = (len_avg / 2) as isize;
    let ni = n as isize;
    let is_odd = n % 2 == 1;
    for i in 0..len_ca {
        let t = i as isize + l2;
        let mut sa = 0.0;
        let mut sd = 0.0;
        let mut l = 0usize;
        let mut j = 0usize;
        while j < len_avg {
            let mut jw = j;
            while jw >= len_ca {
                jw -= len_ca;
            }
            let k = t - jw as isize;
            let src = if (k >= l2 && k < ni) || (k >= 0 && k < l2) {
                k as usize
            } else if k < 0 {
                (k + ni) as usize
            } else if !is_odd {
                (k - ni) as usize
            } else if t - l as isize == ni {
                // odd-length wrap; unreachable once lengths divide 2^J
                n - 1
            } else {
                (k - ni - 1) as usize
            };
            let v = inp[src * istride];
            sa += lpd[l] * v;
            sd += hpd[l] * v;
            l += 1;
            j += m;
        }
        ca[i * ostride] = sa;
        cd[i * ostride] = sd;
    }
}

/// Maximal-overlap analysis at dilation `m`. `filt` is the concatenated
/// rescaled pair `[lpd/√2 ‖ hpd/√2]`, `lf` the length of each half.
#[allow(clippy::too_many_arguments)]
pub(crate) fn modwt_per_stride(
    m: usize,
    inp: &[f64],
    filt: &[f64],
    lf: usize,
    ca: &mut [f64],
    len_ca: usize,
    cd: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    for i in 0..len_ca {
        let mut t = i as isize;
        let v = inp[t as usize * istride];
        let mut sa = filt[0] * v;
        let mut sd = filt[lf] * v;
        for l in 1..lf {
            t -= m as isize;
            while t >= len_ca as isize {
                t -= len_ca as isize;
            }
            while t < 0 {
                t += len_ca as isize;
            }
            let v = inp[t as usize * istride];
            sa += filt[l] * v;
            sd += filt[lf + l] * v;
        }
        ca[i * ostride] = sa;
        cd[i * ostride] = sd;
    }
}

/// Periodic synthesis. `x` holds `2 * (len_ca + filt_len/2 - 1)` samples of
/// interleaved even/odd output; the caller keeps
/// `x[filt_len/2 - 1 .. 2*len_ca + filt_len/2 - 1]`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn idwt_per_stride(
    ca: &[f64],
    len_ca: usize,
    cd: &[f64],
    lpr: &[f64],
    hpr: &[f64],
    x: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    let lf = lpr.len();
    let l2 = lf / 2;
    let nc = len_ca as isize;
    for i in 0..len_ca + l2 - 1 {
        let m = 2 * i;
        let n = 2 * i + 1;
        let mut xm = 0.0;
        let mut xn = 0.0;
        for l in 0..l2 {
            let t = 2 * l;
            let k = i as isize - l as isize;
            let src = if k >= 0 && k < nc {
                k as usize
            } else if k >= nc && k < nc + lf as isize - 1 {
                (k - nc) as usize
            } else if k > -(l2 as isize) && k < 0 {
                (nc + k) as usize
            } else {
                continue;
            };
            let a = ca[src * istride];
            let d = cd[src * istride];
            xm += lpr[t] * a + hpr[t] * d;
            xn += lpr[t + 1] * a + hpr[t + 1] * d;
        }
        x[m * ostride] = xm;
        x[n * ostride] = xn;
    }
}

/// Symmetric synthesis. `x` holds `2 * len_ca` interleaved samples; the
/// caller keeps `x[filt_len - 2 .. 2*len_ca]`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn idwt_sym_stride(
    ca: &[f64],
    len_ca: usize,
    cd: &[f64],
    lpr: &[f64],
    hpr: &[f64],
    x: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    let lf = lpr.len();
    for i in 0..len_ca {
        let m = 2 * i;
        let n = 2 * i + 1;
        let mut xm = 0.0;
        let mut xn = 0.0;
        for l in 0..lf / 2 {
            let t = 2 * l;
            if i >= l {
                let k = i - l;
                if k < len_ca {
                    let a = ca[k * istride];
                    let d = cd[k * istride];
                    xm += lpr[t] * a + hpr[t] * d;
                    xn += lpr[t + 1] * a + hpr[t + 1] * d;
                }
            }
        }
        x[m * ostride] = xm;
        x[n * ostride] = xn;
    }
}

/// Maximal-overlap synthesis at dilation `m`, the adjoint of
/// [`modwt_per_stride`] walking the circle forward.
#[allow(clippy::too_many_arguments)]
pub(crate) fn imodwt_per_stride(
    m: usize,
    ca: &[f64],
    len_ca: usize,
    cd: &[f64],
    filt: &[f64],
    lf: usize,
    x: &mut [f64],
    istride: usize,
    ostride: usize,
) {
    for i in 0..len_ca {
        let mut t = i as isize;
        let mut s = filt[0] * ca[t as usize * istride] + filt[lf] * cd[t as usize * istride];
        for l in 1..lf {
            t += m as isize;
            while t >= len_ca as isize {
                t -= len_ca as isize;
            }
            while t < 0 {
                t += len_ca as isize;
            }
            s += filt[l] * ca[t as usize * istride] + filt[lf + l] * cd[t as usize * istride];
        }
        x[i * ostride] = s;
    }
}

/// Circular shift of a `rows x cols` grid one step down and one step
/// right, used to align the odd-phase estimate in the stationary inverse.
pub(crate) fn rotate_grid_one(x: &mut [f64], rows: usize, cols: usize) {
    for row in x[..rows * cols].chunks_mut(cols) {
        row.rotate_right(1);
    }
    x[..rows * cols].rotate_right(cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const S: f64 = core::f64::consts::FRAC_1_SQRT_2;

    // haar bank: lpd = [s, s], hpd = [-s, s], lpr = [s, s], hpr = [s, -s]
    const LPD: [f64; 2] = [S, S];
    const HPD: [f64; 2] = [-S, S];
    const LPR: [f64; 2] = [S, S];
    const HPR: [f64; 2] = [S, -S];

    #[test]
    fn haar_periodic_analysis_pairs_samples() {
        let sig = [1.0, 2.0, 3.0, 4.0];
        let mut ca = [0.0; 2];
        let mut cd = [0.0; 2];
        dwt_per_stride(&sig, 4, &LPD, &HPD, &mut ca, 2, &mut cd, 1, 1);
        assert!((ca[0] - 3.0 * S).abs() < 1e-14);
        assert!((ca[1] - 7.0 * S).abs() < 1e-14);
        assert!((cd[0] - (-S)).abs() < 1e-14);
        assert!((cd[1] - (-S)).abs() < 1e-14);
    }

    #[test]
    fn haar_periodic_round_trip() {
        let sig = [1.0, -2.0, 0.5, 4.0, -1.0, 3.0];
        let mut ca = [0.0; 3];
        let mut cd = [0.0; 3];
        dwt_per_stride(&sig, 6, &LPD, &HPD, &mut ca, 3, &mut cd, 1, 1);
        let mut x = vec![0.0; 2 * 3];
        idwt_per_stride(&ca, 3, &cd, &LPR, &HPR, &mut x, 1, 1);
        // lf/2 - 1 == 0: no trim for haar
        for (a, b) in x.iter().zip(sig.iter()) {
            assert!((a - b).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn symmetric_analysis_reflects_edges() {
        // first tap reads the mirrored sample: ca[0] = s*(x[1] + x[0])
        let sig = [5.0, 1.0, 2.0, 3.0];
        let mut ca = [0.0; 2];
        let mut cd = [0.0; 2];
        dwt_sym_stride(&sig, 4, &LPD, &HPD, &mut ca, 2, &mut cd, 1, 1);
        assert!((ca[0] - S * (1.0 + 5.0)).abs() < 1e-14);
    }

    #[test]
    fn stationary_analysis_keeps_length() {
        let sig = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut ca = [0.0; 8];
        let mut cd = [0.0; 8];
        swt_per_stride(1, &sig, 8, &LPD, &HPD, &mut ca, 8, &mut cd, 1, 1);
        // m = 1: same taps as the decimating kernel at even positions
        let mut dca = [0.0; 4];
        let mut dcd = [0.0; 4];
        dwt_per_stride(&sig, 8, &LPD, &HPD, &mut dca, 4, &mut dcd, 1, 1);
        for i in 0..4 {
            assert!((ca[2 * i] - dca[i]).abs() < 1e-12);
            assert!((cd[2 * i] - dcd[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn modwt_round_trip_single_level() {
        let sig = [0.3, -1.2, 2.0, 0.7, -0.4, 1.1];
        let filt = [S * S, S * S, -S * S, S * S]; // [lpd, hpd] / sqrt(2)
        let mut ca = [0.0; 6];
        let mut cd = [0.0; 6];
        modwt_per_stride(1, &sig, &filt, 2, &mut ca, 6, &mut cd, 1, 1);
        let mut x = [0.0; 6];
        imodwt_per_stride(1, &ca, 6, &cd, &filt, 2, &mut x, 1, 1);
        for (a, b) in x.iter().zip(sig.iter()) {
            assert!((a - b).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn strided_access_matches_contiguous() {
        // run the kernel down a "column" of a 3-wide grid
        let grid = [
            1.0, 9.0, 9.0, //
            2.0, 9.0, 9.0, //
            3.0, 9.0, 9.0, //
            4.0, 9.0, 9.0,
        ];
        let mut ca = [0.0; 2];
        let mut cd = [0.0; 2];
        dwt_per_stride(&grid, 4, &LPD, &HPD, &mut ca, 2, &mut cd, 3, 1);
        let col = [1.0, 2.0, 3.0, 4.0];
        let mut ca2 = [0.0; 2];
        let mut cd2 = [0.0; 2];
        dwt_per_stride(&col, 4, &LPD, &HPD, &mut ca2, 2, &mut cd2, 1, 1);
        assert_eq!(ca, ca2);
        assert_eq!(cd, cd2);
    }

    #[test]
    fn grid_rotation_wraps_both_axes() {
        let mut g = [
            1.0, 2.0, //
            3.0, 4.0, //
            5.0, 6.0,
        ];
        rotate_grid_one(&mut g, 3, 2);
        assert_eq!(g, [6.0, 5.0, 2.0, 1.0, 4.0, 3.0]);
    }
}
