//! Coefficient buffer layouts.
//!
//! All transforms store their coefficients in one flat buffer with the
//! approximation first and detail bands behind it, finest band at the
//! tail: `[cA_J, cD_J, .., cD_1]` in 1-D and `[LL_J, LH_J, HL_J, HH_J,
//! .., HH_1]` in 2-D. Offsets are assigned from the tail backward so the
//! finest band always ends exactly at `outlength`.

use alloc::vec::Vec;

use crate::transform::{SignalExtension, TransformKind};

/// Largest decomposition depth a signal supports: the biggest `J` with
/// `sig_len / (filt_len - 1) >= 2^J`, evaluated in integer arithmetic.
pub fn max_levels(sig_len: usize, filt_len: usize) -> usize {
    let mut lev = 0;
    let mut t = sig_len / (filt_len - 1);
    while t >= 2 {
        t /= 2;
        lev += 1;
    }
    lev
}

/// The stationary transform needs `2^levels` to divide the length.
pub(crate) fn swt_length_valid(n: usize, levels: usize) -> bool {
    n % (1usize << levels) == 0
}

/// One coefficient band inside the flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subband {
    pub offset: usize,
    pub size: usize,
}

/// 1-D band bookkeeping for a fixed `(length, levels, kind, extension)`.
#[derive(Debug, Clone)]
pub(crate) struct Layout1d {
    /// `lvl[i]` is the approximation length after `i` analysis steps;
    /// `lvl[0]` is the signal length.
    pub(crate) lvl: Vec<usize>,
    /// Buffer segment sizes in storage order, approximation first.
    pub(crate) lengths: Vec<usize>,
    pub(crate) approx: Subband,
    /// `details[level - 1]` is `cD_level`; level 1 is the finest.
    pub(crate) details: Vec<Subband>,
    pub(crate) outlength: usize,
}

impl Layout1d {
    pub(crate) fn new(
        n: usize,
        levels: usize,
        filt_len: usize,
        kind: TransformKind,
        ext: SignalExtension,
    ) -> Self {
        let mut lvl = Vec::with_capacity(levels + 1);
        lvl.push(n);
        for i in 0..levels {
            let next = match kind {
                TransformKind::Dwt => match ext {
                    SignalExtension::Periodic => (lvl[i] + 1) / 2,
                    SignalExtension::Symmetric => (lvl[i] + filt_len - 1) / 2,
                },
                TransformKind::Swt | TransformKind::Modwt => match ext {
                    // symmetric extension doubles the working length once
                    // up front and every band keeps it
                    SignalExtension::Symmetric => 2 * n,
                    SignalExtension::Periodic => lvl[i],
                },
            };
            lvl.push(next);
        }

        let mut lengths = Vec::with_capacity(levels + 1);
        lengths.push(lvl[levels]);
        for i in (1..=levels).rev() {
            lengths.push(lvl[i]);
        }
        let outlength = lengths.iter().sum();

        let approx = Subband {
            offset: 0,
            size: lvl[levels],
        };
        let mut details = Vec::with_capacity(levels);
        let mut acc = outlength;
        for level in 1..=levels {
            acc -= lvl[level];
            details.push(Subband {
                offset: acc,
                size: lvl[level],
            });
        }

        Self {
            lvl,
            lengths,
            approx,
            details,
            outlength,
        }
    }
}

/// 2-D band bookkeeping. `dims` and `detail` are ordered coarsest first,
/// matching the synthesis iteration order.
#[derive(Debug, Clone)]
pub(crate) struct Layout2d {
    pub(crate) dims: Vec<(usize, usize)>,
    pub(crate) approx: Subband,
    /// Per level `[LH, HL, HH]`.
    pub(crate) detail: Vec<[Subband; 3]>,
    pub(crate) outlength: usize,
}

impl Layout2d {
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        levels: usize,
        filt_len: usize,
        kind: TransformKind,
        ext: SignalExtension,
    ) -> Self {
        let mut dims = alloc::vec![(0usize, 0usize); levels];
        let mut rn = rows;
        let mut cn = cols;
        let mut outlength = 0;
        for idx in (0..levels).rev() {
            if kind == TransformKind::Dwt {
                if ext == SignalExtension::Symmetric {
                    rn += filt_len - 2;
                    cn += filt_len - 2;
                }
                rn = (rn + 1) / 2;
                cn = (cn + 1) / 2;
            }
            dims[idx] = (rn, cn);
            outlength += 3 * rn * cn;
        }
        outlength += dims[0].0 * dims[0].1;

        let mut detail = alloc::vec![[Subband { offset: 0, size: 0 }; 3]; levels];
        let mut n = outlength;
        for idx in (0..levels).rev() {
            let (r, c) = dims[idx];
            let cdim = r * c;
            detail[idx] = [
                Subband {
                    offset: n - 3 * cdim,
                    size: cdim,
                },
                Subband {
                    offset: n - 2 * cdim,
                    size: cdim,
                },
                Subband {
                    offset: n - cdim,
                    size: cdim,
                },
            ];
            n -= 3 * cdim;
        }
        let approx = Subband {
            offset: 0,
            size: dims[0].0 * dims[0].1,
        };

        Self {
            dims,
            approx,
            detail,
            outlength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_levels_integer_bound() {
        assert_eq!(max_levels(811, 8), 6);
        assert_eq!(max_levels(177, 16), 3);
        // 64/(4-1) = 21, halved four times before dropping below 2
        assert_eq!(max_levels(64, 4), 4);
        assert_eq!(max_levels(16, 16), 0);
    }

    #[test]
    fn swt_divisibility() {
        assert!(swt_length_valid(256, 3));
        assert!(!swt_length_valid(100, 3));
        assert!(swt_length_valid(100, 2));
    }

    #[test]
    fn periodic_sizes_halve_with_ceiling() {
        let l = Layout1d::new(811, 4, 8, TransformKind::Dwt, SignalExtension::Periodic);
        assert_eq!(l.lvl, alloc::vec![811, 406, 203, 102, 51]);
        assert_eq!(l.lengths, alloc::vec![51, 51, 102, 203, 406]);
        assert_eq!(l.outlength, 813);
        assert_eq!(l.approx, Subband { offset: 0, size: 51 });
        // finest detail sits at the tail
        assert_eq!(
            l.details[0],
            Subband {
                offset: 813 - 406,
                size: 406
            }
        );
        // bands tile the buffer without gaps
        assert_eq!(l.details[3].offset, 51);
    }

    #[test]
    fn symmetric_sizes_grow_by_filter_length() {
        let l = Layout1d::new(100, 2, 8, TransformKind::Dwt, SignalExtension::Symmetric);
        assert_eq!(l.lvl, alloc::vec![100, 53, 30]);
        assert_eq!(l.outlength, 30 + 30 + 53);
    }

    #[test]
    fn stationary_sizes_are_constant() {
        let l = Layout1d::new(64, 3, 4, TransformKind::Swt, SignalExtension::Periodic);
        assert_eq!(l.lvl, alloc::vec![64, 64, 64, 64]);
        assert_eq!(l.outlength, 4 * 64);
        assert_eq!(l.details[2].offset, 64);
    }

    #[test]
    fn two_d_bands_tile_the_buffer() {
        let l = Layout2d::new(
            51,
            40,
            2,
            4,
            TransformKind::Dwt,
            SignalExtension::Periodic,
        );
        // 51x40 -> 26x20 -> 13x10
        assert_eq!(l.dims, alloc::vec![(13, 10), (26, 20)]);
        assert_eq!(l.outlength, 13 * 10 * 4 + 26 * 20 * 3);
        assert_eq!(l.approx, Subband { offset: 0, size: 130 });
        assert_eq!(l.detail[0][0].offset, 130);
        assert_eq!(l.detail[0][2].offset, 130 + 2 * 130);
        assert_eq!(l.detail[1][0].offset, 4 * 130);
        let last = l.detail[1][2];
        assert_eq!(last.offset + last.size, l.outlength);
    }

    #[test]
    fn two_d_stationary_keeps_dims() {
        let l = Layout2d::new(
            64,
            48,
            2,
            6,
            TransformKind::Swt,
            SignalExtension::Periodic,
        );
        assert_eq!(l.dims, alloc::vec![(64, 48), (64, 48)]);
        assert_eq!(l.outlength, 7 * 64 * 48);
    }
}
