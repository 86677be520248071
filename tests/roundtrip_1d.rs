//! End-to-end analysis/synthesis checks for the 1-D transforms.

use mallat::{ConvolutionMethod, SignalExtension, TransformKind, Wavelet, WaveletTransform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn max_err(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

fn round_trip(
    name: &str,
    kind: TransformKind,
    n: usize,
    levels: usize,
    ext: SignalExtension,
    method: ConvolutionMethod,
) -> f64 {
    let sig = random_signal(n, 42);
    let wave = Wavelet::new(name).unwrap();
    let mut wt = WaveletTransform::new(wave, kind, n, levels).unwrap();
    wt.set_convolution_method(method).unwrap();
    wt.set_extension(ext).unwrap();
    wt.forward(&sig).unwrap();
    let rec = wt.inverse().unwrap();
    max_err(&rec, &sig)
}

#[test]
fn dwt_db4_odd_length_four_levels_periodic() {
    let err = round_trip(
        "db4",
        TransformKind::Dwt,
        811,
        4,
        SignalExtension::Periodic,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-10, "err={err}");
}

#[test]
fn dwt_db4_odd_length_four_levels_symmetric() {
    let err = round_trip(
        "db4",
        TransformKind::Dwt,
        811,
        4,
        SignalExtension::Symmetric,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-10, "err={err}");
}

#[test]
fn dwt_round_trips_across_families() {
    for name in ["haar", "db2", "db7", "db10", "sym3", "sym9", "coif1", "coif2"] {
        for ext in [SignalExtension::Periodic, SignalExtension::Symmetric] {
            let err = round_trip(name, TransformKind::Dwt, 97, 2, ext, ConvolutionMethod::Direct);
            assert!(err < 1e-8, "{name} {ext}: err={err}");
        }
    }
}

#[test]
fn dwt_high_order_families_round_trip() {
    // the longest bank of each family; n is sized so two levels fit
    for name in ["db23", "db38", "sym14", "sym20", "coif9", "coif17"] {
        for ext in [SignalExtension::Periodic, SignalExtension::Symmetric] {
            let err = round_trip(
                name,
                TransformKind::Dwt,
                1024,
                2,
                ext,
                ConvolutionMethod::Direct,
            );
            assert!(err < 1e-8, "{name} {ext}: err={err}");
        }
    }
}

#[test]
fn dwt_biorthogonal_round_trips() {
    for name in ["bior1.3", "bior2.6", "bior3.5", "bior4.4", "bior6.8", "rbior3.5", "rbior2.4"] {
        let err = round_trip(
            name,
            TransformKind::Dwt,
            128,
            2,
            SignalExtension::Periodic,
            ConvolutionMethod::Direct,
        );
        assert!(err < 1e-8, "{name}: err={err}");
    }
}

#[test]
fn dwt_meyer_is_an_approximation() {
    // the 102-tap FIR Meyer bank reconstructs to ~1e-5, not machine eps
    let err = round_trip(
        "meyer",
        TransformKind::Dwt,
        512,
        2,
        SignalExtension::Periodic,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-4, "err={err}");
    assert!(err > 1e-12, "unexpectedly exact: err={err}");
}

#[test]
fn dwt_fft_path_matches_direct() {
    let sig = random_signal(811, 7);
    for ext in [SignalExtension::Periodic, SignalExtension::Symmetric] {
        let wave = Wavelet::new("db4").unwrap();
        let mut direct = WaveletTransform::new(wave.clone(), TransformKind::Dwt, 811, 4).unwrap();
        direct.set_extension(ext).unwrap();
        direct.forward(&sig).unwrap();

        let mut fft = WaveletTransform::new(wave, TransformKind::Dwt, 811, 4).unwrap();
        fft.set_extension(ext).unwrap();
        fft.set_convolution_method(ConvolutionMethod::Fft).unwrap();
        fft.forward(&sig).unwrap();

        assert_eq!(direct.outlength(), fft.outlength());
        let err = max_err(direct.output(), fft.output());
        assert!(err < 1e-10, "{ext}: coefficient err={err}");

        let rec = fft.inverse().unwrap();
        let err = max_err(&rec, &sig);
        assert!(err < 1e-10, "{ext}: reconstruction err={err}");
    }
}

#[test]
fn swt_bior_single_level() {
    let err = round_trip(
        "bior3.5",
        TransformKind::Swt,
        256,
        1,
        SignalExtension::Periodic,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-8, "err={err}");
}

#[test]
fn swt_db2_three_levels() {
    let err = round_trip(
        "db2",
        TransformKind::Swt,
        64,
        3,
        SignalExtension::Periodic,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-8, "err={err}");
}

#[test]
fn swt_fft_analysis_matches_direct() {
    let sig = random_signal(128, 9);
    let wave = Wavelet::new("db4").unwrap();
    let mut direct = WaveletTransform::new(wave.clone(), TransformKind::Swt, 128, 2).unwrap();
    direct.forward(&sig).unwrap();

    let mut fft = WaveletTransform::new(wave, TransformKind::Swt, 128, 2).unwrap();
    fft.set_convolution_method(ConvolutionMethod::Fft).unwrap();
    fft.forward(&sig).unwrap();

    let err = max_err(direct.output(), fft.output());
    assert!(err < 1e-10, "coefficient err={err}");
    let rec = fft.inverse().unwrap();
    assert!(max_err(&rec, &sig) < 1e-8);
}

#[test]
fn swt_bands_keep_signal_length() {
    let sig = random_signal(64, 3);
    let wave = Wavelet::new("db2").unwrap();
    let mut wt = WaveletTransform::new(wave, TransformKind::Swt, 64, 3).unwrap();
    wt.forward(&sig).unwrap();
    assert_eq!(wt.outlength(), 4 * 64);
    assert_eq!(wt.approx().len(), 64);
    for level in 1..=3 {
        assert_eq!(wt.detail(level).unwrap().len(), 64);
    }
}

#[test]
fn modwt_db4_odd_length() {
    let err = round_trip(
        "db4",
        TransformKind::Modwt,
        177,
        2,
        SignalExtension::Periodic,
        ConvolutionMethod::Direct,
    );
    assert!(err < 1e-8, "err={err}");
}

#[test]
fn modwt_fft_analysis_matches_direct() {
    // odd length exercises the circular wrap of the dilated filters
    let sig = random_signal(101, 5);
    let wave = Wavelet::new("db3").unwrap();
    let mut direct = WaveletTransform::new(wave.clone(), TransformKind::Modwt, 101, 2).unwrap();
    direct.forward(&sig).unwrap();

    let mut fft = WaveletTransform::new(wave, TransformKind::Modwt, 101, 2).unwrap();
    fft.set_convolution_method(ConvolutionMethod::Fft).unwrap();
    fft.forward(&sig).unwrap();

    let err = max_err(direct.output(), fft.output());
    assert!(err < 1e-10, "coefficient err={err}");
    let rec = fft.inverse().unwrap();
    assert!(max_err(&rec, &sig) < 1e-8);
}

#[test]
fn modwt_symmetric_fft_round_trip() {
    let n = 150;
    let sig = random_signal(n, 13);
    let wave = Wavelet::new("db4").unwrap();
    let mut wt = WaveletTransform::new(wave, TransformKind::Modwt, n, 2).unwrap();
    wt.set_convolution_method(ConvolutionMethod::Fft).unwrap();
    wt.set_extension(SignalExtension::Symmetric).unwrap();
    wt.forward(&sig).unwrap();
    // the reflected signal doubles every band
    assert_eq!(wt.approx().len(), 2 * n);
    assert_eq!(wt.outlength(), 3 * 2 * n);
    let rec = wt.inverse().unwrap();
    assert_eq!(rec.len(), n);
    assert!(max_err(&rec, &sig) < 1e-8);
}

#[test]
fn swt_symmetric_fft_round_trip() {
    let err = round_trip(
        "db3",
        TransformKind::Swt,
        96,
        2,
        SignalExtension::Symmetric,
        ConvolutionMethod::Fft,
    );
    assert!(err < 1e-8, "err={err}");
}

#[test]
fn modwt_is_shift_invariant() {
    let n = 64;
    let k = 7;
    let sig = random_signal(n, 11);
    let mut shifted = sig.clone();
    shifted.rotate_right(k);

    let wave = Wavelet::new("db2").unwrap();
    let mut a = WaveletTransform::new(wave.clone(), TransformKind::Modwt, n, 3).unwrap();
    a.forward(&sig).unwrap();
    let mut b = WaveletTransform::new(wave, TransformKind::Modwt, n, 3).unwrap();
    b.forward(&shifted).unwrap();

    // every band of the shifted signal is the shifted band of the original
    let check = |x: &[f64], y: &[f64]| {
        let mut xs = x.to_vec();
        xs.rotate_right(k);
        assert!(max_err(&xs, y) < 1e-10);
    };
    check(a.approx(), b.approx());
    for level in 1..=3 {
        check(a.detail(level).unwrap(), b.detail(level).unwrap());
    }
}

#[test]
fn periodic_level_sizes_halve_with_ceiling() {
    let wave = Wavelet::new("db4").unwrap();
    let wt = WaveletTransform::new(wave, TransformKind::Dwt, 811, 4).unwrap();
    assert_eq!(wt.lengths(), &[51, 51, 102, 203, 406]);
    assert_eq!(wt.outlength(), 813);
}

#[test]
fn symmetric_level_sizes_grow_by_filter_length() {
    let wave = Wavelet::new("db4").unwrap();
    let mut wt = WaveletTransform::new(wave, TransformKind::Dwt, 100, 2).unwrap();
    wt.set_extension(SignalExtension::Symmetric).unwrap();
    // (100 + 7) / 2 = 53, (53 + 7) / 2 = 30
    assert_eq!(wt.lengths(), &[30, 30, 53]);
}
