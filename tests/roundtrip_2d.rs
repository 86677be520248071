//! End-to-end analysis/synthesis checks for the 2-D transforms.

use mallat::{SignalExtension, TransformKind, Wavelet, WaveletTransform2D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn max_err(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn modwt_odd_dims_two_levels() {
    let (rows, cols) = (51, 40);
    let img = random_image(rows, cols, 1);
    let wave = Wavelet::new("db2").unwrap();
    let mut wt = WaveletTransform2D::new(wave, TransformKind::Modwt, rows, cols, 2).unwrap();
    wt.forward(&img).unwrap();
    let rec = wt.inverse().unwrap();
    assert!(max_err(&rec, &img) < 1e-8);
}

#[test]
fn dwt_odd_dims_both_extensions() {
    let (rows, cols) = (51, 40);
    let img = random_image(rows, cols, 2);
    for ext in [SignalExtension::Periodic, SignalExtension::Symmetric] {
        let wave = Wavelet::new("db3").unwrap();
        let mut wt = WaveletTransform2D::new(wave, TransformKind::Dwt, rows, cols, 2).unwrap();
        wt.set_extension(ext).unwrap();
        wt.forward(&img).unwrap();
        let rec = wt.inverse().unwrap();
        assert!(max_err(&rec, &img) < 1e-8, "{ext}");
    }
}

#[test]
fn swt_two_levels() {
    let (rows, cols) = (64, 48);
    let img = random_image(rows, cols, 3);
    let wave = Wavelet::new("db3").unwrap();
    let mut wt = WaveletTransform2D::new(wave, TransformKind::Swt, rows, cols, 2).unwrap();
    wt.forward(&img).unwrap();
    assert_eq!(wt.outlength(), 7 * rows * cols);
    let rec = wt.inverse().unwrap();
    assert!(max_err(&rec, &img) < 1e-8);
}

#[test]
fn swt_biorthogonal_single_level() {
    let img = random_image(32, 32, 4);
    let wave = Wavelet::new("bior3.5").unwrap();
    let mut wt = WaveletTransform2D::new(wave, TransformKind::Swt, 32, 32, 1).unwrap();
    wt.forward(&img).unwrap();
    let rec = wt.inverse().unwrap();
    assert!(max_err(&rec, &img) < 1e-8);
}

#[test]
fn dwt_square_power_of_two() {
    let img = random_image(64, 64, 5);
    let wave = Wavelet::new("sym4").unwrap();
    let mut wt = WaveletTransform2D::new(wave, TransformKind::Dwt, 64, 64, 3).unwrap();
    wt.forward(&img).unwrap();
    let rec = wt.inverse().unwrap();
    assert!(max_err(&rec, &img) < 1e-10);
}

#[test]
fn periodic_quadrant_dims_halve_with_ceiling() {
    let wave = Wavelet::new("db2").unwrap();
    let wt = WaveletTransform2D::new(wave, TransformKind::Dwt, 51, 40, 2).unwrap();
    // 51x40 -> 26x20 -> 13x10
    assert_eq!(wt.band_dims(1).unwrap(), (26, 20));
    assert_eq!(wt.band_dims(2).unwrap(), (13, 10));
    assert_eq!(wt.outlength(), 4 * 130 + 3 * 520);
}
