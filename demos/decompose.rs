//! Decomposes a test signal and prints the band layout and
//! reconstruction error.
use mallat::{Subband2d, TransformKind, Wavelet, WaveletTransform, WaveletTransform2D};

fn main() -> Result<(), mallat::WaveletError> {
    let signal: Vec<f64> = (0..811)
        .map(|i| (i as f64 * 0.017).sin() + 0.5 * (i as f64 * 0.31).cos())
        .collect();

    let wave = Wavelet::new("db4")?;
    let mut wt = WaveletTransform::new(wave.clone(), TransformKind::Dwt, signal.len(), 4)?;
    wt.forward(&signal)?;
    println!("{}", wt.summary());
    println!("approx: {} samples", wt.approx().len());
    for level in (1..=wt.levels()).rev() {
        println!("cD_{level}: {} samples", wt.detail(level)?.len());
    }
    let rec = wt.inverse()?;
    let err = rec
        .iter()
        .zip(signal.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("1-D reconstruction error: {err:.3e}");

    let (rows, cols) = (51, 40);
    let image: Vec<f64> = (0..rows * cols)
        .map(|i| (i as f64 * 0.043).sin())
        .collect();
    let mut wt2 = WaveletTransform2D::new(wave, TransformKind::Dwt, rows, cols, 2)?;
    wt2.forward(&image)?;
    let (_, r, c) = wt2.coeffs(2, Subband2d::Approx)?;
    println!("coarsest LL quadrant: {r}x{c}");
    let rec = wt2.inverse()?;
    let err = rec
        .iter()
        .zip(image.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("2-D reconstruction error: {err:.3e}");
    Ok(())
}
