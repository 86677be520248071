//! Demonstrates enabling verbose logging for mallat.
use mallat::{TransformKind, Wavelet, WaveletTransform};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.2).sin()).collect();
    let wave = Wavelet::new("sym4").unwrap();
    let mut wt = WaveletTransform::new(wave, TransformKind::Swt, signal.len(), 2).unwrap();
    wt.forward(&signal).unwrap();
    let _ = wt.inverse().unwrap();
}
