use rand::rngs::StdRng;
use rand::SeedableRng;
use ribbon_core::{hsla, HueOscillator, WaveParams};
use std::f64::consts::TAU;

fn reference_params() -> WaveParams {
    WaveParams {
        frequency: 0.0015,
        amplitude: 85.0,
        offset: 285.0,
    }
}

#[test]
fn first_advance_matches_reference_value() {
    let mut wave = HueOscillator::new(reference_params(), 0.0);
    let hue = wave.advance();
    let expected = 285.0 + 85.0 * 0.0015_f64.sin();
    assert!((hue - expected).abs() < 1e-9);
    assert!((hue - 285.127).abs() < 1e-3, "got {}", hue);
}

#[test]
fn phase_grows_by_frequency_per_advance() {
    let start = 1.25;
    let mut wave = HueOscillator::new(reference_params(), start);
    for n in 1..=10_000u32 {
        wave.advance();
        if n % 1000 == 0 {
            let expected = start + n as f64 * 0.0015;
            assert!(
                (wave.phase() - expected).abs() < 1e-9,
                "phase drift at n={}: {} vs {}",
                n,
                wave.phase(),
                expected
            );
        }
    }
}

#[test]
fn hue_stays_within_bounds() {
    let params = WaveParams {
        frequency: 0.37, // coarse step to sweep the whole cycle quickly
        ..reference_params()
    };
    let mut wave = HueOscillator::new(params, 0.0);
    let (lo, hi) = wave.bounds();
    assert_eq!((lo, hi), (200.0, 370.0));
    for _ in 0..5000 {
        let hue = wave.advance();
        assert!(hue >= lo - 1e-9 && hue <= hi + 1e-9, "hue {} out of range", hue);
    }
}

#[test]
fn value_does_not_advance() {
    let mut wave = HueOscillator::new(reference_params(), 0.5);
    let before = wave.value();
    assert_eq!(wave.value(), before);
    assert_eq!(wave.phase(), 0.5);
    let stepped = wave.advance();
    assert_eq!(wave.value(), stepped);
}

#[test]
fn random_phase_is_on_the_unit_cycle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let wave = HueOscillator::with_random_phase(reference_params(), &mut rng);
        assert!(wave.phase() >= 0.0 && wave.phase() < TAU);
        assert_eq!(wave.frequency(), 0.0015);
    }
}

#[test]
fn hsla_rounds_hue() {
    assert_eq!(hsla(285.127, 0.025), "hsla(285,100%,50%,0.025)");
    assert_eq!(hsla(369.6, 0.5), "hsla(370,100%,50%,0.5)");
}
