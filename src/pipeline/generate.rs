use log::debug;
use rand::Rng;

use crate::color::{Color, Hsl};

/// Number of colors in a palette when the caller does not ask otherwise.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Fixed hue rotation between consecutive colors.
pub const HUE_STEP: f64 = 60.0;

const SATURATION_RANGE: (f64, f64) = (50.0, 100.0);
const LIGHTNESS_RANGE: (f64, f64) = (40.0, 80.0);

/// Produce `count` HSL triples at evenly rotated hues from a random base.
///
/// The base hue is a whole degree; each following hue is the previous one
/// rotated by 60 degrees. Saturation and lightness are drawn independently
/// per color. No deduplication is performed.
pub fn harmonious_hsl<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Hsl> {
    let base = rng.gen_range(0..360) as f64;
    (0..count)
        .map(|i| {
            let h = (base + i as f64 * HUE_STEP) % 360.0;
            let s = rng.gen_range(SATURATION_RANGE.0..=SATURATION_RANGE.1);
            let l = rng.gen_range(LIGHTNESS_RANGE.0..=LIGHTNESS_RANGE.1);
            Hsl::new(h, s, l)
        })
        .collect()
}

/// Generate a harmonious palette of `count` colors from the given RNG.
pub fn generate_harmonious_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Color> {
    let colors: Vec<Color> = harmonious_hsl(count, rng)
        .into_iter()
        .map(Color::from_hsl)
        .collect();
    debug!("generated {} harmonious colors", colors.len());
    colors
}

/// Generate a harmonious palette of `count` colors using the thread RNG.
pub fn generate_harmonious(count: usize) -> Vec<Color> {
    generate_harmonious_with(count, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count() {
        for count in [1, 4, 5, 6, 12] {
            assert_eq!(generate_harmonious(count).len(), count);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_harmonious(0).is_empty());
    }

    #[test]
    fn hex_output_is_canonical() {
        let mut rng = StdRng::seed_from_u64(7);
        for color in generate_harmonious_with(5, &mut rng) {
            let hex = color.to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn consecutive_hues_step_by_sixty() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let hsl = harmonious_hsl(5, &mut rng);
            for pair in hsl.windows(2) {
                let diff = (pair[1].h - pair[0].h).rem_euclid(360.0);
                assert!((diff - 60.0).abs() < 1e-9, "seed {seed}: step was {diff}");
            }
        }
    }

    #[test]
    fn saturation_and_lightness_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(42);
        for hsl in harmonious_hsl(500, &mut rng) {
            assert!((0.0..360.0).contains(&hsl.h));
            assert!((50.0..=100.0).contains(&hsl.s), "saturation {}", hsl.s);
            assert!((40.0..=80.0).contains(&hsl.l), "lightness {}", hsl.l);
        }
    }

    #[test]
    fn same_seed_same_palette() {
        let a = generate_harmonious_with(5, &mut StdRng::seed_from_u64(3));
        let b = generate_harmonious_with(5, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
