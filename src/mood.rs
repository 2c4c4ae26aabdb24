use serde::Serialize;

use crate::color::{Color, Hsl};
use crate::psychology::classify_hsl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Cool,
    Neutral,
    Warm,
}

/// Aggregate mood of a whole palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteMood {
    pub overall_mood: &'static str,
    pub energy: Energy,
    pub warmth: Warmth,
    pub description: &'static str,
    pub icon: &'static str,
    /// Emotion label of each input color, in palette order.
    pub emotions: Vec<&'static str>,
}

/// Scores above this (or below its negation) tip the palette warm (cool).
const WARMTH_THRESHOLD: f64 = 0.3;
const HIGH_ENERGY_THRESHOLD: f64 = 0.5;

fn warmth_score(c: &Hsl) -> f64 {
    if (0.0..=60.0).contains(&c.h) || (300.0..=360.0).contains(&c.h) {
        1.0
    } else if (180.0..=240.0).contains(&c.h) {
        -1.0
    } else {
        0.0
    }
}

fn energy_score(c: &Hsl) -> f64 {
    if c.s > 60.0 && (30.0..=70.0).contains(&c.l) {
        1.0
    } else if c.s < 30.0 || c.l > 85.0 || c.l < 15.0 {
        -0.5
    } else {
        0.0
    }
}

fn bucket_warmth(avg: f64) -> Warmth {
    if avg > WARMTH_THRESHOLD {
        Warmth::Warm
    } else if avg < -WARMTH_THRESHOLD {
        Warmth::Cool
    } else {
        Warmth::Neutral
    }
}

fn bucket_energy(avg: f64) -> Energy {
    if avg > HIGH_ENERGY_THRESHOLD {
        Energy::High
    } else if avg < 0.0 {
        Energy::Low
    } else {
        Energy::Medium
    }
}

/// `(label, description, icon)` for a warmth/energy combination.
///
/// Warm and cool palettes get one entry per energy level; a neutral palette
/// is described by its energy alone.
fn describe(warmth: Warmth, energy: Energy) -> (&'static str, &'static str, &'static str) {
    match (warmth, energy) {
        (Warmth::Warm, Energy::High) => (
            "Energetic & Vibrant",
            "This palette radiates energy and warmth, perfect for grabbing attention and creating excitement",
            "🔥",
        ),
        (Warmth::Warm, Energy::Medium) => (
            "Cozy & Inviting",
            "A warm, welcoming palette that feels comfortable and approachable",
            "🏠",
        ),
        (Warmth::Warm, Energy::Low) => (
            "Gentle & Nurturing",
            "Soft, warm tones that create a nurturing and peaceful atmosphere",
            "🌅",
        ),
        (Warmth::Cool, Energy::High) => (
            "Fresh & Dynamic",
            "Cool, energetic colors that feel fresh, modern, and professionally dynamic",
            "⚡",
        ),
        (Warmth::Cool, Energy::Medium) => (
            "Calm & Professional",
            "Cool, balanced tones that promote focus and trustworthiness",
            "🌊",
        ),
        (Warmth::Cool, Energy::Low) => (
            "Serene & Peaceful",
            "Gentle, cool colors that create a tranquil and meditative mood",
            "🕊️",
        ),
        (Warmth::Neutral, Energy::High) => (
            "Bold & Creative",
            "A diverse, energetic palette that sparks creativity and bold expression",
            "🎨",
        ),
        (Warmth::Neutral, Energy::Low) => (
            "Sophisticated & Elegant",
            "Refined, subtle colors that convey sophistication and timeless elegance",
            "✨",
        ),
        (Warmth::Neutral, Energy::Medium) => (
            "Balanced & Harmonious",
            "A well-balanced palette that works in many contexts and feels naturally harmonious",
            "⚖️",
        ),
    }
}

/// Analyze the overall mood of a palette.
///
/// An empty palette yields a neutral, medium-energy placeholder.
pub fn analyze_mood(colors: &[Color]) -> PaletteMood {
    if colors.is_empty() {
        return PaletteMood {
            overall_mood: "Neutral",
            energy: Energy::Medium,
            warmth: Warmth::Neutral,
            description: "Select some colors to see the mood analysis",
            icon: "🎨",
            emotions: Vec::new(),
        };
    }

    let mut warmth_total = 0.0;
    let mut energy_total = 0.0;
    let mut emotions = Vec::with_capacity(colors.len());
    for color in colors {
        let hsl = color.to_hsl();
        emotions.push(classify_hsl(&hsl).emotion);
        warmth_total += warmth_score(&hsl);
        energy_total += energy_score(&hsl);
    }

    let n = colors.len() as f64;
    let warmth = bucket_warmth(warmth_total / n);
    let energy = bucket_energy(energy_total / n);
    let (overall_mood, description, icon) = describe(warmth, energy);

    PaletteMood {
        overall_mood,
        energy,
        warmth,
        description,
        icon,
        emotions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_palette;

    fn mood(hexes: &[&str]) -> PaletteMood {
        analyze_mood(&parse_palette(hexes).unwrap())
    }

    #[test]
    fn empty_palette_is_neutral() {
        let m = analyze_mood(&[]);
        assert_eq!(m.overall_mood, "Neutral");
        assert_eq!(m.energy, Energy::Medium);
        assert_eq!(m.warmth, Warmth::Neutral);
        assert!(m.emotions.is_empty());
    }

    #[test]
    fn warm_saturated_palette_is_vibrant() {
        let m = mood(&["#FF0000", "#FF8C00", "#FFD700"]);
        assert_eq!(m.warmth, Warmth::Warm);
        assert_eq!(m.energy, Energy::High);
        assert_eq!(m.overall_mood, "Energetic & Vibrant");
        assert_eq!(
            m.emotions,
            vec!["Passionate & Energetic", "Warm & Creative", "Intelligent & Energizing"]
        );
    }

    #[test]
    fn deep_blues_are_fresh() {
        let m = mood(&["#0000FF", "#0066CC", "#0088FF"]);
        assert_eq!(m.warmth, Warmth::Cool);
        assert_eq!(m.energy, Energy::High);
        assert_eq!(m.overall_mood, "Fresh & Dynamic");
    }

    #[test]
    fn pale_blues_are_serene() {
        // high lightness drags energy below zero
        let m = mood(&["#E0F0FF", "#DDEEFF"]);
        assert_eq!(m.warmth, Warmth::Cool);
        assert_eq!(m.energy, Energy::Low);
        assert_eq!(m.overall_mood, "Serene & Peaceful");
    }

    #[test]
    fn grays_are_sophisticated() {
        let m = mood(&["#808080", "#A0A0A0"]);
        // gray hue is 0, which counts as warm
        assert_eq!(m.warmth, Warmth::Warm);
        assert_eq!(m.energy, Energy::Low);
        assert_eq!(m.overall_mood, "Gentle & Nurturing");
    }

    #[test]
    fn neutral_medium_is_balanced_not_warm_or_cool() {
        // one warm, one cool, one green: warmth averages to 0
        let m = mood(&["#FF0000", "#0000FF", "#00C000"]);
        assert_eq!(m.warmth, Warmth::Neutral);
        assert_eq!(m.energy, Energy::High);
        assert_eq!(m.overall_mood, "Bold & Creative");

        let m = mood(&["#FF0000", "#0000FF", "#669966"]);
        assert_eq!(m.warmth, Warmth::Neutral);
        assert_eq!(m.energy, Energy::Medium);
        assert_eq!(m.overall_mood, "Balanced & Harmonious");
    }

    #[test]
    fn neutral_low_is_elegant() {
        let m = mood(&["#FFEEEE", "#EEEEFF"]);
        assert_eq!(m.warmth, Warmth::Neutral);
        assert_eq!(m.energy, Energy::Low);
        assert_eq!(m.overall_mood, "Sophisticated & Elegant");
    }

    #[test]
    fn hex_colors_on_energy_edges() {
        // saturation exactly 60 is not vivid
        let m = mood(&["#222388"]);
        assert_eq!((m.warmth, m.energy), (Warmth::Cool, Energy::Medium));
        // lightness exactly 70 and 30 are still vivid
        assert_eq!(mood(&["#FF6666"]).energy, Energy::High);
        assert_eq!(mood(&["#990000"]).energy, Energy::High);
        // saturation exactly 30 is not dull
        assert_eq!(mood(&["#412323"]).energy, Energy::Medium);
    }

    #[test]
    fn hex_colors_on_warmth_edges() {
        // hues exactly 60, 300, 180 and 240
        assert_eq!(mood(&["#333311"]).warmth, Warmth::Warm);
        assert_eq!(mood(&["#331133"]).warmth, Warmth::Warm);
        assert_eq!(mood(&["#113333"]).warmth, Warmth::Cool);
        assert_eq!(mood(&["#111133"]).warmth, Warmth::Cool);
    }

    #[test]
    fn warmth_buckets_use_strict_thresholds() {
        assert_eq!(bucket_warmth(0.3), Warmth::Neutral);
        assert_eq!(bucket_warmth(0.31), Warmth::Warm);
        assert_eq!(bucket_warmth(-0.3), Warmth::Neutral);
        assert_eq!(bucket_warmth(-0.31), Warmth::Cool);
    }

    #[test]
    fn energy_buckets_use_strict_thresholds() {
        assert_eq!(bucket_energy(0.5), Energy::Medium);
        assert_eq!(bucket_energy(0.51), Energy::High);
        assert_eq!(bucket_energy(0.0), Energy::Medium);
        assert_eq!(bucket_energy(-0.01), Energy::Low);
    }

    #[test]
    fn serializes_with_lowercase_levels() {
        let json = serde_json::to_value(mood(&["#FF0000"])).unwrap();
        assert_eq!(json["energy"], "high");
        assert_eq!(json["warmth"], "warm");
        assert_eq!(json["overallMood"], "Energetic & Vibrant");
    }
}
