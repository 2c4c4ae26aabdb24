//! Color psychology: maps a single color to an emotional category.
//!
//! Classification is an ordered list of `(predicate, category)` rules over
//! the color's HSL; the first matching rule wins. The grayscale rules sit
//! at the top because a desaturated color's hue carries no meaning.

use serde::Serialize;

use crate::color::{Color, Hsl};

/// Every outcome the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CleanMinimal,
    SophisticatedBold,
    BalancedNeutral,
    GentleSoft,
    PassionateEnergetic,
    WarmCreative,
    CheerfulOptimistic,
    IntelligentEnergizing,
    SophisticatedStable,
    HarmoniousNatural,
    PeacefulAiry,
    TrustworthyProfessional,
    CalmStable,
    DreamyRomantic,
    MysteriousNoble,
    NurturingPlayful,
    UniqueExpressive,
}

/// Presentation record for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PsychologyRecord {
    pub category: Category,
    pub emotion: &'static str,
    pub meaning: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl Category {
    pub fn record(self) -> PsychologyRecord {
        let (emotion, meaning, icon, description) = match self {
            Category::CleanMinimal => (
                "Clean & Minimal",
                "Purity, simplicity, space",
                "🤍",
                "Light gray creates clean, spacious feelings",
            ),
            Category::SophisticatedBold => (
                "Sophisticated & Bold",
                "Power, elegance, formality",
                "🖤",
                "Dark colors convey sophistication and strong presence",
            ),
            Category::BalancedNeutral => (
                "Balanced & Neutral",
                "Stability, compromise, practicality",
                "⚖️",
                "Neutral tones provide balance and timeless appeal",
            ),
            Category::GentleSoft => (
                "Gentle & Soft",
                "Love, tenderness, compassion",
                "🌸",
                "Light reds evoke feelings of gentle love and nurturing care",
            ),
            Category::PassionateEnergetic => (
                "Passionate & Energetic",
                "Power, excitement, urgency",
                "🔥",
                "Red stimulates energy and creates a sense of urgency and passion",
            ),
            Category::WarmCreative => (
                "Warm & Creative",
                "Enthusiasm, creativity, adventure",
                "🎨",
                "Orange promotes creativity and enthusiasm while feeling welcoming",
            ),
            Category::CheerfulOptimistic => (
                "Cheerful & Optimistic",
                "Joy, happiness, enlightenment",
                "☀️",
                "Bright yellow radiates positivity and mental clarity",
            ),
            Category::IntelligentEnergizing => (
                "Intelligent & Energizing",
                "Mental stimulation, wisdom, caution",
                "💡",
                "Yellow stimulates mental activity and promotes clear thinking",
            ),
            Category::SophisticatedStable => (
                "Sophisticated & Stable",
                "Growth, prosperity, stability",
                "🌲",
                "Dark green represents growth, wealth, and natural stability",
            ),
            Category::HarmoniousNatural => (
                "Harmonious & Natural",
                "Balance, healing, freshness",
                "🌿",
                "Green creates balance and promotes feelings of harmony and renewal",
            ),
            Category::PeacefulAiry => (
                "Peaceful & Airy",
                "Tranquility, freedom, inspiration",
                "☁️",
                "Light blue evokes feelings of peace and open-minded thinking",
            ),
            Category::TrustworthyProfessional => (
                "Trustworthy & Professional",
                "Trust, reliability, corporate",
                "🤝",
                "Strong blue builds trust and conveys professionalism",
            ),
            Category::CalmStable => (
                "Calm & Stable",
                "Serenity, wisdom, loyalty",
                "🌊",
                "Blue promotes calmness and emotional stability",
            ),
            Category::DreamyRomantic => (
                "Dreamy & Romantic",
                "Fantasy, nostalgia, femininity",
                "🦄",
                "Light purple creates a dreamy, romantic atmosphere",
            ),
            Category::MysteriousNoble => (
                "Mysterious & Noble",
                "Luxury, creativity, spirituality",
                "👑",
                "Deep purple suggests luxury, mystery, and creative inspiration",
            ),
            Category::NurturingPlayful => (
                "Nurturing & Playful",
                "Love, compassion, playfulness",
                "💕",
                "Pink promotes feelings of care, love, and youthful energy",
            ),
            Category::UniqueExpressive => (
                "Unique & Expressive",
                "Individuality, creativity, innovation",
                "✨",
                "This unique color expresses creativity and individual style",
            ),
        };
        PsychologyRecord {
            category: self,
            emotion,
            meaning,
            icon,
            description,
        }
    }
}

type Predicate = fn(&Hsl) -> bool;

fn grayscale(c: &Hsl) -> bool {
    c.s < 10.0
}

fn red(c: &Hsl) -> bool {
    (0.0..=15.0).contains(&c.h) || (345.0..=360.0).contains(&c.h)
}

fn orange(c: &Hsl) -> bool {
    c.h > 15.0 && c.h <= 45.0
}

fn yellow(c: &Hsl) -> bool {
    c.h > 45.0 && c.h <= 75.0
}

fn green(c: &Hsl) -> bool {
    c.h > 75.0 && c.h <= 165.0
}

fn blue(c: &Hsl) -> bool {
    c.h > 165.0 && c.h <= 255.0
}

fn purple(c: &Hsl) -> bool {
    c.h > 255.0 && c.h <= 285.0
}

fn pink(c: &Hsl) -> bool {
    c.h > 285.0 && c.h < 345.0
}

/// Ordered classification table. Refinements of a hue family come before
/// the family's default entry.
pub const RULES: &[(Predicate, Category)] = &[
    (|c| grayscale(c) && c.l > 80.0, Category::CleanMinimal),
    (|c| grayscale(c) && c.l < 30.0, Category::SophisticatedBold),
    (grayscale, Category::BalancedNeutral),
    (|c| red(c) && c.l > 80.0, Category::GentleSoft),
    (red, Category::PassionateEnergetic),
    (orange, Category::WarmCreative),
    (|c| yellow(c) && c.l > 85.0, Category::CheerfulOptimistic),
    (yellow, Category::IntelligentEnergizing),
    (|c| green(c) && c.l < 30.0, Category::SophisticatedStable),
    (green, Category::HarmoniousNatural),
    (|c| blue(c) && c.l > 75.0, Category::PeacefulAiry),
    (|c| blue(c) && c.s > 70.0, Category::TrustworthyProfessional),
    (blue, Category::CalmStable),
    (|c| purple(c) && c.l > 70.0, Category::DreamyRomantic),
    (purple, Category::MysteriousNoble),
    (pink, Category::NurturingPlayful),
];

/// Category for an HSL triple; `UniqueExpressive` if no rule matches.
pub fn categorize(hsl: &Hsl) -> Category {
    RULES
        .iter()
        .find(|(matches, _)| matches(hsl))
        .map(|&(_, category)| category)
        .unwrap_or(Category::UniqueExpressive)
}

pub fn classify_hsl(hsl: &Hsl) -> PsychologyRecord {
    categorize(hsl).record()
}

/// Psychology record for a color.
pub fn classify(color: Color) -> PsychologyRecord {
    classify_hsl(&color.to_hsl())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(h: f64, s: f64, l: f64) -> Category {
        categorize(&Hsl::new(h, s, l))
    }

    fn hex(s: &str) -> Category {
        classify(Color::from_hex(s).unwrap()).category
    }

    #[test]
    fn pure_red_is_passionate() {
        let record = classify(Color::from_hex("#FF0000").unwrap());
        assert_eq!(record.category, Category::PassionateEnergetic);
        assert_eq!(record.emotion, "Passionate & Energetic");
    }

    #[test]
    fn light_pink_is_gentle() {
        assert_eq!(hex("#FFB6C1"), Category::GentleSoft);
    }

    #[test]
    fn mid_gray_is_neutral() {
        assert_eq!(hex("#808080"), Category::BalancedNeutral);
        assert_eq!(hex("#F0F0F0"), Category::CleanMinimal);
        assert_eq!(hex("#202020"), Category::SophisticatedBold);
    }

    #[test]
    fn hex_colors_on_a_boundary() {
        // saturation exactly 10: not grayscale, dark blue
        assert_eq!(hex("#1B1B21"), Category::CalmStable);
        // hue exactly 165: still green, and dark
        assert_eq!(hex("#19211F"), Category::SophisticatedStable);
        assert_eq!(hex("#1A2623"), Category::SophisticatedStable);
        // hue exactly 15: still red
        assert_eq!(hex("#FF6633"), Category::PassionateEnergetic);
    }

    #[test]
    fn grayscale_wins_over_hue_family() {
        // hue 0 would otherwise land in the red family
        assert_eq!(cat(0.0, 5.0, 50.0), Category::BalancedNeutral);
        assert_eq!(cat(200.0, 9.9, 90.0), Category::CleanMinimal);
        assert_eq!(cat(120.0, 0.0, 10.0), Category::SophisticatedBold);
        assert_eq!(cat(120.0, 10.0, 50.0), Category::HarmoniousNatural);
    }

    #[test]
    fn red_family_bounds() {
        assert_eq!(cat(0.0, 80.0, 50.0), Category::PassionateEnergetic);
        assert_eq!(cat(15.0, 80.0, 50.0), Category::PassionateEnergetic);
        assert_eq!(cat(345.0, 80.0, 50.0), Category::PassionateEnergetic);
        assert_eq!(cat(359.9, 80.0, 80.1), Category::GentleSoft);
        assert_eq!(cat(10.0, 80.0, 80.0), Category::PassionateEnergetic);
    }

    #[test]
    fn orange_family_bounds() {
        assert_eq!(cat(15.01, 80.0, 50.0), Category::WarmCreative);
        assert_eq!(cat(45.0, 80.0, 95.0), Category::WarmCreative);
    }

    #[test]
    fn yellow_family_bounds() {
        assert_eq!(cat(45.01, 80.0, 50.0), Category::IntelligentEnergizing);
        assert_eq!(cat(75.0, 80.0, 85.0), Category::IntelligentEnergizing);
        assert_eq!(cat(60.0, 80.0, 85.1), Category::CheerfulOptimistic);
    }

    #[test]
    fn green_family_bounds() {
        assert_eq!(cat(75.01, 80.0, 50.0), Category::HarmoniousNatural);
        assert_eq!(cat(165.0, 80.0, 30.0), Category::HarmoniousNatural);
        assert_eq!(cat(120.0, 80.0, 29.9), Category::SophisticatedStable);
    }

    #[test]
    fn blue_family_refinements_in_order() {
        assert_eq!(cat(165.01, 50.0, 50.0), Category::CalmStable);
        assert_eq!(cat(210.0, 90.0, 80.0), Category::PeacefulAiry);
        assert_eq!(cat(210.0, 90.0, 50.0), Category::TrustworthyProfessional);
        assert_eq!(cat(255.0, 70.0, 50.0), Category::CalmStable);
    }

    #[test]
    fn purple_family_bounds() {
        assert_eq!(cat(255.01, 80.0, 50.0), Category::MysteriousNoble);
        assert_eq!(cat(285.0, 80.0, 70.1), Category::DreamyRomantic);
    }

    #[test]
    fn pink_family_is_open_interval() {
        assert_eq!(cat(285.01, 80.0, 50.0), Category::NurturingPlayful);
        assert_eq!(cat(344.99, 80.0, 95.0), Category::NurturingPlayful);
    }

    #[test]
    fn out_of_domain_hue_falls_through() {
        assert_eq!(cat(400.0, 80.0, 50.0), Category::UniqueExpressive);
        assert_eq!(cat(f64::NAN, 80.0, 50.0), Category::UniqueExpressive);
    }

    #[test]
    fn every_hue_degree_is_covered() {
        for h in 0..360 {
            assert_ne!(cat(h as f64, 80.0, 50.0), Category::UniqueExpressive, "hue {h}");
            assert_ne!(cat(h as f64 + 0.5, 80.0, 50.0), Category::UniqueExpressive);
        }
    }

    #[test]
    fn record_carries_its_category() {
        for &(_, category) in RULES {
            assert_eq!(category.record().category, category);
        }
    }
}
