//! Curated palettes: keyword-tagged collections and named theme presets.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::color::Color;

const fn rgb(hex: u32) -> Color {
    Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordPalette {
    pub keyword: &'static str,
    pub category: &'static str,
    pub colors: [Color; 5],
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: "nature",
        name: "Nature",
        icon: "🌿",
        description: "Colors inspired by the natural world",
    },
    CategoryInfo {
        id: "moods",
        name: "Moods",
        icon: "😊",
        description: "Colors that evoke specific feelings",
    },
    CategoryInfo {
        id: "places",
        name: "Places",
        icon: "🏛️",
        description: "Colors from iconic locations",
    },
    CategoryInfo {
        id: "seasons",
        name: "Seasons",
        icon: "🍂",
        description: "Colors that capture seasonal essence",
    },
    CategoryInfo {
        id: "styles",
        name: "Styles",
        icon: "🎨",
        description: "Colors from design movements",
    },
];

pub const KEYWORD_PALETTES: &[KeywordPalette] = &[
    KeywordPalette {
        keyword: "forest morning",
        category: "nature",
        colors: [rgb(0x2D5A27), rgb(0x4A7C59), rgb(0x7FB069), rgb(0xD6CC99), rgb(0xF7F4E9)],
        description: "Fresh green tones of a misty forest at dawn",
        tags: &["green", "natural", "fresh", "organic"],
    },
    KeywordPalette {
        keyword: "desert sunset",
        category: "nature",
        colors: [rgb(0x8B4513), rgb(0xCD853F), rgb(0xF4A460), rgb(0xFFB347), rgb(0xFF6B47)],
        description: "Warm earth tones of a blazing desert evening",
        tags: &["warm", "earth", "orange", "sunset"],
    },
    KeywordPalette {
        keyword: "ocean depths",
        category: "nature",
        colors: [rgb(0x003366), rgb(0x1B4F72), rgb(0x2E86AB), rgb(0xA23B72), rgb(0xF18F01)],
        description: "Deep blue mysteries of the ocean floor",
        tags: &["blue", "deep", "mysterious", "cool"],
    },
    KeywordPalette {
        keyword: "spring garden",
        category: "nature",
        colors: [rgb(0x98FB98), rgb(0x87CEEB), rgb(0xFFB6C1), rgb(0xFFFFE0), rgb(0xF0E68C)],
        description: "Soft pastels of blooming spring flowers",
        tags: &["pastel", "soft", "spring", "floral"],
    },
    KeywordPalette {
        keyword: "autumn leaves",
        category: "nature",
        colors: [rgb(0x8B4513), rgb(0xCD853F), rgb(0xDAA520), rgb(0xFF6347), rgb(0xDC143C)],
        description: "Rich, warm colors of fall foliage",
        tags: &["warm", "autumn", "red", "orange"],
    },
    KeywordPalette {
        keyword: "crystal lagoon",
        category: "nature",
        colors: [rgb(0x00CED1), rgb(0x40E0D0), rgb(0x20B2AA), rgb(0x7FFFD4), rgb(0xE0FFFF)],
        description: "Shimmering turquoise waters of a tropical lagoon",
        tags: &["blue", "aqua", "tropical", "fresh"],
    },
    KeywordPalette {
        keyword: "deep forest jewel",
        category: "nature",
        colors: [rgb(0x014421), rgb(0x2F4F2F), rgb(0x5C7A71), rgb(0xA3B18A), rgb(0xD9E4DD)],
        description: "Dark green jewel tones grounded with soft moss and leaf colours, for that earthy, luxe natural feel",
        tags: &["green", "deep", "earthy", "luxury"],
    },
    KeywordPalette {
        keyword: "ocean serenity",
        category: "nature",
        colors: [rgb(0x04395E), rgb(0x0F4C75), rgb(0x3282B8), rgb(0x87CEEB), rgb(0xE0F7FA)],
        description: "Deep ocean blues evolving into calm sky & water tones — soothing and serene",
        tags: &["blue", "calm", "serene", "water"],
    },
    KeywordPalette {
        keyword: "lavender haze",
        category: "nature",
        colors: [rgb(0xE6E1FF), rgb(0xD1C7E8), rgb(0xB8A9D6), rgb(0x9B8BC4), rgb(0x7E6DB2)],
        description: "Dreamy lavender gradient inspired by misty morning fields",
        tags: &["pastel", "purple", "dreamy", "soft"],
    },
    KeywordPalette {
        keyword: "mushroom forest",
        category: "nature",
        colors: [rgb(0x8B7D6B), rgb(0xA67C52), rgb(0xD2B48C), rgb(0xF5DEB3), rgb(0x567162)],
        description: "Earthy mushroom and forest floor tones with subtle purple undertones",
        tags: &["earthy", "natural", "mushroom", "forest"],
    },
    KeywordPalette {
        keyword: "winter frost",
        category: "nature",
        colors: [rgb(0xE6E6FA), rgb(0xB0C4DE), rgb(0x87CEEB), rgb(0x4682B4), rgb(0x2F4F4F)],
        description: "Cool, crisp tones of a winter morning",
        tags: &["cool", "winter", "blue", "crisp"],
    },
    KeywordPalette {
        keyword: "calico cat",
        category: "nature",
        colors: [rgb(0x141414), rgb(0xE5B33E), rgb(0xA67C38), rgb(0x686868), rgb(0xFFFFFF)],
        description: "Playful mix of warm oranges, and soft neutrals inspired by calico cats",
        tags: &["playful", "warm", "cute", "neutral"],
    },
    KeywordPalette {
        keyword: "underwater coral",
        category: "nature",
        colors: [rgb(0xFF7F50), rgb(0xFF6347), rgb(0x20B2AA), rgb(0x87CEEB), rgb(0xF0FFFF)],
        description: "Vibrant coral reef colors with ocean blue depths",
        tags: &["coral", "ocean", "vibrant", "marine"],
    },
    KeywordPalette {
        keyword: "butterfly wings",
        category: "nature",
        colors: [rgb(0xFF1493), rgb(0x9370DB), rgb(0x00CED1), rgb(0xFFD700), rgb(0xFF69B4)],
        description: "Iridescent colors of tropical butterfly wings",
        tags: &["butterfly", "iridescent", "tropical", "colorful"],
    },
    KeywordPalette {
        keyword: "succulent garden",
        category: "nature",
        colors: [rgb(0x9ACD32), rgb(0x228B22), rgb(0xF5DEB3), rgb(0xDEB887), rgb(0x8FBC8F)],
        description: "Muted greens and sandy tones of desert succulents",
        tags: &["succulent", "desert", "green", "natural"],
    },
    KeywordPalette {
        keyword: "moonbeam meadow",
        category: "nature",
        colors: [rgb(0xE6E6FA), rgb(0xB0C4DE), rgb(0x98FB98), rgb(0xF0E68C), rgb(0xFFFACD)],
        description: "Ethereal pastels of a meadow bathed in moonlight",
        tags: &["ethereal", "pastel", "moonlight", "meadow"],
    },
    KeywordPalette {
        keyword: "midnight galaxy",
        category: "nature",
        colors: [rgb(0x0B0033), rgb(0x1C1C54), rgb(0x4B0082), rgb(0x8A2BE2), rgb(0xFFD700)],
        description: "Cosmic purples and gold stars of a midnight sky",
        tags: &["cosmic", "purple", "mystical", "night"],
    },
    KeywordPalette {
        keyword: "icy aurora",
        category: "nature",
        colors: [rgb(0x0F2027), rgb(0x203A43), rgb(0x2C5364), rgb(0x7FFFD4), rgb(0xADFFEF)],
        description: "Frozen blues with shimmering northern lights",
        tags: &["aurora", "icy", "blue", "northern lights"],
    },
    KeywordPalette {
        keyword: "ancient redwood",
        category: "nature",
        colors: [rgb(0x8B4513), rgb(0xA0522D), rgb(0x654321), rgb(0xD2691E), rgb(0xF4A460)],
        description: "Deep, grounded browns of ancient redwood forests",
        tags: &["earthy", "natural", "wood", "grounded"],
    },
    KeywordPalette {
        keyword: "desert sage",
        category: "nature",
        colors: [rgb(0x9CAF88), rgb(0xC8D5B9), rgb(0xF5F0E8), rgb(0xE6DDD4), rgb(0xD4C5B9)],
        description: "Muted sage greens with sandy desert undertones",
        tags: &["earthy", "natural", "sage", "desert"],
    },
    KeywordPalette {
        keyword: "mountain mist",
        category: "nature",
        colors: [rgb(0x8B9DC3), rgb(0xDFE7FD), rgb(0xF7F9FF), rgb(0xE8E8E8), rgb(0xC5C5C5)],
        description: "Cool mountain air with misty morning clouds",
        tags: &["cool", "misty", "mountain", "serene"],
    },
    KeywordPalette {
        keyword: "river stone",
        category: "nature",
        colors: [rgb(0x696969), rgb(0x808080), rgb(0xA9A9A9), rgb(0xD3D3D3), rgb(0xF5F5F5)],
        description: "Smooth gray tones of weathered river stones",
        tags: &["gray", "stone", "weathered", "natural"],
    },
    KeywordPalette {
        keyword: "wildflower field",
        category: "nature",
        colors: [rgb(0xDA70D6), rgb(0xFF69B4), rgb(0x98FB98), rgb(0xFFE4B5), rgb(0x87CEEB)],
        description: "Mixed wildflower colors dancing in meadow breeze",
        tags: &["wildflower", "colorful", "meadow", "mixed"],
    },
    KeywordPalette {
        keyword: "pine forest",
        category: "nature",
        colors: [rgb(0x013220), rgb(0x2F4F2F), rgb(0x228B22), rgb(0x8FBC8F), rgb(0xF0FFF0)],
        description: "Deep evergreen with fresh pine needle highlights",
        tags: &["pine", "evergreen", "forest", "fresh"],
    },
    KeywordPalette {
        keyword: "clay earth",
        category: "nature",
        colors: [rgb(0xB87333), rgb(0xCD853F), rgb(0xDEB887), rgb(0xF5DEB3), rgb(0xFAEBD7)],
        description: "Rich clay soil tones with natural earth pigments",
        tags: &["clay", "earth", "soil", "natural"],
    },
    KeywordPalette {
        keyword: "morning dew",
        category: "nature",
        colors: [rgb(0xF0FFFF), rgb(0xE0FFFF), rgb(0xB0E0E6), rgb(0x87CEEB), rgb(0x4682B4)],
        description: "Fresh morning dew with gentle blue undertones",
        tags: &["fresh", "morning", "dew", "gentle"],
    },
    KeywordPalette {
        keyword: "cozy cafe",
        category: "moods",
        colors: [rgb(0x8B4513), rgb(0xD2691E), rgb(0xF4A460), rgb(0xFFEFD5), rgb(0x2F1B14)],
        description: "Warm browns and creams of a welcoming coffee shop",
        tags: &["brown", "warm", "cozy", "coffee"],
    },
    KeywordPalette {
        keyword: "velvet romance",
        category: "moods",
        colors: [rgb(0x4B0000), rgb(0x800000), rgb(0xB22222), rgb(0xDC143C), rgb(0xFFB6C1)],
        description: "Luxurious reds and pinks for an intimate atmosphere",
        tags: &["romantic", "velvet", "red", "intimate"],
    },
    KeywordPalette {
        keyword: "energetic startup",
        category: "moods",
        colors: [rgb(0xFF6B35), rgb(0x004E89), rgb(0x1A8FE3), rgb(0x00A8CC), rgb(0x7209B7)],
        description: "Bold, modern colors that inspire innovation",
        tags: &["bold", "modern", "tech", "vibrant"],
    },
    KeywordPalette {
        keyword: "sage & blush",
        category: "moods",
        colors: [rgb(0xB7C9B7), rgb(0xE8C5C5), rgb(0xF5F1ED), rgb(0xD4B5B0), rgb(0xA8B5A8)],
        description: "Muted sage green with dusty rose blush tones - calming and sophisticated",
        tags: &["pastel", "calm", "sophisticated", "neutral"],
    },
    KeywordPalette {
        keyword: "citrus burst",
        category: "moods",
        colors: [rgb(0xFF6B35), rgb(0xF7931E), rgb(0xFFD23F), rgb(0x06FFA5), rgb(0x4ECDC4)],
        description: "Energizing citrus colors with fresh mint accents - pure joy and optimism",
        tags: &["bright", "citrus", "energetic", "optimistic"],
    },
    KeywordPalette {
        keyword: "kawaii cafe",
        category: "moods",
        colors: [rgb(0xFFB6C1), rgb(0xFFCCCB), rgb(0xE0FFFF), rgb(0xF0FFF0), rgb(0xFFFACD)],
        description: "Super cute pastel colors perfect for kawaii-style cafes and brands",
        tags: &["kawaii", "cute", "pastel", "cafe"],
    },
    KeywordPalette {
        keyword: "cozy reading nook",
        category: "moods",
        colors: [rgb(0x8B4513), rgb(0xD2691E), rgb(0xF5DEB3), rgb(0xFFEFD5), rgb(0x2F4F4F)],
        description: "Warm, bookish colors for the perfect reading atmosphere",
        tags: &["cozy", "reading", "warm", "bookish"],
    },
    KeywordPalette {
        keyword: "birthday party",
        category: "moods",
        colors: [rgb(0xFF69B4), rgb(0xFFD700), rgb(0x32CD32), rgb(0x87CEEB), rgb(0xFF6347)],
        description: "Cheerful, festive colors that spark celebration and joy",
        tags: &["festive", "celebration", "cheerful", "party"],
    },
    KeywordPalette {
        keyword: "cozy sunday",
        category: "moods",
        colors: [rgb(0xF5F5DC), rgb(0xE6E6FA), rgb(0xD3D3D3), rgb(0xC0C0C0), rgb(0xB0C4DE)],
        description: "Relaxed, muted tones for peaceful downtime",
        tags: &["relaxed", "peaceful", "muted", "lazy"],
    },
    KeywordPalette {
        keyword: "study motivation",
        category: "moods",
        colors: [rgb(0x4169E1), rgb(0x32CD32), rgb(0xFFD700), rgb(0xFF6347), rgb(0xDDA0DD)],
        description: "Energizing yet focused colors to boost productivity",
        tags: &["productive", "energizing", "focus", "study"],
    },
    KeywordPalette {
        keyword: "pastel rainbow",
        category: "moods",
        colors: [rgb(0xFFB3BA), rgb(0xFFDFBA), rgb(0xFFFFBA), rgb(0xBAFFC9), rgb(0xBAE1FF)],
        description: "Soft rainbow pastels that bring gentle joy and whimsy",
        tags: &["pastel", "rainbow", "whimsical", "gentle"],
    },
    KeywordPalette {
        keyword: "grandmother's quilt",
        category: "moods",
        colors: [rgb(0xDDA0DD), rgb(0xF0E68C), rgb(0x98FB98), rgb(0xFFB6C1), rgb(0xE6E6FA)],
        description: "Soft, comforting colors of handmade granny squares and vintage quilts",
        tags: &["comfort", "vintage", "granny square", "handmade"],
    },
    KeywordPalette {
        keyword: "cozy cabin",
        category: "moods",
        colors: [rgb(0x8B4513), rgb(0xCD853F), rgb(0xF4A460), rgb(0xFFEFD5), rgb(0x2F4F4F)],
        description: "Warm, stable colors that provide comfort and security",
        tags: &["comfort", "stability", "cozy", "warm"],
    },
    KeywordPalette {
        keyword: "afternoon tea",
        category: "moods",
        colors: [rgb(0xD2691E), rgb(0xF4A460), rgb(0xFFEFD5), rgb(0xE6E6FA), rgb(0xDDA0DD)],
        description: "Gentle, reassuring colors of a peaceful tea time",
        tags: &["comfort", "peaceful", "tea", "gentle"],
    },
    KeywordPalette {
        keyword: "cotton comfort",
        category: "moods",
        colors: [rgb(0xFFFAF0), rgb(0xF5F5DC), rgb(0xE6E6FA), rgb(0xD3D3D3), rgb(0xC0C0C0)],
        description: "Soft, reliable neutrals that feel like cotton comfort",
        tags: &["comfort", "cotton", "soft", "reliable"],
    },
    KeywordPalette {
        keyword: "warm embrace",
        category: "moods",
        colors: [rgb(0xCD853F), rgb(0xD2691E), rgb(0xF4A460), rgb(0xFFEFD5), rgb(0x8B4513)],
        description: "Enveloping warm tones that provide emotional stability",
        tags: &["warm", "comfort", "stability", "embrace"],
    },
    KeywordPalette {
        keyword: "zen garden",
        category: "moods",
        colors: [rgb(0xF5F5F5), rgb(0xE8E8E8), rgb(0xD3D3D3), rgb(0xA9A9A9), rgb(0x696969)],
        description: "Balanced, stable grays for mindful tranquility",
        tags: &["zen", "stability", "balanced", "mindful"],
    },
    KeywordPalette {
        keyword: "library quiet",
        category: "moods",
        colors: [rgb(0x8B4513), rgb(0xA0522D), rgb(0xD2691E), rgb(0xF5DEB3), rgb(0x2F4F4F)],
        description: "Scholarly browns and muted tones for focused concentration",
        tags: &["quiet", "scholarly", "focused", "muted"],
    },
    KeywordPalette {
        keyword: "digital meditation",
        category: "moods",
        colors: [rgb(0xF0F8FF), rgb(0xE0F2E7), rgb(0xD4E4F7), rgb(0xC5D9ED), rgb(0xB8C5D1)],
        description: "Calm tech-inspired blues and whites for digital meditation",
        tags: &["calm", "digital", "peaceful"],
    },
    KeywordPalette {
        keyword: "golden curry burst",
        category: "moods",
        colors: [rgb(0xFFC300), rgb(0xFFB000), rgb(0xE08D00), rgb(0xC77C00), rgb(0xA65F00)],
        description: "Radiant golden yellow with spicy tones — energy, optimism, vibrancy",
        tags: &["yellow", "warm", "vibrant", "optimistic"],
    },
    KeywordPalette {
        keyword: "calm meditation",
        category: "moods",
        colors: [rgb(0xE8F4F8), rgb(0xB8E6B8), rgb(0x87CEEB), rgb(0xD8BFD8), rgb(0xF0F8FF)],
        description: "Gentle, soothing colors for peace and reflection",
        tags: &["calm", "peaceful", "soft", "meditation"],
    },
    KeywordPalette {
        keyword: "butter & cherry",
        category: "moods",
        colors: [rgb(0xFFEB99), rgb(0xFFD65E), rgb(0xFF6B6B), rgb(0xC72C48), rgb(0x6B1E40)],
        description: "Soft yellow “butter” meets vibrant cherry red tones — playful contrast, warm energy",
        tags: &["warm", "bright", "cheerful", "contrast"],
    },
    KeywordPalette {
        keyword: "romantic dinner",
        category: "moods",
        colors: [rgb(0x8B0000), rgb(0xDC143C), rgb(0xFF69B4), rgb(0xFFEFD5), rgb(0x2F1B14)],
        description: "Rich, intimate colors for a romantic evening",
        tags: &["romantic", "red", "intimate", "elegant"],
    },
    KeywordPalette {
        keyword: "playful kids",
        category: "moods",
        colors: [rgb(0xFF6B6B), rgb(0x4ECDC4), rgb(0x45B7D1), rgb(0x96CEB4), rgb(0xFFEAA7)],
        description: "Bright, cheerful colors that spark joy and creativity",
        tags: &["bright", "playful", "cheerful", "fun"],
    },
    KeywordPalette {
        keyword: "candlelight glow",
        category: "moods",
        colors: [rgb(0x2F1B14), rgb(0x8B4513), rgb(0xCD853F), rgb(0xFFD700), rgb(0xFFE4B5)],
        description: "Golden, soft tones of flickering candlelight",
        tags: &["warm", "soft", "glow", "intimate"],
    },
    KeywordPalette {
        keyword: "professional office",
        category: "moods",
        colors: [rgb(0x2C3E50), rgb(0x34495E), rgb(0x7F8C8D), rgb(0xBDC3C7), rgb(0xECF0F1)],
        description: "Clean, professional grays and blues for business",
        tags: &["professional", "clean", "corporate", "neutral"],
    },
    KeywordPalette {
        keyword: "rainy day",
        category: "moods",
        colors: [rgb(0x708090), rgb(0xA9A9A9), rgb(0xC0C0C0), rgb(0x4682B4), rgb(0xD3D3D3)],
        description: "Cool grays and blues of a soft rainy afternoon",
        tags: &["calm", "cool", "gray", "soothing"],
    },
    KeywordPalette {
        keyword: "lazy day",
        category: "moods",
        colors: [rgb(0x97B3AE), rgb(0xD2E0D3), rgb(0xF0DDD6), rgb(0xF2C3B9), rgb(0xD6CBBF)],
        description: "Warm, neutral tones for a relaxed atmosphere",
        tags: &["relaxed", "warm", "pastel", "cozy"],
    },
    KeywordPalette {
        keyword: "parisian bistro",
        category: "places",
        colors: [rgb(0x800020), rgb(0xF5F5DC), rgb(0xDDD7C7), rgb(0x8B4513), rgb(0x2F1B14)],
        description: "Classic burgundy and cream of a French bistro",
        tags: &["classic", "elegant", "french", "sophisticated"],
    },
    KeywordPalette {
        keyword: "tokyo neon",
        category: "places",
        colors: [rgb(0xFF0080), rgb(0x00FFFF), rgb(0xFF4500), rgb(0x9400D3), rgb(0x000000)],
        description: "Electric, vibrant neon colors of Tokyo nightlife",
        tags: &["neon", "electric", "vibrant", "night"],
    },
    KeywordPalette {
        keyword: "scandinavian home",
        category: "places",
        colors: [rgb(0xF5F5F5), rgb(0xE8E8E8), rgb(0xD3D3D3), rgb(0x696969), rgb(0x2F4F4F)],
        description: "Clean, minimalist grays and whites of Nordic design",
        tags: &["minimal", "clean", "nordic", "simple"],
    },
    KeywordPalette {
        keyword: "hong kong neon harbour",
        category: "places",
        colors: [rgb(0xFC3232), rgb(0xFF9F1C), rgb(0x00B7FF), rgb(0xFFD700), rgb(0x1C2331)],
        description: "Fiery red lanterns, golden signs, neon blue reflections over harbour night, dark skies",
        tags: &["neon", "urban", "night", "hong kong"],
    },
    KeywordPalette {
        keyword: "tropical resort",
        category: "places",
        colors: [rgb(0x00CED1), rgb(0x20B2AA), rgb(0xFFD700), rgb(0xFF6347), rgb(0xFFFFFF)],
        description: "Bright, vacation-inspired tropical colors",
        tags: &["tropical", "bright", "vacation", "turquoise"],
    },
    KeywordPalette {
        keyword: "Ocean Sorbet",
        category: "places",
        colors: [rgb(0xD9895B), rgb(0xF2E9E9), rgb(0x46658C), rgb(0x4A6D8C), rgb(0x2D2D2D)],
        description: "With oceanblues and peachy corals, this palette has a touch of exotic",
        tags: &["ocean", "tropical", "refreshing", "bright"],
    },
    KeywordPalette {
        keyword: "rustic cabin",
        category: "places",
        colors: [rgb(0x8B4513), rgb(0xA0522D), rgb(0xD2691E), rgb(0xF4A460), rgb(0xFFEFD5)],
        description: "Warm, natural wood tones of a mountain retreat",
        tags: &["rustic", "wood", "natural", "cozy"],
    },
    KeywordPalette {
        keyword: "brighton beach",
        category: "places",
        colors: [rgb(0xF1784C), rgb(0xFDE24B), rgb(0x1E90FF), rgb(0x00CED1), rgb(0xFFFFFF)],
        description: "Vibrant beach huts and sunny seaside vibes",
        tags: &["beach", "bright", "seaside", "vibrant"],
    },
    KeywordPalette {
        keyword: "jeju island breeze",
        category: "places",
        colors: [rgb(0x7C7C7C), rgb(0x6DB06D), rgb(0xF58430), rgb(0xF4EDAF), rgb(0x20B2AA)],
        description: "Fresh ocean breeze and green landscapes of Korea's Jeju Island",
        tags: &["jeju", "korean", "ocean", "fresh"],
    },
    KeywordPalette {
        keyword: "yufuin hot spring",
        category: "places",
        colors: [rgb(0x486F59), rgb(0x9A8F85), rgb(0xD4B996), rgb(0xF5E6D3), rgb(0xFF5441)],
        description: "Peaceful earth tones inspired by Yufuin's natural hot springs, wooden ryokan architecture, and misty mountain mornings in Oita Prefecture",
        tags: &["japanese", "hot spring", "peaceful", "earth tone"],
    },
    KeywordPalette {
        keyword: "toledo golden hour",
        category: "places",
        colors: [rgb(0xDAA520), rgb(0xCD853F), rgb(0xD2691E), rgb(0xF4A460), rgb(0x8B4513)],
        description: "Warm golden stones and terracotta roofs of historic Toledo, Spain",
        tags: &["toledo", "spanish", "golden", "historic"],
    },
    KeywordPalette {
        keyword: "chiang mai temple",
        category: "places",
        colors: [rgb(0x88AF90), rgb(0xC07A58), rgb(0xFCE8C2), rgb(0x98432C), rgb(0xFFC219)],
        description: "Golden temples and vibrant colors of Northern Thailand's cultural heart",
        tags: &["chiang mai", "thai", "temple", "cultural"],
    },
    KeywordPalette {
        keyword: "cyberpunk alley",
        category: "places",
        colors: [rgb(0xFF00FF), rgb(0x00FFFF), rgb(0xFF0080), rgb(0x8A2BE2), rgb(0x000000)],
        description: "Neon-soaked dystopian streets with electric pink and cyan",
        tags: &["cyberpunk", "neon", "dystopian", "electric"],
    },
    KeywordPalette {
        keyword: "harbor dusk",
        category: "places",
        colors: [rgb(0x191970), rgb(0x483D8B), rgb(0x6A5ACD), rgb(0x708090), rgb(0xFFB347)],
        description: "Deep blues and amber reflections of a seaside evening",
        tags: &["dusk", "harbor", "blue", "calm"],
    },
    KeywordPalette {
        keyword: "cyber bloom",
        category: "places",
        colors: [rgb(0x00FFFF), rgb(0xFF1493), rgb(0xFF7033), rgb(0xADFFAD), rgb(0x282A3E)],
        description: "Futuristic neon garden with dark tech undertones",
        tags: &["neon", "futuristic", "tech", "vibrant"],
    },
    KeywordPalette {
        keyword: "warm concrete",
        category: "places",
        colors: [rgb(0xD6CCC2), rgb(0xEDEDE9), rgb(0xF5EFE7), rgb(0xE3D5CA), rgb(0xD5BDAF)],
        description: "Soft concrete and stone tones with warm undertones - modern architectural inspiration",
        tags: &["neutral", "modern", "warm", "concrete"],
    },
    KeywordPalette {
        keyword: "moroccan spice market",
        category: "places",
        colors: [rgb(0xD2691E), rgb(0x8B4513), rgb(0xFF6347), rgb(0xDAA520), rgb(0xCD853F)],
        description: "Warm spice colors of bustling North African markets",
        tags: &["warm", "spice", "exotic", "vibrant"],
    },
    KeywordPalette {
        keyword: "city skyline",
        category: "places",
        colors: [rgb(0x1C1C1C), rgb(0x4A4A4A), rgb(0x7A7A7A), rgb(0xA8A8A8), rgb(0xE0E0E0)],
        description: "Urban grays and silvers of a metropolitan landscape",
        tags: &["urban", "modern", "gray", "metropolitan"],
    },
    KeywordPalette {
        keyword: "enchanted forest",
        category: "places",
        colors: [rgb(0x013220), rgb(0x145A32), rgb(0x228B22), rgb(0x66CDAA), rgb(0xADFF2F)],
        description: "Mystical greens and glowing tones of a magical woodland",
        tags: &["forest", "mystical", "green", "enchanted"],
    },
    KeywordPalette {
        keyword: "garden party",
        category: "places",
        colors: [rgb(0x859E91), rgb(0xC3D0A8), rgb(0xF0EEE2), rgb(0xF7E0E4), rgb(0x99AC73)],
        description: "Bright, cheerful colors for a festive outdoor gathering",
        tags: &["garden", "pastel", "peaceful"],
    },
    KeywordPalette {
        keyword: "fish and chips shop",
        category: "places",
        colors: [rgb(0xDAA520), rgb(0xF4A460), rgb(0x8FBC8F), rgb(0x2E8B57), rgb(0xF5F5DC)],
        description: "Golden crispy colors with fresh green mushy peas - classic British comfort",
        tags: &["british", "comfort food", "golden", "classic"],
    },
    KeywordPalette {
        keyword: "pizza parlor",
        category: "places",
        colors: [rgb(0xE16E0E), rgb(0x536304), rgb(0xB92F17), rgb(0xEA9109), rgb(0xF5DEB3)],
        description: "Rich tomato red, golden cheese, and fresh herb green of pizza perfection",
        tags: &["pizza", "italian", "comfort food", "vibrant"],
    },
    KeywordPalette {
        keyword: "candy shop",
        category: "places",
        colors: [rgb(0xFF1493), rgb(0x00CED1), rgb(0xFFD700), rgb(0x32CD32), rgb(0xFF69B4)],
        description: "Sweet, vibrant colors of a childhood candy store dream",
        tags: &["candy", "sweet", "childhood", "vibrant"],
    },
    KeywordPalette {
        keyword: "bakery bliss",
        category: "places",
        colors: [rgb(0xDEB887), rgb(0xF4A460), rgb(0xFFEFD5), rgb(0xD2691E), rgb(0x8B4513)],
        description: "Warm bread and pastry colors with rich coffee undertones",
        tags: &["bakery", "warm", "bread", "cozy"],
    },
    KeywordPalette {
        keyword: "digital matrix",
        category: "places",
        colors: [rgb(0x00FF41), rgb(0x003300), rgb(0x008F11), rgb(0x39FF14), rgb(0x000000)],
        description: "Green digital rain and matrix code aesthetics",
        tags: &["cyberpunk", "digital", "matrix", "code"],
    },
    KeywordPalette {
        keyword: "summer beach",
        category: "seasons",
        colors: [rgb(0x87CEEB), rgb(0xF0E68C), rgb(0xFF7F50), rgb(0x98FB98), rgb(0xFFFFFF)],
        description: "Sun, sand, and sea colors of summer vacation",
        tags: &["summer", "beach", "vacation", "bright"],
    },
    KeywordPalette {
        keyword: "terracotta dreams",
        category: "seasons",
        colors: [rgb(0xE2725B), rgb(0xD4A574), rgb(0xF4E4BC), rgb(0xC8956D), rgb(0xA0522D)],
        description: "Rich terracotta and clay tones with cream highlights - artisanal pottery inspiration",
        tags: &["warm", "earthy", "artisanal", "terracotta"],
    },
    KeywordPalette {
        keyword: "spring bloom",
        category: "seasons",
        colors: [rgb(0xFFB6C1), rgb(0x98FB98), rgb(0x87CEEB), rgb(0xFFFFE0), rgb(0xDDA0DD)],
        description: "Fresh, blooming colors of springtime awakening",
        tags: &["spring", "fresh", "bloom", "pastel"],
    },
    KeywordPalette {
        keyword: "terra cotta sunset",
        category: "seasons",
        colors: [rgb(0xD46A47), rgb(0xBF4E30), rgb(0xA13F2B), rgb(0xF2C19F), rgb(0xEDE0D4)],
        description: "Muted terracotta & burnt clay hues paired with sandy tones, grounded & artisanal",
        tags: &["earthy", "warm", "artisanal", "sunset"],
    },
    KeywordPalette {
        keyword: "desert bloom",
        category: "seasons",
        colors: [rgb(0xC19A6B), rgb(0xFFD700), rgb(0xFF69B4), rgb(0xFF7F50), rgb(0x98FB98)],
        description: "Bright blossoms and sandy tones of desert in spring",
        tags: &["desert", "spring", "bloom", "colorful"],
    },
    KeywordPalette {
        keyword: "autumn harvest",
        category: "seasons",
        colors: [rgb(0xFF8C00), rgb(0xDAA520), rgb(0xCD853F), rgb(0x8B4513), rgb(0xA0522D)],
        description: "Rich, harvested colors of autumn abundance",
        tags: &["autumn", "harvest", "rich", "orange"],
    },
    KeywordPalette {
        keyword: "winter wonderland",
        category: "seasons",
        colors: [rgb(0xF0F8FF), rgb(0xE6E6FA), rgb(0xB0C4DE), rgb(0x4682B4), rgb(0x2F4F4F)],
        description: "Crisp, snowy colors of winter magic",
        tags: &["winter", "snow", "crisp", "blue"],
    },
    KeywordPalette {
        keyword: "sunrise glow",
        category: "seasons",
        colors: [rgb(0xFF4500), rgb(0xFF8C00), rgb(0xFFD700), rgb(0xFFA07A), rgb(0xFFFACD)],
        description: "Warm, glowing colors of the morning sun",
        tags: &["sunrise", "warm", "bright", "hopeful"],
    },
    KeywordPalette {
        keyword: "Retro Christmas",
        category: "seasons",
        colors: [rgb(0x7A1008), rgb(0xE22413), rgb(0xE2D7AC), rgb(0x3A8232), rgb(0x2F5323)],
        description: "Classic red and green with a vintage holiday feel",
        tags: &["christmas", "retro", "festive", "classic"],
    },
    KeywordPalette {
        keyword: "lunar new year",
        category: "seasons",
        colors: [rgb(0xDC143C), rgb(0xFFD700), rgb(0xFF6347), rgb(0x8B0000), rgb(0xFFA500)],
        description: "Auspicious red and gold colors for prosperity and celebration",
        tags: &["lunar new year", "auspicious", "festive", "traditional"],
    },
    KeywordPalette {
        keyword: "cherry blossom festival",
        category: "seasons",
        colors: [rgb(0xFFB6C1), rgb(0xFFC0CB), rgb(0x98FB98), rgb(0xF0E68C), rgb(0xFFFFFF)],
        description: "Delicate pink blossoms with fresh spring greens",
        tags: &["cherry blossom", "spring", "delicate", "festival"],
    },
    KeywordPalette {
        keyword: "halloween magic",
        category: "seasons",
        colors: [rgb(0xFF4500), rgb(0x800080), rgb(0x000000), rgb(0xFFD700), rgb(0x228B22)],
        description: "Spooky yet magical colors of autumn Halloween nights",
        tags: &["halloween", "spooky", "magical", "autumn"],
    },
    KeywordPalette {
        keyword: "y2k millennium",
        category: "seasons",
        colors: [rgb(0xFF00FF), rgb(0x00FFFF), rgb(0xFFFF00), rgb(0xFF69B4), rgb(0x7CFC00)],
        description: "Electric millennium colors of the Y2K era and digital optimism",
        tags: &["y2k", "millennium", "electric", "digital"],
    },
    KeywordPalette {
        keyword: "y2k frosted tips",
        category: "seasons",
        colors: [rgb(0xE0E0E0), rgb(0xC0C0C0), rgb(0x00BFFF), rgb(0xFF1493), rgb(0x32CD32)],
        description: "Metallic silver with bright accent colors of early 2000s fashion",
        tags: &["y2k", "metallic", "fashion", "2000s"],
    },
    KeywordPalette {
        keyword: "new millennium party",
        category: "seasons",
        colors: [rgb(0x800080), rgb(0xFF00FF), rgb(0x00CED1), rgb(0xFFD700), rgb(0xFF4500)],
        description: "Celebratory colors of the year 2000 countdown party",
        tags: &["y2k", "party", "celebration", "2000"],
    },
    KeywordPalette {
        keyword: "vintage retro",
        category: "styles",
        colors: [rgb(0xD2691E), rgb(0xCD853F), rgb(0xF4A460), rgb(0xDDA0DD), rgb(0x20B2AA)],
        description: "Nostalgic colors from the groovy decades",
        tags: &["vintage", "retro", "nostalgic", "70s"],
    },
    KeywordPalette {
        keyword: "modern minimalist",
        category: "styles",
        colors: [rgb(0x000000), rgb(0xFFFFFF), rgb(0x808080), rgb(0xF5F5F5), rgb(0x2C2C2C)],
        description: "Clean, stark colors of contemporary design",
        tags: &["modern", "minimal", "clean", "stark"],
    },
    KeywordPalette {
        keyword: "olive & shadows",
        category: "styles",
        colors: [rgb(0x556B2F), rgb(0x708238), rgb(0x9BBF9E), rgb(0xC8D6B9), rgb(0xF5F0E1)],
        description: "Earthy greens with shadowy olive, balanced with soft neutrals — ideal as a ‘new neutral’ palette",
        tags: &["green", "olive", "neutral", "soft"],
    },
    KeywordPalette {
        keyword: "cotton candy dreams",
        category: "styles",
        colors: [rgb(0xFFE1E6), rgb(0xE1F5E1), rgb(0xE6E1FF), rgb(0xFFF5E1), rgb(0xE1FFFF)],
        description: "Ultra-soft pastels reminiscent of cotton candy and sweet dreams",
        tags: &["pastel", "soft", "dreamy", "sweet"],
    },
    KeywordPalette {
        keyword: "neon naturals",
        category: "styles",
        colors: [rgb(0x39FF14), rgb(0xFF073A), rgb(0x1B03A3), rgb(0xFFD700), rgb(0xFF6600)],
        description: "Electric brights balanced with natural undertones",
        tags: &["neon", "bold", "electric", "modern"],
    },
    KeywordPalette {
        keyword: "2025 trends",
        category: "styles",
        colors: [rgb(0x373737), rgb(0x748794), rgb(0x768578), rgb(0xC0777C), rgb(0xF4EEF1)],
        description: "A trendy, balanced palette for 2025 with warm and cool tones",
        tags: &["trendy", "balanced", "earthy", "2025"],
    },
    KeywordPalette {
        keyword: "midnight luxe",
        category: "styles",
        colors: [rgb(0x0D1B2A), rgb(0x1B263B), rgb(0x415A77), rgb(0x778DA9), rgb(0xE0E1DD)],
        description: "Deep midnight blues with silver accents - luxury and sophistication",
        tags: &["luxury", "sophisticated", "blue", "elegant"],
    },
    KeywordPalette {
        keyword: "bubble tea aesthetic",
        category: "styles",
        colors: [rgb(0xFBC4A7), rgb(0xFFB467), rgb(0x583B39), rgb(0xF0DFC5), rgb(0x85695D)],
        description: "Soft, milky pastels inspired by popular bubble tea flavors",
        tags: &["bubble tea", "aesthetic", "milky", "trendy"],
    },
    KeywordPalette {
        keyword: "unicorn magic",
        category: "styles",
        colors: [rgb(0xFF69B4), rgb(0x9370DB), rgb(0x00CED1), rgb(0xFFD700), rgb(0xF15AAB)],
        description: "Magical, iridescent colors that sparkle with unicorn dreams",
        tags: &["unicorn", "magical", "sparkle", "fantasy"],
    },
    KeywordPalette {
        keyword: "pastel goth",
        category: "styles",
        colors: [rgb(0xE6E6FA), rgb(0xFFB6C1), rgb(0x98FB98), rgb(0xDDA0DD), rgb(0x2F2F2F)],
        description: "Soft pastels balanced with dark gothic undertones",
        tags: &["pastel", "goth", "soft", "dark"],
    },
    KeywordPalette {
        keyword: "dreamy pastels",
        category: "styles",
        colors: [rgb(0xFFE1E6), rgb(0xE1FFE1), rgb(0xE1E1FF), rgb(0xFFFFE1), rgb(0xE1FFFF)],
        description: "Ultra-soft dreamy pastels for ethereal, cloud-like aesthetics",
        tags: &["pastel", "dreamy", "soft", "ethereal"],
    },
    KeywordPalette {
        keyword: "cosmic purple twilight",
        category: "styles",
        colors: [rgb(0x4B0082), rgb(0x6A0DAD), rgb(0x9932CC), rgb(0xDA70D6), rgb(0xF8F0FF)],
        description: "Purple tones with mystic, futuristic / twilight vibes – cosmic and dreamy yet bold",
        tags: &["purple", "cosmic", "dreamy", "futuristic"],
    },
    KeywordPalette {
        keyword: "cozy mocha luxury",
        category: "styles",
        colors: [rgb(0x6B4F4B), rgb(0xA68C82), rgb(0xD2B48C), rgb(0xF2E8DC), rgb(0x8F715B)],
        description: "Rich warm neutrals and mochas, reflecting comfort and quiet luxury (Mocha Mousse vibes)",
        tags: &["warm", "neutral", "cozy", "luxury"],
    },
    KeywordPalette {
        keyword: "American Vintage",
        category: "styles",
        colors: [rgb(0x0C8D90), rgb(0xE8E3C3), rgb(0xDEA937), rgb(0xCE4A1C), rgb(0x4E3B2B)],
        description: "A nostalgic palette inspired by classic American design",
        tags: &["vintage", "american", "nostalgic", "classic"],
    },
    KeywordPalette {
        keyword: "Matcha & Sakura",
        category: "styles",
        colors: [rgb(0x839146), rgb(0xDEE780), rgb(0xF5F1EB), rgb(0xFFFFFF), rgb(0xF7D2C4)],
        description: "Soft greens and pinks inspired by Japanese matcha and cherry blossoms — delicate, balanced, serene",
        tags: &["soft", "green", "pink", "serene"],
    },
    KeywordPalette {
        keyword: "bohemian artistic",
        category: "styles",
        colors: [rgb(0x8B008B), rgb(0xFF6347), rgb(0xFFD700), rgb(0x20B2AA), rgb(0xCD853F)],
        description: "Creative, eclectic colors of artistic expression",
        tags: &["bohemian", "artistic", "creative", "eclectic"],
    },
    KeywordPalette {
        keyword: "muted earth",
        category: "styles",
        colors: [rgb(0x1F4976), rgb(0x488691), rgb(0x816B58), rgb(0x4E6447), rgb(0x364D32)],
        description: "Subdued, earthy tones for a grounded aesthetic",
        tags: &["earthy", "muted", "grounded", "natural"],
    },
    KeywordPalette {
        keyword: "my personal favourite",
        category: "styles",
        colors: [rgb(0x0A7AA6), rgb(0x0BADBF), rgb(0x7FA62D), rgb(0xD9BC2B), rgb(0xD9663D)],
        description: "A balanced, harmonious yet vintage palette with a mix of warm and cool tones",
        tags: &["It's me!", "harmonious", "warm", "cool"],
    },
];

/// Named preset palettes.
pub const THEMES: &[(&str, [Color; 5])] = &[
    (
        "sunset",
        [rgb(0xFF6B6B), rgb(0xFF8E53), rgb(0xFFE66D), rgb(0xFF7F7F), rgb(0xFFB347)],
    ),
    (
        "ocean",
        [rgb(0x4ECDC4), rgb(0x44A08D), rgb(0x096DD9), rgb(0x73D3FF), rgb(0x00CED1)],
    ),
    (
        "forest",
        [rgb(0x52C41A), rgb(0x73D13D), rgb(0x237804), rgb(0xA0D468), rgb(0x8FBC8F)],
    ),
    (
        "pastel",
        [rgb(0xFFB7C5), rgb(0xC7CEEA), rgb(0xB5EAD7), rgb(0xFFE5B4), rgb(0xF0E6FF)],
    ),
    (
        "retro",
        [rgb(0xFF7F50), rgb(0xF4A460), rgb(0xDDA0DD), rgb(0x20B2AA), rgb(0xCD853F)],
    ),
    (
        "minimalist",
        [rgb(0x2F2F2F), rgb(0x5F5F5F), rgb(0x8F8F8F), rgb(0xBFBFBF), rgb(0xE0E0E0)],
    ),
];

/// Look up a preset by name, case-insensitively.
pub fn theme(name: &str) -> Option<&'static [Color; 5]> {
    THEMES
        .iter()
        .find(|(theme, _)| theme.eq_ignore_ascii_case(name.trim()))
        .map(|(_, colors)| colors)
}

/// Case-insensitive substring search over keyword, description, tags and
/// category. A blank query matches nothing.
pub fn search(query: &str) -> Vec<&'static KeywordPalette> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let hit = |text: &str| text.to_lowercase().contains(&query);
    KEYWORD_PALETTES
        .iter()
        .filter(|p| {
            hit(p.keyword) || hit(p.description) || p.tags.iter().any(|t| hit(t)) || hit(p.category)
        })
        .collect()
}

pub fn by_category(category: &str) -> Vec<&'static KeywordPalette> {
    KEYWORD_PALETTES
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Up to `count` distinct palettes in random order.
pub fn random_palettes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<&'static KeywordPalette> {
    KEYWORD_PALETTES.choose_multiple(rng, count).collect()
}
