//! Built-in design dimension registry.
//!
//! Thirty dimensions grouped in seven tiers. Dimensions flagged `core` form the
//! subset used in core-only manifests; the remaining dimensions are left for the
//! downstream generator to decide.

use super::{Dimension, DimensionValue, Taxonomy};
use crate::constants::sampler::DEFAULT_VALUE_WEIGHT;
use crate::constants::taxonomy::BUILTIN_TAXONOMY_VERSION;

struct BuiltinDimension {
    name: &'static str,
    description: &'static str,
    core: bool,
    values: &'static [(&'static str, &'static str)],
}

/// Values that render unreliably are sampled less often than the rest.
const CURATED_WEIGHTS: &[(&str, &str, f64)] = &[
    ("type_case_treatment", "lowercase_only", 0.5),
    ("type_letter_spacing", "very_loose", 0.5),
    ("alignment", "right", 0.5),
    ("alignment", "justified", 0.75),
    ("grid_system", "broken", 0.75),
    ("grid_system", "freeform", 0.75),
    ("corner_radius", "organic", 0.75),
    ("border_style", "double", 0.75),
];

const BUILTIN_DIMENSIONS: &[BuiltinDimension] = &[
    // Tier 1: Core visual style
    BuiltinDimension {
        name: "ui_paradigm",
        description: "The foundational visual treatment approach",
        core: true,
        values: &[
            ("skeuomorphic", "Mimics real-world materials and textures"),
            ("flat", "Two-dimensional, no shadows or gradients"),
            ("material", "Google's layered paper metaphor with shadows"),
            ("neumorphic", "Soft, extruded elements with subtle shadows"),
            ("glassmorphic", "Frosted glass with blur and transparency"),
            ("brutalist", "Raw, stark, intentionally unpolished"),
            ("claymorphic", "3D, inflated, toy-like appearance"),
            ("organic", "Flowing, natural shapes, blob-like"),
            ("editorial", "Magazine-inspired, typography-focused"),
        ],
    },
    BuiltinDimension {
        name: "design_era",
        description: "Historical design movement influence",
        core: true,
        values: &[
            ("arts_and_crafts", "1880s-1920s handcrafted, ornate"),
            ("art_nouveau", "1890-1910 flowing, organic, decorative"),
            ("art_deco", "1920s-1930s geometric, glamorous, symmetrical"),
            ("bauhaus", "1919-1933 functional, geometric, primary colors"),
            ("mid_century_modern", "1940s-1960s clean lines, organic curves"),
            ("swiss_international", "1950s-1960s grid, helvetica, objective"),
            ("pop_art", "1950s-1960s bold, colorful, comic-like"),
            ("psychedelic", "1960s-1970s swirling, vibrant, trippy"),
            ("punk", "1970s-1980s DIY, collage, ransom-note"),
            ("memphis", "1980s geometric, colorful, playful"),
            ("grunge", "1990s distressed, textured, dark"),
            ("y2k", "1998-2004 glossy, tech-optimist, chrome"),
            ("web2_glossy", "2004-2010 gradients, reflections, badges"),
            ("flat_2010s", "2010-2015 minimal, colorful, no shadows"),
            ("neo_brutalist", "2020s bold borders, raw, high contrast"),
            ("scandinavian_modern", "Minimal, functional, light, natural"),
        ],
    },
    BuiltinDimension {
        name: "density",
        description: "Information and element density",
        core: true,
        values: &[
            ("ultra_airy", "Maximum whitespace, very few elements"),
            ("airy", "Generous spacing, breathing room"),
            ("balanced", "Standard comfortable spacing"),
            ("compact", "Tighter spacing, more content visible"),
            ("dense", "Minimal spacing, data-heavy"),
            ("ultra_dense", "Dashboard/terminal density"),
        ],
    },
    // Tier 2: Color system
    BuiltinDimension {
        name: "color_theory",
        description: "Color relationship approach",
        core: false,
        values: &[
            ("monochromatic", "Single hue, varying lightness/saturation"),
            ("analogous", "Adjacent colors on wheel"),
            ("complementary", "Opposite colors on wheel"),
            ("split_complementary", "Base + two adjacent to complement"),
            ("triadic", "Three evenly spaced colors"),
            ("tetradic", "Four colors, two complementary pairs"),
            ("neutral_with_accent", "Grays/neutrals with one pop color"),
        ],
    },
    BuiltinDimension {
        name: "color_temperature",
        description: "Overall warmth/coolness",
        core: true,
        values: &[
            ("cool", "Blues, greens, purples dominate"),
            ("warm", "Reds, oranges, yellows dominate"),
            ("neutral", "Grays, tans, balanced"),
            ("mixed", "Intentional warm/cool contrast"),
        ],
    },
    BuiltinDimension {
        name: "color_saturation",
        description: "Intensity of colors",
        core: false,
        values: &[
            ("desaturated", "Muted, grayish tones"),
            ("muted", "Slightly reduced saturation"),
            ("balanced", "Natural saturation"),
            ("vivid", "High saturation, punchy"),
            ("hyper_saturated", "Neon, electric intensity"),
        ],
    },
    BuiltinDimension {
        name: "color_contrast",
        description: "Value range between lightest and darkest",
        core: false,
        values: &[
            ("low", "Subtle, soft transitions"),
            ("medium", "Standard readable contrast"),
            ("high", "Strong black/white presence"),
            ("extreme", "Maximum contrast, stark"),
        ],
    },
    BuiltinDimension {
        name: "color_palette_mood",
        description: "Emotional/thematic color family",
        core: true,
        values: &[
            ("earth", "Browns, tans, forest greens, terracotta"),
            ("pastel", "Soft, light, Easter-egg colors"),
            ("jewel", "Rich sapphire, emerald, ruby, amethyst"),
            ("metallic", "Gold, silver, bronze, copper"),
            ("primary", "Pure red, blue, yellow"),
            ("monochrome", "Black, white, grays only"),
            ("neon", "Electric, glowing colors"),
            ("cyber", "Magenta, cyan, purple, tech colors"),
            ("natural", "Greens, blues, sky, water, earth"),
            ("candy", "Bright pinks, aquas, playful"),
        ],
    },
    BuiltinDimension {
        name: "color_mode",
        description: "Light/dark mode support",
        core: false,
        values: &[
            ("light_only", "Light background only"),
            ("dark_only", "Dark background only"),
            ("both", "Includes theme toggle"),
        ],
    },
    // Tier 3: Typography
    BuiltinDimension {
        name: "type_heading_class",
        description: "Font classification for headings",
        core: true,
        values: &[
            ("geometric_sans", "Constructed, circular (Futura, Poppins, Montserrat)"),
            ("humanist_sans", "Calligraphic influence (Open Sans, Lato, Source Sans)"),
            ("neo_grotesque", "Neutral, uniform (Helvetica, Inter, Roboto)"),
            ("modern_serif", "High contrast, vertical (Didot, Bodoni, Playfair)"),
            ("transitional_serif", "Medium contrast (Times, Georgia, Libre Baskerville)"),
            ("old_style_serif", "Low contrast, angled (Garamond, Palatino, EB Garamond)"),
            ("slab_serif", "Heavy, block serifs (Rockwell, Roboto Slab, Zilla Slab)"),
            ("monospace", "Fixed-width (JetBrains Mono, Fira Code, IBM Plex Mono)"),
            ("display", "Decorative, headline-only"),
            ("handwritten", "Script, casual (Caveat, Patrick Hand)"),
        ],
    },
    BuiltinDimension {
        name: "type_body_class",
        description: "Font classification for body text",
        core: false,
        values: &[
            ("geometric_sans", "Constructed, circular (Futura, Poppins, Montserrat)"),
            ("humanist_sans", "Calligraphic influence (Open Sans, Lato, Source Sans)"),
            ("neo_grotesque", "Neutral, uniform (Helvetica, Inter, Roboto)"),
            ("modern_serif", "High contrast, vertical (Didot, Bodoni, Playfair)"),
            ("transitional_serif", "Medium contrast (Times, Georgia, Libre Baskerville)"),
            ("old_style_serif", "Low contrast, angled (Garamond, Palatino, EB Garamond)"),
            ("slab_serif", "Heavy, block serifs (Rockwell, Roboto Slab, Zilla Slab)"),
            ("monospace", "Fixed-width (JetBrains Mono, Fira Code, IBM Plex Mono)"),
            ("display", "Decorative, headline-only"),
            ("handwritten", "Script, casual (Caveat, Patrick Hand)"),
        ],
    },
    BuiltinDimension {
        name: "type_scale_ratio",
        description: "Mathematical relationship between type sizes",
        core: false,
        values: &[
            ("minor_second", "1.067 - Very tight, subtle"),
            ("major_second", "1.125 - Tight, compact"),
            ("minor_third", "1.200 - Standard, comfortable"),
            ("major_third", "1.250 - Generous"),
            ("perfect_fourth", "1.333 - Pronounced hierarchy"),
            ("golden_ratio", "1.618 - Dramatic, classical"),
        ],
    },
    BuiltinDimension {
        name: "type_case_treatment",
        description: "Text transformation approach",
        core: false,
        values: &[
            ("normal", "Standard mixed case"),
            ("uppercase_headings", "ALL CAPS for headings"),
            ("small_caps", "Small capitals for emphasis"),
            ("lowercase_only", "No capitals anywhere"),
        ],
    },
    BuiltinDimension {
        name: "type_letter_spacing",
        description: "Tracking adjustment",
        core: false,
        values: &[
            ("tight", "-2% to -1%"),
            ("normal", "0%"),
            ("loose", "+2% to +5%"),
            ("very_loose", "+8% to +12%"),
        ],
    },
    BuiltinDimension {
        name: "type_line_height",
        description: "Leading/line-height",
        core: false,
        values: &[
            ("tight", "1.2"),
            ("normal", "1.5"),
            ("loose", "1.75"),
            ("very_loose", "2.0"),
        ],
    },
    // Tier 4: Shape and space
    BuiltinDimension {
        name: "corner_radius",
        description: "Border radius philosophy",
        core: false,
        values: &[
            ("sharp", "0px, no rounding"),
            ("subtle", "2-4px, barely visible"),
            ("rounded", "8-12px, clearly rounded"),
            ("very_rounded", "16-24px, soft"),
            ("pill", "50%/9999px, full round"),
            ("organic", "Irregular, blob-like"),
        ],
    },
    BuiltinDimension {
        name: "spacing_base",
        description: "Base unit for spacing grid",
        core: false,
        values: &[
            ("4px", "4px base unit"),
            ("8px", "8px base unit (most common)"),
            ("10px", "10px base unit"),
            ("12px", "12px base unit"),
        ],
    },
    BuiltinDimension {
        name: "border_style",
        description: "Border treatment",
        core: false,
        values: &[
            ("none", "No borders"),
            ("hairline", "1px subtle"),
            ("thin", "2px visible"),
            ("medium", "3-4px pronounced"),
            ("thick", "5px+ bold"),
            ("double", "Double-line borders"),
            ("dashed", "Dashed lines"),
        ],
    },
    BuiltinDimension {
        name: "shadow_style",
        description: "Shadow treatment",
        core: false,
        values: &[
            ("none", "No shadows"),
            ("subtle", "Barely visible, soft"),
            ("medium", "Standard drop shadow"),
            ("hard", "Sharp, defined edge"),
            ("dramatic", "Long, offset shadows"),
            ("colored", "Tinted shadows"),
            ("layered", "Multiple stacked shadows"),
            ("inset", "Inner shadows (neumorphic)"),
        ],
    },
    BuiltinDimension {
        name: "container_style",
        description: "How containers/cards are defined",
        core: false,
        values: &[
            ("open", "No visual boundary"),
            ("outlined", "Border only, transparent"),
            ("filled", "Solid background"),
            ("floating", "Shadow-defined"),
            ("inset", "Recessed appearance"),
        ],
    },
    // Tier 5: Layout
    BuiltinDimension {
        name: "grid_system",
        description: "Layout grid approach",
        core: false,
        values: &[
            ("single_column", "One column, vertical flow"),
            ("two_column", "Two equal columns"),
            ("three_column", "Three columns"),
            ("four_column", "Four columns"),
            ("twelve_column", "12-column fluid grid"),
            ("asymmetric", "Intentionally unequal"),
            ("modular", "Module-based grid"),
            ("broken", "Overlapping, rule-breaking"),
            ("freeform", "No grid constraints"),
        ],
    },
    BuiltinDimension {
        name: "alignment",
        description: "Text and element alignment",
        core: false,
        values: &[
            ("left", "Left-aligned (LTR default)"),
            ("center", "Centered"),
            ("right", "Right-aligned"),
            ("justified", "Full justification"),
            ("mixed", "Intentionally varied"),
        ],
    },
    BuiltinDimension {
        name: "hierarchy_approach",
        description: "Primary method for creating visual hierarchy",
        core: false,
        values: &[
            ("size", "Size differences dominate"),
            ("color", "Color/saturation differences"),
            ("position", "Placement creates hierarchy"),
            ("weight", "Font weight differences"),
            ("whitespace", "Spacing creates importance"),
        ],
    },
    // Tier 6: Texture and detail
    BuiltinDimension {
        name: "surface_texture",
        description: "Background/surface treatment",
        core: false,
        values: &[
            ("none", "Smooth, flat"),
            ("noise", "Subtle grain/noise"),
            ("paper", "Paper-like texture"),
            ("fabric", "Woven/textile feel"),
            ("gradient_mesh", "Complex gradient backgrounds"),
            ("geometric_pattern", "Repeating geometric shapes"),
            ("organic_pattern", "Natural, irregular patterns"),
        ],
    },
    BuiltinDimension {
        name: "gradient_usage",
        description: "Gradient application",
        core: false,
        values: &[
            ("none", "No gradients"),
            ("subtle_background", "Very soft bg gradients"),
            ("accent", "Gradients on CTAs/accents"),
            ("duotone", "Two-color image treatment"),
            ("mesh", "Complex multi-stop gradients"),
            ("glassmorphic", "Blur + transparency"),
        ],
    },
    BuiltinDimension {
        name: "icon_style",
        description: "Icon treatment",
        core: false,
        values: &[
            ("outlined", "Stroke-only icons"),
            ("filled", "Solid filled icons"),
            ("duotone", "Two-tone icons"),
            ("hand_drawn", "Sketchy, imperfect"),
            ("isometric", "3D isometric"),
            ("emoji", "Emoji as icons"),
        ],
    },
    // Tier 7: Context
    BuiltinDimension {
        name: "industry",
        description: "Target industry vertical",
        core: true,
        values: &[
            ("finance", "Banking, fintech, investing"),
            ("healthcare", "Medical, wellness, health tech"),
            ("education", "EdTech, learning, academic"),
            ("ecommerce", "Online retail, marketplaces"),
            ("saas", "B2B software, productivity"),
            ("gaming", "Games, entertainment"),
            ("media", "News, video, content"),
            ("food", "Restaurants, delivery, recipes"),
            ("travel", "Booking, hospitality"),
            ("real_estate", "Property, listings"),
            ("fashion", "Apparel, luxury goods"),
            ("fitness", "Gyms, workout apps"),
            ("nonprofit", "Charities, causes"),
            ("government", "Public sector, civic"),
            ("creative", "Agencies, portfolios"),
            ("developer", "Dev tools, APIs, docs"),
        ],
    },
    BuiltinDimension {
        name: "target_audience",
        description: "Primary user demographic",
        core: false,
        values: &[
            ("enterprise", "Large business users"),
            ("smb", "Small/medium business"),
            ("consumer_mass", "General public"),
            ("consumer_premium", "Luxury/premium consumers"),
            ("developer", "Technical users"),
            ("children", "Kids, family"),
            ("seniors", "Older adults"),
            ("gen_z", "Younger generation"),
        ],
    },
    BuiltinDimension {
        name: "emotional_tone",
        description: "Intended emotional response",
        core: true,
        values: &[
            ("trustworthy", "Reliable, secure"),
            ("playful", "Fun, lighthearted"),
            ("serious", "Professional, formal"),
            ("luxurious", "Premium, exclusive"),
            ("friendly", "Approachable, warm"),
            ("edgy", "Bold, rebellious"),
            ("calm", "Peaceful, serene"),
            ("energetic", "Dynamic, exciting"),
            ("mysterious", "Intriguing, dark"),
            ("nostalgic", "Retro, sentimental"),
        ],
    },
    BuiltinDimension {
        name: "cultural_influence",
        description: "Geographic/cultural design tradition",
        core: true,
        values: &[
            ("scandinavian", "Nordic minimal, hygge"),
            ("japanese", "Wabi-sabi, zen, minimal"),
            ("mediterranean", "Warm, terracotta, tiles"),
            ("american_corporate", "Professional, blue-chip"),
            ("british_traditional", "Heritage, refined"),
            ("german_industrial", "Engineered, precise"),
            ("french_elegant", "Chic, sophisticated"),
            ("latin_vibrant", "Colorful, energetic"),
            ("african_bold", "Geometric, earth tones"),
            ("middle_eastern", "Ornate, geometric patterns"),
        ],
    },
];

fn curated_weight(dimension: &str, value: &str) -> f64 {
    CURATED_WEIGHTS
        .iter()
        .find(|(dim, val, _)| *dim == dimension && *val == value)
        .map(|(_, _, weight)| *weight)
        .unwrap_or(DEFAULT_VALUE_WEIGHT)
}

pub(super) fn builtin_taxonomy() -> Taxonomy {
    let dimensions = BUILTIN_DIMENSIONS
        .iter()
        .map(|entry| Dimension {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            core: entry.core,
            values: entry
                .values
                .iter()
                .map(|(id, description)| DimensionValue {
                    id: id.to_string(),
                    description: description.to_string(),
                    weight: curated_weight(entry.name, id),
                })
                .collect(),
        })
        .collect();
    Taxonomy {
        version: BUILTIN_TAXONOMY_VERSION.to_string(),
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::CoverageMode;

    #[test]
    fn builtin_registry_is_valid() {
        let taxonomy = builtin_taxonomy();
        assert!(taxonomy.validate().is_ok());
        assert_eq!(taxonomy.len(), 30);
        assert_eq!(taxonomy.version(), BUILTIN_TAXONOMY_VERSION);
    }

    #[test]
    fn curated_weights_point_at_real_values() {
        let taxonomy = builtin_taxonomy();
        for (dimension, value, weight) in CURATED_WEIGHTS {
            let dim = taxonomy.get(dimension).expect("curated dimension exists");
            assert!(dim.position(value).is_some(), "{dimension}.{value} missing");
            assert_eq!(dim.weight(value), *weight);
        }
        let density = taxonomy.get("density").expect("density");
        assert!(density.values().iter().all(|v| v.weight == DEFAULT_VALUE_WEIGHT));
    }

    #[test]
    fn core_subset_covers_naming_inputs() {
        let taxonomy = builtin_taxonomy();
        let core: Vec<&str> = taxonomy
            .active(CoverageMode::CoreOnly)
            .iter()
            .map(|dim| dim.name.as_str())
            .collect();
        for name in [
            "ui_paradigm",
            "design_era",
            "emotional_tone",
            "color_temperature",
            "cultural_influence",
            "industry",
        ] {
            assert!(core.contains(&name), "{name} should be core");
        }
        assert!(core.len() < taxonomy.len());
    }
}
