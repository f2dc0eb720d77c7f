//! Display names and taglines for sampled combinations.
//!
//! The rule-based namer mixes words keyed by tone, color temperature, cultural
//! influence, UI paradigm, and design era. Its RNG is seeded from the
//! combination fingerprint, so the same combination always gets the same name.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand::seq::IndexedRandom;

use crate::data::Combination;

/// Generated display name and tagline for one design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignName {
    /// Two-word display name.
    pub name: String,
    /// Sentence-cased one-line pitch.
    pub tagline: String,
}

/// Produces a `(name, tagline)` pair from a combination's values.
pub trait Namer {
    /// Name a single combination.
    fn name(&self, combination: &Combination) -> DesignName;

    /// Name a batch, preserving order.
    fn name_all(&self, combinations: &[Combination]) -> Vec<DesignName> {
        combinations.iter().map(|combo| self.name(combo)).collect()
    }
}

type WordTable = &'static [(&'static str, &'static [&'static str])];

const TONE_WORDS: WordTable = &[
    ("trustworthy", &["Solid", "Iron", "Steady", "True", "Anchor", "Bastion", "Pillar", "Fortress"]),
    ("playful", &["Bubble", "Bounce", "Fizz", "Pop", "Zigzag", "Confetti", "Whimsy", "Quirk"]),
    ("serious", &["Apex", "Vertex", "Stratum", "Axiom", "Helix", "Protocol", "Canon", "Thesis"]),
    ("luxurious", &["Noir", "Velvet", "Opulent", "Regal", "Satin", "Gilded", "Imperial", "Royal"]),
    ("friendly", &["Sunny", "Meadow", "Hearth", "Breeze", "Harbor", "Haven", "Bloom", "Garden"]),
    ("edgy", &["Razor", "Glitch", "Void", "Neon", "Clash", "Fracture", "Static", "Riot"]),
    ("calm", &["Misty", "Willow", "Drift", "Serene", "Haze", "Tranquil", "Whisper", "Echo"]),
    ("energetic", &["Bolt", "Surge", "Ignite", "Flash", "Spark", "Blaze", "Volt", "Turbo"]),
    ("mysterious", &["Shadow", "Enigma", "Obsidian", "Phantom", "Cipher", "Shroud", "Veil", "Dusk"]),
    ("nostalgic", &["Retro", "Vintage", "Heritage", "Timeless", "Revival", "Epoch", "Era", "Legacy"]),
];

const TEMPERATURE_WORDS: WordTable = &[
    ("cool", &["Frost", "Ice", "Arctic", "Glacier", "Winter", "Crystal", "Tundra", "Polar"]),
    ("warm", &["Ember", "Sunset", "Amber", "Flame", "Coral", "Copper", "Sienna", "Blush"]),
    ("neutral", &["Stone", "Slate", "Ash", "Carbon", "Graphite", "Pewter", "Chalk", "Quartz"]),
    ("mixed", &["Prism", "Spectrum", "Blend", "Fusion", "Mosaic", "Palette", "Gradient", "Flow"]),
];

const CULTURE_WORDS: WordTable = &[
    ("scandinavian", &["Nordic", "Fjord", "Birch", "Hygge", "Lund", "Saga", "Tide"]),
    ("japanese", &["Sakura", "Kaze", "Mizu", "Sora", "Kyo", "Tori", "Wabi"]),
    ("mediterranean", &["Azure", "Olive", "Terra", "Cove", "Porto", "Mare", "Sol"]),
    ("american_corporate", &["Summit", "Liberty", "Charter", "Keystone", "Frontier", "Metro"]),
    ("british_traditional", &["Tweed", "Crown", "Oxford", "Regent", "Harrow", "Thames"]),
    ("german_industrial", &["Werk", "Stahl", "Rhein", "Kraft", "Bau", "Präzision"]),
    ("french_elegant", &["Rive", "Soirée", "Lumière", "Atelier", "Maison", "Riviera"]),
    ("latin_vibrant", &["Fiesta", "Alma", "Vida", "Fuego", "Cielo", "Tropic", "Luna"]),
    ("african_bold", &["Savanna", "Baobab", "Kente", "Sahel", "Serengeti", "Nubia"]),
    ("middle_eastern", &["Oasis", "Dune", "Minaret", "Bazaar", "Saffron", "Kasbah", "Silk"]),
];

const PARADIGM_WORDS: WordTable = &[
    ("skeuomorphic", &["Real", "Tangible", "Touch", "Craft", "Made"]),
    ("flat", &["Clean", "Pure", "Clear", "Crisp", "Stark"]),
    ("material", &["Layer", "Depth", "Surface", "Float", "Lift"]),
    ("neumorphic", &["Soft", "Sculpt", "Mold", "Shape", "Form"]),
    ("glassmorphic", &["Glass", "Blur", "Trans", "Lucent", "Pane"]),
    ("brutalist", &["Raw", "Bold", "Block", "Mass", "Force"]),
    ("claymorphic", &["Clay", "Dough", "Pillow", "Plush", "Putty"]),
    ("organic", &["Blob", "Petal", "Pebble", "Tendril", "Grove"]),
    ("editorial", &["Column", "Folio", "Press", "Serif", "Gazette"]),
];

const ERA_WORDS: WordTable = &[
    ("arts_and_crafts", &["Morris", "Loom", "Guild", "Hand", "Trellis"]),
    ("art_nouveau", &["Nouveau", "Flora", "Vine", "Curve", "Bloom"]),
    ("art_deco", &["Deco", "Gatsby", "Luxe", "Gilded", "Jazz"]),
    ("bauhaus", &["Gropius", "Weimar", "Function", "Modular", "Grid"]),
    ("mid_century_modern", &["Eames", "Atomic", "Starburst", "Retro", "Mid"]),
    ("swiss_international", &["Helvetica", "Grid", "Order", "System", "Type"]),
    ("pop_art", &["Warhol", "Comic", "Halftone", "Wham", "Pop"]),
    ("psychedelic", &["Trip", "Swirl", "Groovy", "Lava", "Kaleido"]),
    ("punk", &["Ransom", "Safety", "Zine", "Snarl", "Spike"]),
    ("memphis", &["Memphis", "Squiggle", "Radical", "Confetti", "Wild"]),
    ("grunge", &["Flannel", "Static", "Grit", "Smudge", "Rust"]),
    ("y2k", &["Cyber", "Digi", "Chrome", "Pixel", "Dot"]),
    ("web2_glossy", &["Gloss", "Shine", "Badge", "Mirror", "Sheen"]),
    ("flat_2010s", &["Swatch", "Tile", "Card", "Simple", "Fresh"]),
    ("neo_brutalist", &["Slab", "Outline", "Blunt", "Stark", "Hard"]),
    ("scandinavian_modern", &["Linen", "Oak", "Light", "Calm", "Pale"]),
];

const TAGLINE_TEMPLATES: &[&str] = &[
    "{era} design with {mood} {temp} tones",
    "A {paradigm} approach meets {culture} sensibility",
    "{mood} vibes for {industry}",
    "Where {paradigm} meets {culture} aesthetics",
    "{era}-inspired design for {audience}",
    "{culture} minimalism with {mood} undertones",
    "The {paradigm} way to {industry}",
    "{mood} meets {temp}: a {era} perspective",
    "Crafted for {audience} with {culture} roots",
    "{temp} palette, {mood} spirit",
];

fn words(table: WordTable, key: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, words)| *words)
}

/// Deterministic rule-based namer.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedNamer;

struct NameInputs<'a> {
    tone: &'a str,
    temp: &'a str,
    culture: &'a str,
    paradigm: &'a str,
    era: &'a str,
}

impl RuleBasedNamer {
    fn pick(rng: &mut StdRng, table: WordTable, key: &str, fallback: &'static str) -> &'static str {
        words(table, key)
            .and_then(|options| options.choose(rng).copied())
            .unwrap_or(fallback)
    }

    fn display_name(rng: &mut StdRng, inputs: &NameInputs<'_>, strategy: usize) -> String {
        let (first, second) = match strategy {
            0 => (
                Self::pick(rng, TONE_WORDS, inputs.tone, "Design"),
                Self::pick(rng, TEMPERATURE_WORDS, inputs.temp, "System"),
            ),
            1 => (
                Self::pick(rng, CULTURE_WORDS, inputs.culture, "Global"),
                Self::pick(rng, TEMPERATURE_WORDS, inputs.temp, "Flow"),
            ),
            2 => (
                Self::pick(rng, PARADIGM_WORDS, inputs.paradigm, "Modern"),
                Self::pick(rng, CULTURE_WORDS, inputs.culture, "Hub"),
            ),
            3 => (
                Self::pick(rng, ERA_WORDS, inputs.era, "Modern"),
                Self::pick(rng, TONE_WORDS, inputs.tone, "Core"),
            ),
            _ => (
                Self::pick(rng, TONE_WORDS, inputs.tone, "Prime"),
                Self::pick(rng, CULTURE_WORDS, inputs.culture, "Core"),
            ),
        };
        format!("{first} {second}")
    }
}

impl Namer for RuleBasedNamer {
    fn name(&self, combination: &Combination) -> DesignName {
        let mut rng = StdRng::seed_from_u64(combination.fingerprint().seed_u64());
        let value = |dimension: &str, default: &'static str| {
            combination.get(dimension).unwrap_or(default).to_string()
        };
        let tone = value("emotional_tone", "friendly");
        let temp = value("color_temperature", "neutral");
        let culture = value("cultural_influence", "international");
        let paradigm = value("ui_paradigm", "flat");
        let era = value("design_era", "contemporary");
        let inputs = NameInputs {
            tone: &tone,
            temp: &temp,
            culture: &culture,
            paradigm: &paradigm,
            era: &era,
        };

        let strategy = rng.random_range(0..5);
        let name = Self::display_name(&mut rng, &inputs, strategy);

        let template = TAGLINE_TEMPLATES
            .choose(&mut rng)
            .copied()
            .unwrap_or(TAGLINE_TEMPLATES[0]);
        let tagline = template
            .replace("{era}", &title_words(&era))
            .replace("{paradigm}", &spaced(&paradigm))
            .replace("{culture}", &title_words(&culture))
            .replace("{industry}", &spaced(&value("industry", "tech")))
            .replace("{audience}", &spaced(&value("target_audience", "users")))
            .replace("{mood}", &spaced(&value("color_palette_mood", "natural")))
            .replace("{temp}", &temp);

        DesignName {
            name,
            tagline: sentence_case(&tagline),
        }
    }
}

fn spaced(raw: &str) -> String {
    raw.replace('_', " ")
}

/// `mid_century_modern` -> `Mid Century Modern`.
fn title_words(raw: &str) -> String {
    spaced(raw)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Upper-case the first character and lower-case the rest.
fn sentence_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect::<String>(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_combo() -> Combination {
        Combination::from_pairs([
            ("ui_paradigm", "glassmorphic"),
            ("design_era", "mid_century_modern"),
            ("emotional_tone", "calm"),
            ("color_temperature", "cool"),
            ("color_palette_mood", "jewel"),
            ("cultural_influence", "scandinavian"),
            ("industry", "real_estate"),
            ("target_audience", "gen_z"),
        ])
    }

    #[test]
    fn names_are_deterministic_per_combination() {
        let namer = RuleBasedNamer;
        let first = namer.name(&sample_combo());
        let second = namer.name(&sample_combo());
        assert_eq!(first, second);
        assert_eq!(first.name.split(' ').count(), 2);
        assert!(!first.tagline.is_empty());
    }

    #[test]
    fn tagline_is_sentence_cased() {
        let named = RuleBasedNamer.name(&sample_combo());
        let mut chars = named.tagline.chars();
        let first = chars.next().expect("non-empty tagline");
        assert!(first.is_uppercase() || !first.is_alphabetic());
        assert!(chars.all(|ch| !ch.is_uppercase()));
        assert!(!named.tagline.contains('{'));
        assert!(!named.tagline.contains('_'));
    }

    #[test]
    fn missing_dimensions_fall_back_to_defaults() {
        let named = RuleBasedNamer.name(&Combination::from_pairs([("density", "airy")]));
        assert_eq!(named.name.split(' ').count(), 2);
        assert!(!named.tagline.contains('{'));
    }

    #[test]
    fn every_taxonomy_value_has_words() {
        let taxonomy = crate::taxonomy::Taxonomy::builtin();
        for (dimension, table) in [
            ("emotional_tone", TONE_WORDS),
            ("color_temperature", TEMPERATURE_WORDS),
            ("cultural_influence", CULTURE_WORDS),
            ("ui_paradigm", PARADIGM_WORDS),
            ("design_era", ERA_WORDS),
        ] {
            for value in taxonomy.values_of(dimension).expect("dimension") {
                assert!(words(table, value).is_some(), "{dimension}.{value} has no words");
            }
        }
    }

    #[test]
    fn case_helpers() {
        assert_eq!(title_words("mid_century_modern"), "Mid Century Modern");
        assert_eq!(
            sentence_case("Art Deco design with JEWEL cool tones"),
            "Art deco design with jewel cool tones"
        );
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn name_all_preserves_order() {
        let combos = vec![
            sample_combo(),
            Combination::from_pairs([("emotional_tone", "edgy")]),
        ];
        let names = RuleBasedNamer.name_all(&combos);
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], RuleBasedNamer.name(&combos[0]));
        assert_eq!(names[1], RuleBasedNamer.name(&combos[1]));
    }
}
