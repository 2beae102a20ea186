use lazy_static::lazy_static;
use std::collections::HashMap;

/// Synthesis control values sent to the provider for one emotional preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionParams {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
}

/// Label used when a request carries an unknown or empty emotion.
pub const DEFAULT_EMOTION: &str = "Neutral";

lazy_static! {
    // Product constants tuned per preset; not derived from anything.
    static ref EMOTION_TABLE: HashMap<&'static str, EmotionParams> = {
        let mut table = HashMap::new();
        table.insert(
            "Neutral",
            EmotionParams { stability: 0.50, similarity_boost: 0.75, style: 0.00 },
        );
        table.insert(
            "Happy",
            EmotionParams { stability: 0.35, similarity_boost: 0.80, style: 0.60 },
        );
        table.insert(
            "Sad",
            EmotionParams { stability: 0.60, similarity_boost: 0.75, style: 0.40 },
        );
        table.insert(
            "Angry",
            EmotionParams { stability: 0.30, similarity_boost: 0.70, style: 0.70 },
        );
        table.insert(
            "Excited",
            EmotionParams { stability: 0.25, similarity_boost: 0.80, style: 0.75 },
        );
        table.insert(
            "Terrified",
            EmotionParams { stability: 0.20, similarity_boost: 0.65, style: 0.85 },
        );
        table.insert(
            "Sarcastic",
            EmotionParams { stability: 0.45, similarity_boost: 0.70, style: 0.55 },
        );
        table.insert(
            "Whisper",
            EmotionParams { stability: 0.70, similarity_boost: 0.85, style: 0.30 },
        );
        table
    };
}

/// Look up the synthesis parameters for an emotion label.
///
/// Unrecognized labels (including the empty string) fall back to the
/// Neutral entry.
pub fn resolve(label: &str) -> EmotionParams {
    EMOTION_TABLE
        .get(label)
        .copied()
        .unwrap_or_else(|| EMOTION_TABLE[DEFAULT_EMOTION])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_labels() {
        let params = resolve("Angry");
        assert_eq!(params.stability, 0.30);
        assert_eq!(params.similarity_boost, 0.70);
        assert_eq!(params.style, 0.70);
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(resolve("Whisper"), resolve("Whisper"));
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        assert_eq!(resolve("Melancholic"), resolve("Neutral"));
    }

    #[test]
    fn empty_label_falls_back_to_neutral() {
        assert_eq!(resolve(""), resolve("Neutral"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // The UI submits canonical spellings; anything else is unknown.
        assert_eq!(resolve("happy"), resolve("Neutral"));
    }

    #[test]
    fn all_values_are_in_unit_range() {
        for label in [
            "Neutral",
            "Happy",
            "Sad",
            "Angry",
            "Excited",
            "Terrified",
            "Sarcastic",
            "Whisper",
        ] {
            let p = resolve(label);
            assert!((0.0..=1.0).contains(&p.stability), "{label} stability");
            assert!(
                (0.0..=1.0).contains(&p.similarity_boost),
                "{label} similarity_boost"
            );
            assert!((0.0..=1.0).contains(&p.style), "{label} style");
        }
    }
}
