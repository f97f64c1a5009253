//! Mini-playbook synthesis for a predicted topic.
//!
//! A playbook is the offline stand-in for a full teaching response: a seed
//! summary, three generic classroom strategies, and a textbook reference.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use sahayak_core::constants::SCHEMA_VERSION;
use sahayak_core::models::{CachedArtifact, Language, TeachingStrategy, TopicPrediction};

use crate::seeds;

/// Build the artifact for `prediction` in `language`, fetched at `now`.
pub fn synthesize(prediction: &TopicPrediction, language: Language, now: DateTime<Utc>) -> CachedArtifact {
    CachedArtifact {
        id: artifact_id(&prediction.topic, language, now),
        topic: prediction.topic.clone(),
        language,
        seed: seed_text(&prediction.topic, language),
        strategies: strategies(language),
        ncert_ref: format!("NCERT Class {}, Chapter reference", prediction.grade),
        prefetched: true,
        fetched_at: now,
        prediction: prediction.clone(),
        schema_version: SCHEMA_VERSION,
    }
}

/// `{topic}_{lang}_{millis}_{suffix}`. The random suffix keeps ids unique when
/// two runs land in the same millisecond.
pub fn artifact_id(topic: &str, language: Language, now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{topic}_{}_{}_{}",
        language.code(),
        now.timestamp_millis(),
        &suffix[..8]
    )
}

/// Seed text: requested language, then English, then a generic placeholder.
pub fn seed_text(topic: &str, language: Language) -> String {
    match seeds::lookup(topic) {
        Some(seed) => seed.text(language).to_string(),
        None => format!("Quick tips for teaching {topic}"),
    }
}

/// The three standard strategies, in `language`.
pub fn strategies(language: Language) -> Vec<TeachingStrategy> {
    STRATEGIES
        .iter()
        .map(|texts| {
            let (title, description) = match language {
                Language::Hi => texts.hi,
                Language::En => texts.en,
                Language::Kn => texts.kn,
            };
            TeachingStrategy {
                title: title.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

struct StrategyText {
    hi: (&'static str, &'static str),
    en: (&'static str, &'static str),
    kn: (&'static str, &'static str),
}

const STRATEGIES: [StrategyText; 3] = [
    StrategyText {
        hi: ("ठोस वस्तुओं का प्रयोग करें", "असली चीज़ों से समझाएं - फल, कंकड़, पत्ते"),
        en: ("Use concrete objects", "Explain with real objects - fruits, pebbles, leaves"),
        kn: ("ನೈಜ ವಸ್ತುಗಳನ್ನು ಬಳಸಿ", "ಹಣ್ಣು, ಕಲ್ಲು, ಎಲೆಗಳಂತಹ ನೈಜ ವಸ್ತುಗಳಿಂದ ವಿವರಿಸಿ"),
    },
    StrategyText {
        hi: ("कहानी से जोड़ें", "रोज़मर्रा की कहानी से अवधारणा जोड़ें"),
        en: ("Connect with story", "Connect concept with everyday stories"),
        kn: ("ಕಥೆಯೊಂದಿಗೆ ಜೋಡಿಸಿ", "ದಿನನಿತ್ಯದ ಕಥೆಗಳೊಂದಿಗೆ ಪರಿಕಲ್ಪನೆಯನ್ನು ಜೋಡಿಸಿ"),
    },
    StrategyText {
        hi: ("समूह गतिविधि", "4-5 बच्चों के समूह में अभ्यास करवाएं"),
        en: ("Group activity", "Practice in groups of 4-5 students"),
        kn: ("ಗುಂಪು ಚಟುವಟಿಕೆ", "4-5 ಮಕ್ಕಳ ಗುಂಪುಗಳಲ್ಲಿ ಅಭ್ಯಾಸ ಮಾಡಿಸಿ"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_core::models::PredictionReason;

    fn prediction(topic: &str, grade: u8) -> TopicPrediction {
        TopicPrediction {
            topic: topic.to_string(),
            chapter: "Chapter".into(),
            subject: "maths".into(),
            grade,
            confidence: 0.85,
            reason: PredictionReason::CurrentChapter,
        }
    }

    #[test]
    fn seed_falls_back_to_placeholder() {
        assert_eq!(seed_text("mean", Language::Hi), "Quick tips for teaching mean");
        assert!(seed_text("Fractions", Language::En).starts_with("Fractions: Parts of whole"));
    }

    #[test]
    fn strategies_are_translated() {
        let en = strategies(Language::En);
        assert_eq!(en.len(), 3);
        assert_eq!(en[0].title, "Use concrete objects");
        assert_eq!(strategies(Language::Hi)[2].title, "समूह गतिविधि");
        assert_eq!(strategies(Language::Kn)[1].title, "ಕಥೆಯೊಂದಿಗೆ ಜೋಡಿಸಿ");
    }

    #[test]
    fn reference_uses_prediction_grade() {
        let artifact = synthesize(&prediction("fractions", 5), Language::En, Utc::now());
        assert_eq!(artifact.ncert_ref, "NCERT Class 5, Chapter reference");
        assert!(artifact.prefetched);
    }

    #[test]
    fn ids_differ_within_one_millisecond() {
        let now = Utc::now();
        let a = artifact_id("ratio", Language::Hi, now);
        let b = artifact_id("ratio", Language::Hi, now);
        assert_ne!(a, b);
        assert!(a.starts_with(&format!("ratio_hi_{}_", now.timestamp_millis())));
    }
}
