use serde::{Deserialize, Serialize};

/// Why a topic was predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionReason {
    /// The topic belongs to the chapter scheduled for the current week.
    CurrentChapter,
    /// The topic opens the chapter scheduled for the following week.
    NextChapter,
}

/// A topic the curriculum predictor expects to be needed soon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicPrediction {
    pub topic: String,
    /// Title of the chapter the topic belongs to.
    pub chapter: String,
    pub subject: String,
    pub grade: u8,
    /// Confidence in this prediction (0.0–1.0).
    pub confidence: f64,
    pub reason: PredictionReason,
}
