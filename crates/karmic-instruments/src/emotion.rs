use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of top emotions reported when the caller has no preference.
pub const DEFAULT_TOP_EMOTIONS: usize = 2;

/// The eight emotion channels scored by the DEQ, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Emotion {
    Happiness,
    Sadness,
    Anger,
    Fear,
    Anxiety,
    Disgust,
    Relaxation,
    Desire,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Anxiety,
        Emotion::Disgust,
        Emotion::Relaxation,
        Emotion::Desire,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happiness => "happiness",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Anxiety => "anxiety",
            Emotion::Disgust => "disgust",
            Emotion::Relaxation => "relaxation",
            Emotion::Desire => "desire",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized 0–100 intensity for each emotion channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionScores {
    pub happiness: u8,
    pub sadness: u8,
    pub anger: u8,
    pub fear: u8,
    pub anxiety: u8,
    pub disgust: u8,
    pub relaxation: u8,
    pub desire: u8,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> u8 {
        match emotion {
            Emotion::Happiness => self.happiness,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Anxiety => self.anxiety,
            Emotion::Disgust => self.disgust,
            Emotion::Relaxation => self.relaxation,
            Emotion::Desire => self.desire,
        }
    }

    /// `(emotion, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u8)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmotionCategory {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Bucket a 0–100 score. Boundary values fall into the lower category.
pub fn categorize_emotion_score(score: u8) -> EmotionCategory {
    match score {
        0..=20 => EmotionCategory::VeryLow,
        21..=40 => EmotionCategory::Low,
        41..=60 => EmotionCategory::Moderate,
        61..=80 => EmotionCategory::High,
        _ => EmotionCategory::VeryHigh,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionResult {
    pub emotion: Emotion,
    pub score: u8,
    pub category: EmotionCategory,
}

impl EmotionResult {
    fn new(emotion: Emotion, score: u8) -> Self {
        Self {
            emotion,
            score,
            category: categorize_emotion_score(score),
        }
    }
}

/// Every emotion with its category, in declaration order.
pub fn categorize_all(scores: &EmotionScores) -> Vec<EmotionResult> {
    scores
        .iter()
        .map(|(emotion, score)| EmotionResult::new(emotion, score))
        .collect()
}

/// The `count` highest-scoring emotions, highest first.
///
/// Ties keep declaration order. A `count` above 8 returns all eight.
pub fn get_top_emotions(scores: &EmotionScores, count: usize) -> Vec<EmotionResult> {
    let mut results = categorize_all(scores);
    // sort_by is stable, so equal scores stay in declaration order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(count);
    results
}
