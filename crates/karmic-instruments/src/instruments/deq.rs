use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::emotion::{Emotion, EmotionScores};
use crate::error::InstrumentError;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale, answer_code_serde};

/// DEQ: Discrete Emotions Questionnaire, short form.
/// Four single-choice items (1–5) and one multi-select sensation item (1–6),
/// scored onto eight emotion channels.
pub struct Deq;

/// Item identifiers, as used in [`crate::scoring::ScoreEntry::subscale_id`].
pub mod item {
    pub const FEELING: &str = "feeling";
    pub const STRESS_RESPONSE: &str = "stress_response";
    pub const PHYSICAL_SENSATIONS: &str = "physical_sensations";
    pub const EASE: &str = "ease";
    pub const DESIRES: &str = "desires";
}

/// A single-choice answer code, 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TS)]
#[ts(export, as = "u8")]
pub struct Choice(u8);

answer_code_serde!(Choice);

impl Choice {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const FIRST: Choice = Choice(Self::MIN);

    pub fn value(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl TryFrom<u8> for Choice {
    type Error = InstrumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InstrumentError::OutOfRange {
                field: "choice",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.0
    }
}

/// A physical sensation code for the multi-select item, 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TS)]
#[ts(export, as = "u8")]
pub struct Sensation(u8);

answer_code_serde!(Sensation);

impl Sensation {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn value(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl TryFrom<u8> for Sensation {
    type Error = InstrumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InstrumentError::OutOfRange {
                field: "sensation",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<Sensation> for u8 {
    fn from(sensation: Sensation) -> Self {
        sensation.0
    }
}

/// Answers to the five DEQ items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeqResponses {
    pub feeling: Choice,
    pub stress_response: Choice,
    #[serde(default)]
    pub physical_sensations: Vec<Sensation>,
    pub ease: Choice,
    pub desires: Choice,
}

/// Partial weight vector over the eight emotion channels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Weights {
    happiness: f64,
    sadness: f64,
    anger: f64,
    fear: f64,
    anxiety: f64,
    disgust: f64,
    relaxation: f64,
    desire: f64,
}

const NONE: Weights = Weights {
    happiness: 0.0,
    sadness: 0.0,
    anger: 0.0,
    fear: 0.0,
    anxiety: 0.0,
    disgust: 0.0,
    relaxation: 0.0,
    desire: 0.0,
};

impl Weights {
    fn add(&mut self, other: &Weights) {
        self.happiness += other.happiness;
        self.sadness += other.sadness;
        self.anger += other.anger;
        self.fear += other.fear;
        self.anxiety += other.anxiety;
        self.disgust += other.disgust;
        self.relaxation += other.relaxation;
        self.desire += other.desire;
    }

    fn get(&self, emotion: Emotion) -> f64 {
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
}

const FEELING: [Weights; 5] = [
    Weights { happiness: 0.9, relaxation: 0.4, ..NONE },
    NONE,
    Weights { anxiety: 0.9, fear: 0.3, ..NONE },
    Weights { sadness: 0.9, anxiety: 0.4, ..NONE },
    Weights { anger: 0.9, anxiety: 0.3, ..NONE },
];

const STRESS_RESPONSE: [Weights; 5] = [
    Weights { anger: 0.9, desire: 0.5, ..NONE },
    Weights { fear: 0.9, anxiety: 0.6, ..NONE },
    Weights { desire: 0.9, happiness: 0.4, ..NONE },
    Weights { anxiety: 0.9, fear: 0.4, ..NONE },
    Weights { sadness: 0.9, anxiety: 0.5, ..NONE },
];

const PHYSICAL_SENSATIONS: [Weights; 6] = [
    Weights { anger: 0.4, anxiety: 0.6, ..NONE },
    Weights { disgust: 0.9, ..NONE },
    Weights { anxiety: 0.8, fear: 0.3, ..NONE },
    Weights { relaxation: 0.9, happiness: 0.3, ..NONE },
    Weights { desire: 0.6, anger: 0.3, ..NONE },
    Weights { sadness: 0.6, relaxation: 0.4, ..NONE },
];

const EASE: [Weights; 5] = [
    Weights { relaxation: 1.0, ..NONE },
    Weights { relaxation: 0.7, ..NONE },
    Weights { anxiety: 0.5, ..NONE },
    Weights { anxiety: 0.8, ..NONE },
    Weights { anxiety: 1.0, ..NONE },
];

const DESIRES: [Weights; 5] = [
    Weights { desire: 0.9, anger: 0.2, ..NONE },
    Weights { happiness: 0.7, relaxation: 0.3, ..NONE },
    Weights { sadness: 0.7, ..NONE },
    Weights { disgust: 0.8, ..NONE },
    Weights { anger: 0.9, ..NONE },
];

/// Normalization denominators. Certain answer combinations can exceed
/// these, so normalized scores are capped at 100.
const MAX_SCORES: Weights = Weights {
    happiness: 1.8,
    sadness: 2.2,
    anger: 2.1,
    fear: 1.3,
    anxiety: 4.1,
    disgust: 1.7,
    relaxation: 2.4,
    desire: 2.4,
};

/// Score DEQ answers onto the eight emotion channels (0–100 each).
pub fn calculate_deq_scores(responses: &DeqResponses) -> EmotionScores {
    let mut raw = NONE;

    raw.add(&FEELING[responses.feeling.index()]);
    raw.add(&STRESS_RESPONSE[responses.stress_response.index()]);
    for sensation in &responses.physical_sensations {
        raw.add(&PHYSICAL_SENSATIONS[sensation.index()]);
    }
    raw.add(&EASE[responses.ease.index()]);
    raw.add(&DESIRES[responses.desires.index()]);

    let score = |emotion: Emotion| normalize(raw.get(emotion), MAX_SCORES.get(emotion));
    EmotionScores {
        happiness: score(Emotion::Happiness),
        sadness: score(Emotion::Sadness),
        anger: score(Emotion::Anger),
        fear: score(Emotion::Fear),
        anxiety: score(Emotion::Anxiety),
        disgust: score(Emotion::Disgust),
        relaxation: score(Emotion::Relaxation),
        desire: score(Emotion::Desire),
    }
}

fn normalize(raw: f64, max: f64) -> u8 {
    ((raw / max) * 100.0).round().clamp(0.0, 100.0) as u8
}

impl Instrument for Deq {
    fn id(&self) -> &str {
        "deq"
    }

    fn name(&self) -> &str {
        "DEQ"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: LazyLock<Vec<Domain>> = LazyLock::new(|| {
            let choice = ScoreRange::codes(Choice::MIN, Choice::MAX);
            let normalized = ScoreRange::codes(0, 100);

            vec![
                Domain {
                    id: "questions".to_string(),
                    name: "Emotional Questions".to_string(),
                    subscales: vec![
                        question(
                            item::FEELING,
                            "How have you been feeling lately?",
                            ScoreType::SingleChoice,
                            choice,
                            &[
                                "Mostly happy and content",
                                "Neutral",
                                "Worried or anxious",
                                "Sad or down",
                                "Frustrated or irritated",
                            ],
                        ),
                        question(
                            item::STRESS_RESPONSE,
                            "How do you usually respond to stress or challenges?",
                            ScoreType::SingleChoice,
                            choice,
                            &[
                                "Get fired up and fight back",
                                "Feel scared and avoid it",
                                "Get motivated and tackle it",
                                "Feel overwhelmed and anxious",
                                "Feel defeated or hopeless",
                            ],
                        ),
                        question(
                            item::PHYSICAL_SENSATIONS,
                            "Which physical sensations have you noticed? Select all that apply.",
                            ScoreType::MultiChoice,
                            ScoreRange::codes(Sensation::MIN, Sensation::MAX),
                            &[
                                "Muscle tension",
                                "Nausea or stomach discomfort",
                                "Racing heart or feeling on edge",
                                "Calm and relaxed",
                                "High energy and restlessness",
                                "Fatigue or low energy",
                            ],
                        ),
                        question(
                            item::EASE,
                            "How at ease do you feel in daily life?",
                            ScoreType::SingleChoice,
                            choice,
                            &[
                                "Very relaxed and at peace",
                                "Generally comfortable",
                                "Somewhat tense or unsettled",
                                "Often stressed or on edge",
                                "Constantly anxious",
                            ],
                        ),
                        question(
                            item::DESIRES,
                            "What are you drawn to or wanting right now?",
                            ScoreType::SingleChoice,
                            choice,
                            &[
                                "Strongly motivated to pursue goals",
                                "Content with what I have",
                                "Not wanting much of anything",
                                "Wanting to avoid things or people",
                                "Wanting to confront or change things",
                            ],
                        ),
                    ],
                    composite_score_type: None,
                    composite_range: None,
                    description: None,
                },
                Domain {
                    id: "emotion_scores".to_string(),
                    name: "Emotion Scores".to_string(),
                    subscales: Emotion::ALL
                        .iter()
                        .map(|e| Subscale {
                            id: e.as_str().to_string(),
                            name: capitalize(e.as_str()),
                            score_type: ScoreType::Normalized,
                            range: normalized,
                            description: None,
                            choices: Vec::new(),
                        })
                        .collect(),
                    composite_score_type: Some(ScoreType::Normalized),
                    composite_range: Some(normalized),
                    description: Some(
                        "0-20: very low, 21-40: low, 41-60: moderate, 61-80: high, 81+: very high"
                            .to_string(),
                    ),
                },
            ]
        });
        &DOMAINS
    }
}

fn question(
    id: &str,
    prompt: &str,
    score_type: ScoreType,
    range: ScoreRange,
    choices: &[&str],
) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: prompt.to_string(),
        score_type,
        range,
        description: None,
        choices: choices.iter().map(|c| c.to_string()).collect(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
