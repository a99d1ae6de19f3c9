use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale, answer_code_serde};

/// SSS: Somatic Symptom Scale, five-item short form.
/// Each item rated 1–5. Total 5–25.
pub struct Sss;

/// Ratings at or above this value flag the symptom.
pub const FLAG_THRESHOLD: u8 = 3;

/// Answer labels for ratings 1 through 5.
pub const SCALE_LABELS: [&str; 5] = [
    "Not at all",
    "A little bit",
    "Somewhat",
    "Quite a bit",
    "Very much",
];

/// A single symptom rating, 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, TS)]
#[ts(export, as = "u8")]
pub struct Rating(u8);

answer_code_serde!(Rating);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const LOWEST: Rating = Rating(Self::MIN);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        SCALE_LABELS[usize::from(self.0 - Self::MIN)]
    }
}

impl TryFrom<u8> for Rating {
    type Error = InstrumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InstrumentError::OutOfRange {
                field: "rating",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    TroubleSleeping,
    LowEnergy,
    Headaches,
    ChestPainBreath,
    DigestiveProblems,
}

impl Symptom {
    pub const ALL: [Symptom; 5] = [
        Symptom::TroubleSleeping,
        Symptom::LowEnergy,
        Symptom::Headaches,
        Symptom::ChestPainBreath,
        Symptom::DigestiveProblems,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Symptom::TroubleSleeping => "trouble_sleeping",
            Symptom::LowEnergy => "low_energy",
            Symptom::Headaches => "headaches",
            Symptom::ChestPainBreath => "chest_pain_breath",
            Symptom::DigestiveProblems => "digestive_problems",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Symptom::TroubleSleeping => "Trouble sleeping",
            Symptom::LowEnergy => "Low energy or fatigue",
            Symptom::Headaches => "Headaches",
            Symptom::ChestPainBreath => "Chest pain or shortness of breath",
            Symptom::DigestiveProblems => "Digestive problems",
        }
    }
}

/// Ratings for the five SSS items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SssSymptoms {
    pub trouble_sleeping: Rating,
    pub low_energy: Rating,
    pub headaches: Rating,
    pub chest_pain_breath: Rating,
    pub digestive_problems: Rating,
}

impl SssSymptoms {
    /// Every item rated `rating`.
    pub fn uniform(rating: Rating) -> Self {
        Self {
            trouble_sleeping: rating,
            low_energy: rating,
            headaches: rating,
            chest_pain_breath: rating,
            digestive_problems: rating,
        }
    }

    pub fn get(&self, symptom: Symptom) -> Rating {
        match symptom {
            Symptom::TroubleSleeping => self.trouble_sleeping,
            Symptom::LowEnergy => self.low_energy,
            Symptom::Headaches => self.headaches,
            Symptom::ChestPainBreath => self.chest_pain_breath,
            Symptom::DigestiveProblems => self.digestive_problems,
        }
    }

    /// `(symptom, rating)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Symptom, Rating)> + '_ {
        Symptom::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BurdenCategory {
    Minimal,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl BurdenCategory {
    pub fn description(self) -> &'static str {
        match self {
            BurdenCategory::Minimal => "Very low physical symptom burden",
            BurdenCategory::Low => "Mild physical symptoms present",
            BurdenCategory::Medium => "Moderate physical symptom burden",
            BurdenCategory::High => "Significant physical symptom burden",
            BurdenCategory::VeryHigh => {
                "Very high physical symptom burden - consider professional consultation"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysicalBurden {
    /// Sum of all ratings, 5–25.
    pub total_score: u8,
    pub category: BurdenCategory,
    /// Labels of symptoms rated at or above [`FLAG_THRESHOLD`], in item order.
    pub flagged_symptoms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomSeverity {
    Minimal,
    Mild,
    Moderate,
    Significant,
    Severe,
}

/// Per-symptom line of a detailed breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomAnalysis {
    pub symptom: Symptom,
    pub label: String,
    pub score: Rating,
    pub severity: SymptomSeverity,
    pub flagged: bool,
}

pub fn categorize_burden(total_score: u8) -> BurdenCategory {
    match total_score {
        22.. => BurdenCategory::VeryHigh,
        17.. => BurdenCategory::High,
        12.. => BurdenCategory::Medium,
        8.. => BurdenCategory::Low,
        _ => BurdenCategory::Minimal,
    }
}

pub fn symptom_severity(rating: Rating) -> SymptomSeverity {
    match rating.value() {
        1 => SymptomSeverity::Minimal,
        2 => SymptomSeverity::Mild,
        3 => SymptomSeverity::Moderate,
        4 => SymptomSeverity::Significant,
        _ => SymptomSeverity::Severe,
    }
}

fn is_flagged(rating: Rating) -> bool {
    rating.value() >= FLAG_THRESHOLD
}

pub fn calculate_sss_scores(symptoms: &SssSymptoms) -> PhysicalBurden {
    let total_score: u8 = symptoms.iter().map(|(_, r)| r.value()).sum();

    let flagged_symptoms = symptoms
        .iter()
        .filter(|(_, r)| is_flagged(*r))
        .map(|(s, _)| s.label().to_string())
        .collect();

    PhysicalBurden {
        total_score,
        category: categorize_burden(total_score),
        flagged_symptoms,
    }
}

/// Canned guidance for a burden category, followed by the flagged
/// symptoms when there are any.
pub fn physical_recommendations(burden: &PhysicalBurden) -> Vec<String> {
    let canned: &[&str] = match burden.category {
        BurdenCategory::Minimal => &[
            "Your physical symptoms are minimal - great job maintaining your health!",
            "Continue with regular exercise and healthy lifestyle practices",
        ],
        BurdenCategory::Low => &[
            "Consider stress management techniques like meditation or yoga",
            "Prioritize good sleep hygiene and regular sleep schedule",
        ],
        BurdenCategory::Medium => &[
            "Consider discussing these symptoms with a healthcare provider",
            "Explore stress reduction activities and relaxation techniques",
            "Review your diet and ensure proper nutrition",
        ],
        BurdenCategory::High => &[
            "We recommend consulting with a healthcare professional",
            "Consider stress management counseling or therapy",
            "Keep a symptom diary to track patterns",
        ],
        BurdenCategory::VeryHigh => &[
            "Please consider seeking medical attention for these symptoms",
            "A healthcare provider can help evaluate and address these concerns",
            "Don't hesitate to reach out for professional support",
        ],
    };

    let mut recommendations: Vec<String> = canned.iter().map(|r| r.to_string()).collect();
    if !burden.flagged_symptoms.is_empty() {
        recommendations.push(format!(
            "Focus areas: {}",
            burden.flagged_symptoms.join(", ")
        ));
    }
    recommendations
}

pub fn analyze_symptoms(symptoms: &SssSymptoms) -> Vec<SymptomAnalysis> {
    symptoms
        .iter()
        .map(|(symptom, score)| SymptomAnalysis {
            symptom,
            label: symptom.label().to_string(),
            score,
            severity: symptom_severity(score),
            flagged: is_flagged(score),
        })
        .collect()
}

impl Instrument for Sss {
    fn id(&self) -> &str {
        "sss"
    }

    fn name(&self) -> &str {
        "SSS"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: LazyLock<Vec<Domain>> = LazyLock::new(|| {
            let rating = ScoreRange::codes(Rating::MIN, Rating::MAX);

            let subscales: Vec<Subscale> = Symptom::ALL
                .iter()
                .map(|s| Subscale {
                    id: s.id().to_string(),
                    name: s.label().to_string(),
                    score_type: ScoreType::Rating,
                    range: rating,
                    description: None,
                    choices: SCALE_LABELS.iter().map(|l| l.to_string()).collect(),
                })
                .collect();

            vec![Domain {
                id: "physical_symptoms".to_string(),
                name: "Physical Symptoms".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Total),
                composite_range: Some(ScoreRange::codes(5, 25)),
                description: Some(
                    "5-7: minimal, 8-11: low, 12-16: medium, 17-21: high, 22+: very high"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}
