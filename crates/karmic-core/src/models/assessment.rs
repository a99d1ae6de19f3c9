use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use karmic_instruments::emotion::EmotionScores;
use karmic_instruments::instruments::deq::{Choice, DeqResponses, calculate_deq_scores};
use karmic_instruments::instruments::sss::{
    PhysicalBurden, Rating, SssSymptoms, calculate_sss_scores,
};

/// Questionnaire version stamped on every assessment.
pub const ASSESSMENT_VERSION: &str = "1.0";

/// A completed (or skipped) wellbeing assessment: the answers and
/// everything derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellbeingAssessment {
    pub id: Uuid,
    pub emotional_responses: DeqResponses,
    pub physical_symptoms: SssSymptoms,
    pub emotion_scores: EmotionScores,
    pub physical_burden: PhysicalBurden,
    pub completed_at: jiff::Timestamp,
    pub skipped: bool,
    pub version: String,
}

impl WellbeingAssessment {
    /// Score both questionnaires and stamp the result.
    pub fn score(responses: DeqResponses, symptoms: SssSymptoms) -> Self {
        let emotion_scores = calculate_deq_scores(&responses);
        let physical_burden = calculate_sss_scores(&symptoms);
        Self {
            id: Uuid::new_v4(),
            emotional_responses: responses,
            physical_symptoms: symptoms,
            emotion_scores,
            physical_burden,
            completed_at: jiff::Timestamp::now(),
            skipped: false,
            version: ASSESSMENT_VERSION.to_string(),
        }
    }

    /// Placeholder recorded when the user skips the questionnaire.
    ///
    /// Answers default to the first choice, but emotion scores stay at
    /// zero rather than being derived from those defaults.
    pub fn skipped() -> Self {
        let first = Choice::FIRST;
        let symptoms = SssSymptoms::uniform(Rating::LOWEST);

        Self {
            id: Uuid::new_v4(),
            emotional_responses: DeqResponses {
                feeling: first,
                stress_response: first,
                physical_sensations: Vec::new(),
                ease: first,
                desires: first,
            },
            physical_symptoms: symptoms,
            emotion_scores: EmotionScores::default(),
            physical_burden: calculate_sss_scores(&symptoms),
            completed_at: jiff::Timestamp::now(),
            skipped: true,
            version: ASSESSMENT_VERSION.to_string(),
        }
    }
}
