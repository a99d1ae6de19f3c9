use serde::{Deserialize, Serialize};
use ts_rs::TS;

use karmic_instruments::emotion::{EmotionResult, categorize_all, get_top_emotions};
use karmic_instruments::instruments::sss::{
    SymptomAnalysis, analyze_symptoms, physical_recommendations,
};

use super::assessment::WellbeingAssessment;

/// Everything the results screen shows for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub assessment: WellbeingAssessment,
    pub top_emotions: Vec<EmotionResult>,
    pub emotions: Vec<EmotionResult>,
    pub burden_description: String,
    pub recommendations: Vec<String>,
    pub symptom_breakdown: Vec<SymptomAnalysis>,
}

impl WellbeingAssessment {
    pub fn summary(&self, top: usize) -> AssessmentSummary {
        AssessmentSummary {
            assessment: self.clone(),
            top_emotions: get_top_emotions(&self.emotion_scores, top),
            emotions: categorize_all(&self.emotion_scores),
            burden_description: self.physical_burden.category.description().to_string(),
            recommendations: physical_recommendations(&self.physical_burden),
            symptom_breakdown: analyze_symptoms(&self.physical_symptoms),
        }
    }
}
