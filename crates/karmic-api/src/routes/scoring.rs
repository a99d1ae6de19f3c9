use axum::Json;
use axum::extract::State;
use serde::Serialize;

use karmic_instruments::emotion::{EmotionResult, EmotionScores, get_top_emotions};
use karmic_instruments::instruments::deq::{DeqResponses, calculate_deq_scores};
use karmic_instruments::instruments::sss::{
    PhysicalBurden, SssSymptoms, SymptomAnalysis, analyze_symptoms, calculate_sss_scores,
    physical_recommendations,
};

use crate::state::AppState;

#[derive(Serialize)]
pub struct DeqResult {
    scores: EmotionScores,
    top_emotions: Vec<EmotionResult>,
}

#[derive(Serialize)]
pub struct SssResult {
    burden: PhysicalBurden,
    description: &'static str,
    recommendations: Vec<String>,
    breakdown: Vec<SymptomAnalysis>,
}

pub async fn score_deq(
    State(state): State<AppState>,
    Json(responses): Json<DeqResponses>,
) -> Json<DeqResult> {
    let scores = calculate_deq_scores(&responses);
    Json(DeqResult {
        top_emotions: get_top_emotions(&scores, state.config.top_emotions),
        scores,
    })
}

pub async fn score_sss(Json(symptoms): Json<SssSymptoms>) -> Json<SssResult> {
    let burden = calculate_sss_scores(&symptoms);
    Json(SssResult {
        description: burden.category.description(),
        recommendations: physical_recommendations(&burden),
        breakdown: analyze_symptoms(&symptoms),
        burden,
    })
}
