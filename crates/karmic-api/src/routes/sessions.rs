use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use karmic_core::models::assessment::WellbeingAssessment;
use karmic_core::models::summary::AssessmentSummary;
use karmic_core::session::AssessmentSession;
use karmic_instruments::instruments::deq::DeqResponses;
use karmic_instruments::instruments::sss::SssSymptoms;

use crate::error::ApiError;
use crate::state::AppState;

/// A full questionnaire submission.
#[derive(Deserialize)]
pub struct AssessmentAnswers {
    pub emotional_responses: DeqResponses,
    pub physical_symptoms: SssSymptoms,
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AssessmentSession>, ApiError> {
    let session = state.sessions.load(&key)?.unwrap_or_default();
    Ok(Json(session))
}

pub async fn submit_assessment(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(answers): Json<AssessmentAnswers>,
) -> Result<Json<AssessmentSummary>, ApiError> {
    let assessment =
        WellbeingAssessment::score(answers.emotional_responses, answers.physical_symptoms);
    let summary = assessment.summary(state.config.top_emotions);

    let mut session = state.sessions.load(&key)?.unwrap_or_default();
    session.complete(assessment);
    state.sessions.save(&key, &session)?;

    tracing::info!(
        assessment_id = %summary.assessment.id,
        burden = ?summary.assessment.physical_burden.category,
        "assessment completed"
    );
    Ok(Json(summary))
}

pub async fn skip_assessment(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AssessmentSession>, ApiError> {
    let mut session = state.sessions.load(&key)?.unwrap_or_default();
    session.skip();
    state.sessions.save(&key, &session)?;
    tracing::info!("assessment skipped");
    Ok(Json(session))
}

pub async fn reset_assessment(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AssessmentSession>, ApiError> {
    state.sessions.remove(&key)?;
    Ok(Json(AssessmentSession::default()))
}
