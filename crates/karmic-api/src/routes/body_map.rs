use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use karmic_instruments::body_map::{BodyMap, generate_symptom_suggestions, map_emotions_to_body};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct BodyMapResult {
    regions: BodyMap,
    symptoms: BTreeMap<String, bool>,
}

/// Map `{emotion: confidence}` onto body regions.
///
/// The body is collected into a `BTreeMap`, so emotions are applied in
/// name order regardless of how the client ordered them.
pub async fn map_body(
    Json(emotions): Json<BTreeMap<String, f64>>,
) -> Result<Json<BodyMapResult>, ApiError> {
    if let Some((name, confidence)) = emotions
        .iter()
        .find(|(_, c)| !(0.0..=1.0).contains(*c))
    {
        return Err(ApiError::BadRequest(format!(
            "confidence for '{name}' must be between 0 and 1, got {confidence}"
        )));
    }

    let regions = map_emotions_to_body(emotions);
    let symptoms = generate_symptom_suggestions(&regions);
    Ok(Json(BodyMapResult { regions, symptoms }))
}
