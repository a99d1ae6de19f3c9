use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use karmic_instruments::error::InstrumentError;
use karmic_instruments::scoring::{Domain, ScoreEntry, ValidationError};
use karmic_instruments::{Instrument, all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

fn lookup(id: String) -> Result<Box<dyn Instrument>, ApiError> {
    get_instrument(&id).ok_or_else(|| InstrumentError::UnknownInstrument(id).into())
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = lookup(id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}

pub async fn validate_scores(
    Path(id): Path<String>,
    Json(entries): Json<Vec<ScoreEntry>>,
) -> Result<Json<Vec<ValidationError>>, ApiError> {
    let instrument = lookup(id)?;
    Ok(Json(instrument.validate_scores(&entries)))
}
