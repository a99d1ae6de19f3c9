//! karmic-instruments
//!
//! Wellbeing questionnaire definitions and their scoring. Pure data and
//! pure functions, no I/O. Covers the DEQ emotion questionnaire, the SSS
//! physical symptom scale, and the emotion to body-region heat map.

pub mod body_map;
pub mod emotion;
pub mod error;
pub mod instruments;
pub mod scoring;

use scoring::{Domain, ScoreEntry, ScoreType, ValidationError};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "deq", "sss").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DEQ", "SSS").
    fn name(&self) -> &str;

    /// The sections and items this instrument asks about.
    fn domains(&self) -> &[Domain];

    /// Validate raw answers against this instrument's items.
    ///
    /// Reports answers outside an item's range and answers naming an item
    /// the instrument does not have. Normalized subscales are computed
    /// results, not answerable items, so entries naming them are unknown.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .filter(|s| s.score_type != ScoreType::Normalized)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            match all_subscales.iter().find(|s| s.id == entry.subscale_id) {
                Some(subscale) if !subscale.range.contains(entry.value) => {
                    errors.push(ValidationError {
                        subscale_id: entry.subscale_id.clone(),
                        value: entry.value,
                        expected_range: Some(subscale.range),
                        score_type: Some(subscale.score_type),
                        message: format!(
                            "{}: {} score {} is outside range [{}, {}]",
                            self.name(),
                            subscale.id,
                            entry.value,
                            subscale.range.min,
                            subscale.range.max,
                        ),
                    });
                }
                Some(_) => {}
                None => errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: None,
                    score_type: None,
                    message: format!(
                        "{}: unknown item '{}'",
                        self.name(),
                        entry.subscale_id
                    ),
                }),
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::deq::Deq),
        Box::new(instruments::sss::Sss),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
