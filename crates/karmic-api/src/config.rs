use std::env;

use eyre::WrapErr;

/// Top emotions listed in an assessment summary unless configured.
const DEFAULT_TOP_EMOTIONS: usize = 3;

/// Runtime settings, read once from the environment at start-up.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// How many top emotions an assessment summary lists (1–8).
    pub top_emotions: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            top_emotions: DEFAULT_TOP_EMOTIONS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let top_emotions = match lookup("KARMIC_TOP_EMOTIONS") {
            Some(raw) => parse_top_emotions(&raw)?,
            None => DEFAULT_TOP_EMOTIONS,
        };
        Ok(Self { top_emotions })
    }
}

fn parse_top_emotions(raw: &str) -> eyre::Result<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("KARMIC_TOP_EMOTIONS is not a number: {raw:?}"))?;
    if !(1..=8).contains(&count) {
        return Err(eyre::eyre!(
            "KARMIC_TOP_EMOTIONS must be between 1 and 8, got {count}"
        ));
    }
    Ok(count)
}
