//! Per-user assessment state and where it is kept.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::assessment::WellbeingAssessment;

/// Longest accepted session key.
pub const MAX_SESSION_KEY_LEN: usize = 128;

/// Where a user stands with the wellbeing questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSession {
    /// True once the questionnaire was either answered or skipped.
    pub has_completed: bool,
    pub assessment: Option<WellbeingAssessment>,
}

impl AssessmentSession {
    pub fn complete(&mut self, assessment: WellbeingAssessment) {
        self.assessment = Some(assessment);
        self.has_completed = true;
    }

    pub fn skip(&mut self) {
        self.complete(WellbeingAssessment::skipped());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Check that a session key is non-empty, bounded and made of
/// `[A-Za-z0-9_-]`.
pub fn validate_session_key(key: &str) -> Result<(), CoreError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_SESSION_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidSessionKey(key.to_string()))
    }
}

/// Storage for assessment sessions, keyed by an opaque session key.
pub trait SessionStore: Send + Sync {
    /// The stored session, or `None` if the key has never been saved.
    fn load(&self, key: &str) -> Result<Option<AssessmentSession>, CoreError>;

    fn save(&self, key: &str, session: &AssessmentSession) -> Result<(), CoreError>;

    /// Forget a session. Returns whether anything was stored.
    fn remove(&self, key: &str) -> Result<bool, CoreError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, AssessmentSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<AssessmentSession>, CoreError> {
        validate_session_key(key)?;
        let sessions = self.sessions.lock().map_err(|_| CoreError::StorePoisoned)?;
        Ok(sessions.get(key).cloned())
    }

    fn save(&self, key: &str, session: &AssessmentSession) -> Result<(), CoreError> {
        validate_session_key(key)?;
        let mut sessions = self.sessions.lock().map_err(|_| CoreError::StorePoisoned)?;
        sessions.insert(key.to_string(), session.clone());
        tracing::debug!(
            session = key,
            has_completed = session.has_completed,
            "session saved"
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, CoreError> {
        validate_session_key(key)?;
        let mut sessions = self.sessions.lock().map_err(|_| CoreError::StorePoisoned)?;
        let existed = sessions.remove(key).is_some();
        if existed {
            tracing::debug!(session = key, "session removed");
        }
        Ok(existed)
    }
}
