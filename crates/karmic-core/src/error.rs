use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("session store lock poisoned")]
    StorePoisoned,

    #[error("invalid session key: {0:?}")]
    InvalidSessionKey(String),
}
