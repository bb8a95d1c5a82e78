use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("arena configuration error: {0}")]
    Config(String),

    #[error("roster has no agent on a playing team")]
    EmptyRoster,
}

pub type ArenaResult<T> = Result<T, ArenaError>;
