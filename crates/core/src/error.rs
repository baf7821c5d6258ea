use thiserror::Error;

use crate::model::{ParseDifficultyError, QuizSettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
}
