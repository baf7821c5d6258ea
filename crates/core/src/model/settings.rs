use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Difficulty;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("question count must be one of 5, 10, 15 or 20, got {0}")]
    InvalidQuestionCount(u8),
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Question counts the provider UI offers; anything else is rejected.
pub const ALLOWED_QUESTION_COUNTS: [u8; 4] = [5, 10, 15, 20];

/// Parameters for one quiz attempt: which topic, how hard, how many questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    topic_id: u32,
    difficulty: Difficulty,
    question_count: u8,
}

impl QuizSettings {
    /// Creates validated quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError::InvalidQuestionCount` when `question_count`
    /// is not one of [`ALLOWED_QUESTION_COUNTS`].
    pub fn new(
        topic_id: u32,
        difficulty: Difficulty,
        question_count: u8,
    ) -> Result<Self, QuizSettingsError> {
        if !ALLOWED_QUESTION_COUNTS.contains(&question_count) {
            return Err(QuizSettingsError::InvalidQuestionCount(question_count));
        }
        Ok(Self {
            topic_id,
            difficulty,
            question_count,
        })
    }

    #[must_use]
    pub fn topic_id(&self) -> u32 {
        self.topic_id
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
