use async_trait::async_trait;

use trivia_core::model::{Question, QuizSettings, Topic};

use crate::error::ProviderError;

/// Source of topics and question sets.
///
/// Implementations are best-effort: no retries are expected, and the session
/// layer treats any error the same as an empty result.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Lists the topics available for selection.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the upstream request fails.
    async fn list_topics(&self) -> Result<Vec<Topic>, ProviderError>;

    /// Fetches a question set for the given settings.
    ///
    /// May return fewer questions than requested when the upstream cannot
    /// satisfy the full count; an empty vec means no questions at all.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the upstream request fails.
    async fn fetch_questions(
        &self,
        settings: &QuizSettings,
    ) -> Result<Vec<Question>, ProviderError>;
}
