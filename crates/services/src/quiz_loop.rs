use std::sync::Arc;

use tracing::warn;

use trivia_core::model::{QuizSettings, Topic};

use crate::controller::{LoadResolution, QuizController};
use crate::provider::QuestionProvider;

/// Orchestrates the fetch half of the quiz lifecycle over a provider.
///
/// The controller stays the single owner of state; this service only runs the
/// begin-fetch-finish sequence so callers don't wire tickets by hand.
#[derive(Clone)]
pub struct QuizLoopService {
    provider: Arc<dyn QuestionProvider>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self { provider }
    }

    /// Starts a quiz: enters loading, fetches questions, resolves the phase.
    ///
    /// Never fails: provider errors and empty results surface as
    /// [`LoadResolution::Unavailable`] on the controller.
    pub async fn start(
        &self,
        controller: &mut QuizController,
        settings: QuizSettings,
    ) -> LoadResolution {
        let ticket = controller.begin_loading(settings.clone());
        let result = self.provider.fetch_questions(&settings).await;
        controller.finish_loading(ticket, result)
    }

    /// Lists topics for the selection screen, best-effort.
    ///
    /// Provider failures are logged and reported as an empty list.
    pub async fn topics(&self) -> Vec<Topic> {
        match self.provider.list_topics().await {
            Ok(topics) => topics,
            Err(err) => {
                warn!(error = %err, "topic listing failed");
                Vec::new()
            }
        }
    }
}
