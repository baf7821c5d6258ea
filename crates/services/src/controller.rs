use chrono::{DateTime, Utc};
use tracing::debug;

use trivia_core::Clock;
use trivia_core::model::{Question, QuizSettings, ScoreSummary};

use crate::error::{ProviderError, SessionError};
use crate::session::{QuizSession, SubmitOutcome, TickOutcome};

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of the quiz controller.
#[derive(Debug, Clone)]
pub enum QuizPhase {
    /// No quiz in progress; waiting for topic selection.
    Idle,
    /// A question fetch is in flight for the given settings.
    Loading { settings: QuizSettings },
    /// A session is running (or finished and showing its score).
    Active(QuizSession),
    /// The provider had nothing for the requested settings. Terminal until restart.
    Unavailable,
}

impl QuizPhase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizPhase::Idle => "idle",
            QuizPhase::Loading { .. } => "loading",
            QuizPhase::Active(_) => "active",
            QuizPhase::Unavailable => "unavailable",
        }
    }
}

/// Handle identifying one load attempt.
///
/// Fetches resolve asynchronously and are never cancelled in flight; the
/// ticket lets the controller recognize and drop a response that belongs to a
/// session the user has already restarted away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// How a finished load was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResolution {
    /// Questions arrived; the session is now active.
    Started,
    /// The provider failed or returned nothing.
    Unavailable,
    /// The ticket was stale; the result was discarded without a state change.
    Stale,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the quiz lifecycle across phases.
///
/// Mutated only by discrete events (load completion, timer tick, answer
/// submission, restart) dispatched one at a time, so it needs no locking.
#[derive(Debug, Clone)]
pub struct QuizController {
    phase: QuizPhase,
    generation: u64,
    clock: Clock,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl QuizController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            phase: QuizPhase::Idle,
            generation: 0,
            clock,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    /// The running session, if the controller is in the active phase.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.phase {
            QuizPhase::Active(session) => Some(session),
            _ => None,
        }
    }

    /// Enters the loading phase for a new quiz and returns the ticket the
    /// fetch result must be resolved with.
    pub fn begin_loading(&mut self, settings: QuizSettings) -> LoadTicket {
        self.generation += 1;
        debug!(generation = self.generation, "loading quiz");
        self.phase = QuizPhase::Loading { settings };
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of a question fetch.
    ///
    /// A stale ticket — the user restarted or started another load while the
    /// fetch was in flight — is discarded without touching the current phase.
    /// A provider error or an empty question set collapses to `Unavailable`.
    pub fn finish_loading(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Question>, ProviderError>,
    ) -> LoadResolution {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return LoadResolution::Stale;
        }
        let QuizPhase::Loading { settings } = &self.phase else {
            return LoadResolution::Stale;
        };
        let settings = settings.clone();

        let questions = match result {
            Ok(questions) => questions,
            Err(err) => {
                debug!(error = %err, "question fetch failed");
                self.phase = QuizPhase::Unavailable;
                return LoadResolution::Unavailable;
            }
        };

        match QuizSession::new(settings, questions, self.now()) {
            Ok(session) => {
                self.phase = QuizPhase::Active(session);
                LoadResolution::Started
            }
            Err(_) => {
                self.phase = QuizPhase::Unavailable;
                LoadResolution::Unavailable
            }
        }
    }

    /// Drops any session state and returns to idle. Valid from every phase.
    ///
    /// Bumping the generation here is what invalidates tickets of fetches
    /// still in flight.
    pub fn restart(&mut self) {
        debug!(from = self.phase.name(), "restarting");
        self.generation += 1;
        self.phase = QuizPhase::Idle;
    }

    /// Forwards a timer tick to the active session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase, or the
    /// session's own error.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        let now = self.now();
        self.active_session()?.tick(now)
    }

    /// Forwards an answer submission to the active session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase, or the
    /// session's own error.
    pub fn submit_answer(&mut self, answer: &str) -> Result<SubmitOutcome, SessionError> {
        let now = self.now();
        self.active_session()?.submit_answer(answer, now)
    }

    /// Final score of the active session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase, or
    /// `SessionError::NotComplete` while questions remain.
    pub fn score(&self) -> Result<ScoreSummary, SessionError> {
        match &self.phase {
            QuizPhase::Active(session) => session.score(),
            _ => Err(SessionError::NotActive),
        }
    }

    fn active_session(&mut self) -> Result<&mut QuizSession, SessionError> {
        match &mut self.phase {
            QuizPhase::Active(session) => Ok(session),
            _ => Err(SessionError::NotActive),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::Difficulty;
    use trivia_core::time::fixed_clock;

    fn settings() -> QuizSettings {
        QuizSettings::new(9, Difficulty::Medium, 5).unwrap()
    }

    fn questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|n| Question {
                category: "History".to_string(),
                kind: "multiple".to_string(),
                difficulty: Difficulty::Medium,
                prompt: format!("Q{n}"),
                correct_answer: format!("A{n}"),
                incorrect_answers: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            })
            .collect()
    }

    #[test]
    fn load_with_questions_becomes_active() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());
        assert_eq!(controller.phase().name(), "loading");

        let resolution = controller.finish_loading(ticket, Ok(questions(5)));
        assert_eq!(resolution, LoadResolution::Started);
        assert_eq!(controller.session().unwrap().total_questions(), 5);
    }

    #[test]
    fn empty_result_becomes_unavailable() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());

        let resolution = controller.finish_loading(ticket, Ok(Vec::new()));
        assert_eq!(resolution, LoadResolution::Unavailable);
        assert!(matches!(controller.phase(), QuizPhase::Unavailable));
    }

    #[test]
    fn provider_error_becomes_unavailable() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());

        let resolution = controller.finish_loading(ticket, Err(ProviderError::Api(2)));
        assert_eq!(resolution, LoadResolution::Unavailable);
        assert!(matches!(controller.phase(), QuizPhase::Unavailable));
    }

    #[test]
    fn restart_invalidates_inflight_fetch() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());
        controller.restart();

        // The fetch resolves late; its questions must not revive the session.
        let resolution = controller.finish_loading(ticket, Ok(questions(5)));
        assert_eq!(resolution, LoadResolution::Stale);
        assert!(matches!(controller.phase(), QuizPhase::Idle));
    }

    #[test]
    fn newer_load_wins_over_older_fetch() {
        let mut controller = QuizController::new(fixed_clock());
        let old_ticket = controller.begin_loading(settings());
        let new_ticket = controller.begin_loading(settings());

        assert_eq!(
            controller.finish_loading(old_ticket, Ok(questions(5))),
            LoadResolution::Stale
        );
        assert_eq!(
            controller.finish_loading(new_ticket, Ok(questions(3))),
            LoadResolution::Started
        );
        assert_eq!(controller.session().unwrap().total_questions(), 3);
    }

    #[test]
    fn restart_from_unavailable_returns_to_idle() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());
        controller.finish_loading(ticket, Ok(Vec::new()));

        controller.restart();
        assert!(matches!(controller.phase(), QuizPhase::Idle));
    }

    #[test]
    fn events_outside_active_phase_are_rejected() {
        let mut controller = QuizController::new(fixed_clock());
        assert_eq!(controller.tick().unwrap_err(), SessionError::NotActive);
        assert_eq!(
            controller.submit_answer("anything").unwrap_err(),
            SessionError::NotActive
        );
        assert_eq!(controller.score().unwrap_err(), SessionError::NotActive);
    }

    #[test]
    fn full_session_through_controller() {
        let mut controller = QuizController::new(fixed_clock());
        let ticket = controller.begin_loading(settings());
        controller.finish_loading(ticket, Ok(questions(5)));

        for n in 0..5 {
            let outcome = controller.submit_answer(&format!("A{n}")).unwrap();
            assert!(outcome.record.is_correct);
        }

        let score = controller.score().unwrap();
        assert_eq!(score.percentage(), 100);
        assert!(score.passed());
    }
}
