use chrono::{DateTime, Utc};

use trivia_core::model::{AnswerRecord, Question, QuizSettings, ScoreSummary};
use trivia_core::text::decode_entities;

use crate::error::SessionError;

/// Seconds granted per question; the timer resets to this on every transition.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 30;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of resolving the current question, by choice or by timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: AnswerRecord,
    pub is_complete: bool,
}

/// Result of one timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown moved down one second.
    Counting { remaining: u32 },
    /// The timer ran out; an empty answer was auto-submitted.
    TimedOut(SubmitOutcome),
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one quiz attempt.
///
/// Steps through a fixed question list, recording exactly one [`AnswerRecord`]
/// per question. Both the user path (`submit_answer`) and the timer path
/// (`tick` hitting zero) converge on the same recording operation, so a
/// question can never produce two records. The machine is synchronous; the
/// caller owns the one-second scheduling that drives `tick` and must stop it
/// once the session leaves the active phase.
#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<AnswerRecord>,
    time_remaining: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates a session over the questions the provider returned.
    ///
    /// A short delivery (fewer questions than requested) is accepted as-is;
    /// an over-delivery is truncated to the requested count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when no questions were provided.
    pub fn new(
        settings: QuizSettings,
        mut questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        questions.truncate(usize::from(settings.question_count()));
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            settings,
            questions,
            current: 0,
            answers: Vec::new(),
            time_remaining: QUESTION_TIME_LIMIT_SECS,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question currently awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Resolves the current question with the user's answer and advances.
    ///
    /// An empty `answer` is the "no answer" sentinel and is never correct;
    /// otherwise correctness is decoded-text equality with the question's
    /// correct answer. Recording and advancing are one step, so each question
    /// yields exactly one record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when every question has already been
    /// answered.
    pub fn submit_answer(
        &mut self,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        Ok(self.resolve_current(answer, now))
    }

    /// Advances the countdown by one second.
    ///
    /// Exactly one of two things happens per call: the timer decrements, or —
    /// when it would drop below one second — the current question times out
    /// and an empty answer is auto-submitted, never both.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session is already over.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<TickOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        if self.time_remaining <= 1 {
            return Ok(TickOutcome::TimedOut(self.resolve_current("", now)));
        }

        self.time_remaining -= 1;
        Ok(TickOutcome::Counting {
            remaining: self.time_remaining,
        })
    }

    /// Final score breakdown.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn score(&self) -> Result<ScoreSummary, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(ScoreSummary::from_answers(&self.answers))
    }

    /// Records the answer for the current question, then advances or completes.
    fn resolve_current(&mut self, answer: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let question = &self.questions[self.current];
        let correct_answer = decode_entities(&question.correct_answer);
        let user_answer = if answer.is_empty() {
            None
        } else {
            Some(decode_entities(answer))
        };
        let is_correct = user_answer.as_deref() == Some(correct_answer.as_str());

        let record = AnswerRecord {
            prompt: decode_entities(&question.prompt),
            user_answer,
            correct_answer,
            is_correct,
        };
        self.answers.push(record.clone());

        self.current += 1;
        if self.current == self.questions.len() {
            self.completed_at = Some(now);
        } else {
            self.time_remaining = QUESTION_TIME_LIMIT_SECS;
        }
        debug_assert_eq!(self.answers.len(), self.current);

        SubmitOutcome {
            record,
            is_complete: self.is_complete(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
