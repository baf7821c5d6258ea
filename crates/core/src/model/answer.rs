//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// Outcome of one question, created exactly once when the question is resolved.
///
/// All text is stored decoded. `user_answer` is `None` when the per-question
/// timer expired before the user picked anything; the score breakdown treats
/// that the same as a wrong answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub prompt: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    /// Returns true when this record came from a timer expiry rather than a choice.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.user_answer.is_none()
    }
}
