use crate::model::AnswerRecord;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Minimum percentage considered a passing result.
pub const PASSING_PERCENTAGE: u32 = 70;

/// Coarse performance tier derived from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Outstanding,
    Excellent,
    Great,
    Good,
    Fair,
    NeedsPractice,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            80.. => Self::Excellent,
            70.. => Self::Great,
            60.. => Self::Good,
            50.. => Self::Fair,
            _ => Self::NeedsPractice,
        }
    }

    /// Short encouragement line for the score screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Outstanding => "Outstanding!",
            ScoreBand::Excellent => "Excellent work!",
            ScoreBand::Great => "Great job!",
            ScoreBand::Good => "Good effort!",
            ScoreBand::Fair => "Not bad!",
            ScoreBand::NeedsPractice => "Keep practicing!",
        }
    }
}

/// Aggregate result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    correct_count: u32,
    total_count: u32,
}

impl ScoreSummary {
    /// Tallies a summary from the recorded answers.
    #[must_use]
    pub fn from_answers(answers: &[AnswerRecord]) -> Self {
        let correct = answers.iter().filter(|a| a.is_correct).count();
        Self {
            correct_count: u32::try_from(correct).unwrap_or(u32::MAX),
            total_count: u32::try_from(answers.len()).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// Percentage of correct answers, rounded to the nearest whole number.
    ///
    /// An empty summary reports 0 rather than dividing by zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u32 {
        if self.total_count == 0 {
            return 0;
        }
        let ratio = f64::from(self.correct_count) / f64::from(self.total_count);
        (ratio * 100.0).round() as u32
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.percentage() >= PASSING_PERCENTAGE
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
