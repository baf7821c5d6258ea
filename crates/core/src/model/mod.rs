mod answer;
mod question;
mod score;
mod settings;

pub use answer::AnswerRecord;
pub use question::{Difficulty, ParseDifficultyError, Question, Topic};
pub use score::{PASSING_PERCENTAGE, ScoreBand, ScoreSummary};
pub use settings::{ALLOWED_QUESTION_COUNTS, QuizSettings, QuizSettingsError};
