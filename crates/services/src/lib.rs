#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod open_trivia;
pub mod provider;
pub mod quiz_loop;
pub mod session;

pub use trivia_core::Clock;

pub use controller::{LoadResolution, LoadTicket, QuizController, QuizPhase};
pub use error::{ProviderError, SessionError};
pub use open_trivia::{OpenTriviaClient, OpenTriviaConfig};
pub use provider::QuestionProvider;
pub use quiz_loop::QuizLoopService;
pub use session::{
    QUESTION_TIME_LIMIT_SECS, QuizSession, SessionProgress, SubmitOutcome, TickOutcome,
};
