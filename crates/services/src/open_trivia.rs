//! Open Trivia DB client (<https://opentdb.com>).

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use trivia_core::model::{Difficulty, Question, QuizSettings, Topic};

use crate::error::ProviderError;
use crate::provider::QuestionProvider;

/// Upstream API codes: 0 is success, 1 means the database has no questions
/// matching the query.
const RESPONSE_OK: u8 = 0;
const RESPONSE_NO_RESULTS: u8 = 1;

#[derive(Clone, Debug)]
pub struct OpenTriviaConfig {
    pub base_url: String,
}

impl Default for OpenTriviaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://opentdb.com".to_string(),
        }
    }
}

impl OpenTriviaConfig {
    /// Reads the base URL from `TRIVIA_API_URL`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("TRIVIA_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self { base_url: url },
            _ => Self::default(),
        }
    }
}

#[derive(Clone)]
pub struct OpenTriviaClient {
    client: Client,
    config: OpenTriviaConfig,
}

impl OpenTriviaClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(OpenTriviaConfig::from_env())
    }

    #[must_use]
    pub fn new(config: OpenTriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionProvider for OpenTriviaClient {
    async fn list_topics(&self) -> Result<Vec<Topic>, ProviderError> {
        let url = self.endpoint("api_category.php");
        debug!(%url, "listing trivia categories");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: CategoryListResponse = response.json().await?;
        Ok(body
            .trivia_categories
            .into_iter()
            .map(|c| Topic {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    async fn fetch_questions(
        &self,
        settings: &QuizSettings,
    ) -> Result<Vec<Question>, ProviderError> {
        let url = self.endpoint("api.php");
        debug!(
            %url,
            topic = settings.topic_id(),
            difficulty = %settings.difficulty(),
            count = settings.question_count(),
            "fetching questions"
        );

        let response = self
            .client
            .get(url)
            .query(&[
                ("amount", settings.question_count().to_string()),
                ("category", settings.topic_id().to_string()),
                ("difficulty", settings.difficulty().to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: QuestionListResponse = response.json().await?;
        match body.response_code {
            RESPONSE_OK => Ok(body.results.into_iter().map(Question::from).collect()),
            RESPONSE_NO_RESULTS => Ok(Vec::new()),
            code => {
                warn!(code, "trivia api rejected the request");
                Err(ProviderError::Api(code))
            }
        }
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    #[serde(default)]
    trivia_categories: Vec<ApiCategory>,
}

#[derive(Debug, Deserialize)]
struct ApiCategory {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct QuestionListResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    category: String,
    #[serde(rename = "type")]
    kind: String,
    difficulty: Difficulty,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl From<ApiQuestion> for Question {
    fn from(api: ApiQuestion) -> Self {
        Question {
            category: api.category,
            kind: api.kind,
            difficulty: api.difficulty,
            prompt: api.question,
            correct_answer: api.correct_answer,
            incorrect_answers: api.incorrect_answers,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_question_payload() {
        let payload = r#"{
            "response_code": 0,
            "results": [{
                "category": "Science: Computers",
                "type": "multiple",
                "difficulty": "easy",
                "question": "What does GHz stand for?",
                "correct_answer": "Gigahertz",
                "incorrect_answers": ["Gigahotz", "Gigahetz", "Gigahatz"]
            }]
        }"#;

        let body: QuestionListResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.response_code, RESPONSE_OK);

        let question = Question::from(body.results.into_iter().next().unwrap());
        assert_eq!(question.kind, "multiple");
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.correct_answer, "Gigahertz");
        assert_eq!(question.incorrect_answers.len(), 3);
    }

    #[test]
    fn parses_no_results_payload_without_results_field() {
        let body: QuestionListResponse = serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert_eq!(body.response_code, RESPONSE_NO_RESULTS);
        assert!(body.results.is_empty());
    }

    #[test]
    fn parses_category_payload() {
        let payload = r#"{
            "trivia_categories": [
                {"id": 9, "name": "General Knowledge"},
                {"id": 18, "name": "Science: Computers"}
            ]
        }"#;

        let body: CategoryListResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.trivia_categories.len(), 2);
        assert_eq!(body.trivia_categories[0].id, 9);
    }

    #[test]
    fn config_defaults_to_public_endpoint() {
        let client = OpenTriviaClient::new(OpenTriviaConfig::default());
        assert_eq!(client.endpoint("api.php"), "https://opentdb.com/api.php");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = OpenTriviaClient::new(OpenTriviaConfig {
            base_url: "http://localhost:8080/".to_string(),
        });
        assert_eq!(
            client.endpoint("api_category.php"),
            "http://localhost:8080/api_category.php"
        );
    }
}
