//! External safety classifier.
//!
//! The evaluator hands a prompt to a [`Classifier`] and gets raw model text
//! back; [`verdict`] turns that text into a [`SafetyVerdict`].

mod openai;
pub mod prompt;
pub mod verdict;

pub use openai::OpenAiClassifier;
pub use verdict::SafetyVerdict;

/// A model that answers the evaluation prompt with free-form text.
pub trait Classifier {
    /// Send `prompt` as a single user message and return the generated text.
    fn classify(&self, prompt: &str) -> Result<String, ClassifierError>;
}

/// Failures talking to the classifier or understanding its answer.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("missing API key (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("classifier returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("classifier output is not a valid verdict: {0}")]
    Verdict(#[source] serde_json::Error),
}
