use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::ClassifierError;

/// The classifier's judgment of a single tool call.
///
/// Field types are strict: `safe` and `relevant` must be JSON booleans and
/// `concern` a string or null. Loosely typed replies such as
/// `{"safe": 1, "relevant": "yes"}` or a numeric `concern` are rejected, so
/// they end in the fallback "ask" rather than being coerced to an allow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SafetyVerdict {
    pub safe: bool,
    pub relevant: bool,
    #[serde(default)]
    pub concern: Option<String>,
}

impl SafetyVerdict {
    pub fn approved(&self) -> bool {
        self.safe && self.relevant
    }

    /// The stated concern, treating an empty string like a missing one.
    pub fn concern(&self) -> Option<&str> {
        self.concern.as_deref().filter(|c| !c.is_empty())
    }
}

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("fenced block pattern is valid")
});

/// Return the contents of the first fenced code block in `text`, trimmed,
/// or `text` unchanged when there is none.
pub fn extract_json_text(text: &str) -> &str {
    match FENCED_BLOCK.captures(text).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => text,
    }
}

/// Parse classifier output, fenced or bare, into a verdict.
pub fn parse_verdict(text: &str) -> Result<SafetyVerdict, ClassifierError> {
    serde_json::from_str(extract_json_text(text)).map_err(ClassifierError::Verdict)
}
