mod reason;

pub use reason::EVALUATION_FAILED;

use crate::classifier::{prompt, verdict, Classifier, ClassifierError};
use crate::config::{Config, ConfigError};
use crate::protocol::{HookInput, HookOutput};

pub(crate) const APP_NAME: &str = "ai-permission-evaluator";

/// Claude's own task and plan bookkeeping tools. Never sent to the classifier.
pub const ALWAYS_SAFE_TOOLS: &[&str] = &[
    "TaskUpdate",
    "TaskCreate",
    "TaskList",
    "TaskGet",
    "TodoWrite",
    "TodoRead",
];

/// Anything that prevents a normal decision. The hook boundary turns every
/// variant into the same conservative "ask".
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("failed to read hook input: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid hook input: {0}")]
    Input(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Whether `tool_name` is auto-allowed, either built in or via `always-allow`.
pub fn is_always_safe(tool_name: &str, config: &Config) -> bool {
    ALWAYS_SAFE_TOOLS.contains(&tool_name) || config.always_allow.iter().any(|t| t == tool_name)
}

/// Evaluate a hook input and return a permission decision.
///
/// - Always-safe tool → `allow`, the classifier is not consulted
/// - Classifier says safe and relevant → `allow`
/// - Anything else the classifier says → `ask`, with its concern as the reason
///
/// Transport failures and unparseable classifier output are returned as
/// errors; the caller decides how to degrade.
///
/// # Examples
///
/// ```
/// use ai_permission_evaluator::classifier::{Classifier, ClassifierError};
/// use ai_permission_evaluator::config::Config;
/// use ai_permission_evaluator::decision::evaluate;
/// use ai_permission_evaluator::protocol::{Decision, HookInput};
///
/// struct Unreachable;
/// impl Classifier for Unreachable {
///     fn classify(&self, _: &str) -> Result<String, ClassifierError> {
///         unreachable!("always-safe tools never reach the classifier")
///     }
/// }
///
/// let input: HookInput =
///     serde_json::from_str(r#"{"tool_name": "TodoWrite", "tool_input": {}}"#).unwrap();
/// let output = evaluate(&input, &Config::default(), &Unreachable).unwrap();
/// assert_eq!(output.decision(), Decision::Allow);
/// ```
pub fn evaluate(
    input: &HookInput,
    config: &Config,
    classifier: &dyn Classifier,
) -> Result<HookOutput, EvaluationError> {
    if is_always_safe(&input.tool_name, config) {
        tracing::debug!(tool = %input.tool_name, "always-safe tool, skipping classifier");
        return Ok(HookOutput::allow(reason::always_safe(&input.tool_name)));
    }

    let prompt = prompt::build_prompt(&input.tool_name, &input.tool_input);
    let text = classifier.classify(&prompt)?;
    let verdict = verdict::parse_verdict(&text)?;
    tracing::info!(
        tool = %input.tool_name,
        safe = verdict.safe,
        relevant = verdict.relevant,
        concern = verdict.concern().unwrap_or(""),
        "classifier verdict"
    );

    if verdict.approved() {
        Ok(HookOutput::allow(reason::approved()))
    } else {
        Ok(HookOutput::ask(reason::flagged(verdict.concern())))
    }
}
