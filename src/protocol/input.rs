use serde::Deserialize;
use serde_json::Value;

/// The input received from Claude Code on stdin for a PreToolUse hook.
///
/// Only the fields the evaluator needs are modelled. Session ids, cwd,
/// permission mode and any fields added later are silently ignored.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub tool_name: String,
    /// Arbitrary tool payload. Missing → `null`.
    #[serde(default)]
    pub tool_input: Value,
}
