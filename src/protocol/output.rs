use serde::Serialize;

/// The output returned to Claude Code on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: PreToolUseOutput,
}

/// PreToolUse-specific output containing the permission decision.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreToolUseOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: Decision,
    pub permission_decision_reason: String,
}

/// The permission decision. The evaluator only ever allows or defers to the user.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Ask,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Ask => "ask",
        }
    }
}

impl HookOutput {
    pub const EVENT_NAME: &'static str = "PreToolUse";

    pub fn new(decision: Decision, reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: PreToolUseOutput {
                hook_event_name: Self::EVENT_NAME,
                permission_decision: decision,
                permission_decision_reason: reason.into(),
            },
        }
    }

    pub fn allow(reason: impl Into<String>) -> Self {
        Self::new(Decision::Allow, reason)
    }

    pub fn ask(reason: impl Into<String>) -> Self {
        Self::new(Decision::Ask, reason)
    }

    pub fn decision(&self) -> Decision {
        self.hook_specific_output.permission_decision
    }

    pub fn reason(&self) -> &str {
        &self.hook_specific_output.permission_decision_reason
    }
}
