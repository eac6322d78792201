use super::APP_NAME;

/// Reason used whenever evaluation fails, whatever the cause.
pub const EVALUATION_FAILED: &str = "Hook evaluation failed, asking user.";

const UNSPECIFIED_CONCERN: &str = "Unsafe or irrelevant";

pub(crate) fn always_safe(tool_name: &str) -> String {
    format!("Internal tool '{tool_name}' is always safe.")
}

pub(crate) fn approved() -> String {
    format!("{APP_NAME}: classifier approved")
}

/// `concern` of `None` means the classifier gave no reason.
pub(crate) fn flagged(concern: Option<&str>) -> String {
    let concern = concern.unwrap_or(UNSPECIFIED_CONCERN);
    format!("{APP_NAME}: classifier flagged: {concern}")
}
