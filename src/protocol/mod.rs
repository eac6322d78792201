pub mod input;
pub mod output;

pub use input::HookInput;
pub use output::{Decision, HookOutput, PreToolUseOutput};
