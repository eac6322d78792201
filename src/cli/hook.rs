use std::io::Read;
use std::path::Path;

use crate::classifier::OpenAiClassifier;
use crate::config::{Config, Overrides};
use crate::decision::{self, EvaluationError, EVALUATION_FAILED};
use crate::protocol::{HookInput, HookOutput};

/// Execute the hook subcommand: read JSON from stdin, evaluate, write JSON to stdout.
///
/// Every failure (unreadable stdin, bad JSON, bad config, classifier
/// transport errors, unparseable verdicts) is logged to stderr and turned
/// into an "ask" decision. Exactly one decision is written on every path.
pub fn run(config_path: Option<&Path>, overrides: Overrides) {
    let output = match execute_from_stdin(config_path, overrides) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = %e, "hook evaluation failed");
            HookOutput::ask(EVALUATION_FAILED)
        }
    };
    tracing::debug!(
        decision = output.decision().as_str(),
        reason = output.reason(),
        "decision"
    );
    output_json(&output);
}

fn execute_from_stdin(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<HookOutput, EvaluationError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let hook_input: HookInput = serde_json::from_str(&input)?;

    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(overrides);

    let classifier = OpenAiClassifier::new(config.classifier.clone());
    decision::evaluate(&hook_input, &config, &classifier)
}

/// Serialize a HookOutput to JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impl on strings and enums.
fn output_json(output: &HookOutput) {
    let json = serde_json::to_string(output).expect("HookOutput serialization cannot fail");
    println!("{json}");
}
