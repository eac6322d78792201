pub mod classifier;
pub mod config;
pub mod decision;
pub mod logging;
pub mod protocol;

pub(crate) mod cli;

use std::path::Path;

use config::Overrides;

/// Run the hook subcommand: read JSON from stdin, evaluate, write JSON to stdout.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Callers embedding the
/// evaluator should use [`decision::evaluate`] with their own
/// [`classifier::Classifier`].
pub fn run_hook(config_path: Option<&Path>, overrides: Overrides) {
    cli::hook::run(config_path, overrides)
}

/// Run the check-config subcommand.
pub fn check_config(path: &Path) -> miette::Result<()> {
    cli::check_config(path)
}
