pub mod hook;

use std::path::Path;

use crate::config::Config;
use crate::decision::ALWAYS_SAFE_TOOLS;

/// Execute the check-config subcommand: load and validate a config file,
/// then print the effective settings.
pub fn check_config(path: &Path) -> miette::Result<()> {
    let config = Config::load(path)?;
    let settings = &config.classifier;

    println!("{}: ok", path.display());
    println!("  model:        {}", settings.model);
    println!("  max-tokens:   {}", settings.max_tokens);
    println!("  api-base:     {}", settings.api_base);
    if let Some(org) = &settings.organization {
        println!("  organization: {org}");
    }
    match settings.timeout_ms {
        Some(ms) => println!("  timeout-ms:   {ms}"),
        None => println!("  timeout-ms:   (client default)"),
    }
    let mut tools: Vec<&str> = ALWAYS_SAFE_TOOLS.to_vec();
    tools.extend(config.always_allow.iter().map(String::as_str));
    println!("  always-allow: {}", tools.join(", "));
    Ok(())
}
