use ai_permission_evaluator::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PreToolUse hook for Claude Code that asks an LLM classifier whether a tool call is safe.
#[derive(Debug, Parser)]
#[command(name = "ai-permission-evaluator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code PreToolUse hook (reads stdin, writes stdout)
    Hook {
        /// Path to the KDL config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Classifier model identifier
        #[arg(long)]
        model: Option<String>,
        /// Base URL of the OpenAI-compatible API
        #[arg(long, env = "OPENAI_BASE_URL")]
        api_base: Option<String>,
        /// API key for the classifier endpoint
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// OpenAI organization id
        #[arg(long, env = "OPENAI_ORG_ID")]
        organization: Option<String>,
    },
    /// Validate a KDL config file and print the effective settings
    CheckConfig {
        /// Path to the KDL config file
        path: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    ai_permission_evaluator::logging::init();

    match cli.command {
        Commands::Hook {
            config,
            model,
            api_base,
            api_key,
            organization,
        } => {
            let overrides = Overrides {
                model,
                api_base,
                api_key,
                organization,
            };
            ai_permission_evaluator::run_hook(config.as_deref(), overrides);
            Ok(())
        }
        Commands::CheckConfig { path } => ai_permission_evaluator::check_config(&path),
    }
}
