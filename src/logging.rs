use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV: &str = "AI_PERMISSION_EVALUATOR_LOG";

/// Send diagnostics to stderr. Stdout belongs to the hook protocol.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
