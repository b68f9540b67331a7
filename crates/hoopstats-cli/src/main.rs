// hoopstats entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout carries only the report)
// 2. Load config relative to the executable
// 3. Run the pipeline, echoing the lists to stdout and writing the report file

use hoopstats_cli::pipeline;
use hoopstats_core::config;

use anyhow::Context;
use tracing::info;

/// Filter used when `RUST_LOG` is unset: milestones from the hoopstats
/// crates, warnings from everything else.
const DEFAULT_LOG_FILTER: &str =
    "hoopstats_cli=info,hoopstats_basketball=info,hoopstats_core=info,warn";

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("hoopstats starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: input={}, output={}, top_n={}",
        config.input_path.display(),
        config.output_path.display(),
        config.top_n
    );

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let summary = pipeline::run(&config, &mut console)?;

    info!(
        "Done: {} records, {} lists written to {}",
        summary.records,
        summary.lists,
        summary.output_path.display()
    );
    Ok(())
}

/// Initialize tracing to stderr, filtered by `RUST_LOG`.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
