use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use randovec_core::import::{prepare, ImportOptions, ImportReport};
use randovec_core::{seed, RunSettings, Settings};
use randovec_weaviate::WeaviateClient;

mod logging;

/// Seed a Weaviate instance with random text/vector objects.
///
/// Connection and run parameters come from the environment
/// (WEAVIATE_HTTP_ENDPONT, WEAVIATE_GRPC_ENDPONT, WEAVIATE_API_KEY,
/// NUM_OBJECTS, BATCH_SIZE, VECTOR_SIZE) or from ./randovec.toml.
#[derive(Parser)]
#[command(name = "randovec", version)]
struct Cli {
    /// Generate and chunk the objects without contacting Weaviate
    #[arg(long)]
    dry_run: bool,

    /// Draw a progress bar while writing batches
    #[arg(long)]
    progress: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let figment = Settings::figment();
    let (log_format, rejected) = logging::format_from(&figment);
    logging::init(log_format);
    if let Some(e) = rejected {
        warn!(error = %e, format = ?log_format, "ignoring log format setting");
    }

    match run(&cli, &figment).await {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(report)) if report.is_success() => {
            info!(%report, "import complete!");
            ExitCode::SUCCESS
        }
        Ok(Some(report)) => {
            for failure in &report.failed {
                warn!(chunk = failure.chunk, size = failure.size, error = %failure.error, "chunk not written");
            }
            warn!(%report, "import finished with failures");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "randovec failed");
            ExitCode::FAILURE
        }
    }
}

/// `None` for a dry run.
async fn run(cli: &Cli, figment: &figment::Figment) -> anyhow::Result<Option<ImportReport>> {
    if cli.dry_run {
        let run = RunSettings::from_figment(figment).context("loading run parameters")?;
        let chunks = prepare(&run)?;
        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        info!(num_objects = run.num_objects, chunks = sizes.len(), ?sizes, "dry run, nothing written");
        return Ok(None);
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling import");
            on_interrupt.cancel();
        }
    });

    let options = ImportOptions { progress: cli.progress };
    let report = seed::run_from(figment, WeaviateClient::connect, &cancel, options).await?;
    Ok(Some(report))
}
