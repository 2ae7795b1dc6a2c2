use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use catalyst_core::{
    ExecutionParameter, ExecutionRequest, ParameterCatalog, ParameterDefinition, ParameterRecord,
};
use document::{DocumentStore, JsonDocumentFile};
use orchestrator::{LogProcessor, Runner, RunnerConfig};

const DEFAULT_WORKERS: usize = 4;

#[derive(Parser)]
#[command(name = "catalyst")]
#[command(about = "Catalog-driven execution orchestrator", long_about = None)]
#[command(version)]
struct Cli {
    /// Parameter catalog document (JSON)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Execution request document (JSON)
    #[arg(short, long)]
    request: PathBuf,

    /// Worker pool size
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog_store: JsonDocumentFile<ParameterDefinition> =
        JsonDocumentFile::new(&cli.catalog);
    let catalog_doc = catalog_store
        .load()
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    let request_store: JsonDocumentFile<ParameterRecord> = JsonDocumentFile::new(&cli.request);
    let request_doc = request_store
        .load()
        .with_context(|| format!("loading request {}", cli.request.display()))?;

    let catalog = ParameterCatalog::new(catalog_doc.content)?;
    let parameters: Vec<ExecutionParameter> =
        request_doc.content.into_iter().map(Into::into).collect();
    let request = ExecutionRequest::from_parameters(parameters);

    let runner = Runner::new(
        catalog,
        request,
        LogProcessor::factory(),
        RunnerConfig::new().with_worker_count(cli.workers),
    )?
    .with_request_header(request_doc.header);

    let report = runner.run().await?;

    Ok(if report.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
