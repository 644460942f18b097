use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sales_dashboard::config::Cli;
use sales_dashboard::ingest::{Ingestor, SelectedFile};
use sales_dashboard::render::{JsonRenderer, Renderer};
use sales_dashboard::session::DashboardSession;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_filter());

    let session = DashboardSession::new(Ingestor::new().with_max_file_size(cli.max_file_size));

    //NOTE: A path that cannot be opened is treated the same as no file being selected
    let file = match SelectedFile::from_path(&cli.input).await {
        Ok(file) => Some(file),
        Err(error) => {
            error!("Error opening CSV at path: {} | {error}", cli.input.display());
            None
        }
    };

    let timer = Instant::now();
    let state = session.upload(file.as_ref()).await?;
    let duration = timer.elapsed();

    info!("Processed upload in: {duration:?}");

    if let Some(error) = &state.error {
        eprintln!("{error}");
        exit(1);
    }

    let mut renderer = JsonRenderer::new(BufWriter::new(stdout().lock()), cli.pretty);
    renderer.render(&state.dataset, cli.view)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Views are written to stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
