//! Interactive terminal front end for the aalto task tracker.
//!
//! Presents a numbered menu over the task store and persists the whole
//! store after every mutating action. The data file location comes from
//! `--data-file`, an optional JSON configuration file, or the default
//! `data/tasks.dat`; start-up loads whatever snapshot exists and a missing
//! or unreadable snapshot simply means an empty list.

mod config;
mod flows;
mod input;
mod ui;


use aalto::task::adapters::flat_file::FlatFileArchive;
use aalto::task::services::TaskTrackerService;
use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use std::io;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "aalto", about = "Single-user terminal task tracker")]
struct Cli {
    /// Path of the task data file.
    #[arg(long, value_name = "PATH")]
    data_file: Option<Utf8PathBuf>,

    /// Path of an optional JSON configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let data_file = config::resolve_data_file(cli.data_file, cli.config.as_deref())?;
    let archive = FlatFileArchive::open(&data_file)?;
    let mut service = TaskTrackerService::new(archive, DefaultClock);
    if let Err(err) = service.load() {
        tracing::debug!(%err, path = %data_file, "starting with an empty task list");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    flows::run(&mut service, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
