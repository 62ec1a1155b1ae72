//! fleetdash - fleet operations dashboard.
//!
//! Shows devices, streaming nodes and activity logs as searchable, sortable,
//! paginated tables. Runs an interactive TUI by default; `print` renders one
//! page of one view to stdout.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod print;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use fleetdash_core::model::{Activity, Collection, Device, Node};
use fleetdash_core::provider::{DirectoryProvider, InMemoryProvider, RecordProvider, load_or_empty};
use fleetdash_core::tui::{App, AppState};

use print::PrintArgs;

/// Fleet operations dashboard.
#[derive(Parser)]
#[command(name = "fleetdash", about = "Fleet operations dashboard", version = fleetdash_core::VERSION)]
struct Args {
    /// Directory with devices.json, nodes.json and activities.json.
    #[arg(long, env = "FLEETDASH_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Log file used while the TUI owns the terminal.
    #[arg(long, env = "FLEETDASH_LOG_FILE", default_value = "fleetdash.log")]
    log_file: PathBuf,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one page of a view and exit.
    Print(PrintArgs),
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
///
/// With `log_file` set, logs go there instead of stderr.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["fleetdash", "fleetdash_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file.map(|p| OpenOptions::new().create(true).append(true).open(p)) {
        Some(Ok(file)) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Some(Err(e)) => {
            // Terminal belongs to the TUI; drop logs rather than corrupt it.
            eprintln!("warning: cannot open log file: {}", e);
            builder.with_writer(std::io::sink).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
}

/// Opens the data directory; an unusable directory behaves like a source
/// with no collections, so every view renders empty.
fn open_provider(data_dir: &Path) -> Box<dyn RecordProvider> {
    match DirectoryProvider::open(data_dir) {
        Ok(p) => Box::new(p),
        Err(e) => {
            warn!(error = %e, "data directory unavailable");
            Box::new(InMemoryProvider::new())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let tui_mode = args.command.is_none();
    init_logging(
        args.verbose,
        args.quiet,
        tui_mode.then_some(args.log_file.as_path()),
    );

    info!("fleetdash {} starting", fleetdash_core::VERSION);
    let provider = open_provider(&args.data_dir);
    info!(source = %provider.describe(), "data source");

    match args.command {
        Some(Command::Print(print_args)) => match print::run(provider.as_ref(), &print_args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "print failed");
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
        None => {
            let devices: Vec<Device> = load_or_empty(provider.as_ref(), Collection::Devices);
            let nodes: Vec<Node> = load_or_empty(provider.as_ref(), Collection::Nodes);
            let activities: Vec<Activity> =
                load_or_empty(provider.as_ref(), Collection::Activities);

            let app = App::new(AppState::new(devices, nodes, activities));
            match app.run(Duration::from_millis(250)) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!(error = %e, "terminal error");
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
