//! jobscope - terminal dashboard for the job-market scraper API.
//!
//! Usage:
//!   jobscope                               # dashboard for http://localhost:5000
//!   jobscope --api-url http://host:8080    # custom backend
//!   jobscope --demo                        # built-in sample data
//!   jobscope --dump                        # print the derived view as JSON
//!   jobscope --log-file /tmp/jobscope.log  # log while the dashboard runs

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use jobscope::loader::{DEFAULT_API_URL, DataSource, HttpSource, MockSource, load};
use jobscope::logging::{LogTarget, init_logging};
use jobscope::tui::App;
use jobscope::view::dashboard::build_dashboard;
use jobscope::view::{ViewEvent, ViewPhase, ViewState};

/// Header clock refresh interval.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Terminal dashboard for scraped job postings.
#[derive(Parser)]
#[command(name = "jobscope", version, about = "Job market dashboard")]
struct Args {
    /// Base URL of the scraper API.
    #[arg(
        long,
        env = "JOBSCOPE_API_URL",
        default_value = DEFAULT_API_URL
    )]
    api_url: String,

    /// Per-request timeout in seconds (0 disables the timeout).
    #[arg(long, env = "JOBSCOPE_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Use built-in sample data instead of the API.
    #[arg(long)]
    demo: bool,

    /// Load once, print the dashboard view as JSON and exit.
    #[arg(long)]
    dump: bool,

    /// Write logs to this file (the dashboard itself never logs to the terminal).
    #[arg(long, env = "JOBSCOPE_LOG", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let target = match (&args.log_file, args.dump) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    if let Err(e) = init_logging(args.verbose, args.quiet, target) {
        eprintln!("Error: cannot initialize logging: {}", e);
        std::process::exit(1);
    }

    let source: Arc<dyn DataSource> = if args.demo {
        Arc::new(MockSource::sample())
    } else {
        let timeout = (args.timeout > 0).then(|| Duration::from_secs(args.timeout));
        match HttpSource::new(&args.api_url, timeout) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                eprintln!("Error: cannot create HTTP client: {}", e);
                std::process::exit(1);
            }
        }
    };

    info!(
        "jobscope {} starting (source: {})",
        env!("CARGO_PKG_VERSION"),
        source.describe()
    );

    if args.dump {
        std::process::exit(dump(source.as_ref()));
    }

    let app = App::new(source);
    if let Err(e) = app.run(TICK_RATE) {
        error!("TUI error: {}", e);
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Performs one load and prints the dashboard view. Returns the exit code.
fn dump(source: &dyn DataSource) -> i32 {
    let mut state = ViewState::new();
    let session = state.next_session();
    state.apply(ViewEvent::LoadStarted { session });
    state.apply(ViewEvent::LoadFinished {
        session,
        result: load(source),
    });

    let Some(view) = build_dashboard(&state, None) else {
        if let ViewPhase::Failed(e) = &state.phase {
            error!("Load failed: {}", e);
            eprintln!("Error: {}", e);
        }
        return 1;
    };

    match serde_json::to_string_pretty(&view) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: cannot encode view: {}", e);
            1
        }
    }
}
