//! usertable - Interactive user table.
//!
//! Generates a mock user list and shows it in a terminal table with search,
//! status and date filters, sortable columns, pagination and status edits.
//!
//! Usage:
//!   usertable                          # 100 random users
//!   usertable --seed 42 --count 250    # reproducible data set
//!   usertable --status blocked --sort name --desc
//!   usertable --seed 42 --dump         # print the first page as JSON

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use usertable::mock::{DEFAULT_RECORD_COUNT, generate_seeded};
use usertable::model::Status;
use usertable::tui::{App, AppState};
use usertable::util::parse_date;
use usertable::view::page::DEFAULT_ROWS_PER_PAGE;
use usertable::view::{
    DateRange, DerivedView, SortDirection, SortField, SortState, ViewError, ViewState,
    derive_view,
};

/// Event loop tick; drives status message expiry.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive user table with filtering, sorting and pagination.
#[derive(Parser)]
#[command(name = "usertable", about = "Interactive user table", version)]
struct Args {
    /// Number of generated users.
    #[arg(long, env = "USERTABLE_COUNT", default_value_t = DEFAULT_RECORD_COUNT)]
    count: u32,

    /// Seed for the mock data. Random when omitted.
    #[arg(long, env = "USERTABLE_SEED")]
    seed: Option<u64>,

    /// Rows per page (5 or 10).
    #[arg(long, env = "USERTABLE_ROWS_PER_PAGE", default_value_t = DEFAULT_ROWS_PER_PAGE)]
    rows_per_page: usize,

    /// Initial status filter (active, invited, blocked).
    #[arg(long, env = "USERTABLE_STATUS")]
    status: Option<Status>,

    /// Initial name search (case-insensitive substring).
    #[arg(long, env = "USERTABLE_SEARCH")]
    search: Option<String>,

    /// Earliest creation date, inclusive. Supported formats:
    /// - Date: 2015-06-01
    /// - ISO 8601: 2015-06-01T12:00:00Z
    /// - Relative: -30d, -2w, -6m, -1y, today
    #[arg(long, env = "USERTABLE_FROM", value_name = "DATE", value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Latest creation date, inclusive. Same formats as --from.
    #[arg(long, env = "USERTABLE_TO", value_name = "DATE", value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Initial sort field (id, name, status, email, date, invitedBy or the
    /// dotted form such as about.name).
    #[arg(long, env = "USERTABLE_SORT", value_name = "FIELD")]
    sort: Option<SortField>,

    /// Sort descending.
    #[arg(long, env = "USERTABLE_DESC")]
    desc: bool,

    /// Initial page, zero-based. Clamped to the last page.
    #[arg(long, env = "USERTABLE_PAGE", default_value_t = 0)]
    page: usize,

    /// Print the current page as JSON and exit instead of starting the TUI.
    #[arg(long, env = "USERTABLE_DUMP")]
    dump: bool,

    /// Write logs to this file. The TUI logs nothing without it.
    #[arg(long, env = "USERTABLE_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long, env = "USERTABLE_QUIET")]
    quiet: bool,
}

/// Output of `--dump`.
#[derive(Serialize)]
struct Dump<'a> {
    state: &'a ViewState,
    #[serde(flatten)]
    view: DerivedView<'a>,
}

/// Builds the starting view state from the command line.
/// Filters go first since changing them resets the sort.
fn initial_view(args: &Args) -> Result<ViewState, ViewError> {
    let mut view = ViewState::default()
        .with_status_filter(args.status)
        .with_search(args.search.clone().unwrap_or_default())
        .with_date_range(DateRange::new(args.from, args.to));

    if args.sort.is_some() || args.desc {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        view = view.with_sort(SortState::new(args.sort.unwrap_or_default(), direction));
    }

    Ok(view
        .with_rows_per_page(args.rows_per_page)?
        .with_page(args.page))
}

/// Initializes the tracing subscriber.
/// Default level is INFO; -v gives DEBUG, -vv TRACE, -q errors only.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&PathBuf>, dump: bool) -> std::io::Result<()> {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let directive = format!("usertable={}", level)
        .parse::<Directive>()
        .unwrap_or_else(|_| level.into());
    let filter = EnvFilter::from_default_env().add_directive(directive);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The TUI owns the terminal; only dump mode may log to stderr.
        None if dump => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_ref(), args.dump) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    let view = match initial_view(&args) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let records = generate_seeded(args.count, args.seed);
    info!(count = records.len(), seed = ?args.seed, "records generated");
    debug!(?view, "initial view");

    if args.dump {
        let derived = derive_view(&records, &view);
        let dump = Dump {
            state: &view,
            view: derived,
        };
        match serde_json::to_string_pretty(&dump) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize view: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let app = App::new(AppState::new(records, view));
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
