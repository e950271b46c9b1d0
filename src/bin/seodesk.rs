//! seodesk - article dashboard in the terminal.
//!
//! Usage:
//!   seodesk                          # interactive dashboard with sample rows
//!   seodesk --data articles.json     # dashboard over a JSON file (r reloads)
//!   seodesk list --tab Generated --sort words
//!   seodesk list --status published --json
//!   seodesk publish --ids 1,2        # confirm on the terminal

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use seodesk::actions::{ActionOutcome, Dialog, Notice, Prompt, RowAction, run_action};
use seodesk::error::TableError;
use seodesk::fmt::{format_thousands, plural_suffix, truncate};
use seodesk::model::{ArticleStatus, ArticleTable, StatusFilter};
use seodesk::provider::{ArticleProvider, JsonFileProvider, LoadError, MockProvider};
use seodesk::table::{CategoryFilter, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES, TableConfig};
use seodesk::tui::App;

/// Tick rate of the dashboard event loop.
const TICK_RATE: Duration = Duration::from_millis(100);

/// SEO article dashboard.
#[derive(Parser)]
#[command(name = "seodesk", about = "SEO article dashboard", version)]
struct Args {
    /// JSON file with article rows. Built-in sample rows are used when omitted.
    #[arg(long, global = true, value_name = "PATH", env = "SEODESK_DATA")]
    data: Option<PathBuf>,

    /// Entries per page; must be one of --page-sizes.
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE, env = "SEODESK_PAGE_SIZE")]
    page_size: usize,

    /// Allowed entries-per-page values, comma separated.
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        default_values_t = DEFAULT_PAGE_SIZES,
        env = "SEODESK_PAGE_SIZES"
    )]
    page_sizes: Vec<usize>,

    /// Simulated loading delay of the dashboard in milliseconds.
    #[arg(long, default_value_t = 500, env = "SEODESK_LOADING_MS")]
    loading_ms: u64,

    /// Write logs to this file while the dashboard runs.
    /// Without it the dashboard does not log.
    #[arg(long, value_name = "PATH", env = "SEODESK_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive dashboard (default).
    Tui,
    /// Print one page of the table.
    List(ListArgs),
    /// Publish articles after confirmation.
    Publish(PublishArgs),
}

#[derive(clap::Args)]
struct ListArgs {
    /// Status tab label, e.g. "Generated Articles" or "Published".
    #[arg(long, value_name = "LABEL", env = "SEODESK_TAB", conflicts_with = "status")]
    tab: Option<String>,

    /// Status to show: generated, published, scheduled or archived.
    #[arg(long, env = "SEODESK_STATUS")]
    status: Option<ArticleStatus>,

    /// Case-insensitive search in title and keyword.
    #[arg(long, default_value = "", env = "SEODESK_SEARCH")]
    search: String,

    /// Sort field (traffic or words). Repeat to toggle the direction.
    #[arg(long, value_name = "FIELD")]
    sort: Vec<String>,

    /// Page number; out of range pages are clamped.
    #[arg(long, default_value_t = 1, env = "SEODESK_PAGE")]
    page: usize,

    /// Print the page snapshot as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct PublishArgs {
    /// Article ids, comma separated.
    #[arg(long = "ids", alias = "id", value_delimiter = ',', env = "SEODESK_IDS")]
    ids: Vec<u64>,

    /// Do not ask for confirmation.
    #[arg(short, long, env = "SEODESK_YES")]
    yes: bool,
}

/// Errors that end the process.
#[derive(Debug)]
enum CliError {
    Table(TableError),
    Load(LoadError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Table(e) => write!(f, "{}", e),
            CliError::Load(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<TableError> for CliError {
    fn from(e: TableError) -> Self {
        CliError::Table(e)
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        CliError::Load(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// Initialize logging with tracing.
/// Default level is INFO. The dashboard logs only to `log_file`; the other
/// commands log to stderr.
fn init_logging(verbose: u8, quiet: bool, interactive: bool, log_file: Option<&PathBuf>) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("seodesk={}", level)));

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return;
    }

    let Some(path) = log_file else {
        return;
    };
    match File::create(path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => eprintln!("Warning: cannot open log file '{}': {}", path.display(), e),
    }
}

/// Prompts on stdin/stdout.
struct TerminalDialog {
    assume_yes: bool,
}

impl Dialog for TerminalDialog {
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        println!("{}", prompt.title);
        println!("{}", prompt.text);
        if self.assume_yes {
            return true;
        }
        print!("{} / {} [y/N]: ", prompt.confirm_label, prompt.cancel_label);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&mut self, notice: &Notice) {
        println!("{}: {}", notice.title, notice.text);
    }
}

fn build_provider(data: Option<PathBuf>) -> Box<dyn ArticleProvider> {
    match data {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(MockProvider::new()),
    }
}

fn load_table(
    provider: &dyn ArticleProvider,
    page_sizes: Vec<usize>,
    page_size: usize,
) -> Result<ArticleTable, CliError> {
    let config = TableConfig::new(page_sizes, page_size)?;
    let rows = provider.load()?;
    info!(source = %provider.describe(), rows = rows.len(), "articles loaded");
    Ok(ArticleTable::new(rows, config)?)
}

fn run_list(table: &mut ArticleTable, args: ListArgs) -> Result<(), CliError> {
    let filter = match (args.tab.as_deref(), args.status) {
        (Some(label), _) => StatusFilter::from_tab_label(label),
        (None, Some(status)) => CategoryFilter::Only(status),
        (None, None) => CategoryFilter::All,
    };
    table.set_category(filter);
    table.set_search(args.search);
    for name in &args.sort {
        table.set_sort_by_name(name)?;
    }
    table.jump_to_page(args.page);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.snapshot())?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{:>4} {:<50} {:<36} {:>7} {:<14} {:<10}",
        "ID", "ARTICLE TITLE", "KEYWORD [TRAFFIC]", "WORDS", "CREATED ON", "STATUS"
    )?;
    for row in table.visible_rows() {
        let keyword = format!("{} [{}]", row.keyword, format_thousands(row.traffic));
        writeln!(
            out,
            "{:>4} {:<50} {:<36} {:>7} {:<14} {:<10}",
            row.id,
            truncate(&row.title, 50),
            truncate(&keyword, 36),
            format_thousands(row.words),
            row.created_on,
            row.status.name()
        )?;
    }
    let total = table.total();
    writeln!(
        out,
        "Total {} Article Title{} | Show {} entries per page | {}/{}",
        total,
        plural_suffix(total),
        table.page_size(),
        table.current_page(),
        table.page_count()
    )?;
    Ok(())
}

fn run_publish(table: &mut ArticleTable, args: PublishArgs) -> Result<(), CliError> {
    let action = match args.ids.as_slice() {
        [id] => {
            table.toggle_row_selected(*id)?;
            RowAction::publish(*id)
        }
        ids => {
            for &id in ids {
                if !table.is_selected(id) {
                    table.toggle_row_selected(id)?;
                }
            }
            RowAction::bulk_publish()
        }
    };

    let mut dialog = TerminalDialog {
        assume_yes: args.yes,
    };
    match run_action(table, action, &mut dialog)? {
        ActionOutcome::NothingToDo => {}
        ActionOutcome::Cancelled => println!("Cancelled"),
        ActionOutcome::Completed { affected } => {
            println!(
                "{} article{} queued for publishing",
                affected,
                plural_suffix(affected)
            );
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let provider = build_provider(args.data);
    let mut table = load_table(provider.as_ref(), args.page_sizes, args.page_size)?;

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let app = App::new(provider, table, Duration::from_millis(args.loading_ms));
            app.run(TICK_RATE)?;
        }
        Command::List(list) => run_list(&mut table, list)?,
        Command::Publish(publish) => run_publish(&mut table, publish)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let interactive = matches!(args.command, None | Some(Command::Tui));
    init_logging(args.verbose, args.quiet, interactive, args.log_file.as_ref());

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
