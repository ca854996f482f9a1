//! Command-line parsing and dispatch for the `venue` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;
use venue_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::client::{AppContext, CatalogSource, CliResult};
use crate::commands::{handle_list, handle_show};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CATALOG: &str = "http://127.0.0.1:8080/events-mock-data.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses CLI arguments, installs logging, executes the requested command,
/// and returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format,
        build_sha: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let trace_id = Uuid::new_v4().to_string();
    let ctx = match AppContext::new(cli.catalog, cli.timeout, &trace_id) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };

    let command = command_label(&cli.command);
    tracing::debug!(command, trace_id = %trace_id, "dispatching command");

    match dispatch(cli.command, &ctx, cli.output).await {
        Ok(()) => 0,
        Err(err) => {
            let message = err.display_message();
            tracing::info!(command, exit_code = err.exit_code(), "command failed");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

pub(crate) async fn dispatch(
    command: Command,
    ctx: &AppContext,
    output: OutputFormat,
) -> CliResult<()> {
    match command {
        Command::List => handle_list(ctx, output).await,
        Command::Show(args) => handle_show(ctx, args, output).await,
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::List => "list",
        Command::Show(_) => "show",
    }
}

#[derive(Parser)]
#[command(name = "venue", about = "Inspect the EventVenue event catalog")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "VENUE_CATALOG",
        value_parser = parse_catalog_source,
        default_value = DEFAULT_CATALOG,
        help = "Catalog URL (http/https) or path to a local JSON file"
    )]
    pub(crate) catalog: CatalogSource,
    #[arg(
        long,
        global = true,
        env = "VENUE_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(long, global = true, env = "VENUE_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        env = "VENUE_LOG_FORMAT",
        value_parser = parse_log_format,
        default_value = "pretty"
    )]
    pub(crate) log_format: LogFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// List every event and its scheduled dates.
    List,
    /// Resolve one event by route name and date, like the detail page does.
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowArgs {
    /// Event name as it appears in the page URL (e.g. `The-Nutcracker`).
    pub(crate) event_name: String,
    /// Event date, matched exactly (e.g. `2024-12-20`).
    pub(crate) event_date: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_catalog_source(input: &str) -> Result<CatalogSource, String> {
    CatalogSource::parse(input)
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse()
}
