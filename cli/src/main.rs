mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use clap::Parser;
use env_logger::Env;
use log::debug;
use vif_core::time::parse_date;
use vif_core::{
    today_in, ActionRequest, ClassifierContext, Config, DetermineActionResponse, DetermineActionUseCase,
    DateRange, IntentClassifier, TodoItem,
};

#[derive(Parser)]
#[command(name = "vif")]
#[command(about = "Turn natural-language todo commands into actions", long_about = None)]
struct Cli {
    /// Config file (default: ~/.vif/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct InputArgs {
    /// The command text, e.g. "mon wed fri do yoga"
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
    /// Emoji to use instead of the keyword default
    #[arg(long)]
    emoji: Option<String>,
    /// IANA timezone (overrides the config)
    #[arg(long)]
    tz: Option<String>,
    /// Reference date as YYYY-MM-DD (default: today in the timezone)
    #[arg(long)]
    today: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Expand recurring phrasing ("every day", "mon wed fri", "end of month") into dated tasks
    Batch {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Determine the full action list for a command
    Actions {
        #[command(flatten)]
        input: InputArgs,
        /// JSON file holding the current todo list
        #[arg(long)]
        todos: Option<PathBuf>,
        /// Start of the date range currently shown (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End of the date range currently shown (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Show the resolved configuration, or write the defaults with --init
    Config {
        #[arg(long)]
        init: bool,
    },
}

/// Stand-in for the hosted classifier; only batch phrasing resolves offline.
struct OfflineClassifier;

impl IntentClassifier for OfflineClassifier {
    fn classify(&self, request: &ActionRequest, context: &ClassifierContext) -> Result<DetermineActionResponse> {
        debug!("Offline classifier asked about {:?} ({})", request.text, context.today);
        Err(anyhow!("No recurrence pattern found and no external intent classifier is available"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Batch { input, json } => {
            let tz = resolve_timezone(&config, input.tz.as_deref())?;
            let today = resolve_today(input.today.as_deref(), tz)?;
            let assembler = config.assembler()?;
            let text = input.text.join(" ");

            match assembler.assemble(&text, input.emoji.as_deref(), today) {
                Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Some(result) => println!("{}", output::batch_table(&result, today)),
                None => {
                    eprintln!("No recurrence pattern found in \"{}\".", text);
                    process::exit(1);
                }
            }
        }
        Commands::Actions { input, todos, from, to } => {
            let tz = resolve_timezone(&config, input.tz.as_deref())?;
            let now = resolve_now(input.today.as_deref(), tz)?;
            let assembler = config.assembler()?;

            let mut request = ActionRequest::new(input.text.join(" "), tz);
            request.emoji = input.emoji;
            if let Some(path) = todos {
                request.todos = read_todos(&path)?;
            }
            request.date_range = resolve_date_range(from.as_deref(), to.as_deref())?;

            let usecase = DetermineActionUseCase::new(&assembler, &OfflineClassifier);
            let response = usecase.determine(&request, now)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Config { init } => {
            if init {
                let path = Config::default().save(cli.config.as_deref())?;
                println!("Wrote default config to {}", path.display());
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }
    Ok(())
}

fn resolve_timezone(config: &Config, flag: Option<&str>) -> Result<Tz> {
    match flag {
        Some(name) => Ok(vif_core::parse_timezone(name)?),
        None => config.timezone(),
    }
}

fn resolve_today(flag: Option<&str>, tz: Tz) -> Result<NaiveDate> {
    match flag {
        Some(d) => parse_date(d).with_context(|| format!("Invalid --today '{}', expected YYYY-MM-DD", d)),
        None => Ok(today_in(tz, Utc::now())),
    }
}

// A pinned date is taken at local noon so it stays that date in `tz`.
fn resolve_now(flag: Option<&str>, tz: Tz) -> Result<DateTime<Utc>> {
    if flag.is_none() {
        return Ok(Utc::now());
    }
    let today = resolve_today(flag, tz)?;
    let noon = today
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow!("Invalid reference time for {}", today))?;
    tz.from_local_datetime(&noon)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{} has no local noon in {}", today, tz.name()))
}

fn resolve_date_range(from: Option<&str>, to: Option<&str>) -> Result<Option<DateRange>> {
    match (from, to) {
        (Some(start), Some(end)) => {
            let start = parse_date(start).with_context(|| format!("Invalid --from '{}', expected YYYY-MM-DD", start))?;
            let end = parse_date(end).with_context(|| format!("Invalid --to '{}', expected YYYY-MM-DD", end))?;
            Ok(Some(DateRange::new(start, end)?))
        }
        (None, None) => Ok(None),
        _ => Err(anyhow!("--from and --to must be given together")),
    }
}

fn read_todos(path: &Path) -> Result<Vec<TodoItem>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse todos in {}", path.display()))
}
