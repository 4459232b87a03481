use clap::{Parser, Subcommand};
use eyre::Result;
use std::io;
use std::path::PathBuf;
use tasklist::render::render_as;
use tasklist::session::{replay, run_session};
use tasklist::{OutputFormat, RenderOptions, TaskListStore, jsonl};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - A single-session, in-memory task list")]
#[command(version)]
struct Cli {
    /// Output format for the rendered view
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log store activity to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session reading commands from stdin
    Repl,

    /// Apply a JSONL intent script and print the resulting view
    Run {
        /// Path to the script (one JSON intent per line)
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing; stdout is reserved for the view
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let opts = RenderOptions {
        color: !cli.no_color && cli.format == OutputFormat::Text,
    };
    let mut store = TaskListStore::new();

    match cli.command {
        Commands::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut store, stdin.lock(), &mut stdout, cli.format, &opts)?;
        }
        Commands::Run { script } => {
            let intents = jsonl::read_intents(&script)?;
            replay(&mut store, intents);
            print!("{}", render_as(&store, cli.format, &opts)?);
        }
    }

    Ok(())
}
