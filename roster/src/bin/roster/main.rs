mod commands;
mod context;
mod examples;
mod output;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use commands::{
    check::handle_check,
    find::{FindArgs, handle_find},
    init::{InitArgs, handle_init},
    parse::{ParseArgs, handle_parse},
};
use context::RosterContext;
use output::{Console, GlobalOptions, OutputFormat};

#[derive(Parser)]
#[command(name = "roster", version, styles = help_styles())]
#[command(
    about = "Parse and search student roster commands",
    long_about = "Parse student roster command lines the way the roster application reads them, \
                  and search or validate a roster data file.\n\n\
                  Prefixes: /n name, /id student ID, /nid NetID, /m major, /y year, /g group, \
                  /c comment, /r remark."
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// How listings are printed
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Print only errors
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Also print what roster is reading and parsing
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Roster data file to use instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a command line and show the resulting command
    Parse(ParseArgs),

    /// Search the roster with /n, /id and /g criteria
    Find(FindArgs),

    /// Validate every record in the roster data file
    Check,

    /// Write .roster/config.toml and a sample roster
    Init(InitArgs),
}

fn help_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightBlue.on_default().bold())
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
}

fn main() {
    env_logger::init();

    let matches = examples::attach(Cli::command()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    if let Err(err) = execute(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let color_configured = RosterContext::find().map(|ctx| ctx.color_enabled()).unwrap_or(true);
    let no_color = cli.no_color || !color_configured;
    if no_color {
        colored::control::set_override(false);
    }

    let console = Console::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color,
    });
    let data = cli.data.as_deref();

    match cli.command {
        Commands::Parse(args) => handle_parse(args, &console),
        Commands::Find(args) => handle_find(args, data, &console),
        Commands::Check => handle_check(data, &console),
        Commands::Init(args) => handle_init(args, data, &console),
    }
}
