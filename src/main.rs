use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use keyfit::config::Config;
use keyfit::error::KfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; values given on the command line take precedence.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare layouts on one or more texts.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// List the registered layouts.
    Layouts(cmd::layouts::LayoutsArgs),
}

fn init_tracing(debug: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
}

/// File config as the base, explicit CLI flags on top.
fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> KfResult<Config> {
    match (path, sub_matches) {
        (Some(path), Some(matches)) => {
            info!("⚙️  Loading config from: {}", path);
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(cli_config, matches);
            Ok(config)
        }
        (Some(path), None) => Config::load_from_file(path),
        (None, _) => Ok(cli_config.clone()),
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> KfResult<()> {
    let sub_matches = matches.subcommand().map(|(_, m)| m);

    match cli.command {
        Commands::Analyze(args) => {
            let config = resolve_config(cli.config.as_deref(), &args.config, sub_matches)?;
            cmd::analyze::run(args, config)
        }
        Commands::Layouts(args) => {
            let config = resolve_config(cli.config.as_deref(), &args.config, sub_matches)?;
            cmd::layouts::run(config)
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
