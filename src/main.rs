//! Galton bean machine CLI
//!
//! Drops beans through a pegboard and prints where they landed.
//!
//! Usage:
//!   galton <SLOT_COUNT> <BEAN_COUNT> <luck|skill> [OPTIONS]
//!
//! Options:
//!   --seed N     RNG seed (default: random)
//!   --runs N     Number of runs with incrementing seeds (default: 1)
//!   --json       Print the report as JSON
//!   --verbose    Per-run logging
//!   --quiet      Only the final summary line

use galton::build_info;
use galton::simulator::{run_simulation, SimConfig};
use galton::BeanMode;
use std::process::ExitCode;

#[derive(Debug, Default)]
struct CliArgs {
    config: SimConfig,
    json: bool,
    quiet: bool,
}

enum Command {
    Run(CliArgs),
    Help,
    Version,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    value
        .ok_or_else(|| format!("{flag} requires a value"))?
        .parse()
        .map_err(|_| format!("{flag} requires a number"))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut cli = CliArgs::default();
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                i += 1;
                cli.config.seed = Some(parse_number("--seed", args.get(i))?);
            }
            "--runs" => {
                i += 1;
                cli.config.num_runs = parse_number("--runs", args.get(i))?;
            }
            "--json" => cli.json = true,
            "--verbose" => cli.config.verbosity = 2,
            "--quiet" => cli.quiet = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown argument: {flag}")),
            value => positional.push(value.to_string()),
        }
        i += 1;
    }

    let [slots, beans, mode] = positional.as_slice() else {
        return Err("expected <SLOT_COUNT> <BEAN_COUNT> <luck|skill>".to_string());
    };
    cli.config.slot_count = slots
        .parse()
        .map_err(|_| format!("invalid slot count: {slots}"))?;
    if cli.config.slot_count < 1 {
        return Err("slot count must be at least 1".to_string());
    }
    cli.config.bean_count = beans
        .parse()
        .map_err(|_| format!("invalid bean count: {beans}"))?;
    cli.config.mode =
        BeanMode::from_name(mode).ok_or_else(|| format!("mode must be luck or skill, got {mode}"))?;
    if cli.quiet {
        cli.config.verbosity = 0;
    }

    Ok(Command::Run(cli))
}

fn print_usage() {
    eprintln!(
        "Galton bean machine\n\
         \n\
         Usage: galton <SLOT_COUNT> <BEAN_COUNT> <luck|skill> [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seed N     RNG seed (default: random)\n\
         \x20 --runs N     Number of runs with incrementing seeds (default: 1)\n\
         \x20 --json       Print the report as JSON\n\
         \x20 --verbose    Per-run logging\n\
         \x20 --quiet      Only final summary line\n\
         \x20 --version    Show version information\n\
         \x20 --help, -h   Show this help"
    );
}

/// Initialise the `tracing` subscriber.
fn init_logging(verbosity: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = match verbosity {
        0 => "galton=warn",
        1 => "galton=info",
        _ => "galton=debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!(
                "galton {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.config.verbosity);

    let report = match run_simulation(&cli.config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if cli.quiet {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.to_text());
    }

    ExitCode::SUCCESS
}
