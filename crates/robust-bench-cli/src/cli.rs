use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use robust_bench::reporting::ReportFormat;
use std::path::PathBuf;

use crate::commands::bench::{resolve_config, run_benchmark, ConfigOverrides};
use crate::commands::init_config::handle_init_config;
use crate::logging::setup_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,

    #[arg(
        long = "log-dir",
        value_name = "DIR",
        global = true,
        help = "Also write logs to a daily rolling file in this directory"
    )]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Benchmark configuration file (JSON or TOML)",
        long_help = "Load the benchmark table from a file. Files ending in .json are read as JSON, anything else as TOML. Fields left out keep their defaults."
    )]
    config: Option<PathBuf>,

    #[arg(long = "bin-path", value_name = "PATH", help = "Model checker executable")]
    bin_path: Option<PathBuf>,

    #[arg(long = "model-dir", value_name = "DIR", help = "Directory holding the model files")]
    model_dir: Option<PathBuf>,

    #[arg(long, value_name = "N", help = "Value passed to the checker as --rounds")]
    rounds: Option<u64>,

    #[arg(
        long = "avg-count",
        value_name = "N",
        help = "Repetitions averaged per model and amount"
    )]
    avg_count: Option<usize>,

    #[arg(
        long,
        value_name = "AMOUNTS",
        value_delimiter = ',',
        help = "Comma-separated list of --runs values"
    )]
    amounts: Vec<u64>,

    #[arg(
        long = "output",
        short = 'o',
        value_name = "FILE",
        help = "Also save benchmark results to a file"
    )]
    output: Option<PathBuf>,

    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Report file format (json, csv, text)",
        default_value = "json"
    )]
    format: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the benchmark (the default when no command is given)
    #[command(about = "Run the benchmark table against the model checker")]
    Run(RunArgs),

    /// Emit the built-in configuration
    #[command(about = "Print or save the default benchmark configuration")]
    InitConfig {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Write the configuration here instead of stdout"
        )]
        output: Option<PathBuf>,
    },
}

fn handle_run(args: RunArgs) -> Result<()> {
    let format: ReportFormat = args.format.parse()?;
    let config = resolve_config(
        args.config.as_deref(),
        ConfigOverrides {
            bin_path: args.bin_path,
            model_dir: args.model_dir,
            rounds: args.rounds,
            avg_count: args.avg_count,
            amounts: args.amounts,
        },
    )?;
    run_benchmark(config, args.output.as_deref(), format)
}

pub fn cli() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.verbose, cli.log_dir.as_deref())?;

    match cli.command {
        Some(Command::Run(args)) => handle_run(args),
        Some(Command::InitConfig { output }) => handle_init_config(output.as_deref()),
        None => handle_run(RunArgs {
            format: "json".to_string(),
            ..RunArgs::default()
        }),
    }
}
