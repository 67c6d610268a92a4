use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, LevelFilter};

use check_foreman::config::ConfigOverrides;
use check_foreman::error::EXIT_CODE_GENERAL_ERROR;
use check_foreman::{run_report, source, CheckError, DocumentSource, ForemanConfig, Report, Runner};

/// CheckMK check_foreman Script
#[derive(Debug, Parser)]
#[command(name = "check_foreman", version)]
struct Cli {
    /// Specify the target hostname
    #[arg(short, long)]
    target: Option<String>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Do not make any real API calls, read the example response file instead
    #[arg(short, long)]
    simulate: bool,

    /// Ignore TLS certificate warnings
    #[arg(long)]
    insecure: bool,

    /// TOML file with the API connection settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Foreman hosts API endpoint
    #[arg(long, env = "FOREMAN_URL")]
    url: Option<String>,

    /// Foreman API user
    #[arg(long, env = "FOREMAN_USER")]
    user: Option<String>,

    /// Foreman API token
    #[arg(long, env = "FOREMAN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Response file used in simulation mode
    #[arg(long, value_name = "FILE")]
    example_file: Option<PathBuf>,

    /// Print the agent section header before the check lines
    #[arg(long)]
    section_header: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_CODE_GENERAL_ERROR);
        }
    };

    init_logging(cli.debug);

    Runner::new()
        .section_header(cli.section_header)
        .safe_run(|| run(cli))
        .print_and_exit()
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("check_foreman", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<Report, CheckError> {
    let target = match cli.target.as_deref() {
        Some(target) if !target.is_empty() => target,
        _ => return Err(CheckError::TargetEmpty),
    };

    let overrides = ConfigOverrides {
        url: cli.url,
        user: cli.user,
        token: cli.token,
        insecure: cli.insecure,
        timeout_secs: cli.timeout,
        example_file: cli.example_file,
    };
    let config = ForemanConfig::load(cli.config.as_deref(), overrides)?;
    debug!("config: {:?}", config);

    let document = source::from_config(&config, cli.simulate)?.fetch()?;
    run_report(&document, target)
}
