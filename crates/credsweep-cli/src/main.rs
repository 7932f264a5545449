//! credsweep - Review and delete stale Windows Credential Manager entries.

use clap::Parser;
use credsweep_cli::{run_sweep, Cli, Formatter};
use credsweep_store::open_platform_store;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(!cli.no_color);
    let code = match run(cli, formatter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", formatter.error(&format!("Error: {e}")));
            e.exit_code()
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli, formatter: Formatter) -> credsweep_cli::Result<i32> {
    let (config, warnings) = cli.into_config()?;
    for warning in &warnings {
        println!("{}", formatter.warning(warning));
    }

    tracing::debug!(
        pattern = %config.pattern,
        retention_days = config.retention_days,
        "Starting sweep"
    );

    let mut store = open_platform_store();
    let report = run_sweep(
        &config,
        &mut store,
        io::stdin().lock(),
        io::stdout().lock(),
        formatter,
    )?;

    Ok(report.exit_code())
}

/// Log to stderr so the interactive transcript on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "credsweep=debug" } else { "credsweep=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
