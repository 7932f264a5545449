//! One complete sweep: inventory, classification and review.

use crate::error::Result;
use crate::output::Formatter;
use crate::review::{ReviewReport, ReviewSession};
use credsweep_domain::SecretStore;
use credsweep_janitor::{classify, current_unix_micros, InventoryBuilder, RetentionCutoff, SweepConfig};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Run a sweep against the current system time.
pub fn run_sweep<S, R, W>(
    config: &SweepConfig,
    store: &mut S,
    input: R,
    out: W,
    formatter: Formatter,
) -> Result<ReviewReport>
where
    S: SecretStore,
    S::Error: Display,
    R: BufRead,
    W: Write,
{
    run_sweep_at(config, current_unix_micros(), store, input, out, formatter)
}

/// Run a sweep with `now_micros` as the current instant.
///
/// The retention threshold is validated before the store is touched.
pub fn run_sweep_at<S, R, W>(
    config: &SweepConfig,
    now_micros: i64,
    store: &mut S,
    input: R,
    mut out: W,
    formatter: Formatter,
) -> Result<ReviewReport>
where
    S: SecretStore,
    S::Error: Display,
    R: BufRead,
    W: Write,
{
    config.validate()?;
    let cutoff = RetentionCutoff::from_days(config.retention_days, now_micros)?;

    let inventory = InventoryBuilder::new(config.pattern.as_str()).build(&*store)?;
    writeln!(out, "{}", inventory.stats.summary())?;
    if config.verbose {
        writeln!(out, "{}", formatter.inventory_table(&inventory.stats))?;
    }

    let stale = classify(&inventory.records, &cutoff);
    writeln!(out, "Filtered down to {} creds in time range", stale.len())?;

    ReviewSession::new(store, input, out, formatter).run(&stale)
}
