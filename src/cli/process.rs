//! The wrapper flow: split arguments, remember mtime, optimize, restore.

use crate::models::{Invocation, Outcome, WrapperConfig};
use crate::runner::OptimizerRunner;
use crate::timestamp;
use crate::utils::format::format_bytes;
use crate::Result;
use colored::Colorize;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Run the optimizer on the file named by the last argument.
///
/// The target's mtime is read before optipng starts, so a missing file
/// fails here without the optimizer ever running. The mtime is put back
/// only after optipng reports success.
pub async fn run<I, S>(config: &WrapperConfig, args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let invocation = Invocation::from_args(args)?;
    let target = invocation.target();

    let mtime = timestamp::capture(target)?;
    let original_size = file_size(target);

    let runner = OptimizerRunner::new(&config.optimizer);
    println!("{}", progress_line(&runner, target).cyan());
    runner.run(&invocation).await?;

    let optimized_size = file_size(target);
    timestamp::restore(target, mtime);

    Ok(Outcome {
        target: invocation.target,
        original_size,
        optimized_size,
    })
}

/// Print the confirmation for a successful run.
pub fn report(config: &WrapperConfig, outcome: &Outcome) {
    println!("{}", confirmation(outcome).green());

    if config.report_savings {
        if let Some(line) = savings_line(outcome) {
            println!("{}", line.dimmed());
        }
    }
}

pub fn progress_line(runner: &OptimizerRunner, target: &Path) -> String {
    format!("Optimizing '{}' with {}...", target.display(), runner.program())
}

pub fn confirmation(outcome: &Outcome) -> String {
    format!("Processed '{}'.", outcome.target.display())
}

/// `None` when either size is unknown, e.g. the file vanished after the run.
pub fn savings_line(outcome: &Outcome) -> Option<String> {
    let savings = outcome.savings()?;
    Some(format!(
        "Saved {} ({} → {})",
        format_bytes(savings),
        format_bytes(outcome.original_size? as i64),
        format_bytes(outcome.optimized_size? as i64)
    ))
}

fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|m| m.len())
}
