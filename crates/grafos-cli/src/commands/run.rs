//! Script execution command.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use grafos::GraphConfig;

use super::script::parse_line;
use super::session::{Report, Session};
use crate::OutputFormat;
use crate::output::{self, Format};

/// Reads a script from a file, or from standard input when `source` is `-`.
pub fn read_script(source: &str) -> Result<String> {
    if source == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("failed to read script from standard input")?;
        return Ok(script);
    }
    let path = Path::new(source);
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
}

/// Runs every line of `script` through `session`, handing each report to
/// `emit`. Stops at the first failing line.
pub fn execute_script(
    script: &str,
    session: &mut Session,
    mut emit: impl FnMut(&Report) -> Result<()>,
) -> Result<usize> {
    let mut executed = 0;
    for (index, line) in script.lines().enumerate() {
        let number = index + 1;
        let Some(command) = parse_line(line).with_context(|| format!("line {number}"))? else {
            continue;
        };
        let report = session
            .execute(command)
            .with_context(|| format!("line {number}: {}", line.trim()))?;
        emit(&report)?;
        executed += 1;
    }
    Ok(executed)
}

/// Runs a script and prints each result.
pub fn run(source: &str, config: GraphConfig, format: OutputFormat, quiet: bool) -> Result<()> {
    let script = read_script(source)?;
    run_script(&script, config, format, quiet)
}

/// Shared by `run` and `demo`.
pub fn run_script(script: &str, config: GraphConfig, format: OutputFormat, quiet: bool) -> Result<()> {
    let fmt: Format = format.into();
    let mut session = Session::new(config);
    let executed = execute_script(script, &mut session, |report| {
        output::print_report(report, fmt, quiet)
    })?;
    tracing::info!(commands = executed, "script finished");
    Ok(())
}
