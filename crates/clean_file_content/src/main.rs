// crates/clean_file_content/src/main.rs

use std::io;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use clean_file_content::cli::build_command;
use clean_file_content::interactive::prompt_for_path;
use clean_file_content::{clean_files, collect_targets, logging, AppConfig};

fn main() -> Result<()> {
    let matches = build_command().get_matches();
    let config = AppConfig::from_matches(&matches);

    logging::init(config.verbose).map_err(|err| anyhow!("Failed to initialise logging: {err}"))?;
    debug!(?config, "Resolved configuration");

    // 1. Determine files to process, falling back to the interactive prompt.
    let requested = if config.files.is_empty() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match prompt_for_path(&mut input, &mut output).context("Failed to read file path")? {
            Some(path) => vec![path],
            None => return Ok(()),
        }
    } else {
        config.files.clone()
    };

    // 2. Expand directories.
    let targets = collect_targets(&requested, &config.target_options());
    if targets.is_empty() {
        warn!("No files to process");
        return Ok(());
    }

    // 3. Clean every file; failures are collected, not fatal.
    let rewriter = config.rewriter();
    let report = clean_files(&rewriter, &targets);

    if report.files.len() > 1 {
        report
            .write_summary(&mut io::stdout().lock())
            .context("Failed to print results summary")?;
    }

    if !report.all_succeeded() {
        std::process::exit(report.exit_code());
    }
    Ok(())
}
