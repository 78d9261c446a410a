// Copyright (C) Brian G. Milnes 2025

//! Rename identifiers across Cargo packages
//!
//! Like a rename refactoring, but purely textual per identifier: every
//! identifier token equal to --from becomes --to, with no check of what it
//! refers to. Only Rust identifiers change; strings and comments are left
//! alone.
//!
//! With --auto, every identifier a Go-lint style name check would flag is
//! rewritten (person_id -> personID, IpAddress -> IPAddress) and the distinct
//! changes are listed at the end.
//!
//! Binary: rename-global

use anyhow::Result;
use clap::Parser;
use rename_global::tool_runner::tool_runner::{run_tool, ToolConfig, ToolReport};
use rename_global::{change_lines, expand_patterns, run, site_lines, RenameArgs, USAGE};

fn main() -> Result<()> {
    let args = RenameArgs::parse();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: {USAGE}");
            std::process::exit(1);
        }
    };

    if let Some(jobs) = config.jobs {
        rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global()?;
    }

    let base_dir = args.base_dir();
    let expansion = expand_patterns(&args.packages);
    for warning in &expansion.warnings {
        eprintln!("{warning}");
    }

    let mut tool_config = ToolConfig::new("rename-global", base_dir.clone());
    tool_config.enable_logging = config.log;
    tool_config.quiet = config.json;

    let success = run_tool(tool_config, |logger| {
        if config.dry_run {
            logger.log("DRY RUN MODE - No files will be modified");
        }

        let mut report = run(&config, &expansion.locations);
        report.record_failures(&expansion.errors);

        for line in site_lines(&report, &base_dir) {
            if config.verbose || config.dry_run {
                logger.log(&line);
            } else {
                logger.log_silent(&line);
            }
        }
        for failure in &report.failures {
            logger.error(&failure.message);
        }
        for line in change_lines(&report) {
            logger.log(&line);
        }

        if config.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(ToolReport {
            summary: report.summary(config.dry_run),
            success: report.is_success(),
        })
    })?;

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
