use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hsym_config::HsymConfig;
use hsym_core::CheckRules;
use hsym_scan::Dispatcher;

mod cli;
mod output;
mod progress;
mod ui;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("hsym error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    ui::init(&cli);

    let config = HsymConfig::load_with_dotenv().context("failed to load configuration")?;
    let opts = cli.scan_options(&config.scan);
    tracing::debug!(?opts, "scan options");

    let dispatcher = Dispatcher::new(opts.workers).context("invalid --workers")?;
    let files = hsym_scan::collect_files(&cli.dirs, opts.mode, &opts.extensions)
        .context("failed to collect header files")?;

    let progress = progress::Progress::bar(u64::try_from(files.len()).unwrap_or(u64::MAX), "scanning");
    let report = dispatcher
        .run_with_progress(&files, |_| progress.inc(1))
        .context("failed to start workers")?;
    progress.finish_clear();

    output::print_result(&report.result, cli.format, cli.by_kind)?;

    for failure in &report.failures {
        eprintln!("hsym: {failure}");
    }

    if cli.check {
        let rules = CheckRules::from(config.check);
        let problems = hsym_core::check(&report.result, &rules);
        tracing::info!(problems = problems.len(), "check complete");
        output::print_problems(&problems, cli.format);
    }

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HSYM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
