use anyhow::{Context, Result};
use clap::Parser;
use rowprune::cli::Cli;
use rowprune::FilterConfig;

fn main() -> Result<()> {
    env_logger::init();

    log::debug!("Starting rowprune v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = FilterConfig::from_cli(cli).context("invalid arguments")?;

    let report = rowprune::run(&config).with_context(|| {
        format!(
            "failed to filter '{}' into '{}'",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    println!(
        "Removed rows with empty '{}' ({} of {} dropped); saved {} rows to {}",
        config.column,
        report.dropped,
        report.total,
        report.kept,
        config.output_path.display()
    );

    Ok(())
}
