use clap::Parser;
use kukakit::cli::Cli;
use kukakit::{commands, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level())?;
    tracing::debug!("kukakit {} (built {})", kukakit::VERSION, kukakit::BUILD_DATE);

    let report = commands::run(cli).await?;
    tracing::info!(
        "Done: {} chunk(s), {} file(s)",
        report.chunks,
        report.files.len()
    );

    Ok(())
}
