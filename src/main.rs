use anyhow::Context as _;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the completion line.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = asset_stubs::generate().context("failed to create placeholder images")?;
    tracing::debug!(
        files = report.files_written().len(),
        digest = %report.digest().short(),
        "placeholder assets written"
    );

    println!("Created placeholder images!");
    Ok(())
}
