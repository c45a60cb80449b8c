use anyhow::Result;
use athygprep::reduce::reduce_catalog_file;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// AT-HYG v2.4 export in the working directory.
const CATALOG_PATH: &str = "athyg_v24.csv";
/// Reduced table, overwritten on each run.
const OUTPUT_PATH: &str = "athyg_v24_processed.csv";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let start = Instant::now();
    let stats = reduce_catalog_file(CATALOG_PATH, OUTPUT_PATH)?;
    info!(
        rows = stats.rows,
        emitted = stats.emitted,
        skipped = stats.skipped,
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}
