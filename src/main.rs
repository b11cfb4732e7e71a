mod error;
mod location;
mod report;
mod sun_times;

use std::io::{self, Write};

use tracing::{Instrument, debug, info, span};
use tracing_subscriber::EnvFilter;

use crate::{
    error::AppError,
    location::{Location, TARTU},
    report::Report,
    sun_times::SunTimesClient,
};

/// Fetches today's sun times for Tartu and prints them in local time.
///
/// Stdout gets either the ten report lines or a single diagnostic line; logs
/// (filtered by `RUST_LOG`) go to stderr.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = run(&TARTU)
        .instrument(span!(tracing::Level::INFO, "sun_times", location = TARTU.name))
        .await;

    let mut stdout = io::stdout().lock();
    match result {
        Ok(report) => {
            info!("Report ready");
            write!(stdout, "{report}")?;
        }
        Err(e) => {
            debug!("Run failed: {:?}", e);
            writeln!(stdout, "{e}")?;
        }
    }
    stdout.flush()?;

    Ok(())
}

/// Runs the whole pipeline for `location`, stopping at the first fatal error.
async fn run(location: &Location) -> Result<Report, AppError> {
    let client = SunTimesClient::new()?;
    let sun_times = client.get_sun_times(location).await?;
    Report::new(location, &sun_times)
}
