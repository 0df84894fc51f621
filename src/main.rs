//! wa-direct - Main entry point
//!
//! With a number argument the chat link is opened right away; without one an
//! interactive session starts, optionally pre-filled with the dial code of the
//! user's country.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use wa_direct::cli::Cli;
use wa_direct::logging::{self, DEFAULT_LOG_LEVEL};
use wa_direct::session::HELP;
use wa_direct::{
    provider_for, AsyncGeocoder, AsyncGeocoderImpl, Config, GeocodingClient, LinkOpener,
    LocationSuggester, PrintOpener, SendOutcome, Session, SystemOpener,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is for the session)
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    logging::init(&log_level);

    let mut config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    cli.apply(&mut config)?;
    info!("Configuration loaded: {:?}", config);

    let opener: Arc<dyn LinkOpener> = if cli.dry_run {
        Arc::new(PrintOpener)
    } else {
        Arc::new(SystemOpener)
    };
    let mut session = Session::new(opener, io::stdout());

    if let Some(number) = cli.one_shot_number() {
        session.form_mut().set_input(number);
        return Ok(match session.send()? {
            SendOutcome::Opened(_) => ExitCode::SUCCESS,
            SendOutcome::OpenFailed(_) | SendOutcome::Invalid(_) => ExitCode::FAILURE,
        });
    }

    let client = GeocodingClient::new(&config);
    let metrics = client.metrics().clone();
    let geocoder = Arc::new(AsyncGeocoderImpl::new(client)) as Arc<dyn AsyncGeocoder>;
    let provider = provider_for(config.geolocation, config.position);
    let suggestions = LocationSuggester::new(provider, geocoder).spawn();

    println!("{}", HELP);
    session
        .run(BufReader::new(tokio::io::stdin()), suggestions)
        .await?;

    info!("Session ended: {:?}", metrics.summary());
    Ok(ExitCode::SUCCESS)
}
