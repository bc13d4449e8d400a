//! Send a single event to Mixpanel from the command line.
//!
//! ```sh
//! mixpanel-track <token> <event> [distinct_id] [key=value ...]
//! ```
//!
//! Property values are sent as strings. Arguments that are not exactly one
//! `key=value` pair are ignored.

use std::process::ExitCode;

use clap::Parser;
use mixpanel_track::{MixpanelClient, Properties, BASE_URL_ENV, DEFAULT_BASE_URL};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Track one Mixpanel event.
#[derive(Parser, Debug)]
#[command(name = "mixpanel-track")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project token
    token: String,

    /// Event name
    event: String,

    /// Distinct id of the user the event belongs to
    distinct_id: Option<String>,

    /// Event properties as key=value pairs
    properties: Vec<String>,

    /// API base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// Build a property bag from `key=value` arguments, dropping anything else.
fn parse_properties(pairs: &[String]) -> Properties {
    pairs
        .iter()
        .filter_map(|pair| {
            let parts: Vec<&str> = pair.split('=').collect();
            match parts.as_slice() {
                [key, value] => Some((key.to_string(), Value::String(value.to_string()))),
                _ => None,
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match MixpanelClient::new(&cli.token) {
        Ok(client) => client.with_base_url(&cli.base_url),
        Err(e) => {
            error!(error = %e, "Failed to create client");
            return ExitCode::FAILURE;
        }
    };

    let distinct_id = cli.distinct_id.as_deref().unwrap_or_default();
    let properties = parse_properties(&cli.properties);

    match client.track(distinct_id, &cli.event, properties).await {
        Ok(()) => {
            info!(event = %cli.event, "Event tracked");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
