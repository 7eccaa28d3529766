//! Run a resource command against its stdin request

use tracing::{debug, info};

use crate::actions::{check::check, fetch::fetch, out::out};
use crate::app::command::Command;
use crate::deploy::poller;
use crate::errors::ResourceError;
use crate::http::client::HttpClient;
use crate::logs::{init_logging, LogOptions};
use crate::models::request::{CheckRequest, InRequest, OutRequest, Source};

/// Run `command` with the JSON `input` read from stdin, returning the JSON to
/// write to stdout
pub async fn run(command: &Command, input: &str) -> Result<String, ResourceError> {
    match command {
        Command::Check => {
            let request: CheckRequest = parse_request(input)?;
            setup(command, &request.source);
            let client = HttpClient::from_source(&request.source)?;
            let output = check(&request, &client).await?;
            Ok(serde_json::to_string(&output)?)
        }
        Command::In(dest_dir) => {
            let request: InRequest = parse_request(input)?;
            setup(command, &request.source);
            let client = HttpClient::from_source(&request.source)?;
            let output = fetch(&request, dest_dir, &client).await?;
            Ok(serde_json::to_string(&output)?)
        }
        Command::Out(sources_dir) => {
            let request: OutRequest = parse_request(input)?;
            setup(command, &request.source);
            let client = HttpClient::from_source(&request.source)?;
            let interval = poller::Options::default().interval;
            let output = out(&request, sources_dir, &client, interval).await?;
            Ok(serde_json::to_string(&output)?)
        }
    }
}

fn parse_request<T: serde::de::DeserializeOwned>(input: &str) -> Result<T, ResourceError> {
    serde_json::from_str(input).map_err(|e| {
        ResourceError::ConfigError(format!("invalid request on stdin: {}", e))
    })
}

fn setup(command: &Command, source: &Source) {
    let options = LogOptions {
        log_level: source.log_level.clone(),
        json_format: source.json_logs,
    };
    // a subscriber may already be installed when running in-process
    if let Err(e) = init_logging(options) {
        debug!("Logging already initialized: {}", e);
    }

    info!(
        "Running {} for app {:?} on {}",
        command.name(),
        source.app_id,
        source.uri
    );
}
