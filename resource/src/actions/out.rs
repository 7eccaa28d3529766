//! `out`: deploy an app definition and wait for the deployment

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::deploy::payload::load_app;
use crate::deploy::poller::{self, await_deployment};
use crate::errors::ResourceError;
use crate::marathon::Marathoner;
use crate::models::request::OutRequest;
use crate::models::response::{MetadataPair, ResourceOutput, Version};

/// Run the `out` action. `app_json` is resolved against `sources_dir`.
pub async fn out<M>(
    request: &OutRequest,
    sources_dir: &Path,
    client: &M,
    poll_interval: Duration,
) -> Result<ResourceOutput, ResourceError>
where
    M: Marathoner + ?Sized,
{
    let params = &request.params;
    let app = load_app(params, sources_dir, &request.source.app_id).await?;

    info!("Deploying app {} (force: {})", app.id, params.force);
    let result = client.update_app(&app, params.force).await?;
    info!(
        "Started deployment {} for version {}",
        result.deployment_id, result.version
    );

    let options = poller::Options {
        interval: poll_interval,
        ..poller::Options::with_timeout_minutes(params.timeout)
    };
    await_deployment(&options, client, &result.deployment_id).await?;

    Ok(ResourceOutput {
        version: Version::new(result.version),
        metadata: vec![
            MetadataPair::new("id", app.id),
            MetadataPair::new("deployment_id", result.deployment_id),
        ],
    })
}
