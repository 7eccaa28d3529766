//! Deployment poller
//!
//! Polls Marathon until a deployment finishes. When the deadline passes first,
//! the deployment is cancelled once and the poll fails.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::errors::ResourceError;
use crate::marathon::Marathoner;

/// Poller options
#[derive(Debug, Clone)]
pub struct Options {
    /// Delay between two status checks
    pub interval: Duration,

    /// How long the deployment may run before it is cancelled
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Duration::from_secs(5 * 60),
        }
    }
}

impl Options {
    /// Default options with the timeout given in minutes
    pub fn with_timeout_minutes(minutes: u64) -> Self {
        Self {
            timeout: Duration::from_secs(minutes.saturating_mul(60)),
            ..Default::default()
        }
    }
}

/// Wait for a deployment to finish
pub async fn await_deployment<M>(
    options: &Options,
    client: &M,
    deployment_id: &str,
) -> Result<(), ResourceError>
where
    M: Marathoner + ?Sized,
{
    info!(
        "Waiting up to {} seconds for deployment {}...",
        options.timeout.as_secs(),
        deployment_id
    );

    // None when the timeout is past the clock's range: wait without a deadline
    let deadline = Instant::now().checked_add(options.timeout);
    let mut checks: u32 = 0;

    loop {
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            warn!(
                "Deployment {} still running after {} checks, cancelling",
                deployment_id, checks
            );
            return cancel_deployment(client, deployment_id).await;
        }

        checks += 1;
        if client.check_deployment(deployment_id).await? {
            info!("Deployment {} finished after {} checks", deployment_id, checks);
            return Ok(());
        }

        debug!("Deployment {} in progress", deployment_id);
        sleep(options.interval).await;
    }
}

/// Cancel a timed out deployment. Always an error: the timeout itself, or the
/// cancellation failure when Marathon refused it.
async fn cancel_deployment<M>(client: &M, deployment_id: &str) -> Result<(), ResourceError>
where
    M: Marathoner + ?Sized,
{
    match client.delete_deployment(deployment_id).await {
        Ok(()) => {
            info!("Deployment {} cancelled", deployment_id);
            Err(ResourceError::DeploymentTimeout(deployment_id.to_string()))
        }
        Err(e) => {
            error!("Failed to cancel deployment {}: {}", deployment_id, e);
            Err(ResourceError::CancelFailed {
                deployment_id: deployment_id.to_string(),
                reason: e.to_string(),
            })
        }
    }
}
