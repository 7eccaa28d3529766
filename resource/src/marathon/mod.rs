//! Marathon operations used by the resource actions

use async_trait::async_trait;
use marathon_models::{Application, Deployment, DeploymentResult};
use tracing::debug;

use crate::errors::ResourceError;
use crate::http::client::HttpClient;

/// The subset of Marathon the actions depend on, kept behind a trait so the
/// actions can run against a mock
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Marathoner: Send + Sync {
    /// Submit an app definition, returning the started deployment
    async fn update_app(
        &self,
        app: &Application,
        force: bool,
    ) -> Result<DeploymentResult, ResourceError>;

    /// `true` once the deployment has finished
    async fn check_deployment(&self, deployment_id: &str) -> Result<bool, ResourceError>;

    /// Cancel a deployment
    async fn delete_deployment(&self, deployment_id: &str) -> Result<(), ResourceError>;

    /// Stored versions of an app, newest first
    async fn app_versions(&self, app_id: &str) -> Result<Vec<String>, ResourceError>;

    /// App definition at a version
    async fn get_app(&self, app_id: &str, version: &str) -> Result<Application, ResourceError>;
}

/// A deployment is finished once Marathon no longer lists it as running
pub fn deployment_finished(running: &[Deployment], deployment_id: &str) -> bool {
    !running.iter().any(|d| d.id == deployment_id)
}

#[async_trait]
impl Marathoner for HttpClient {
    async fn update_app(
        &self,
        app: &Application,
        force: bool,
    ) -> Result<DeploymentResult, ResourceError> {
        self.put_app(app, force).await
    }

    async fn check_deployment(&self, deployment_id: &str) -> Result<bool, ResourceError> {
        let deployments = self.get_deployments().await?;
        let finished = deployment_finished(&deployments, deployment_id);
        debug!(
            "Deployment {} finished: {} ({} deployments in progress)",
            deployment_id,
            finished,
            deployments.len()
        );
        Ok(finished)
    }

    async fn delete_deployment(&self, deployment_id: &str) -> Result<(), ResourceError> {
        self.cancel_deployment(deployment_id).await
    }

    async fn app_versions(&self, app_id: &str) -> Result<Vec<String>, ResourceError> {
        let versions = self.get_app_versions(app_id).await?;
        Ok(versions.newest_first())
    }

    async fn get_app(&self, app_id: &str, version: &str) -> Result<Application, ResourceError> {
        self.get_app_version(app_id, version).await
    }
}
