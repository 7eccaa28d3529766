//! App API client

use marathon_models::{AppVersions, Application, DeploymentResult};
use reqwest::{Method, RequestBuilder};

use crate::errors::ResourceError;
use crate::http::client::HttpClient;
use crate::utils::app_id_segments;

/// `/v2/apps/<app id...>/<suffix...>`
fn app_path<'a>(app_id: &'a str, suffix: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["v2", "apps"];
    segments.extend(app_id_segments(app_id));
    segments.extend_from_slice(suffix);
    segments
}

impl HttpClient {
    /// `PUT /v2/apps/{id}`, with `force=true` to override a locked app
    pub fn put_app_request(
        &self,
        app: &Application,
        force: bool,
    ) -> Result<RequestBuilder, ResourceError> {
        let mut request = self.request(Method::PUT, &app_path(&app.id, &[]))?.json(app);
        if force {
            request = request.query(&[("force", "true")]);
        }
        Ok(request)
    }

    /// Create or update an app, starting a deployment
    pub async fn put_app(
        &self,
        app: &Application,
        force: bool,
    ) -> Result<DeploymentResult, ResourceError> {
        self.send_json(self.put_app_request(app, force)?).await
    }

    /// List the stored versions of an app
    pub async fn get_app_versions(&self, app_id: &str) -> Result<AppVersions, ResourceError> {
        let request = self.request(Method::GET, &app_path(app_id, &["versions"]))?;
        self.send_json(request).await
    }

    /// `GET /v2/apps/{id}/versions/{version}`
    pub fn app_version_request(
        &self,
        app_id: &str,
        version: &str,
    ) -> Result<RequestBuilder, ResourceError> {
        self.request(Method::GET, &app_path(app_id, &["versions", version]))
    }

    /// Get the app definition at a specific version
    pub async fn get_app_version(
        &self,
        app_id: &str,
        version: &str,
    ) -> Result<Application, ResourceError> {
        self.send_json(self.app_version_request(app_id, version)?).await
    }
}
