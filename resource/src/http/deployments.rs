//! Deployment API client

use marathon_models::Deployment;
use reqwest::{Method, RequestBuilder};

use crate::errors::ResourceError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List running deployments
    pub async fn get_deployments(&self) -> Result<Vec<Deployment>, ResourceError> {
        let request = self.request(Method::GET, &["v2", "deployments"])?;
        self.send_json(request).await
    }

    /// `DELETE /v2/deployments/{id}`
    pub fn cancel_deployment_request(
        &self,
        deployment_id: &str,
    ) -> Result<RequestBuilder, ResourceError> {
        self.request(Method::DELETE, &["v2", "deployments", deployment_id])
    }

    /// Cancel a running deployment, rolling it back
    pub async fn cancel_deployment(&self, deployment_id: &str) -> Result<(), ResourceError> {
        self.send_empty(self.cancel_deployment_request(deployment_id)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::http::client::Credentials;

    #[test]
    fn test_cancel_deployment_request() {
        let client = HttpClient::new(
            "http://marathon.local:8080",
            Credentials::Anonymous,
            Duration::from_secs(5),
        )
        .unwrap();

        let request = client
            .cancel_deployment_request("5ed4c0c5-9ff8-4a6f-a0cd-f57f59a34b43")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "http://marathon.local:8080/v2/deployments/5ed4c0c5-9ff8-4a6f-a0cd-f57f59a34b43"
        );
    }

    #[test]
    fn test_cancel_deployment_request_encodes_id() {
        let client = HttpClient::new(
            "http://marathon.local:8080",
            Credentials::Anonymous,
            Duration::from_secs(5),
        )
        .unwrap();

        let request = client
            .cancel_deployment_request("a b/c")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/v2/deployments/a%20b%2Fc");
    }
}
