//! `in`: fetch an app version into the destination directory

use std::path::Path;

use tracing::info;

use crate::actions::require_app_id;
use crate::errors::ResourceError;
use crate::filesys::file::File;
use crate::marathon::Marathoner;
use crate::models::request::InRequest;
use crate::models::response::{MetadataPair, ResourceOutput};

/// Name of the file written into the destination directory
pub const APP_FILE_NAME: &str = "app.json";

/// Run the `in` action
pub async fn fetch<M>(
    request: &InRequest,
    dest_dir: &Path,
    client: &M,
) -> Result<ResourceOutput, ResourceError>
where
    M: Marathoner + ?Sized,
{
    let app_id = require_app_id(&request.source)?;
    let version = &request.version.reference;

    let app = client.get_app(app_id, version).await?;

    let file = File::new(dest_dir.join(APP_FILE_NAME));
    file.write_json(&app).await?;
    info!("Wrote {} version {} to {}", app_id, version, file.path().display());

    let mut metadata = vec![MetadataPair::new("id", app.id.as_str())];
    if let Some(image) = app.docker_image() {
        metadata.push(MetadataPair::new("image", image));
    }

    Ok(ResourceOutput {
        version: request.version.clone(),
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::payload::parse_app;
    use crate::marathon::MockMarathoner;
    use crate::models::request::Source;
    use crate::models::response::Version;
    use pretty_assertions::assert_eq;

    fn request(app_id: &str) -> InRequest {
        InRequest {
            source: Source {
                app_id: app_id.to_string(),
                ..Default::default()
            },
            version: Version::new("2024-02-01T00:00:00.000Z"),
        }
    }

    #[tokio::test]
    async fn test_fetch_writes_app_definition() {
        let mut client = MockMarathoner::new();
        client.expect_get_app().times(1).returning(|app_id, version| {
            assert_eq!(app_id, "/web");
            assert_eq!(version, "2024-02-01T00:00:00.000Z");
            parse_app(r#"{"id": "/web", "container": {"docker": {"image": "nginx:1.25"}}}"#)
        });

        let dir = tempfile::tempdir().unwrap();
        let output = fetch(&request("/web"), dir.path(), &client).await.unwrap();

        assert_eq!(output.version, Version::new("2024-02-01T00:00:00.000Z"));
        assert_eq!(
            output.metadata,
            vec![
                MetadataPair::new("id", "/web"),
                MetadataPair::new("image", "nginx:1.25"),
            ]
        );

        let written: serde_json::Value = File::new(dir.path().join(APP_FILE_NAME))
            .read_json()
            .await
            .unwrap();
        assert_eq!(written["container"]["docker"]["image"], "nginx:1.25");
    }

    #[tokio::test]
    async fn test_fetch_propagates_api_error() {
        let mut client = MockMarathoner::new();
        client
            .expect_get_app()
            .returning(|_, _| Err(ResourceError::ApiError("404: not found".to_string())));

        let dir = tempfile::tempdir().unwrap();
        let result = fetch(&request("/web"), dir.path(), &client).await;

        assert!(matches!(result, Err(ResourceError::ApiError(_))));
        assert!(!dir.path().join(APP_FILE_NAME).exists());
    }
}
