//! Command runner tests that fail before any request is sent

use std::path::PathBuf;

use marathon_resource::app::command::Command;
use marathon_resource::app::run::run;
use marathon_resource::errors::ResourceError;

#[tokio::test]
async fn test_run_rejects_invalid_json() {
    let result = run(&Command::Check, "{not json").await;
    assert!(matches!(result, Err(ResourceError::ConfigError(_))));
}

#[tokio::test]
async fn test_run_requires_uri() {
    let input = r#"{"source": {"app_id": "/web"}, "version": {"ref": "v1"}}"#;
    let result = run(&Command::In(PathBuf::from("/tmp")), input).await;
    assert!(matches!(result, Err(ResourceError::ConfigError(_))));
}

#[tokio::test]
async fn test_run_out_requires_params() {
    let input = r#"{"source": {"uri": "http://marathon:8080", "app_id": "/web"}}"#;
    let result = run(&Command::Out(PathBuf::from("/tmp")), input).await;
    assert!(matches!(result, Err(ResourceError::ConfigError(_))));
}

#[tokio::test]
async fn test_run_out_missing_app_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = r#"{
        "source": {"uri": "http://127.0.0.1:1", "app_id": "/web"},
        "params": {"app_json": "missing.json", "timeout": 1}
    }"#;

    let result = run(&Command::Out(dir.path().to_path_buf()), input).await;
    assert!(matches!(result, Err(ResourceError::PayloadError(_))));
}
