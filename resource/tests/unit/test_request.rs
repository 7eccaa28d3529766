//! Request and response encoding tests

use marathon_resource::logs::LogLevel;
use marathon_resource::models::request::{CheckRequest, OutRequest};
use marathon_resource::models::response::{MetadataPair, ResourceOutput, Version};
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;

#[test]
fn test_out_request_defaults() {
    let request: OutRequest = serde_json::from_str(
        r#"{
            "source": {"uri": "http://marathon:8080", "app_id": "/web"},
            "params": {"app_json": "repo/app.json"}
        }"#,
    )
    .unwrap();

    assert_eq!(request.params.app_json, "repo/app.json");
    assert_eq!(request.params.timeout, 5);
    assert!(!request.params.force);
    assert!(request.params.replacements.is_empty());
    assert_eq!(request.source.log_level, LogLevel::Info);
    assert_eq!(request.source.request_timeout_secs, 30);
}

#[test]
fn test_out_request_full() {
    let request: OutRequest = serde_json::from_str(
        r#"{
            "source": {
                "uri": "https://marathon.example.com",
                "app_id": "/web",
                "basic_auth": {"user_name": "ci", "password": "s3cret"},
                "log_level": "debug"
            },
            "params": {
                "app_json": "app.json",
                "time_out": 10,
                "force": true,
                "replacements": [{"name": "TAG", "value": "1.2.3"}]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(request.params.timeout, 10);
    assert!(request.params.force);
    assert_eq!(request.params.replacements[0].value, "1.2.3");
    assert_eq!(request.source.log_level, LogLevel::Debug);

    let auth = request.source.basic_auth.unwrap();
    assert_eq!(auth.user_name, "ci");
    assert_eq!(auth.password.expose_secret(), "s3cret");
}

#[test]
fn test_check_request_first_run() {
    let request: CheckRequest =
        serde_json::from_str(r#"{"source": {"uri": "http://m", "app_id": "/web"}, "version": null}"#)
            .unwrap();
    assert!(request.version.is_none());

    let request: CheckRequest = serde_json::from_str(
        r#"{"source": {"app_id": "/web"}, "version": {"ref": "2024-01-01T00:00:00.000Z"}}"#,
    )
    .unwrap();
    assert_eq!(request.version, Some(Version::new("2024-01-01T00:00:00.000Z")));
}

#[test]
fn test_output_encoding() {
    let output = ResourceOutput {
        version: Version::new("bar"),
        metadata: vec![],
    };
    assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"version":{"ref":"bar"}}"#);

    let output = ResourceOutput {
        version: Version::new("bar"),
        metadata: vec![MetadataPair::new("id", "/web")],
    };
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        serde_json::json!({"version": {"ref": "bar"}, "metadata": [{"name": "id", "value": "/web"}]})
    );
}
