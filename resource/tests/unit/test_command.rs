//! Command parsing tests

use std::path::PathBuf;

use marathon_resource::app::command::Command;
use marathon_resource::errors::ResourceError;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_command_from_program_name() {
    assert_eq!(
        Command::from_args(&args(&["/opt/resource/check"])).unwrap(),
        Command::Check
    );
    assert_eq!(
        Command::from_args(&args(&["/opt/resource/in", "/tmp/build/get"])).unwrap(),
        Command::In(PathBuf::from("/tmp/build/get"))
    );
    assert_eq!(
        Command::from_args(&args(&["/opt/resource/out", "/tmp/build/put"])).unwrap(),
        Command::Out(PathBuf::from("/tmp/build/put"))
    );
}

#[test]
fn test_command_from_first_argument() {
    assert_eq!(
        Command::from_args(&args(&["marathon-resource", "out", "/tmp/build/put"])).unwrap(),
        Command::Out(PathBuf::from("/tmp/build/put"))
    );
    assert_eq!(
        Command::from_args(&args(&["marathon-resource", "check"])).unwrap().name(),
        "check"
    );
}

#[test]
fn test_command_requires_directory() {
    let result = Command::from_args(&args(&["/opt/resource/in"]));
    assert!(matches!(result, Err(ResourceError::UsageError(_))));
}

#[test]
fn test_command_unknown() {
    assert!(Command::from_args(&args(&["marathon-resource"])).is_err());
    assert!(Command::from_args(&args(&["marathon-resource", "deploy"])).is_err());
    assert!(Command::from_args(&[]).is_err());
}
