//! Marathon API models
//!
//! Only the parts of the Marathon REST API the resource talks to are typed here.

pub mod models;

pub use models::{AppVersions, Application, Deployment, DeploymentResult};
