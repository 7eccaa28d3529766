//! Marathon Resource Library
//!
//! Concourse CI resource that deploys application definitions to Marathon.

pub mod actions;
pub mod app;
pub mod deploy;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod marathon;
pub mod models;
pub mod utils;
