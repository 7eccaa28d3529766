//! Deployment module

pub mod payload;
pub mod poller;
