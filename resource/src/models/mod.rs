//! Resource protocol models

pub mod request;
pub mod response;
