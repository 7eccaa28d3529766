//! Application entry points

pub mod command;
pub mod run;
