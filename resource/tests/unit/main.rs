//! Unit tests for the public resource API

mod test_command;
mod test_request;
mod test_run;
