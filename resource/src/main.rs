//! Marathon Resource - Entry Point
//!
//! Concourse resource executable: reads a request from stdin, writes the
//! response to stdout and logs to stderr.

use std::env;
use std::process::ExitCode;

use marathon_resource::app::command::Command;
use marathon_resource::app::run::run;
use marathon_resource::utils::version_info;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    // Print version and exit
    if args.iter().skip(1).any(|arg| arg == "--version") {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => eprintln!("Failed to encode version: {e}"),
        }
        return ExitCode::SUCCESS;
    }

    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut input).await {
        eprintln!("Failed to read request from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let output = match run(&command, &input).await {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{} failed: {e}", command.name());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = tokio::io::stdout();
    let written = async {
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await
    }
    .await;

    if let Err(e) = written {
        eprintln!("Failed to write response: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
