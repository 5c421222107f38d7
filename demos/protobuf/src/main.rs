//! Serializes a `Person` to protobuf, reads it back and prints it as JSON.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use protobuf_demo::{DemoError, Person, decode_person, encode_person, to_pretty_json};
use tw_bootstrap::LoggingConfig;

fn main() -> ExitCode {
    if let Err(e) = tw_bootstrap::init_logging(&LoggingConfig::default(), 0) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "protobuf round trip failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, DemoError> {
    let person = Person::new("Alice", 30);

    let data = encode_person(&person);
    tracing::debug!(bytes = data.len(), "serialized person");

    let decoded = decode_person(&data)?;
    to_pretty_json(&decoded)
}
