//! Prints the size of the inlined image and the inlined text.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use preprocessing_demo::{IMAGE, TEXT, read_image_info};
use tw_bootstrap::LoggingConfig;

fn main() -> ExitCode {
    if let Err(e) = tw_bootstrap::init_logging(&LoggingConfig::default(), 0) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let info = match read_image_info(IMAGE) {
        Ok(info) => info,
        Err(e) => {
            tracing::error!(error = %e, "inlined image is not a readable PNG");
            return ExitCode::FAILURE;
        }
    };

    println!("The injected image has size {}x{}", info.width, info.height);
    println!("{}", TEXT.trim_end());

    ExitCode::SUCCESS
}
