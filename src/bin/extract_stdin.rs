//! Reads one saved magazine page from stdin and prints the extraction as
//! JSON to stdout.
//!
//! Usage: `extract_stdin [URL] [FILENAME] < page.html`
//!
//! Set `RUST_LOG=connection_extract=debug` to see pipeline decisions.

use std::io::{self, Read};
use std::process::ExitCode;

use connection_extract::{extract_bytes, Options};

fn main() -> ExitCode {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = Options {
        url: args.next().filter(|s| !s.is_empty()),
        filename: args.next().filter(|s| !s.is_empty()),
        ..Options::default()
    };

    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        eprintln!("failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    let result = match extract_bytes(&html, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("extraction failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}
