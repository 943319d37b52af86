use std::env;
use std::fs;
use std::process::ExitCode;

use byte_pattern_search::{search, Algorithm};

///
/// Thin shell around the library : select the algorithm by name, load the
/// whole file in memory, print one line per occurrence
fn main() -> ExitCode {
    #[cfg(feature = "log")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <algorithm> <pattern> <filename>", args[0]);
        eprintln!("  <algorithm> : KMP or FA");
        return ExitCode::FAILURE;
    }

    let algorithm: Algorithm = match args[1].parse() {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let text = match fs::read(&args[3]) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Error reading file {}: {err}", args[3]);
            return ExitCode::FAILURE;
        }
    };

    match search(algorithm, args[2].as_bytes(), &text) {
        Ok(positions) => {
            for position in positions {
                println!("Pattern occurs with shift {position}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
