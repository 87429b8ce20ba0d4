//! Binary entrypoint for the hospital console.
//!
//! Reads configuration from environment variables:
//! - `HOSPITAL_DATA_PATH`: records file path (default: "records.json")
//! - `HOSPITAL_LOG_PATH`: log file path (default: "system.log")
//!
//! The process always exits 0; shutdown happens through the shell's exit
//! option (or end-of-file on stdin), never through an error escape.

use std::io;
use std::path::Path;

use hospital_cli::app::App;
use hospital_cli::logging;
use hospital_cli::shell::Shell;
use hospital_storage::JsonFileStore;

fn main() {
    let data_path =
        std::env::var("HOSPITAL_DATA_PATH").unwrap_or_else(|_| "records.json".to_string());
    let log_path =
        std::env::var("HOSPITAL_LOG_PATH").unwrap_or_else(|_| "system.log".to_string());

    if let Err(e) = logging::init(Path::new(&log_path)) {
        eprintln!("warning: could not open log file '{}': {}", log_path, e);
        logging::init_stderr();
    }

    let store = JsonFileStore::new(&data_path);
    let mut app = App::open(Box::new(store));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    if let Err(e) = shell.run(&mut app) {
        // The console itself failed; there is no user left to render to.
        tracing::error!("console i/o error: {}", e);
    }
}
