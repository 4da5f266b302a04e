// src/bin/cli.rs
use std::path::Path;

use log::LevelFilter;
use tv_guide::cli;
use tv_guide::config::consts::{LOG_FILE, STORE_DIR};
use tv_guide::logging;

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }

    let log_path = Path::new(STORE_DIR).join(LOG_FILE);
    if let Err(e) = logging::init(&log_path, LevelFilter::Debug) {
        eprintln!("Warning: logging disabled: {e}");
    }

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
