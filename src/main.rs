//! Kodegen Bundler DS_Store - Finder window layout writer for disk images.
//!
//! This binary writes the `.DS_Store` that positions icons and sets the
//! window size and background of a disk image volume.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match kodegen_bundler_dsstore::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
