//! Writes an index.html into the current directory and every directory below it
//!
//! Usage:
//!   dirindex
//!
//! Set `RUST_LOG=debug` to see every directory and labelled file.

use indexer::{IndexOptions, Indexer};
use std::env;

fn main() {
    env_logger::init();

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error reading current directory: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Generating index.html files starting from: {}",
        root.display()
    );

    let indexer = Indexer::new(IndexOptions::default());
    if let Err(e) = indexer.index_directory(&root) {
        eprintln!("Error generating index files: {:#}", e);
        std::process::exit(1);
    }
}
