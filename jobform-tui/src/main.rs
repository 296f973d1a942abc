//! Job application form, in the terminal.

mod app;
mod error;
mod render;
mod terminal;
mod widgets;

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn main() {
    // Stdout belongs to the form; logs go to a file.
    if let Ok(log_file) = File::create("jobform.log") {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), log_file);
    }

    if let Err(e) = app::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
