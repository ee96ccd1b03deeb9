use std::{fs::OpenOptions, path::Path};

use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn init_cli_logger() {
    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

pub fn init_tui_logger(path: &Path) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let _ = Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
