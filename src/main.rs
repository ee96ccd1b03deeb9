mod app;
mod bounce;
mod catalog;
mod cli;
mod config;
mod constants;
mod countdown;
mod domain;
mod feed;
mod logging;
mod storage;

fn main() {
    cli::run_cli();
}
