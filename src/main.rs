use clap::Parser;

mod commands;
mod config;
mod core;
mod shell;
mod utils;

use config::Config;
use shell::Shell;

fn main() {
    let config = Config::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .format_timestamp(None)
        .init();

    if config.no_color {
        colored::control::set_override(false);
    }

    let mut shell = match Shell::new(&config) {
        Ok(shell) => shell,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("treesh: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = shell.run() {
        eprintln!("{}", e);
    }
}
