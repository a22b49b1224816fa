mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod tracker;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use store::FsSessionStore;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    let root = app::resolve_storage_dir(cli.dir.clone(), &config);
    let store = match FsSessionStore::open(root, cli.invalid_entry_policy()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app::run(&cli, &store) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
