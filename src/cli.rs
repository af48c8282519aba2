// CLI module - command-line argument parsing and handlers
//
// Running `mortui` with no subcommand starts the TUI. Subcommands provide
// headless access to the two pieces of persisted state:
// - config --show / --reset / --path: manage the config file
// - favorites --list / --clear: inspect or wipe the favorites file

use crate::config::{Config, VERSION};
use crate::favorites::FavoritesStore;
use clap::{Parser, Subcommand};
use std::io::Write;

/// mortui - terminal character browser for the Rick and Morty API
#[derive(Parser)]
#[command(name = "mortui")]
#[command(version = VERSION)]
#[command(about = "Terminal character browser for the Rick and Morty API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Inspect the persisted favorites list
    Favorites {
        /// Print the stored favorites
        #[arg(long)]
        list: bool,

        /// Delete the favorites file
        #[arg(long)]
        clear: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                println!("Usage: mortui config [--show|--reset|--path]");
            }
            true
        }
        Some(Commands::Favorites { list, clear }) => {
            if clear {
                handle_favorites_clear();
            } else if list {
                handle_favorites_list();
            } else {
                println!("Usage: mortui favorites [--list|--clear]");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::load();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!(
        "favorites_path = {:?}",
        config.favorites_path.display().to_string()
    );
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_favorites_list() {
    let config = Config::load();
    let store = FavoritesStore::new(config.favorites_path);
    let favorites = store.list();

    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }

    for character in &favorites {
        println!(
            "{:>5}  {}  ({}, {})",
            character.id, character.name, character.status, character.species
        );
    }
    println!();
    println!("{} favorite(s)", favorites.len());
}

fn handle_favorites_clear() {
    let config = Config::load();
    let store = FavoritesStore::new(config.favorites_path);

    let count = store.list().len();
    if count > 0 {
        eprint!("Delete {} stored favorite(s)? [y/N] ", count);
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = store.clear() {
        eprintln!("Error clearing favorites: {}", e);
        std::process::exit(1);
    }
    println!("Favorites cleared.");
}
