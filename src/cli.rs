// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - fields: Print the form the TUI would start with
// - themes: List bundled themes
// - config --show | --path | --reset | --edit

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// formdeck - Dynamic form builder for the terminal
#[derive(Parser)]
#[command(name = "formdeck")]
#[command(version = VERSION)]
#[command(about = "Build and fill forms in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configured form fields
    Fields,

    /// List bundled themes
    Themes,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fields) => {
            handle_fields();
            true
        }
        Some(Commands::Themes) => {
            for name in Theme::available() {
                println!("{}", name);
            }
            true
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                println!("Usage: formdeck config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_fields() {
    let config = Config::from_env();
    let fields = config
        .form_fields()
        .unwrap_or_else(|e| fail(&e.to_string()));

    println!("{}", config.title);
    for def in &fields {
        let required = if def.validator.is_some() {
            " (required)"
        } else {
            ""
        };
        println!("  {:<20} {}{}", def.display_label(), def.kind, required);
    }
}

fn handle_config_path() {
    println!("{}", config_file().display());
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

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
    let path = config_file();
    if path.exists() && !confirm(&format!("Overwrite {} with defaults?", path.display())) {
        println!("Left unchanged.");
        return;
    }

    let written = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| std::fs::write(&path, Config::default().to_toml()));
    match written {
        Ok(()) => println!("Wrote default config to {}", path.display()),
        Err(e) => fail(&format!("could not write {}: {}", path.display(), e)),
    }
}

fn handle_config_edit() {
    let path = config_file();
    Config::ensure_config_exists();

    let editor = editor_from(|key| std::env::var(key).ok());
    match Command::new(&editor).arg(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => fail(&format!("{} exited with {}", editor, status)),
        Err(e) => fail(&format!("could not run '{}' ({}); set $EDITOR", editor, e)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Config file location, or exit when no config directory can be found
fn config_file() -> PathBuf {
    Config::config_path().unwrap_or_else(|| fail("no config directory on this system"))
}

/// Ask a yes/no question on stderr; anything but "y" or "yes" means no
fn confirm(question: &str) -> bool {
    eprint!("{} [y/N] ", question);
    let _ = std::io::stderr().flush();
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer).is_ok()
        && matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// `$EDITOR`, then `$VISUAL`, then the platform default; blank values are skipped
fn editor_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| (if cfg!(windows) { "notepad" } else { "vi" }).to_string())
}

fn fail(message: &str) -> ! {
    eprintln!("formdeck: {}", message);
    std::process::exit(1)
}
