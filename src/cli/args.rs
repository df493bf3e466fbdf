//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tiny arithmetic CLI, fixture for diff-aware CI tooling
#[derive(Parser, Debug)]
#[command(name = "rscalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config directory override (default: XDG config dir)
    #[arg(long, global = true, env = "RSCALC_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add {
        a: f64,
        b: f64,
    },

    /// Subtract b from a
    #[command(allow_negative_numbers = true)]
    Subtract {
        a: f64,
        b: f64,
    },

    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply {
        a: f64,
        b: f64,
    },

    /// Divide a by b (fails when b is zero)
    #[command(allow_negative_numbers = true)]
    Divide {
        a: f64,
        b: f64,
    },

    /// Raise a to the power b
    #[command(allow_negative_numbers = true)]
    Power {
        a: f64,
        b: f64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}
