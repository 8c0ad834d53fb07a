use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gna::Date;

/// Greek holiday and attendance-window calculator.
#[derive(Parser)]
#[command(
    name = "gna",
    version,
    about = "Greek holidays and attendance submission window"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./gna.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print Orthodox Easter Sunday for a year.
    Easter {
        /// Year, 1900–2099.
        year: u16,
    },
    /// List the public holidays of a year.
    Holidays {
        /// Year, 1900–2099.
        year: u16,
        /// Print English names instead of Greek ones.
        #[arg(long)]
        english: bool,
    },
    /// Classify a date and check it against the submission window.
    Check {
        /// Date as YYYY-MM-DD (default: today).
        date: Option<Date>,
    },
    /// Count working days in an inclusive date range.
    WorkingDays {
        /// First day, YYYY-MM-DD.
        from: Date,
        /// Last day, YYYY-MM-DD.
        to: Date,
    },
    /// Print the configured submission window.
    Window,
}
