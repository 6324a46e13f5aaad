// src/cli/commands.rs
use clap::Subcommand;

use crate::models::ClassSet;

fn parse_classes(value: &str) -> Result<ClassSet, String> {
    value.parse().map_err(|e: crate::error::GeneratorError| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length, clamped to the configured range
        #[arg(long, short)]
        length: Option<usize>,

        /// Comma separated classes: upper,lower,digit,symbol
        #[arg(long, short, value_parser = parse_classes)]
        classes: Option<ClassSet>,

        /// Number of passwords to print
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the strength level of a length/class configuration
    Strength {
        /// Password length, clamped to the configured range
        #[arg(long, short)]
        length: usize,

        /// Comma separated classes: upper,lower,digit,symbol
        #[arg(long, short, value_parser = parse_classes)]
        classes: Option<ClassSet>,
    },

    /// Interactive generator
    Menu,
}
