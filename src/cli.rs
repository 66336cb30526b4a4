use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "daybreak",
    about = "A day/night toggle with a seeded starfield",
    version
)]
pub struct Cli {
    // None runs the interactive toggle.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the star field for SEED as JSON.
    Stars {
        /// Defaults to the configured seed.
        #[arg(allow_negative_numbers = true)]
        seed: Option<i64>,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
