//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "optcg-arena")]
#[command(
    about = "Build One Piece card catalogs and TCG Arena game files",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only log warnings and errors (the summary line is still printed)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file to use instead of ~/.config/optcg-arena/settings.toml
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Merge card JSON sources into a single catalog keyed by card id
    Cards {
        /// Directory tree of card JSON files
        #[arg(long, visible_alias = "vegapull-dir")]
        source_dir: PathBuf,

        /// Output catalog file (e.g., cards.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Image URL for every card's back face
        #[arg(long)]
        card_back: Option<String>,
    },

    /// Generate a TCG Arena game.json from a card catalog
    Game {
        /// Catalog produced by the `cards` command
        #[arg(long)]
        cards: PathBuf,

        /// Public URL the game runtime loads the catalog from
        #[arg(long)]
        cards_url: String,

        /// Output game file (e.g., game.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Image URL for the shared card back
        #[arg(long)]
        card_back: Option<String>,

        /// Game name shown in the runtime menu
        #[arg(long)]
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_accepts_vegapull_alias() {
        let cli = Cli::try_parse_from([
            "optcg-arena",
            "cards",
            "--vegapull-dir",
            "data",
            "--output",
            "out/cards.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Cards {
                source_dir, output, ..
            } => {
                assert_eq!(source_dir, PathBuf::from("data"));
                assert_eq!(output, PathBuf::from("out/cards.json"));
            }
            Commands::Game { .. } => panic!("expected cards command"),
        }
    }

    #[test]
    fn test_missing_required_argument() {
        assert!(Cli::try_parse_from(["optcg-arena", "cards", "--output", "x.json"]).is_err());
        assert!(
            Cli::try_parse_from(["optcg-arena", "game", "--cards", "c.json", "-o", "g.json"])
                .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "optcg-arena",
            "game",
            "--cards",
            "c.json",
            "--cards-url",
            "https://example.com/c.json",
            "-o",
            "g.json",
            "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }
}
