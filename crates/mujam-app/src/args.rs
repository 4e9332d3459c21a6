use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mujam")]
#[command(about = "Community dictionary for colloquial Arabic words", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look a word up by its canonical spelling
    Lookup {
        /// The word to look up (any spelling variant)
        word: String,
    },

    /// Record a new word with its meaning and example usage
    Add {
        /// The word to record
        word: String,

        /// What the word means
        #[arg(short, long)]
        meaning: String,

        /// Example usage of the word
        #[arg(short, long)]
        example: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recorded words starting with a letter
    Browse {
        /// One of the 28 browsable letters (see `letters`)
        letter: String,
    },

    /// Print the browsable letters
    Letters,

    /// Export every recorded entry
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bulk-import a CSV file (words already recorded are skipped)
    Import {
        /// CSV file with keyword,meaning,example columns
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
