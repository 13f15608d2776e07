use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use conjugation::{VerbTense, ALL_TENSES};
use itertools::Itertools;

#[derive(Parser, Debug)]
#[command(name = "konjugator")]
#[command(about = "Highlights the irregular parts of German verb conjugation tables")]
pub struct Args {
    /// JSON files containing a conjugation table or a list of them. Standard input is read if no files are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// How to write the highlighted tables
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Tenses to show in table output, separated by commas (praesens, perfekt, praeteritum)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_tense)]
    pub tenses: Vec<VerbTense>,

    /// Show table output without emphasizing irregular forms
    #[arg(long)]
    pub no_highlights: bool,

    /// Write JSON output on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The tables, with highlights attached
    Json,
    /// A grid per verb for reading in a terminal
    Table,
}

/// Parses a tense given on the command line.
fn parse_tense(input: &str) -> Result<VerbTense, String> {
    VerbTense::parse(input).ok_or_else(|| {
        format!("unknown tense {input:?}, expected one of praesens, perfekt, or praeteritum")
    })
}

/// Options for displaying conjugation tables in a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Whether the irregular parts of forms are emphasized.
    pub show_highlights: bool,
    /// The tenses to show, in the order to show them in.
    ///
    /// If empty, every tense is shown.
    pub tenses: Vec<VerbTense>,
}

impl DisplayOptions {
    /// The tenses to show, without duplicates.
    pub fn tenses_to_show(&self) -> Vec<VerbTense> {
        if self.tenses.is_empty() {
            return ALL_TENSES.to_vec();
        }

        self.tenses.iter().copied().unique().collect()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_highlights: true,
            tenses: Vec::new(),
        }
    }
}

impl From<&Args> for DisplayOptions {
    fn from(args: &Args) -> Self {
        DisplayOptions {
            show_highlights: !args.no_highlights,
            tenses: args.tenses.clone(),
        }
    }
}
