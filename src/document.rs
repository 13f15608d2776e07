use std::{
    fs,
    io::{stdin, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use conjugation::VerbConjugationTable;
use log::debug;
use serde::{Deserialize, Serialize};

/// The contents of one input: either a single conjugation table or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableDocument {
    Many(Vec<VerbConjugationTable>),
    Single(Box<VerbConjugationTable>),
}

impl TableDocument {
    /// Parses the provided JSON into a document.
    pub fn parse(json: &str) -> Result<TableDocument> {
        serde_json::from_str(json)
            .context("expected a conjugation table or a list of conjugation tables")
    }

    /// The tables in this document.
    pub fn tables(&self) -> &[VerbConjugationTable] {
        match self {
            TableDocument::Many(tables) => tables,
            TableDocument::Single(table) => std::slice::from_ref(table),
        }
    }

    /// Consumes this document and returns it with highlights attached to every table.
    pub fn with_highlights(self) -> TableDocument {
        match self {
            TableDocument::Many(tables) => TableDocument::Many(
                tables
                    .into_iter()
                    .map(VerbConjugationTable::with_highlights)
                    .collect(),
            ),
            TableDocument::Single(table) => TableDocument::Single(Box::new(table.with_highlights())),
        }
    }

    /// Writes this document as JSON, on a single line if `compact` is set.
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };

        json.context("failed to write conjugation tables as JSON")
    }
}

/// An input read from somewhere, along with where it came from.
pub struct Input {
    /// A description of where the input came from, for messages
    pub source: String,
    pub document: TableDocument,
}

/// Reads a document from each of the provided files, or from standard input if no files are provided.
pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        let mut json = String::new();
        stdin()
            .read_to_string(&mut json)
            .context("failed to read standard input")?;
        let document = TableDocument::parse(&json).context("invalid input on standard input")?;
        return Ok(vec![Input {
            source: "standard input".to_string(),
            document,
        }]);
    }

    paths
        .iter()
        .map(|path| {
            debug!("Reading tables from {path:?}");
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let document = TableDocument::parse(&json)
                .with_context(|| format!("invalid input in {}", path.display()))?;
            Ok(Input {
                source: path.display().to_string(),
                document,
            })
        })
        .collect()
}
