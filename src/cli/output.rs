//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::domain::models::ExperimentConfig;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// A loaded experiment configuration together with where it came from.
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub source: PathBuf,
    pub parameters: ExperimentConfig,
}

impl ConfigReport {
    pub fn new(source: &Path, parameters: ExperimentConfig) -> Self {
        Self {
            source: source.to_path_buf(),
            parameters,
        }
    }
}

impl CommandOutput for ConfigReport {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                ["KEY", "VALUE"]
                    .iter()
                    .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
            );

        for (key, value) in self.parameters.fields() {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }

        format!("Experiment configuration ({}):\n{}", self.source.display(), table)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
