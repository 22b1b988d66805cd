//! Editor configuration
//!
//! Read from an optional JSON file. Every field has a default, so an empty
//! object (or no file at all) gives a 12-slot planetary editor logging at
//! `info`. Command-line flags are applied on top with [`EditorConfig::merge_args`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::args::Args;
use crate::models::constants::DEFAULT_SLOT_COUNT;
use crate::models::errors::EditorResult;
use crate::models::station::StationKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub station_kind: StationKind,
    pub slot_count: usize,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            station_kind: StationKind::Planetary,
            slot_count: DEFAULT_SLOT_COUNT,
            log_filter: "info".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> EditorResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve the final config: file (if given) first, then flag overrides.
    pub fn resolve(args: &Args) -> EditorResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.merge_args(args);
        Ok(config)
    }

    pub fn merge_args(&mut self, args: &Args) {
        if let Some(kind) = args.station_kind {
            self.station_kind = kind;
        }
        if let Some(count) = args.slot_count {
            self.slot_count = count;
        }
    }
}
