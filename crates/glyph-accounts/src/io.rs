//! JSON configuration and report helpers for batch scans.

use glyph_accounts_entry::{
    format_line, BatchError, DecodedSequence, DecoderParams, EntryReport, ReportSummary,
    DEFAULT_ENTRY_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum GlyphIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

fn default_width() -> usize {
    DEFAULT_ENTRY_WIDTH
}

/// Configuration for one batch scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub input_path: String,
    #[serde(default = "default_width")]
    pub width: usize,
    /// Where to write the JSON report; nothing is written when absent.
    #[serde(default)]
    pub output_path: Option<String>,
}

impl ScanConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            width: DEFAULT_ENTRY_WIDTH,
            output_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GlyphIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GlyphIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn decoder_params(&self) -> DecoderParams {
        DecoderParams::with_width(self.width)
    }

    /// Resolve the report output path, if any.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_ref().map(PathBuf::from)
    }
}

/// Result of scanning one batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub input_path: String,
    pub width: usize,
    pub summary: ReportSummary,
    pub entries: Vec<EntryReport>,
}

impl ScanReport {
    /// Build a report from decoded entries.
    pub fn new(input_path: &Path, params: DecoderParams, seqs: &[DecodedSequence]) -> Self {
        let entries = EntryReport::from_sequences(seqs);
        Self {
            input_path: input_path.to_string_lossy().into_owned(),
            width: params.width,
            summary: ReportSummary::from_entries(&entries),
            entries,
        }
    }

    /// Plain-text rendering, one line per entry.
    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format_line(&e.account, e.classification))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GlyphIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GlyphIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
