use crate::io::{GlyphIoError, ScanConfig, ScanReport};
use glyph_accounts_core::DecodedSequence;
use glyph_accounts_entry::{DecoderParams, EntryDecoder};
use std::{fs, path::Path};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Read and decode every entry of a batch file.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))
)]
pub fn decode_file(
    path: impl AsRef<Path>,
    params: DecoderParams,
) -> Result<Vec<DecodedSequence>, GlyphIoError> {
    let content = fs::read_to_string(path.as_ref())?;
    log::debug!(
        "read {} bytes from {}",
        content.len(),
        path.as_ref().display()
    );
    Ok(EntryDecoder::new(params).decode_text(&content)?)
}

/// Decode a batch file and build its report.
pub fn scan_file(
    path: impl AsRef<Path>,
    params: DecoderParams,
) -> Result<ScanReport, GlyphIoError> {
    let entries = decode_file(path.as_ref(), params)?;
    Ok(ScanReport::new(path.as_ref(), params, &entries))
}

/// Run a configured scan, writing the JSON report when an output path is set.
pub fn run_config(cfg: &ScanConfig) -> Result<ScanReport, GlyphIoError> {
    let report = scan_file(&cfg.input_path, cfg.decoder_params())?;
    if let Some(out) = cfg.output_path() {
        report.write_json(&out)?;
        log::info!("report written to {}", out.display());
    }
    Ok(report)
}
