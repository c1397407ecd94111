//! Document loading functionality.
//!
//! This module provides functions to load OpenAPI documents from files or stdin,
//! parsing them into `Document` structures ready to be queried. Files ending in
//! `.gz` are decompressed first, and stdin is sniffed for the gzip magic bytes.

use crate::document::parser::{parse_document, SourceFormat};
use crate::document::tree::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses an OpenAPI document from the filesystem.
///
/// The format is chosen from the file name: `.json` (optionally followed by
/// `.gz`) is parsed as JSON, everything else as YAML. Since YAML is a superset
/// of JSON in practice, a JSON document with an unusual extension still loads.
///
/// # Examples
///
/// ```no_run
/// use openapi_inspect::file::loader::load_document;
///
/// let doc = load_document("openapi.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip data
/// - The file contents are not valid YAML or JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let content = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_document(&content, determine_format(path_ref))
        .with_context(|| format!("Failed to load OpenAPI document {}", path_ref.display()))
}

/// Loads and parses an OpenAPI document from standard input.
///
/// The input is decompressed if it starts with the gzip magic bytes, then
/// parsed as JSON if possible and as YAML otherwise.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 (after decompression)
/// - The input is neither valid JSON nor valid YAML
pub fn load_document_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    parse_bytes(buffer).context("Failed to load OpenAPI document from stdin")
}

/// Decodes raw bytes (possibly gzipped) and parses them with format detection.
pub fn parse_bytes(buffer: Vec<u8>) -> Result<Document> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_document(&content, SourceFormat::Auto)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Determines the document format from the file name, ignoring a `.gz` suffix.
///
/// - `api.json` → JSON
/// - `api.json.gz` → JSON
/// - `api.yaml`, `api.yml`, `api` → YAML
fn determine_format(path: &Path) -> SourceFormat {
    let name = path.to_string_lossy().to_ascii_lowercase();
    let base = name.strip_suffix(".gz").unwrap_or(&name);

    if base.ends_with(".json") {
        SourceFormat::Json
    } else {
        SourceFormat::Yaml
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
