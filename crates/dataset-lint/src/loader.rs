//! Dataset loading.
//!
//! Reads CSV, TSV or Parquet files into a [`DataFrame`]. Any failure here is
//! fatal for a lint run and is reported as a load error, never as a finding.

use crate::error::{LintError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rows sampled when inferring CSV column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Supported input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Parquet,
}

impl InputFormat {
    /// Pick the format from the path's extension; no extension means CSV.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            None | Some("csv") | Some("txt") => Ok(Self::Csv),
            Some("tsv") | Some("tab") => Ok(Self::Tsv),
            Some("parquet") | Some("pq") => Ok(Self::Parquet),
            Some(other) => Err(LintError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Load a dataset from `path`.
///
/// Fails with [`LintError::FileNotFound`], [`LintError::EmptyFile`],
/// [`LintError::UnsupportedFormat`] or [`LintError::MalformedInput`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(LintError::FileNotFound(shown));
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(LintError::EmptyFile(shown));
    }

    let format = InputFormat::from_path(path)?;
    info!("Loading dataset from: {} ({:?})", shown, format);

    let df = match format {
        InputFormat::Csv => load_delimited(path, b',')?,
        InputFormat::Tsv => load_delimited(path, b'\t')?,
        InputFormat::Parquet => load_parquet(path)?,
    };

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

/// Normalize a path typed or dropped into a terminal: trims whitespace and
/// the quotes some terminals add around dropped files.
pub fn clean_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix(['"', '\''])
        .and_then(|s| s.strip_suffix(['"', '\'']))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Load a delimited text file, falling back to a pre-cleaned copy of the
/// content when the direct read fails.
fn load_delimited(path: &Path, separator: u8) -> Result<DataFrame> {
    // Strategy 1: standard loading with quote handling
    let direct = CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(separator)
                .with_quote_char(Some(b'"')),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish());

    match direct {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: pre-clean content
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LintError::EmptyFile(path.display().to_string()));
    }

    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(separator))
        .into_reader_with_file_handle(Cursor::new(clean_csv_content(&content)))
        .finish()
        .map_err(|e| malformed(path, e))
}

fn load_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| malformed(path, e))
}

fn malformed(path: &Path, err: PolarsError) -> LintError {
    LintError::MalformedInput {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Collapse doubled quotes and drop blank lines.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("data.CSV")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("data")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("data.tsv")).unwrap(),
            InputFormat::Tsv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("data.parquet")).unwrap(),
            InputFormat::Parquet
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("data.xlsx")),
            Err(LintError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_clean_input_path() {
        assert_eq!(
            clean_input_path("  '/tmp/my data.csv'  "),
            PathBuf::from("/tmp/my data.csv")
        );
        assert_eq!(
            clean_input_path("\"/tmp/data.csv\"\n"),
            PathBuf::from("/tmp/data.csv")
        );
        assert_eq!(clean_input_path("data.csv"), PathBuf::from("data.csv"));
    }

    #[test]
    fn test_clean_csv_content() {
        let raw = "a,b\n\n1,\"\"x\"\"\n   \n2,y\n";
        assert_eq!(clean_csv_content(raw), "a,b\n1,\"x\"\n2,y");
    }

    #[test]
    fn test_load_csv_from_disk() {
        let dir = std::env::temp_dir().join(format!("dataset-lint-loader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiny.csv");
        fs::write(&path, "a,b\n1,x\n2,y\n").unwrap();

        let df = load_dataset(&path).unwrap();
        assert_eq!(df.shape(), (2, 2));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LintError::FileNotFound(_)));
        assert!(err.is_load_failure());
    }
}
