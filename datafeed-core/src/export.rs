//! CSV export engine
//!
//! Every call resolves a file named `<prefix>-<UTC yyyy-MM-dd-HH-mm-ss>.csv`
//! under the output directory. A header row is written only when that file
//! does not exist yet, so two exports landing in the same second append to
//! one file with a single header. Files are opened, appended to and closed
//! on every call; no handle outlives an export.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use datafeed_types::{FeedResult, Timestamp};
use tracing::{debug, error, info};

use crate::constants::{DEFAULT_OUTPUT_PATH, DELIMITER, FILE_TIMESTAMP_FORMAT, LINE_SEPARATOR};
use crate::error::{Error, Result};
use crate::kind::RecordKind;
use crate::transform;

/// Source of the timestamp used in file names
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// File written for one record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub kind: RecordKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// Files written by one `export` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<ExportedFile>,
}

impl ExportSummary {
    /// Total rows written, headers excluded
    pub fn rows(&self) -> usize {
        self.files.iter().map(|file| file.rows).sum()
    }

    pub fn path(&self, kind: RecordKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|file| file.kind == kind)
            .map(|file| file.path.as_path())
    }
}

/// Writes feed results to per-kind CSV files
///
/// # Examples
///
/// ```no_run
/// use datafeed_core::CsvExporter;
/// use datafeed_types::FeedResult;
///
/// let exporter = CsvExporter::new(Some("out"))?;
/// let summary = exporter.export(&FeedResult::default())?;
/// println!("{} files written", summary.files.len());
/// # Ok::<(), datafeed_core::Error>(())
/// ```
#[derive(Clone)]
pub struct CsvExporter {
    output_path: PathBuf,
    clock: Clock,
}

impl CsvExporter {
    /// Create an exporter writing under `output_path`
    ///
    /// An empty or missing path means the current directory. The directory
    /// is created (with parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutputDir` if the directory cannot be created.
    pub fn new(output_path: Option<&str>) -> Result<Self> {
        let requested = match output_path {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_OUTPUT_PATH),
        };

        let output_path = fs::create_dir_all(&requested)
            .and_then(|_| fs::canonicalize(&requested))
            .map_err(|source| Error::OutputDir {
                path: requested.clone(),
                source,
            })?;

        debug!("Exporting to {}", output_path.display());

        Ok(Self {
            output_path,
            clock: Arc::new(Utc::now),
        })
    }

    /// Use `clock` instead of the system time for file names
    pub fn with_clock(mut self, clock: impl Fn() -> Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Absolute output directory
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Path the next export of `prefix` will write to
    pub fn file_path(&self, prefix: &str) -> PathBuf {
        let file_name = format!(
            "{}-{}.csv",
            prefix,
            (self.clock)().format(FILE_TIMESTAMP_FORMAT)
        );
        self.output_path.join(file_name)
    }

    /// Export every record kind of `result`
    ///
    /// Kinds are exported in `RecordKind::ALL` order, each to its own file.
    /// A failing kind does not prevent the others from being written; the
    /// first failure is returned once all kinds were attempted.
    pub fn export(&self, result: &FeedResult) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        let mut first_error = None;

        for kind in RecordKind::ALL {
            match self.export_kind(kind, result) {
                Ok(file) => summary.files.push(file),
                Err(e) => {
                    error!(
                        "Failed to export {} to {} ({:?}): {}",
                        kind,
                        e.path().display(),
                        e.io_kind(),
                        e
                    );
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }

    /// Export the records of one kind
    pub fn export_kind(&self, kind: RecordKind, result: &FeedResult) -> Result<ExportedFile> {
        debug!("Exporting {} to csv ...", kind);

        let rows = transform::rows(kind, result);
        let path = self.emit(kind.file_prefix(), kind.header(), &rows)?;

        info!("{} exported to {}", kind, path.display());

        Ok(ExportedFile {
            kind,
            path,
            rows: rows.len(),
        })
    }

    /// Append already escaped `rows` to the current file of `prefix`
    ///
    /// Writes `header` first if the file does not exist yet. Returns the
    /// absolute path of the file.
    pub fn emit(&self, prefix: &str, header: &[&str], rows: &[Vec<String>]) -> Result<PathBuf> {
        let path = self.file_path(prefix);
        let add_header = !path.exists();

        write_rows(&path, add_header.then_some(header), rows).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} rows to {} (header: {})",
            rows.len(),
            path.display(),
            add_header
        );

        Ok(path)
    }
}

fn write_rows(path: &Path, header: Option<&[&str]>, rows: &[Vec<String>]) -> io::Result<()> {
    let mut buf = [0u8; 4];
    let delimiter: &str = DELIMITER.encode_utf8(&mut buf);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    if let Some(header) = header {
        writer.write_all(header.join(delimiter).as_bytes())?;
    }

    for row in rows {
        writer.write_all(LINE_SEPARATOR.as_bytes())?;
        writer.write_all(row.join(delimiter).as_bytes())?;
    }

    writer.flush()
}

impl fmt::Debug for CsvExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvExporter")
            .field("output_path", &self.output_path)
            .finish_non_exhaustive()
    }
}
