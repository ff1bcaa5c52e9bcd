//! Plain-text report output
//!
//! A [`ReportDir`] owns the output directory (created on demand) and writes
//! the text artifacts; the aggregate p-value log appends one line per
//! analyzed pair/direction.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use econ_core::Result;
use tracing::info;

/// Output directory for one analysis run
#[derive(Debug, Clone)]
pub struct ReportDir {
    root: PathBuf,
}

impl ReportDir {
    /// Create the directory (and parents) if absent
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory path
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write a whole text file, replacing any previous content
    pub fn write_text(&self, name: &str, content: &str) -> Result<()> {
        let path = self.file(name);
        fs::write(&path, content)?;
        info!(path = %path.display(), "wrote text report");
        Ok(())
    }

    /// Open an aggregate line-oriented log inside the directory
    pub fn line_log(&self, name: &str) -> Result<LineLog> {
        let path = self.file(name);
        let writer = BufWriter::new(File::create(&path)?);
        Ok(LineLog { path, writer })
    }
}

/// Line-oriented text log, flushed on [`finish`](LineLog::finish)
#[derive(Debug)]
pub struct LineLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LineLog {
    /// Append one line
    pub fn record(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Flush and close the log
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        info!(path = %self.path.display(), "wrote aggregate log");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directory_and_writes_text() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ReportDir::create(tmp.path().join("results")).unwrap();
        dir.write_text("adf_test.txt", "statistic: -3.2\n").unwrap();

        let content = std::fs::read_to_string(dir.file("adf_test.txt")).unwrap();
        assert!(content.contains("statistic"));
    }

    #[test]
    fn create_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("results");
        ReportDir::create(&path).unwrap();
        ReportDir::create(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn line_log_accumulates_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ReportDir::create(tmp.path()).unwrap();
        let mut log = dir.line_log("result.txt").unwrap();
        log.record("Outward Investment A -> B: p-value = 0.01234").unwrap();
        log.record("Inward Investment A <- B: p-value = 0.99999").unwrap();
        log.finish().unwrap();

        let content = std::fs::read_to_string(dir.file("result.txt")).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("p-value = 0.01234"));
    }
}
