//! Defines the [`KeywordStore`], the flat CSV file the keyword pool lives in.
//! The file has the header `keyword,subtopic,intent` and one record per row.

use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::debug;

use crate::keyword::{Intent, KeywordRecord};

/// The header row written at the top of every keyword file.
const HEADER: [&str; 3] = ["keyword", "subtopic", "intent"];

/// Reads and writes the keyword pool at a fixed path.
#[derive(Clone, Debug)]
pub struct KeywordStore {
    path: PathBuf,
}

impl KeywordStore {
    pub fn new(path: impl Into<PathBuf>) -> KeywordStore {
        KeywordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record from the store in file order. A store file that
    /// doesn't exist is an empty pool. Short rows are padded with empty
    /// cells, so a missing intent reads as informational. Rows without a
    /// keyword, and rows that can't be decoded at all, are skipped.
    pub fn load(&self) -> Result<Vec<KeywordRecord>> {
        if !self.path.exists() {
            debug!(
                path = %self.path.display(),
                "keyword store missing; starting empty"
            );
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|source| self.read_error(source))?;

        let header = reader.headers().map_err(|e| self.read_error(e))?;
        let columns = Columns::new(header);
        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            match result {
                Ok(row) => match columns.record(&row) {
                    Some(record) => records.push(record),
                    None => debug!(row = i + 1, "skipping keyword row without a keyword"),
                },
                Err(e) if e.is_io_error() => return Err(self.read_error(e)),
                Err(e) => debug!(row = i + 1, error = %e, "skipping malformed keyword row"),
            }
        }
        Ok(records)
    }

    /// Overwrites the store with the full `pool`, header first, preserving
    /// order. Missing parent directories are created.
    pub fn save(&self, pool: &[KeywordRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                    path: dir.to_owned(),
                    source,
                })?;
            }
        }

        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|source| self.write_error(source))?;
        writer
            .write_record(&HEADER)
            .map_err(|source| self.write_error(source))?;
        for record in pool {
            writer
                .write_record(&[
                    record.keyword.as_str(),
                    record.subtopic.as_str(),
                    record.intent.as_str(),
                ])
                .map_err(|source| self.write_error(source))?;
        }
        writer
            .flush()
            .map_err(|e| self.write_error(csv::Error::from(e)))?;
        Ok(())
    }

    fn read_error(&self, source: csv::Error) -> Error {
        Error::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: csv::Error) -> Error {
        Error::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Where each column sits in the file, taken from its header. Rows may be
/// shorter than the header; missing cells read as empty.
struct Columns {
    keyword: Option<usize>,
    subtopic: Option<usize>,
    intent: Option<usize>,
}

impl Columns {
    fn new(header: &StringRecord) -> Columns {
        let position = |name: &str| header.iter().position(|h| h == name);
        Columns {
            keyword: position(HEADER[0]),
            subtopic: position(HEADER[1]),
            intent: position(HEADER[2]),
        }
    }

    fn record(&self, row: &StringRecord) -> Option<KeywordRecord> {
        let cell = |i: Option<usize>| i.and_then(|i| row.get(i)).unwrap_or("");
        let keyword = cell(self.keyword);
        if keyword.is_empty() {
            return None;
        }
        Some(KeywordRecord::new(
            keyword,
            cell(self.subtopic),
            Intent::parse(cell(self.intent)),
        ))
    }
}

/// The result of a keyword-store operation.
pub type Result<T> = std::result::Result<T, Error>;

/// A storage failure. These are never retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the keyword file exists but can't be read.
    #[error("reading keyword store `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    /// Returned when the keyword file can't be created or written.
    #[error("writing keyword store `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },

    /// Returned when the keyword file's directory can't be created.
    #[error("creating directory `{}`: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = KeywordStore::new(dir.path().join("keywords.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        std::fs::write(&path, "").unwrap();
        assert!(KeywordStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_rows_without_keyword() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        std::fs::write(
            &path,
            "keyword,subtopic,intent\n\
             Study planner,Weekly,transactional\n\
             ,Orphan,informational\n\
             Reading log\n\
             Math formula cheatsheet,Algebra,bogus\n",
        )
        .unwrap();

        let records = KeywordStore::new(&path).load().unwrap();
        assert_eq!(
            vec![
                KeywordRecord::new("Study planner", "Weekly", Intent::Transactional),
                KeywordRecord::new("Reading log", "", Intent::Informational),
                KeywordRecord::new(
                    "Math formula cheatsheet",
                    "Algebra",
                    Intent::Informational
                ),
            ],
            records
        );
    }

    #[test]
    fn test_load_pads_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        std::fs::write(
            &path,
            "keyword,subtopic,intent\nReading log\nStudy planner,Weekly\n",
        )
        .unwrap();

        let records = KeywordStore::new(&path).load().unwrap();
        assert_eq!(
            vec![
                KeywordRecord::new("Reading log", "", Intent::Informational),
                KeywordRecord::new("Study planner", "Weekly", Intent::Informational),
            ],
            records
        );
    }

    #[test]
    fn test_load_follows_header_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        std::fs::write(
            &path,
            "intent,keyword,subtopic\ntransactional,Habit tracker,Monthly\n",
        )
        .unwrap();

        assert_eq!(
            vec![KeywordRecord::new(
                "Habit tracker",
                "Monthly",
                Intent::Transactional
            )],
            KeywordStore::new(&path).load().unwrap()
        );
    }

    #[test]
    fn test_save_writes_header_and_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir
            .path()
            .join("content")
            .join("keywords")
            .join("keywords.csv");
        let store = KeywordStore::new(&path);

        store.save(&[]).unwrap();
        assert_eq!(
            "keyword,subtopic,intent\n",
            std::fs::read_to_string(&path).unwrap()
        );

        let pool = vec![
            KeywordRecord::new("Study planner", "Weekly", Intent::Transactional),
            KeywordRecord::new("Habit tracker, monthly", "", Intent::Informational),
        ];
        store.save(&pool).unwrap();
        assert_eq!(pool, store.load().unwrap());
    }

    #[test]
    fn test_save_fails_when_directory_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("content");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = KeywordStore::new(blocker.join("keywords.csv"));
        assert!(matches!(store.save(&[]), Err(Error::CreateDir { .. })));
    }
}
