use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

const DELIMITER: char = '|';

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Parse one line into a record. Lines that do not split into exactly
    /// three fields are malformed and yield `None`.
    fn parse_line(line: &str) -> Option<Record> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != 3 {
            return None;
        }
        Some(Record::new(parts[0], parts[1], parts[2]))
    }

    fn format_line(record: &Record) -> String {
        format!(
            "{}{d}{}{d}{}\n",
            record.name,
            record.age,
            record.id,
            d = DELIMITER
        )
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        // Absence means "no data yet", not an error.
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.data_file).map_err(RosterError::Io)?;
        let records = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            // Malformed lines are skipped, not reported.
            .filter_map(Self::parse_line)
            .collect();
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut content = String::new();
        for record in records {
            content.push_str(&Self::format_line(record));
        }

        // Whole-file overwrite, never append.
        fs::write(&self.data_file, content).map_err(RosterError::Io)?;
        Ok(())
    }
}
