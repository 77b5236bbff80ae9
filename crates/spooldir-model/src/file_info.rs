use std::fmt;

use serde::{Deserialize, Serialize};

/// Provenance carried by a record produced from a spooled file.
///
/// Identity is structural: two values are equal iff all three fields are
/// equal, and equal values hash equal. Ordering follows declaration order,
/// so sorting groups records by file before process time and row.
///
/// Serialized field names are camelCase (`fileName`, `processTime`,
/// `rowNumber`) to stay interchangeable with metadata already emitted by
/// existing connectors.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Name of the originating file. Any string is accepted.
    file_name: String,
    /// Timestamp recorded when the row was processed. Opaque to this crate.
    process_time: i64,
    /// Ordinal of the row within the file. Opaque to this crate.
    row_number: i64,
}

impl FileInfo {
    /// Builds the provenance value for one ingested row.
    ///
    /// Values are stored as given; nothing is validated or normalized.
    pub fn new(file_name: impl Into<String>, process_time: i64, row_number: i64) -> Self {
        Self {
            file_name: file_name.into(),
            process_time,
            row_number,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn process_time(&self) -> i64 {
        self.process_time
    }

    pub fn row_number(&self) -> i64 {
        self.row_number
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileInfo {{ file_name: {:?}, process_time: {}, row_number: {} }}",
            self.file_name, self.process_time, self.row_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_constructed_values() {
        let info = FileInfo::new("data/input.csv", 1_600_000_000_000, 7);
        assert_eq!(info.file_name(), "data/input.csv");
        assert_eq!(info.process_time(), 1_600_000_000_000);
        assert_eq!(info.row_number(), 7);
    }

    #[test]
    fn default_is_the_empty_value() {
        assert_eq!(FileInfo::default(), FileInfo::new("", 0, 0));
    }

    #[test]
    fn display_renders_every_field() {
        let rendered = FileInfo::new("orders.csv", 1000, 42).to_string();
        assert!(rendered.contains("orders.csv"));
        assert!(rendered.contains("1000"));
        assert!(rendered.contains("42"));
        assert!(rendered.contains("file_name"));
        assert!(rendered.contains("process_time"));
        assert!(rendered.contains("row_number"));
    }

    #[test]
    fn display_is_deterministic() {
        let info = FileInfo::new("orders.csv", 1000, 42);
        assert_eq!(info.to_string(), info.to_string());
        assert_eq!(
            info.to_string(),
            "FileInfo { file_name: \"orders.csv\", process_time: 1000, row_number: 42 }"
        );
    }
}
