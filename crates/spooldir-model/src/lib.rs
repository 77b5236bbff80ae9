//! Record provenance metadata for spool directory ingestion.
//!
//! Spool directory connectors watch an input directory, parse each file row
//! by row, and emit one record per row. This crate defines [`FileInfo`], the
//! provenance value attached to every emitted record: the originating file
//! name, the timestamp at which the row was processed, and the row's ordinal
//! within the file.
//!
//! The type is immutable: all fields are supplied at construction and read
//! thereafter, so instances can be shared freely across threads. The crate
//! imposes no unit or epoch on the timestamp and no indexing base on the row
//! number; both are whatever the producing connector chose.
//!
//! # Example
//!
//! ```
//! use spooldir_model::FileInfo;
//!
//! let info = FileInfo::new("orders.csv", 1_600_000_000_000, 42);
//! assert_eq!(info.file_name(), "orders.csv");
//! assert_eq!(info.row_number(), 42);
//! println!("ingested {info}");
//! ```

mod file_info;

pub use file_info::FileInfo;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
