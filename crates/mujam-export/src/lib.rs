//! The CSV artifacts around the keyword store: the append-only backup
//! mirror, the on-demand full export (CSV or JSON), and the startup-time
//! bulk import with insert-if-absent semantics.

pub mod backup;
pub mod csv;
pub mod document;
pub mod error;
pub mod import;

pub use backup::BackupWriter;
pub use document::{to_csv, to_json};
pub use error::ExportError;
pub use import::{ImportSummary, import_entries, import_file};
