/// Tabular reshaping of record-list payloads
pub mod table;

pub use table::DataTable;
