//! Reads the six CSV sources into a [`WorkforceSnapshot`](crate::schema::WorkforceSnapshot).

mod loader;
mod rows;
mod table;

pub use loader::{load_dir, load_snapshot, TableSources};
pub use table::SourceTable;

/// Failure while turning source files into typed tables. Always names the table involved.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {table} source: {source}")]
    Io {
        table: SourceTable,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {table}: {source}")]
    Csv {
        table: SourceTable,
        #[source]
        source: csv::Error,
    },
    #[error("{table} is missing required column '{column}'")]
    MissingColumn {
        table: SourceTable,
        column: &'static str,
    },
    #[error("{table} contains duplicate key '{key}'")]
    DuplicateKey { table: SourceTable, key: String },
    #[error("{table} row {row}: column '{column}' has invalid value '{value}'")]
    InvalidNumber {
        table: SourceTable,
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl LoadError {
    pub fn table(&self) -> SourceTable {
        match self {
            LoadError::Io { table, .. }
            | LoadError::Csv { table, .. }
            | LoadError::MissingColumn { table, .. }
            | LoadError::DuplicateKey { table, .. }
            | LoadError::InvalidNumber { table, .. } => *table,
        }
    }
}
