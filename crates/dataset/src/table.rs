use tracing::info;

use crate::{DatasetError, DatasetRecord};

/// Materialized result set from a tabular query.
///
/// Rows are stored as `Vec<Option<String>>` where `None` represents SQL
/// NULL. Cell ordering in each row matches the `columns` vector.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Column names in result-set order.
    pub columns: Vec<String>,
    /// Row data. Each inner vector has the same length as `columns`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    /// Finds the zero-based index of a column by name (case-sensitive).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Retrieves the value at the given row index and column name.
    ///
    /// Returns `None` if the row index is out of bounds, the column does
    /// not exist, or the cell is SQL NULL.
    pub fn get_value(&self, row: usize, col: &str) -> Option<&str> {
        let col_idx = self.column_index(col)?;
        self.rows.get(row)?.get(col_idx)?.as_deref()
    }
}

/// Handle to an externally managed tabular query session.
///
/// The caller owns connection lifecycle: opening, authentication, and
/// teardown happen outside this crate. Implementations only execute SQL
/// and materialize the full result.
pub trait QuerySession {
    fn query(&self, sql: &str) -> Result<QueryResult, DatasetError>;
}

/// Load every row of `table_name` into dataset rows via `SELECT *`.
///
/// Columns map to the record schema by name: `filename`, `filepath` and
/// `url` map directly (NULL becomes empty); `text_by_page` is parsed as a
/// JSON string array when present, otherwise a `text` column is wrapped as
/// a single page.
pub fn load_dataset_from_table(
    session: &dyn QuerySession,
    table_name: &str,
) -> Result<Vec<DatasetRecord>, DatasetError> {
    let sql = format!("SELECT * FROM {table_name}");
    let result = session.query(&sql)?;

    let mut records = Vec::with_capacity(result.rows.len());
    for row_idx in 0..result.rows.len() {
        let cell = |col: &str| result.get_value(row_idx, col).unwrap_or("").to_string();

        let text_by_page = match result.get_value(row_idx, "text_by_page") {
            // Non-JSON content is kept as one page rather than dropped.
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| vec![raw.to_string()]),
            None => result
                .get_value(row_idx, "text")
                .map(|t| vec![t.to_string()])
                .unwrap_or_default(),
        };

        records.push(DatasetRecord {
            filename: cell("filename"),
            text_by_page,
            filepath: cell("filepath"),
            url: cell("url"),
        });
    }

    info!(rows = records.len(), table = table_name, "loaded table dataset");
    Ok(records)
}
