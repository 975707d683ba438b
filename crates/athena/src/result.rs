use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Literal substituted for SQL NULL cells in flattened rows.
pub const NULL_MARKER: &str = "NULL";

/// Raw result set as returned by the query service.
///
/// Rows are stored as `Vec<Option<String>>` where `None` represents SQL NULL.
/// Row 0 is the header row: its cells carry the column names. It is consumed
/// by [`flatten_rows`] and never appears in the flattened output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub rows: Vec<Vec<Option<String>>>,
}

/// One flattened data row, keyed by column name.
pub type ResultRow = HashMap<String, String>;

/// Flatten a raw result set into key-value records.
///
/// The header row supplies the ordered column-name keys; every later row
/// becomes one record with exactly one entry per header column. A cell that
/// is SQL NULL, or missing entirely from a short row, is substituted with
/// [`NULL_MARKER`]; cells past the header width are dropped. Row order is
/// preserved.
pub fn flatten_rows(set: &ResultSet) -> Vec<ResultRow> {
    let Some((header, data_rows)) = set.rows.split_first() else {
        return Vec::new();
    };

    let keys: Vec<String> = header
        .iter()
        .map(|cell| cell.clone().unwrap_or_default())
        .collect();

    data_rows
        .iter()
        .map(|row| {
            keys.iter()
                .enumerate()
                .map(|(i, key)| {
                    let value = row
                        .get(i)
                        .and_then(|cell| cell.as_deref())
                        .unwrap_or(NULL_MARKER);
                    (key.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}
