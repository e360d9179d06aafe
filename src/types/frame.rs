use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a [`DataFrame`] as key-value pairs, keyed by column name in
/// the provider's column order (`serde_json` is built with `preserve_order`).
pub type Record = Map<String, Value>;

/// Columnar result frame as the provider sends it: `fields` names the
/// columns, each entry of `items` is one row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFrame {
    pub fields: Vec<String>,
    pub items: Vec<Vec<Value>>,
    #[serde(default)]
    pub has_more: bool,
}

impl DataFrame {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts each row to a record, pairing cells with column names by
    /// position. Values, names, and column order are exactly the provider's.
    pub fn to_records(&self) -> Vec<Record> {
        self.items
            .iter()
            .map(|row| {
                self.fields
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Deserializes each row into `T`, matching struct fields to columns by
    /// name. Columns `T` does not declare are ignored, so this is robust to
    /// the provider reordering or extending its schema.
    pub fn deserialize_rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        self.to_records()
            .into_iter()
            .map(|record| serde_json::from_value(Value::Object(record)))
            .collect()
    }
}
