//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use serde_json::{Map, Value};

/// Trait implemented by all query builders. Provides the request envelope
/// pieces (API name and parameter object) and shared builder methods for
/// column selection.
pub trait Query {
    /// The provider-side API name this query targets (e.g. `daily`).
    fn api_name(&self) -> &'static str;

    /// Builds the `params` object sent in the request envelope.
    fn params(&self) -> Map<String, Value>;

    /// Renders the `fields` string of the request envelope (empty means all
    /// columns).
    fn fields(&self) -> String;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Requests a single named column in the response.
    fn with_field(mut self, field: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().fields.push(field.to_string());
        self
    }

    /// Requests the given named columns in the response.
    fn with_fields(mut self, fields: &[&str]) -> Self
    where
        Self: Sized,
    {
        self.get_common()
            .fields
            .extend(fields.iter().map(|f| f.to_string()));
        self
    }
}

/// Fields shared by all query types: the response column selection.
#[derive(Clone, Default)]
pub struct QueryCommon {
    /// Columns to request. Empty means all columns the provider defines.
    pub fields: Vec<String>,
}

impl QueryCommon {
    /// Renders the column selection as the comma-joined `fields` string of
    /// the request envelope.
    pub fn fields_param(&self) -> String {
        self.fields.join(",")
    }
}
