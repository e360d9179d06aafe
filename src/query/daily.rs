use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::common::{Query, QueryCommon};

/// Query for the `daily` API: one security, one inclusive date range.
///
/// Dates are compact `YYYYMMDD` strings, passed through to the provider
/// without validation; malformed values surface as whatever the provider
/// answers.
#[derive(Default)]
pub struct DailyQuery {
    pub common: QueryCommon,
    pub ts_code: String,
    pub start_date: String,
    pub end_date: String,
}

impl Query for DailyQuery {
    fn api_name(&self) -> &'static str {
        "daily"
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn fields(&self) -> String {
        self.common.fields_param()
    }
    fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("ts_code".to_string(), Value::String(self.ts_code.clone()));
        params.insert(
            "start_date".to_string(),
            Value::String(self.start_date.clone()),
        );
        params.insert("end_date".to_string(), Value::String(self.end_date.clone()));
        params
    }
}

impl DailyQuery {
    /// Creates a query for the given security over `[start_date, end_date]`,
    /// both in the provider's `YYYYMMDD` format.
    pub fn new(ts_code: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            ts_code: ts_code.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// Creates a query from date-typed bounds, formatted as `YYYYMMDD`.
    pub fn for_range(ts_code: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            ts_code,
            &start.format("%Y%m%d").to_string(),
            &end.format("%Y%m%d").to_string(),
        )
    }
}
