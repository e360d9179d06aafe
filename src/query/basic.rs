use serde_json::{Map, Value};

use super::common::{Query, QueryCommon};

/// Query for the `bak_basic` API: the provider's full security reference
/// list. The default query takes no parameters; the provider also accepts a
/// single-security filter.
#[derive(Default)]
pub struct BakBasicQuery {
    pub common: QueryCommon,
    pub ts_code: Option<String>,
}

impl Query for BakBasicQuery {
    fn api_name(&self) -> &'static str {
        "bak_basic"
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn fields(&self) -> String {
        self.common.fields_param()
    }
    fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        if let Some(ts_code) = &self.ts_code {
            params.insert("ts_code".to_string(), Value::String(ts_code.clone()));
        }
        params
    }
}

impl BakBasicQuery {
    /// Restricts the reference list to a single security.
    pub fn with_ts_code(mut self, ts_code: &str) -> Self {
        self.ts_code = Some(ts_code.to_string());
        self
    }
}
