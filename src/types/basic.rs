use serde::{Deserialize, Serialize};

/// One row of the provider's security reference list (`bak_basic`): code,
/// name, listing dates, and descriptive fundamentals. Everything except the
/// code is optional; the provider owns the schema and leaves gaps.
///
/// Dates here stay as the provider's `YYYYMMDD` text, since the list is
/// passed through to callers unreshaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBasic {
    pub ts_code: String,

    pub name: Option<String>,

    pub industry: Option<String>,

    pub area: Option<String>,

    pub pe: Option<f64>,

    pub float_share: Option<f64>,

    pub total_share: Option<f64>,

    pub eps: Option<f64>,

    pub bvps: Option<f64>,

    pub pb: Option<f64>,

    pub list_date: Option<String>,

    pub delist_date: Option<String>,

    pub holder_num: Option<i64>,
}
