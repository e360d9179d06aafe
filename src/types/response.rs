use serde::{Deserialize, Serialize};

use super::DataFrame;

/// The provider's response envelope. `code` 0 means success; anything else
/// carries an error message in `msg` and usually a null `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    pub msg: Option<String>,
    pub data: Option<DataFrame>,
}
