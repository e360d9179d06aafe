//! HTTP client for the Tushare Pro data API.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::{
    query::{BakBasicQuery, DailyQuery, Query},
    types::{ApiResponse, DailySeries, DataFrame, Record, StockBasic},
    Error,
};

/// HTTP client for the Tushare Pro data API.
///
/// Holds the endpoint and the static access token; every call is one
/// stateless request/response cycle. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `http://api.tushare.pro`.
    base_api_url: String,
    /// Access token sent in every request envelope. Set once, never rotated.
    token: String,
}

impl Client {
    /// Creates a new client pointing at the production Tushare Pro API.
    pub fn new(token: &str) -> Self {
        Self {
            base_api_url: "http://api.tushare.pro".to_string(),
            token: token.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            token: token.to_string(),
        }
    }

    fn get_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn call(&self, query: &impl Query) -> Result<DataFrame, Error> {
        let url = self.get_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let request = ApiRequest {
            api_name: query.api_name(),
            token: &self.token,
            params: query.params(),
            fields: query.fields(),
        };
        let resp = client
            .post(url)
            .header("accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach provider: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ApiResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response envelope: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        if parsed.code != 0 {
            let msg = parsed.msg.unwrap_or_default();
            tracing::error!(
                "Provider rejected {} call with code {}: {}",
                query.api_name(),
                parsed.code,
                msg
            );
            return Err(Error::Api {
                code: parsed.code,
                msg,
            });
        }

        Ok(parsed.data.unwrap_or_default())
    }

    /// Fetches daily bars for one security over the query's inclusive date
    /// range, as a date-indexed series in ascending date order.
    pub async fn daily(&self, query: &DailyQuery) -> Result<DailySeries, Error> {
        let frame = self.call(query).await?;
        DailySeries::from_frame(&frame).map_err(|e| {
            tracing::error!("Failed to decode daily rows: {}", e);
            Error::RequestFailed
        })
    }

    /// Fetches the same daily rows as plain records, exactly as the provider
    /// sent them: no date parsing, no reordering. A response with zero rows
    /// yields an empty vector.
    pub async fn daily_records(&self, query: &DailyQuery) -> Result<Vec<Record>, Error> {
        let frame = self.call(query).await?;
        Ok(frame.to_records())
    }

    /// Fetches the security reference list, unfiltered and in provider order.
    pub async fn bak_basic(&self, query: &BakBasicQuery) -> Result<Vec<StockBasic>, Error> {
        let frame = self.call(query).await?;
        frame.deserialize_rows::<StockBasic>().map_err(|e| {
            tracing::error!("Failed to decode reference rows: {}", e);
            Error::RequestFailed
        })
    }
}

/// Request envelope the provider expects on its single POST endpoint.
#[derive(Serialize)]
struct ApiRequest<'a> {
    api_name: &'static str,
    token: &'a str,
    params: serde_json::Map<String, serde_json::Value>,
    fields: String,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
