//! Quote module endpoints.

use crate::client::YfinClient;
use crate::errors::YfinError;
use crate::quote::models::{ChartResponse, Quote};

const GET_CHART: &str = "/v8/finance/chart/{}?range=1d&interval=1d";

impl YfinClient {
    /// Retrieves instrument metadata and the last traded price.
    ///
    /// **Endpoint:** `GET /v8/finance/chart/{symbol}`
    ///
    /// # Returns
    /// [`Quote`] from the chart response's `meta` block
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, YfinError> {
        let url = GET_CHART.replace("{}", symbol);
        let resp = self.get(&url).await?;
        let data: ChartResponse = serde_json::from_str(&resp)
            .map_err(|e| {
                YfinError::Other(
                    format!(
                        "Invalid Parsing response format: Parse error: {e}. Response: {resp}"
                    ),
                )
            })?;
        if let Some(err) = data.chart.error {
            return Err(YfinError::Other(format!("API error: {}", err)));
        }
        data.chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0).meta) })
            .ok_or_else(|| YfinError::Other(format!("Empty chart result for {}", symbol)))
    }
}
