use crate::errors::YfinError;
use crate::helpers;
use reqwest::Client;


// Yahoo Finance query host serving both fundamentals and chart endpoints
const YAHOO_API: &str = "https://query2.finance.yahoo.com/";


/// Main client for the Yahoo Finance data endpoints.
///
/// The `YfinClient` exposes the endpoint methods implemented in the
/// [`fundamentals`](crate::fundamentals) and [`quote`](crate::quote) modules.
/// No credentials are required; the endpoints used here are public.
///
/// # Available Endpoint Categories
///
/// ## Fundamentals
/// - [`get_balance_sheet`](YfinClient::get_balance_sheet) - Annual balance sheet table
/// - [`get_income_statement`](YfinClient::get_income_statement) - Annual income statement table
/// - [`get_cash_flow`](YfinClient::get_cash_flow) - Annual cash flow statement table
///
/// ## Quote
/// - [`get_quote`](YfinClient::get_quote) - Instrument metadata and last price
///
/// # Example
/// ```no_run
/// use yfin_rs::YfinClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfinClient::new();
/// let balance_sheet = client.get_balance_sheet("AAPL").await?;
/// println!("rows: {}", balance_sheet.rows.len());
/// # Ok(())
/// # }
/// ```
pub struct YfinClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
}


impl YfinClient {
    /// Create a new YfinClient against the default Yahoo endpoint
    pub fn new() -> YfinClient {
        YfinClient {
            http_client: Client::new(),
            base_url: YAHOO_API.to_string(),
        }
    }


    /// Create a new YfinClient with a custom base URL
    /// Useful for testing against a local stub server
    pub fn new_with_config(configuration: Option<String>) -> YfinClient {
        YfinClient {
            http_client: Client::new(),
            base_url: configuration.unwrap_or_else(|| YAHOO_API.to_string()),
        }
    }


    /// Wrapper for GET requests
    pub async fn get(&self, path: &str) -> Result<String, YfinError> {
        helpers::get(&self.http_client, &self.base_url, path).await
    }
}


impl Default for YfinClient {
    fn default() -> Self {
        Self::new()
    }
}
