//! Fundamentals module endpoints.
//!
//! This module implements the endpoint methods that fetch annual financial
//! statements from the Yahoo fundamentals-timeseries API and assemble them
//! into labeled [`Statement`] tables.
//!
//! # Usage
//!
//! All endpoint methods are available on [`YfinClient`](crate::client::YfinClient).

use crate::client::YfinClient;
use crate::errors::YfinError;
use crate::fundamentals::models::{Statement, TimeseriesQuery, TimeseriesResponse};
use crate::helpers;

const GET_TIMESERIES: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/{}";

// How far back to ask for annual columns. Yahoo returns at most four or five
// annual periods regardless.
const LOOKBACK_YEARS: i64 = 5;

/// Metric keys requested for the balance sheet table.
///
/// The three debt variants are requested on purpose: which one a filing
/// carries varies across instruments and API editions, and downstream
/// consumers resolve them by label in priority order.
pub const BALANCE_SHEET_KEYS: &[&str] = &[
    "annualTotalAssets",
    "annualTotalLiabilitiesNetMinorityInterest",
    "annualStockholdersEquity",
    "annualCashAndCashEquivalents",
    "annualTotalDebt",
    "annualLongTermDebt",
    "annualTotalLongTermDebt",
    "annualCurrentDebt",
];

/// Metric keys requested for the income statement table.
pub const INCOME_STATEMENT_KEYS: &[&str] = &[
    "annualTotalRevenue",
    "annualOperatingIncome",
    "annualInterestExpense",
    "annualPretaxIncome",
    "annualIncomeTaxExpense",
    "annualTaxProvision",
    "annualNetIncome",
];

/// Metric keys requested for the cash flow statement table.
///
/// `annualTotalCashFromOperatingActivities` is the legacy name of
/// `annualOperatingCashFlow`; both are requested so either edition of the
/// API yields a usable row.
pub const CASH_FLOW_KEYS: &[&str] = &[
    "annualOperatingCashFlow",
    "annualTotalCashFromOperatingActivities",
    "annualInvestingCashFlow",
    "annualFinancingCashFlow",
    "annualCapitalExpenditure",
    "annualFreeCashFlow",
    "annualEndCashPosition",
];

impl YfinClient {
    /// Fetch an annual statement table for an arbitrary set of metric keys.
    ///
    /// **Endpoint:** `GET /ws/fundamentals-timeseries/v1/finance/timeseries/{symbol}`
    ///
    /// # Parameters
    /// - `symbol` - The instrument ticker symbol
    /// - `keys` - Timeseries metric keys (e.g. `"annualTotalDebt"`); keys the
    ///   provider does not recognize are silently ignored
    ///
    /// # Returns
    /// [`Statement`] with one row per returned metric, columns most-recent-first
    pub async fn get_statement(
        &self,
        symbol: &str,
        keys: &[&str],
    ) -> Result<Statement, YfinError> {
        let (period1, period2) = helpers::annual_window(LOOKBACK_YEARS);
        let params = TimeseriesQuery {
            type_: keys.join(","),
            period1,
            period2,
        };
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| YfinError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let url = format!("{}?{}", GET_TIMESERIES.replace("{}", symbol), query);
        let resp = self.get(&url).await?;
        let data: TimeseriesResponse = serde_json::from_str(&resp)
            .map_err(|e| {
                YfinError::Other(
                    format!(
                        "Invalid Parsing response format: Parse error: {e}. Response: {resp}"
                    ),
                )
            })?;
        if let Some(err) = data.timeseries.error {
            return Err(YfinError::Other(format!("API error: {}", err)));
        }
        Ok(Statement::from_timeseries(&data.timeseries.result, keys))
    }


    /// Retrieves the annual balance sheet for a symbol.
    ///
    /// # Returns
    /// [`Statement`] with rows for [`BALANCE_SHEET_KEYS`]
    pub async fn get_balance_sheet(&self, symbol: &str) -> Result<Statement, YfinError> {
        self.get_statement(symbol, BALANCE_SHEET_KEYS).await
    }


    /// Retrieves the annual income statement for a symbol.
    ///
    /// # Returns
    /// [`Statement`] with rows for [`INCOME_STATEMENT_KEYS`]
    pub async fn get_income_statement(&self, symbol: &str) -> Result<Statement, YfinError> {
        self.get_statement(symbol, INCOME_STATEMENT_KEYS).await
    }


    /// Retrieves the annual cash flow statement for a symbol.
    ///
    /// # Returns
    /// [`Statement`] with rows for [`CASH_FLOW_KEYS`]
    pub async fn get_cash_flow(&self, symbol: &str) -> Result<Statement, YfinError> {
        self.get_statement(symbol, CASH_FLOW_KEYS).await
    }
}
