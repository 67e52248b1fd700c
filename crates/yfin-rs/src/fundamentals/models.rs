//! Fundamentals module models.
//!
//! This module contains data structures for the Yahoo fundamentals-timeseries
//! endpoint, plus [`Statement`], the labeled table the endpoint methods return.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;


/// Raw response envelope from `GET /ws/fundamentals-timeseries/v1/finance/timeseries/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesResponse {
    pub timeseries: TimeseriesResult,
}


#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesResult {
    #[serde(default)]
    pub result: Vec<TimeseriesEntry>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}


/// One requested metric. The metric's data points live under a dynamic JSON
/// key equal to the metric name (e.g. `"annualTotalDebt": [...]`), captured
/// here via the flattened map.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesEntry {
    pub meta: TimeseriesMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(flatten)]
    pub points: HashMap<String, Vec<Option<DataPoint>>>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesMeta {
    #[serde(default)]
    pub symbol: Vec<String>,
    #[serde(rename = "type", default)]
    pub type_: Vec<String>,
}


/// A single reported value for one reporting period.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "asOfDate")]
    pub as_of_date: String,
    #[serde(rename = "periodType", default)]
    pub period_type: Option<String>,
    #[serde(rename = "currencyCode", default)]
    pub currency_code: Option<String>,
    #[serde(rename = "reportedValue", default)]
    pub reported_value: Option<ReportedValue>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct ReportedValue {
    #[serde(default)]
    pub raw: Option<f64>,
    #[serde(default)]
    pub fmt: Option<String>,
}


/// Query parameters for the timeseries endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TimeseriesQuery {
    #[serde(rename = "type")]
    pub type_: String,
    pub period1: i64,
    pub period2: i64,
}


/// One line item of a [`Statement`]: a human-facing label and the reported
/// values aligned to the statement's period columns (`None` where the
/// provider reported nothing for that period).
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub label: String,
    pub values: Vec<Option<f64>>,
}


/// A financial statement as a labeled table.
///
/// Rows are line items keyed by their display label ("Total Debt",
/// "Operating Cash Flow", ...); columns are reporting periods ordered
/// most-recent-first. Row labels are derived from the provider's metric keys
/// by stripping the frequency prefix and spacing the camel-cased words, which
/// reproduces the line-item names Yahoo shows in its own statement views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// Period end dates (`YYYY-MM-DD`), most recent first.
    pub periods: Vec<String>,
    pub rows: Vec<StatementRow>,
}


impl Statement {
    /// Look up a row by its exact line-item label.
    pub fn get(&self, label: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Values for a labeled row, aligned to [`Statement::periods`].
    pub fn series(&self, label: &str) -> Option<&[Option<f64>]> {
        self.get(label).map(|r| r.values.as_slice())
    }

    /// Most recent reported value for a labeled row, if any.
    pub fn latest(&self, label: &str) -> Option<f64> {
        self.get(label).and_then(|r| r.values.first().copied().flatten())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Assemble a table from raw timeseries entries. Only metrics present in
    /// `keys` become rows, in `keys` order; metrics the provider did not
    /// return produce no row at all.
    pub fn from_timeseries(entries: &[TimeseriesEntry], keys: &[&str]) -> Statement {
        // Column index: every as-of date seen anywhere, most recent first.
        let mut periods: Vec<String> = entries
            .iter()
            .flat_map(|e| e.points.values())
            .flatten()
            .flatten()
            .map(|p| p.as_of_date.clone())
            .collect();
        periods.sort_by(|a, b| b.cmp(a));
        periods.dedup();

        let mut rows = Vec::new();
        for key in keys {
            let Some(entry) = entries
                .iter()
                .find(|e| e.meta.type_.first().map(String::as_str) == Some(*key))
            else {
                continue;
            };
            let Some(points) = entry.points.get(*key) else {
                continue;
            };

            let mut by_date: HashMap<&str, f64> = HashMap::new();
            for p in points.iter().flatten() {
                if let Some(raw) = p.reported_value.as_ref().and_then(|v| v.raw) {
                    by_date.insert(p.as_of_date.as_str(), raw);
                }
            }

            let values = periods
                .iter()
                .map(|d| by_date.get(d.as_str()).copied())
                .collect();
            rows.push(StatementRow {
                label: spaced_label(key),
                values,
            });
        }

        Statement { periods, rows }
    }
}


/// Turn a timeseries metric key into the display label Yahoo uses for the
/// same line item: drop the frequency prefix, then space the camel-cased
/// words ("annualTotalCashFromOperatingActivities" ->
/// "Total Cash From Operating Activities"). Acronym runs stay glued
/// ("annualEBITDA" -> "EBITDA").
pub fn spaced_label(metric: &str) -> String {
    let name = metric
        .strip_prefix("annual")
        .or_else(|| metric.strip_prefix("quarterly"))
        .or_else(|| metric.strip_prefix("trailing"))
        .unwrap_or(metric);

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).map(|n| n.is_lowercase()).unwrap_or(false);
            if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}
