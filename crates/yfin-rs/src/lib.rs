//! Yahoo Finance Rust client
//!
//! Unofficial Rust client for the public Yahoo Finance data endpoints.
//! Provides annual fundamentals (balance sheet, income statement, cash flow
//! statement) as labeled tables, plus a small quote lookup.
//!
//! # Quick Start
//!
//! ```no_run
//! use yfin_rs::YfinClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Create a client (no credentials required)
//! let client = YfinClient::new();
//!
//! // 2. Fetch a statement as a labeled table
//! let cash_flow = client.get_cash_flow("AAPL").await?;
//!
//! // 3. Look up rows by their line-item label
//! if let Some(latest) = cash_flow.latest("Operating Cash Flow") {
//!     println!("latest operating cash flow: {latest}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`YfinClient`] - HTTP client with all endpoint methods
//! - [`fundamentals::models::Statement`] - labeled statement table,
//!   columns ordered most-recent-first
//!
//! # Endpoint Modules
//!
//! - [`fundamentals`] - annual financial statements
//! - [`quote`] - instrument metadata and last price


// Core modules
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod fundamentals;   // Annual statement tables
pub mod quote;          // Price / instrument metadata


// Re-exports for convenient access
pub use client::YfinClient;
pub use errors::YfinError;
