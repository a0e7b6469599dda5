//! Data records returned by the FMP API
//!
//! All records are transport DTOs: created per request from upstream JSON and
//! never persisted. Upstream records pass through unchanged: field names
//! serialize back to the upstream camelCase, absent fields stay absent, and
//! fields outside the declared sets are carried in each record's `extra` map.

pub mod company;
pub mod market;
pub mod stock;

pub use company::{CompanyPeer, CompanyProfile, CompanySearchResult};
pub use market::MarketHours;
pub use stock::StockQuote;
