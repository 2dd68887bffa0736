//! Mock stock ticker
//!
//! There is no backend endpoint for quotes; the ticker renders fixed
//! mock data.

use crate::types::StockQuote;

pub fn mock_ticker() -> Vec<StockQuote> {
    vec![StockQuote {
        symbol: "NVDA".to_string(),
        price: 1483.50,
        change_percent: 2.5,
    }]
}
