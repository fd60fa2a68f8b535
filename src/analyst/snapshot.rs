// src/analyst/snapshot.rs
use serde::Serialize;
use serde_json::Value;

/// The per-invocation bundle of filtered fundamentals handed to the LLM.
///
/// Rows keep whatever shape the provider gave them. The struct exists only
/// long enough to be rendered into the prompt; field order is fixed here so
/// identical inputs always serialize to an identical payload.
#[derive(Debug, Serialize)]
pub struct FundamentalsSnapshot {
    pub symbol: String,
    pub date: String,
    pub income_statement: Vec<Value>,
    pub balance_sheet: Vec<Value>,
    pub cash_flow: Vec<Value>,
    pub insider_transactions: Vec<Value>,
    pub insider_sentiment: Vec<Value>,
}

impl FundamentalsSnapshot {
    /// Renders the snapshot as indented JSON for the prompt body.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Total rows retained across all five categories.
    pub fn row_count(&self) -> usize {
        self.income_statement.len()
            + self.balance_sheet.len()
            + self.cash_flow.len()
            + self.insider_transactions.len()
            + self.insider_sentiment.len()
    }
}
