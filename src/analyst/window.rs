// src/analyst/window.rs
//
// Trailing-window filters over the raw provider payloads. All date
// comparisons are lexicographic on ISO strings; a missing date field
// compares as "" and is always excluded.

use chrono::{Days, NaiveDate};
use serde_json::Value;

/// Computes the lookback cutoff: `trade_date` minus 7 calendar days,
/// formatted `YYYY-MM-DD`.
pub fn lookback_cutoff(trade_date: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(trade_date, "%Y-%m-%d")?;
    let cutoff = date - Days::new(7);
    Ok(cutoff.format("%Y-%m-%d").to_string())
}

/// Pulls a top-level array out of a provider payload.
///
/// An absent (or non-array) key is logged distinctly from a present-but-empty
/// list, then degrades to empty either way. Provider responses routinely omit
/// collections they have no rows for, but an absent key can also mean the
/// response shape changed upstream.
fn list_field(payload: &Value, key: &str, function: &str) -> Vec<Value> {
    match payload.get(key) {
        Some(Value::Array(rows)) => rows.clone(),
        Some(_) => {
            tracing::warn!("Key '{}' in {} response is not an array", key, function);
            Vec::new()
        }
        None => {
            tracing::warn!("Key '{}' missing from {} response", key, function);
            Vec::new()
        }
    }
}

fn date_field<'a>(row: &'a Value, key: &str) -> &'a str {
    row.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Filters a financial-statement payload (income, balance, cash flow).
///
/// Annual reports are kept ahead of quarterly ones, each sublist in provider
/// order, and only rows with `fiscalDateEnding >= cutoff` survive.
pub fn filter_statements(payload: &Value, cutoff: &str, function: &str) -> Vec<Value> {
    let mut rows = list_field(payload, "annualReports", function);
    rows.extend(list_field(payload, "quarterlyReports", function));
    rows.retain(|row| date_field(row, "fiscalDateEnding") >= cutoff);
    rows
}

/// Filters insider transactions on `transactionDate >= cutoff`.
pub fn filter_transactions(payload: &Value, cutoff: &str, function: &str) -> Vec<Value> {
    let mut rows = list_field(payload, "transactions", function);
    rows.retain(|row| date_field(row, "transactionDate") >= cutoff);
    rows
}

/// Filters monthly insider sentiment on `month >= cutoff` truncated to
/// `YYYY-MM`.
///
/// Note the granularity mismatch with the daily filters: truncating makes
/// the whole cutoff month inclusive, where the daily filters cut at the
/// exact date. Downstream consumers rely on the current behavior, so it
/// stays as-is.
pub fn filter_sentiment(payload: &Value, cutoff: &str, function: &str) -> Vec<Value> {
    let cutoff_month = &cutoff[..7];
    let mut rows = list_field(payload, "data", function);
    rows.retain(|row| date_field(row, "month") >= cutoff_month);
    rows
}
