// src/alphavantage/models.rs

/// The five Alpha Vantage report types this pipeline consumes.
///
/// Each variant maps to the `function` query parameter of the provider's
/// `/query` endpoint. Payload shapes are provider-defined and are never
/// validated locally: financial statements carry `annualReports` /
/// `quarterlyReports`, insider transactions carry `transactions`, insider
/// sentiment carries `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionType {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    InsiderTransactions,
    InsiderSentiment,
}

impl FunctionType {
    /// The value sent as the `function` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::CashFlow => "CASH_FLOW",
            Self::InsiderTransactions => "INSIDER_TRANSACTIONS",
            Self::InsiderSentiment => "INSIDER_SENTIMENT",
        }
    }
}

impl std::fmt::Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}
