// src/analyst/node.rs
use crate::alphavantage::{AlphaVantageClient, AlphaVantageConfig, FunctionType};
use crate::analyst::{prompt, window, FundamentalsSnapshot};
use crate::llm::{ChatMessage, ChatModel};
use crate::state::{AnalystState, StateUpdate};
use crate::utils::error::AppError;

/// The fundamentals report node: fetch, filter, prompt, generate.
///
/// One linear pass per invocation. The five data fetches run sequentially
/// and any single failure aborts the whole run with no state update; the
/// same goes for the chat call. A fresh data client is built each run, so
/// nothing is shared across invocations.
pub struct FundamentalsAnalyst<M: ChatModel> {
    data_config: AlphaVantageConfig,
    chat: M,
}

impl<M: ChatModel> FundamentalsAnalyst<M> {
    pub fn new(data_config: AlphaVantageConfig, chat: M) -> Self {
        Self { data_config, chat }
    }

    pub async fn run(&self, state: &AnalystState) -> Result<StateUpdate, AppError> {
        let ticker = &state.company_of_interest;
        let current_date = &state.trade_date;

        let cutoff = window::lookback_cutoff(current_date).map_err(|e| {
            AppError::Config(format!("Invalid trade date '{}': {}", current_date, e))
        })?;
        tracing::info!(
            "Analyzing {} as of {} (window cutoff {})",
            ticker,
            current_date,
            cutoff
        );

        let av = AlphaVantageClient::new(self.data_config.clone())?;

        let income = av.income_statement(ticker).await?;
        let balance = av.balance_sheet(ticker).await?;
        let cash = av.cash_flow(ticker).await?;
        let insider_txn = av.insider_transactions(ticker).await?;
        let insider_sent = av.insider_sentiment(ticker).await?;

        let snapshot = FundamentalsSnapshot {
            symbol: ticker.clone(),
            date: current_date.clone(),
            income_statement: window::filter_statements(
                &income,
                &cutoff,
                FunctionType::IncomeStatement.as_query_value(),
            ),
            balance_sheet: window::filter_statements(
                &balance,
                &cutoff,
                FunctionType::BalanceSheet.as_query_value(),
            ),
            cash_flow: window::filter_statements(
                &cash,
                &cutoff,
                FunctionType::CashFlow.as_query_value(),
            ),
            insider_transactions: window::filter_transactions(
                &insider_txn,
                &cutoff,
                FunctionType::InsiderTransactions.as_query_value(),
            ),
            insider_sentiment: window::filter_sentiment(
                &insider_sent,
                &cutoff,
                FunctionType::InsiderSentiment.as_query_value(),
            ),
        };
        tracing::info!(
            "Snapshot for {} holds {} rows inside the window",
            ticker,
            snapshot.row_count()
        );

        let system = prompt::system_instruction(current_date, ticker);
        let user = ChatMessage::user(prompt::snapshot_message(
            ticker,
            &snapshot.to_pretty_json()?,
        ));

        let reply = self.chat.generate(&system, &state.messages, user).await?;
        tracing::info!(
            "Generated fundamentals report for {} ({} bytes)",
            ticker,
            reply.content.len()
        );

        let fundamentals_report = reply.content.clone();
        Ok(StateUpdate {
            messages: vec![reply],
            fundamentals_report,
        })
    }
}
