// src/state.rs
use crate::llm::ChatMessage;
use serde::{Deserialize, Serialize};

/// The slice of orchestrator state this node reads.
///
/// The surrounding workflow owns the full state object; we only consume the
/// instrument identifier, the as-of date anchoring the lookback window, and
/// any conversation carried over from earlier nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystState {
    pub company_of_interest: String,
    /// Reference date in `YYYY-MM-DD` format.
    pub trade_date: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// The fields this node writes back into the workflow state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateUpdate {
    /// The one new assistant message, to be appended to the conversation.
    pub messages: Vec<ChatMessage>,
    /// The generated Markdown report.
    pub fundamentals_report: String,
}
