// src/analyst/prompt.rs
//
// Fixed prompt text for the fundamentals report. The section layout is part
// of the downstream rendering contract; change it together with whatever
// consumes `fundamentals_report`.

const SYSTEM_MESSAGE: &str = "You are a professional equity research analyst. \
Analyze the provided company's fundamentals for the past week. \
Use income statement, balance sheet, cash flow, insider transactions, \
and insider sentiment. Create a structured Markdown report:\n\
1. **Company Overview**\n\
2. **Financial Highlights** (revenues, profits, margins)\n\
3. **Cash Flow & Balance Sheet**\n\
4. **Insider Activity** (sentiment & transactions)\n\
5. **Risks & Red Flags**\n\
6. **Investment View** — Bullish/Neutral/Bearish with 3 drivers\n\n\
End with a summary Markdown table of key points.";

/// The analyst persona, parameterized with the as-of date and ticker.
pub fn system_instruction(current_date: &str, ticker: &str) -> String {
    format!("{SYSTEM_MESSAGE}\n\nCurrent date: {current_date}\nCompany: {ticker}")
}

/// The user turn carrying the snapshot as a fenced JSON block.
pub fn snapshot_message(ticker: &str, snapshot_json: &str) -> String {
    format!("Here is the JSON data for {ticker}:\n```json\n{snapshot_json}\n```")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_carries_date_and_ticker() {
        let instruction = system_instruction("2024-03-15", "AAPL");
        assert!(instruction.starts_with("You are a professional equity research analyst."));
        assert!(instruction.contains("Current date: 2024-03-15"));
        assert!(instruction.ends_with("Company: AAPL"));
    }

    #[test]
    fn system_instruction_lists_all_report_sections() {
        let instruction = system_instruction("2024-03-15", "AAPL");
        for section in [
            "**Company Overview**",
            "**Financial Highlights**",
            "**Cash Flow & Balance Sheet**",
            "**Insider Activity**",
            "**Risks & Red Flags**",
            "**Investment View**",
        ] {
            assert!(instruction.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn snapshot_message_wraps_payload_in_json_fence() {
        let message = snapshot_message("AAPL", "{\n  \"symbol\": \"AAPL\"\n}");
        assert!(message.starts_with("Here is the JSON data for AAPL:"));
        assert!(message.contains("```json\n{"));
        assert!(message.ends_with("```"));
    }
}
