// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error {status} for function {function}")]
    Http {
        status: reqwest::StatusCode,
        function: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error from chat endpoint: {0}")]
    Http(reqwest::StatusCode),

    #[error("Chat response contained no choices")]
    EmptyResponse,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("LLM invocation failed: {0}")]
    Llm(#[from] LlmError),
}
