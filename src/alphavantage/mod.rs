// src/alphavantage/mod.rs
pub mod client;
pub mod models;

pub use client::{AlphaVantageClient, AlphaVantageConfig};
pub use models::FunctionType;
