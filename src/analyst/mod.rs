// src/analyst/mod.rs
pub mod node;
pub mod prompt;
pub mod snapshot;
pub mod window;

pub use node::FundamentalsAnalyst;
pub use snapshot::FundamentalsSnapshot;
