//! Application services (use cases).
//!
//! The only use case is the arbitrage pipeline: flatten a snapshot, drop
//! exchange quotes, pick best prices, detect arbitrage and allocate stakes.

pub mod pipeline;
