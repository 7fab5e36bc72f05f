//! Core library for the venture portfolio platform: the deterministic
//! scoring and insights engine, the portfolio aggregation views, and the
//! service/repository seam hosts use to expose them.

pub mod config;
pub mod error;
pub mod portfolio;
pub mod telemetry;
