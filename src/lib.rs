//----------------------------------------
// Root lib
//----------------------------------------
//! Monte Carlo simulation of internal meta-analysis: pooling several small
//! two-group studies from one article into a single test. Runs estimate
//! power for a fixed number of studies, and false-positive rates when
//! studies are collected behind a significance gate or when the pooled
//! analysis is re-run after every study until it turns significant.

/// This module houses the public API for simulating studies, pooling them,
/// running the three stopping procedures, and sweeping a parameter grid
pub mod compute;
/// This module contains error types
pub mod error;
mod estimate;
mod pooling;
mod runner;
mod study;
mod sweep;
