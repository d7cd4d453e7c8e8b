//! Expense Tracker
//!
//! This crate provides an in-memory expense store together with the pure
//! aggregations that back a reports screen: running totals, per-category
//! sums and chart color assignment.

pub mod config;
pub mod core;
pub mod import;
