//! Usage accounting: price table, per-call records and running totals.

pub mod accountant;
pub mod pricing;
