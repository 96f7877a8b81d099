//! Financial report generation.
//!
//! Reports are assembled only from the aggregation, roll-up and side rules:
//! - Trial Balance
//! - Balance Sheet
//! - Income Statement

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
