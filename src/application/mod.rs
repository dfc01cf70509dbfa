//! Application services (use cases).
//!
//! The engine joins and prices provider rows; the scan service drives the
//! providers and hands their rows to the engine.

pub mod engine;
pub mod report;
pub mod scan;

pub use engine::EvEngine;
pub use report::{EvReport, ReportOutcome, SkipReason, SkippedRecord};
pub use scan::{ScanOutcome, ScanService};
