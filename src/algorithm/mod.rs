//! Derived-view computations over case records
//!
//! This module contains the aggregation engine, the timeline deriver, the
//! task lifecycle filter and the combined case summary built from them.

pub mod aggregation;
pub mod summary;
pub mod tasks;
pub mod timeline;

pub use summary::CaseSummary;
