//! Core types shared across propmatch facilities
//!
//! This crate provides foundational types used by the error and logging
//! facilities of the comparison engine:
//!
//! - **Correlation types**: RunId for tying the start/end events of one match run
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
