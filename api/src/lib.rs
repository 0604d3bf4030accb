//! Client for the external process-analysis service.
//!
//! The service parses an uploaded XES event log and replies with flat
//! aggregate tables. This crate owns that boundary: it posts the file, checks
//! the status, and decodes the reply into [`AnalysisPayload`] so nothing
//! downstream ever sees an untyped value.

mod client;
mod error;
mod payload;

pub use client::{AnalysisClient, ClientConfig, DEFAULT_ENDPOINT};
pub use error::AnalysisError;
pub use payload::*;
