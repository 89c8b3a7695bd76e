//! Core types for the sigma random-sample statistics service.
//!
//! Defines the sample and result types exchanged between the fetcher and the
//! gateway, and the population standard deviation fold over a batch.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod result;
pub mod set;
pub mod stats;

pub use error::CoreError;
pub use result::{BatchResult, ResultItem};
pub use set::{RandomSet, SetSize};
pub use stats::{build_results, standard_deviation};
