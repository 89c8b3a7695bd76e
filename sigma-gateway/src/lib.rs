//! HTTP gateway for the sigma random-sample statistics service.
//!
//! Exposes `GET /random/mean`, which draws batches of random integers from
//! random.org in parallel and returns their standard deviations.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
