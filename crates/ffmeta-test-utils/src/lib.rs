//! Shared test utilities for the ffmeta workspace.
//!
//! This crate provides the sample documents and logging setup used across
//! the ffmeta test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fixtures`] — sample FFMETADATA files from `test-fixtures/samples`
//! - [`logging`] — tracing subscriber for test output

pub mod fixtures;
pub mod logging;
