// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON structure dumps for backdrop diagnostics.
//!
//! This crate inspects composed layer stacks for development and snapshot
//! tooling:
//!
//! - [`pretty::StackPrinter`] — human-readable one-line-per-layer output.
//! - [`json`] — [`serde_json::Value`] structure dumps for machine diffing.

pub mod json;
pub mod pretty;
