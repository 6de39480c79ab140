// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Realized paint-pass definitions for backdrop layer stacks.
//!
//! This crate provides the intermediate representation between
//! [`backdrop_core`]'s composed layer stacks and a host's layered-paint
//! primitive. It defines:
//!
//! - [`PaintStep`] — a single draw command: one layer plus the content inset
//!   the host applies before drawing it
//! - [`PaintPass`] — the ordered step list for one stack, with the stack's
//!   resolved intrinsic padding
//!
//! A host walks the steps bottom-most first, offsetting by each step's
//! content inset (always zero under the overlay policy) and invoking the
//! layer's draw.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod pass;

pub use pass::{PaintPass, PaintStep};
