// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer-stack composition for view backgrounds.
//!
//! `backdrop_core` assembles a view's visual background out of up to five
//! logical inputs — a pre-existing original background, ordered outer
//! box-shadows, a CSS-style background/border layer, ordered inner
//! box-shadows, and a native touch-ripple effect — into a single ordered
//! stack of paintable layers. It is `no_std` compatible (with `alloc`) and
//! never draws anything itself: layers are opaque collaborators behind the
//! [`Drawable`](drawable::Drawable) seam, and a host rendering primitive
//! consumes the realized stack.
//!
//! # Architecture
//!
//! ```text
//!   original?  outer[..]  css?  inner[..]  ripple?
//!        │         │        │       │        │
//!        └─────────┴────┬───┴───────┴────────┘
//!                       ▼
//!        CompositeBackground::new() ──► LayerStack (ordered, Overlay)
//!                       │
//!        with_css_background() / with_shadows() / with_ripple()
//!                       │
//!                       ▼
//!              new CompositeBackground (full rebuild)
//! ```
//!
//! **[`drawable`]** — The [`Drawable`](drawable::Drawable) trait: an opaque
//! paintable unit that draws onto a host surface type `S` and reports the
//! padding it consumes. The core is generic over `S` rather than a subtype
//! of any host paint primitive.
//!
//! **[`padding`]** — The [`PaddingMode`](padding::PaddingMode) containment
//! policy (overlay vs. nested content area) and its per-side resolution over
//! layer paddings.
//!
//! **[`stack`]** — The realized ordered layer sequence:
//! [`LayerStack`](stack::LayerStack) entries tagged with the
//! [`LayerRole`](stack::LayerRole) they were built from.
//!
//! **[`composite`]** — [`CompositeBackground`](composite::CompositeBackground),
//! the composer. Construction defines the canonical draw order (shadow lists
//! are reversed from CSS source order to paint order) and stamps the overlay
//! padding policy; the `with_*` operations rebuild the whole stack with one
//! input replaced, leaving the receiver untouched.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod composite;
pub mod drawable;
pub mod padding;
pub mod stack;
