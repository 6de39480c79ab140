// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON structure dumps.
//!
//! These produce [`serde_json::Value`] trees describing a composed stack —
//! mode, resolved padding, and per-layer role/padding — for snapshotting and
//! machine diffing. Drawables themselves are opaque and appear only through
//! their role and padding.

use backdrop_core::composite::CompositeBackground;
use backdrop_core::padding::PaddingMode;
use backdrop_core::stack::LayerStack;
use kurbo::Insets;
use serde_json::{Value, json};

/// Dumps a stack's structure.
#[must_use]
pub fn stack_to_json<S: ?Sized>(stack: &LayerStack<S>) -> Value {
    let layers: Vec<Value> = stack
        .layers()
        .iter()
        .map(|entry| {
            json!({
                "role": entry.role().name(),
                "padding": insets_to_json(entry.drawable().intrinsic_padding()),
            })
        })
        .collect();
    let mode = match stack.padding_mode() {
        PaddingMode::Overlay => "overlay",
        PaddingMode::Nest => "nest",
    };
    json!({
        "mode": mode,
        "padding": insets_to_json(stack.padding()),
        "layers": layers,
    })
}

/// Dumps a composite's inputs and realized stack.
#[must_use]
pub fn composite_to_json<S: ?Sized>(composite: &CompositeBackground<S>) -> Value {
    json!({
        "original_background": composite.original_background().is_some(),
        "outer_shadows": composite.outer_shadows().len(),
        "css_background": composite.css_background().is_some(),
        "inner_shadows": composite.inner_shadows().len(),
        "ripple": composite.ripple().is_some(),
        "stack": stack_to_json(composite.stack()),
    })
}

fn insets_to_json(v: Insets) -> Value {
    json!([v.x0, v.y0, v.x1, v.y1])
}
