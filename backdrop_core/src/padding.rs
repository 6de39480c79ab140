// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padding containment policy for a layer stack.

use kurbo::Insets;

/// How a stack combines the padding its layers consume.
///
/// Every stack built by
/// [`CompositeBackground`](crate::composite::CompositeBackground) uses
/// [`Overlay`](Self::Overlay): a platform-styled inset on one layer must not
/// shrink the area available to background color or shadow layers.
/// [`Nest`](Self::Nest) exists for hosts assembling a
/// [`LayerStack`](crate::stack::LayerStack) by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Each layer paints across the full element bounds, ignoring padding
    /// consumed by sibling layers. The stack's padding is the per-side
    /// maximum over its layers.
    #[default]
    Overlay,
    /// Each layer paints within the content area left by the layers below
    /// it. The stack's padding is the per-side sum over its layers.
    Nest,
}

impl PaddingMode {
    /// Combines per-layer paddings into the stack's intrinsic padding.
    ///
    /// An empty iterator resolves to [`Insets::ZERO`] under either mode.
    #[must_use]
    pub fn resolve(self, paddings: impl IntoIterator<Item = Insets>) -> Insets {
        let mut acc = Insets::ZERO;
        for p in paddings {
            acc = match self {
                Self::Overlay => Insets::new(
                    acc.x0.max(p.x0),
                    acc.y0.max(p.y0),
                    acc.x1.max(p.x1),
                    acc.y1.max(p.y1),
                ),
                Self::Nest => Insets::new(acc.x0 + p.x0, acc.y0 + p.y0, acc.x1 + p.x1, acc.y1 + p.y1),
            };
        }
        acc
    }
}
