// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The realized layer stack: an ordered sequence of paintable layers.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Insets;

use crate::drawable::Drawable;
use crate::padding::PaddingMode;

/// Which logical input a realized layer came from.
///
/// Hosts and diagnostics use this to label layers without downcasting the
/// drawable behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// A background already on the view before composition, such as one set
    /// by a platform widget style.
    OriginalBackground,
    /// A box-shadow cast outside the border edge.
    OuterShadow,
    /// The CSS background and border layer.
    CssBackground,
    /// A box-shadow cast inside the border edge.
    InnerShadow,
    /// A platform touch-feedback ripple.
    Ripple,
}

impl LayerRole {
    /// Returns a short lowercase name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OriginalBackground => "original-background",
            Self::OuterShadow => "outer-shadow",
            Self::CssBackground => "css-background",
            Self::InnerShadow => "inner-shadow",
            Self::Ripple => "ripple",
        }
    }
}

/// One realized layer: a drawable tagged with the role it fills.
pub struct StackEntry<S: ?Sized> {
    role: LayerRole,
    drawable: Rc<dyn Drawable<S>>,
}

impl<S: ?Sized> StackEntry<S> {
    /// Creates an entry for `drawable` filling `role`.
    #[must_use]
    pub fn new(role: LayerRole, drawable: Rc<dyn Drawable<S>>) -> Self {
        Self { role, drawable }
    }

    /// Returns the role this layer fills.
    #[must_use]
    pub fn role(&self) -> LayerRole {
        self.role
    }

    /// Returns the drawable behind this layer.
    #[must_use]
    pub fn drawable(&self) -> &Rc<dyn Drawable<S>> {
        &self.drawable
    }
}

impl<S: ?Sized> Clone for StackEntry<S> {
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            drawable: Rc::clone(&self.drawable),
        }
    }
}

impl<S: ?Sized> fmt::Debug for StackEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// An ordered sequence of paintable layers plus its padding policy.
///
/// Layers are stored in paint order: the first entry paints bottom-most.
/// A stack is built once and never mutated; updates to a
/// [`CompositeBackground`](crate::composite::CompositeBackground) rebuild the
/// stack in full.
pub struct LayerStack<S: ?Sized> {
    entries: Vec<StackEntry<S>>,
    padding_mode: PaddingMode,
}

impl<S: ?Sized> LayerStack<S> {
    /// Creates a stack from entries already in paint order.
    #[must_use]
    pub fn new(entries: Vec<StackEntry<S>>, padding_mode: PaddingMode) -> Self {
        Self {
            entries,
            padding_mode,
        }
    }

    /// Returns the layers in paint order (bottom-most first).
    #[must_use]
    pub fn layers(&self) -> &[StackEntry<S>] {
        &self.entries
    }

    /// Returns the number of realized layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the stack has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the padding containment policy.
    #[must_use]
    pub fn padding_mode(&self) -> PaddingMode {
        self.padding_mode
    }

    /// Returns the stack's intrinsic padding, resolved from its layers under
    /// the stack's [`PaddingMode`].
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding_mode
            .resolve(self.entries.iter().map(|e| e.drawable.intrinsic_padding()))
    }
}

impl<S: ?Sized> Clone for LayerStack<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            padding_mode: self.padding_mode,
        }
    }
}

impl<S: ?Sized> fmt::Debug for LayerStack<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStack")
            .field("roles", &self.entries.iter().map(|e| e.role).collect::<Vec<_>>())
            .field("padding_mode", &self.padding_mode)
            .finish()
    }
}
