// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The opaque paintable-layer seam.

use kurbo::Insets;

/// A drawable unit that can paint itself onto a host surface and report the
/// padding it consumes.
///
/// `S` is the host's paint surface type — a platform canvas, a display-list
/// builder, a test recorder. The composer never inspects a drawable beyond
/// this trait; shadows, CSS backgrounds, and ripple effects are all supplied
/// by collaborators implementing it.
///
/// Drawables are shared as `Rc<dyn Drawable<S>>`. Externally supplied layers
/// (an original background already on the view, a platform ripple) stay alive
/// through the caller's own `Rc`; the composite only holds another reference.
pub trait Drawable<S: ?Sized> {
    /// Draws the layer onto `surface`, covering the element's full bounds.
    fn draw(&self, surface: &mut S);

    /// Returns the padding this layer consumes.
    ///
    /// Most layers consume none; a platform-styled original background (e.g.
    /// an edit-control style with built-in insets) is the usual exception.
    fn intrinsic_padding(&self) -> Insets {
        Insets::ZERO
    }
}
