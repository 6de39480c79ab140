// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composite background: five logical inputs, one realized stack.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::drawable::Drawable;
use crate::padding::PaddingMode;
use crate::stack::{LayerRole, LayerStack, StackEntry};

/// A view background composed from up to five logical inputs.
///
/// Construction realizes the inputs into a [`LayerStack`] whose paint order
/// is always:
///
/// ```text
/// [original background]  ++  reverse(outer shadows)  ++  [CSS background]
///                        ++  reverse(inner shadows)  ++  [ripple]
/// ```
///
/// with absent inputs contributing no layer. Shadow lists are supplied in
/// CSS source order and reversed here, because a specified shadow list is
/// ordered nearest-the-viewer first while the stack paints first-inserted
/// bottom-most (<https://drafts.csswg.org/css-backgrounds/#shadow-layers>).
///
/// The realized stack always uses [`PaddingMode::Overlay`]: a platform-styled
/// inset on one layer (e.g. an edit-control style with built-in padding) must
/// not shrink the area the background color or shadows paint into.
///
/// A composite is an immutable value. The
/// [`with_css_background`](Self::with_css_background),
/// [`with_shadows`](Self::with_shadows), and
/// [`with_ripple`](Self::with_ripple) operations return a new composite with
/// the stack rebuilt in full; the receiver stays valid and unchanged.
pub struct CompositeBackground<S: ?Sized> {
    original_background: Option<Rc<dyn Drawable<S>>>,
    outer_shadows: Vec<Rc<dyn Drawable<S>>>,
    css_background: Option<Rc<dyn Drawable<S>>>,
    inner_shadows: Vec<Rc<dyn Drawable<S>>>,
    ripple: Option<Rc<dyn Drawable<S>>>,
    stack: LayerStack<S>,
}

impl<S: ?Sized> CompositeBackground<S> {
    /// Composes a background from the five logical inputs.
    ///
    /// Every input may be absent or empty; composition cannot fail. Shadow
    /// lists are expected in CSS source order (nearest the viewer first) —
    /// callers holding paint-ordered lists must reverse them beforehand.
    #[must_use]
    pub fn new(
        original_background: Option<Rc<dyn Drawable<S>>>,
        outer_shadows: Vec<Rc<dyn Drawable<S>>>,
        css_background: Option<Rc<dyn Drawable<S>>>,
        inner_shadows: Vec<Rc<dyn Drawable<S>>>,
        ripple: Option<Rc<dyn Drawable<S>>>,
    ) -> Self {
        let mut entries = Vec::with_capacity(
            usize::from(original_background.is_some())
                + outer_shadows.len()
                + usize::from(css_background.is_some())
                + inner_shadows.len()
                + usize::from(ripple.is_some()),
        );

        if let Some(original) = &original_background {
            entries.push(StackEntry::new(
                LayerRole::OriginalBackground,
                Rc::clone(original),
            ));
        }
        for shadow in outer_shadows.iter().rev() {
            entries.push(StackEntry::new(LayerRole::OuterShadow, Rc::clone(shadow)));
        }
        if let Some(css) = &css_background {
            entries.push(StackEntry::new(LayerRole::CssBackground, Rc::clone(css)));
        }
        for shadow in inner_shadows.iter().rev() {
            entries.push(StackEntry::new(LayerRole::InnerShadow, Rc::clone(shadow)));
        }
        if let Some(ripple) = &ripple {
            entries.push(StackEntry::new(LayerRole::Ripple, Rc::clone(ripple)));
        }

        Self {
            original_background,
            outer_shadows,
            css_background,
            inner_shadows,
            ripple,
            stack: LayerStack::new(entries, PaddingMode::Overlay),
        }
    }

    // -- Reconstruction API --

    /// Returns a new composite with the CSS background replaced and the
    /// stack rebuilt. The receiver is unchanged.
    #[must_use]
    pub fn with_css_background(&self, css_background: Option<Rc<dyn Drawable<S>>>) -> Self {
        Self::new(
            self.original_background.clone(),
            self.outer_shadows.clone(),
            css_background,
            self.inner_shadows.clone(),
            self.ripple.clone(),
        )
    }

    /// Returns a new composite with both shadow lists replaced and the stack
    /// rebuilt. The receiver is unchanged.
    ///
    /// Outer and inner shadows are replaced together so no composite ever
    /// holds one list from the old style and one from the new.
    #[must_use]
    pub fn with_shadows(
        &self,
        outer_shadows: Vec<Rc<dyn Drawable<S>>>,
        inner_shadows: Vec<Rc<dyn Drawable<S>>>,
    ) -> Self {
        Self::new(
            self.original_background.clone(),
            outer_shadows,
            self.css_background.clone(),
            inner_shadows,
            self.ripple.clone(),
        )
    }

    /// Returns a new composite with the ripple replaced and the stack
    /// rebuilt. The receiver is unchanged.
    #[must_use]
    pub fn with_ripple(&self, ripple: Option<Rc<dyn Drawable<S>>>) -> Self {
        Self::new(
            self.original_background.clone(),
            self.outer_shadows.clone(),
            self.css_background.clone(),
            self.inner_shadows.clone(),
            ripple,
        )
    }

    // -- Input accessors --

    /// Returns the background the view carried before composition, if any.
    #[must_use]
    pub fn original_background(&self) -> Option<&Rc<dyn Drawable<S>>> {
        self.original_background.as_ref()
    }

    /// Returns the outer box-shadows in CSS source order.
    #[must_use]
    pub fn outer_shadows(&self) -> &[Rc<dyn Drawable<S>>] {
        &self.outer_shadows
    }

    /// Returns the CSS background/border layer, if any.
    #[must_use]
    pub fn css_background(&self) -> Option<&Rc<dyn Drawable<S>>> {
        self.css_background.as_ref()
    }

    /// Returns the inner box-shadows in CSS source order.
    #[must_use]
    pub fn inner_shadows(&self) -> &[Rc<dyn Drawable<S>>] {
        &self.inner_shadows
    }

    /// Returns the ripple effect, if any.
    #[must_use]
    pub fn ripple(&self) -> Option<&Rc<dyn Drawable<S>>> {
        self.ripple.as_ref()
    }

    /// Returns the realized layer stack, in paint order.
    #[must_use]
    pub fn stack(&self) -> &LayerStack<S> {
        &self.stack
    }
}

impl<S: ?Sized> Clone for CompositeBackground<S> {
    fn clone(&self) -> Self {
        Self {
            original_background: self.original_background.clone(),
            outer_shadows: self.outer_shadows.clone(),
            css_background: self.css_background.clone(),
            inner_shadows: self.inner_shadows.clone(),
            ripple: self.ripple.clone(),
            stack: self.stack.clone(),
        }
    }
}

impl<S: ?Sized> fmt::Debug for CompositeBackground<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeBackground")
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}
