// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint pass: an ordered sequence of draw steps for one layer stack.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Insets;

use backdrop_core::drawable::Drawable;
use backdrop_core::padding::PaddingMode;
use backdrop_core::stack::{LayerRole, LayerStack};

/// A single draw command in the paint pass.
///
/// Steps are produced bottom-most first, matching the stack's paint order.
pub struct PaintStep<S: ?Sized> {
    /// The logical input this layer came from.
    pub role: LayerRole,
    /// The layer to draw.
    pub drawable: Rc<dyn Drawable<S>>,
    /// Content inset the host applies before drawing this layer.
    ///
    /// Zero for every step of an [`Overlay`](PaddingMode::Overlay) stack;
    /// under [`Nest`](PaddingMode::Nest) it accumulates the padding consumed
    /// by the layers below.
    pub content_inset: Insets,
}

impl<S: ?Sized> Clone for PaintStep<S> {
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            drawable: Rc::clone(&self.drawable),
            content_inset: self.content_inset,
        }
    }
}

impl<S: ?Sized> fmt::Debug for PaintStep<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintStep")
            .field("role", &self.role)
            .field("content_inset", &self.content_inset)
            .finish_non_exhaustive()
    }
}

/// The ordered draw steps for a single layer stack.
///
/// Hosts translate this into their native per-layer cycle: offset by the
/// step's content inset, draw, restore.
pub struct PaintPass<S: ?Sized> {
    steps: Vec<PaintStep<S>>,
    padding: Insets,
}

impl<S: ?Sized> PaintPass<S> {
    /// Plans the paint pass for `stack`.
    #[must_use]
    pub fn plan(stack: &LayerStack<S>) -> Self {
        let mode = stack.padding_mode();
        let mut steps = Vec::with_capacity(stack.len());
        let mut consumed = Insets::ZERO;
        for entry in stack.layers() {
            let content_inset = match mode {
                PaddingMode::Overlay => Insets::ZERO,
                PaddingMode::Nest => consumed,
            };
            steps.push(PaintStep {
                role: entry.role(),
                drawable: Rc::clone(entry.drawable()),
                content_inset,
            });
            let p = entry.drawable().intrinsic_padding();
            consumed = Insets::new(
                consumed.x0 + p.x0,
                consumed.y0 + p.y0,
                consumed.x1 + p.x1,
                consumed.y1 + p.y1,
            );
        }
        Self {
            steps,
            padding: stack.padding(),
        }
    }

    /// Returns the draw steps, bottom-most first.
    #[must_use]
    pub fn steps(&self) -> &[PaintStep<S>] {
        &self.steps
    }

    /// Returns the stack's resolved intrinsic padding.
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Draws every step onto `surface`, bottom-most first.
    ///
    /// Steps are drawn without applying content insets, which is exact for
    /// [`Overlay`](PaddingMode::Overlay) stacks — the only kind the composer
    /// produces. A host painting a [`Nest`](PaddingMode::Nest) stack applies
    /// each step's [`content_inset`](PaintStep::content_inset) itself.
    pub fn paint(&self, surface: &mut S) {
        for step in &self.steps {
            step.drawable.draw(surface);
        }
    }
}

impl<S: ?Sized> Clone for PaintPass<S> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
            padding: self.padding,
        }
    }
}

impl<S: ?Sized> fmt::Debug for PaintPass<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintPass")
            .field("steps", &self.steps)
            .field("padding", &self.padding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use backdrop_core::composite::CompositeBackground;
    use backdrop_core::stack::StackEntry;

    use super::*;

    struct Label {
        name: &'static str,
        padding: Insets,
    }

    type Trace = Vec<&'static str>;

    impl Drawable<Trace> for Label {
        fn draw(&self, surface: &mut Trace) {
            surface.push(self.name);
        }

        fn intrinsic_padding(&self) -> Insets {
            self.padding
        }
    }

    fn label(name: &'static str) -> Rc<dyn Drawable<Trace>> {
        Rc::new(Label {
            name,
            padding: Insets::ZERO,
        })
    }

    fn padded(name: &'static str, padding: Insets) -> Rc<dyn Drawable<Trace>> {
        Rc::new(Label { name, padding })
    }

    #[test]
    fn steps_preserve_stack_order() {
        let composite = CompositeBackground::new(
            Some(label("original")),
            vec![label("o1"), label("o2")],
            Some(label("css")),
            vec![],
            Some(label("ripple")),
        );
        let pass = PaintPass::plan(composite.stack());
        let roles: Vec<_> = pass.steps().iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                LayerRole::OriginalBackground,
                LayerRole::OuterShadow,
                LayerRole::OuterShadow,
                LayerRole::CssBackground,
                LayerRole::Ripple,
            ]
        );
    }

    #[test]
    fn overlay_steps_have_zero_insets() {
        let composite = CompositeBackground::new(
            Some(padded("original", Insets::uniform(4.0))),
            vec![],
            Some(padded("css", Insets::uniform(2.0))),
            vec![],
            None,
        );
        let pass = PaintPass::plan(composite.stack());
        assert!(pass.steps().iter().all(|s| s.content_inset == Insets::ZERO));
        assert_eq!(pass.padding(), Insets::uniform(4.0));
    }

    #[test]
    fn nest_steps_accumulate_preceding_padding() {
        let stack = LayerStack::new(
            vec![
                StackEntry::new(
                    LayerRole::OriginalBackground,
                    padded("a", Insets::uniform(2.0)),
                ),
                StackEntry::new(LayerRole::CssBackground, padded("b", Insets::uniform(3.0))),
                StackEntry::new(LayerRole::Ripple, label("c")),
            ],
            PaddingMode::Nest,
        );
        let pass = PaintPass::plan(&stack);
        let insets: Vec<_> = pass.steps().iter().map(|s| s.content_inset).collect();
        assert_eq!(
            insets,
            vec![Insets::ZERO, Insets::uniform(2.0), Insets::uniform(5.0)]
        );
        assert_eq!(pass.padding(), Insets::uniform(5.0));
    }

    #[test]
    fn paint_draws_each_layer_once_in_order() {
        let composite = CompositeBackground::new(
            None,
            vec![label("o1"), label("o2")],
            Some(label("css")),
            vec![label("i1")],
            None,
        );
        let pass = PaintPass::plan(composite.stack());
        let mut surface = Trace::new();
        pass.paint(&mut surface);
        assert_eq!(surface, vec!["o2", "o1", "css", "i1"]);
    }

    #[test]
    fn empty_stack_plans_empty_pass() {
        let composite: CompositeBackground<Trace> =
            CompositeBackground::new(None, vec![], None, vec![], None);
        let pass = PaintPass::plan(composite.stack());
        assert!(pass.steps().is_empty());
        assert_eq!(pass.padding(), Insets::ZERO);
    }
}
