// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable layer-stack output.
//!
//! [`StackPrinter`] writes one line per realized layer plus a summary line to
//! a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use backdrop_core::composite::CompositeBackground;
use backdrop_core::padding::PaddingMode;
use backdrop_core::stack::LayerStack;
use kurbo::Insets;

/// Writes human-readable stack lines to a [`Write`](std::io::Write) destination.
pub struct StackPrinter<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for StackPrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackPrinter").finish_non_exhaustive()
    }
}

impl StackPrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a printer that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> StackPrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one summary line for the stack and one line per layer.
    pub fn print_stack<S: ?Sized>(&mut self, stack: &LayerStack<S>) {
        let _ = writeln!(
            self.writer,
            "[stack] layers={} mode={} padding={}",
            stack.len(),
            mode_name(stack.padding_mode()),
            insets(stack.padding()),
        );
        for (i, entry) in stack.layers().iter().enumerate() {
            let _ = writeln!(
                self.writer,
                "[layer] #{i} role={} padding={}",
                entry.role().name(),
                insets(entry.drawable().intrinsic_padding()),
            );
        }
    }

    /// Writes the composite's input counts followed by its realized stack.
    pub fn print_composite<S: ?Sized>(&mut self, composite: &CompositeBackground<S>) {
        let _ = writeln!(
            self.writer,
            "[composite] original={} outer={} css={} inner={} ripple={}",
            composite.original_background().is_some(),
            composite.outer_shadows().len(),
            composite.css_background().is_some(),
            composite.inner_shadows().len(),
            composite.ripple().is_some(),
        );
        self.print_stack(composite.stack());
    }
}

fn mode_name(mode: PaddingMode) -> &'static str {
    match mode {
        PaddingMode::Overlay => "overlay",
        PaddingMode::Nest => "nest",
    }
}

fn insets(v: Insets) -> String {
    format!("(l={} t={} r={} b={})", v.x0, v.y0, v.x1, v.y1)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use backdrop_core::drawable::Drawable;

    use super::*;

    struct Swatch;

    impl Drawable<()> for Swatch {
        fn draw(&self, _surface: &mut ()) {}

        fn intrinsic_padding(&self) -> Insets {
            Insets::uniform(2.0)
        }
    }

    fn swatch() -> Rc<dyn Drawable<()>> {
        Rc::new(Swatch)
    }

    #[test]
    fn prints_summary_and_layer_lines() {
        let composite =
            CompositeBackground::new(None, vec![swatch()], Some(swatch()), vec![], None);
        let mut printer = StackPrinter::with_writer(Vec::<u8>::new());
        printer.print_composite(&composite);
        let output = String::from_utf8(printer.writer).unwrap();
        assert!(output.contains("[composite]"), "got: {output}");
        assert!(output.contains("outer=1"), "got: {output}");
        assert!(output.contains("layers=2"), "got: {output}");
        assert!(output.contains("mode=overlay"), "got: {output}");
        assert!(output.contains("role=outer-shadow"), "got: {output}");
        assert!(output.contains("role=css-background"), "got: {output}");
    }

    #[test]
    fn prints_resolved_padding() {
        let composite =
            CompositeBackground::new(Some(swatch()), vec![], None, vec![], None);
        let mut printer = StackPrinter::with_writer(Vec::<u8>::new());
        printer.print_stack(composite.stack());
        let output = String::from_utf8(printer.writer).unwrap();
        assert!(output.contains("padding=(l=2 t=2 r=2 b=2)"), "got: {output}");
    }
}
