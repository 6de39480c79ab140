// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composes a sample view background and dumps its layer stack.
//!
//! The host surface here is a plain line log: each drawable appends what it
//! would paint. Run with `cargo run -p stack_dump`.

use std::rc::Rc;

use backdrop_core::composite::CompositeBackground;
use backdrop_core::drawable::Drawable;
use backdrop_debug::json::composite_to_json;
use backdrop_debug::pretty::StackPrinter;
use backdrop_render::PaintPass;
use kurbo::Insets;

/// The demo's host surface: a log of what would be painted.
type Log = Vec<String>;

/// A stand-in drawable that logs one line instead of rasterizing.
struct Logged {
    what: &'static str,
    padding: Insets,
}

impl Drawable<Log> for Logged {
    fn draw(&self, surface: &mut Log) {
        surface.push(format!("draw {}", self.what));
    }

    fn intrinsic_padding(&self) -> Insets {
        self.padding
    }
}

fn logged(what: &'static str) -> Rc<dyn Drawable<Log>> {
    Rc::new(Logged {
        what,
        padding: Insets::ZERO,
    })
}

fn logged_padded(what: &'static str, padding: Insets) -> Rc<dyn Drawable<Log>> {
    Rc::new(Logged { what, padding })
}

fn main() {
    // A text-input-like view: a platform style already set a padded
    // background, the stylesheet adds two outer shadows, a filled border box,
    // and touch feedback.
    let composite = CompositeBackground::new(
        Some(logged_padded(
            "platform edit-control background",
            Insets::uniform(6.0),
        )),
        vec![
            logged("shadow 0 2px crimson"),
            logged("shadow 0 8px gray"),
        ],
        Some(logged("css background + border")),
        vec![],
        Some(logged("ripple")),
    );

    let mut printer = StackPrinter::stderr();
    printer.print_composite(&composite);

    println!(
        "{}",
        serde_json::to_string_pretty(&composite_to_json(&composite)).expect("value serializes")
    );

    let pass = PaintPass::plan(composite.stack());
    let mut surface = Log::new();
    pass.paint(&mut surface);
    for line in &surface {
        println!("{line}");
    }

    // Style update: the stylesheet drops its shadows; everything else is
    // carried over and the old composite stays usable.
    let restyled = composite.with_shadows(vec![], vec![]);
    printer.print_composite(&restyled);
}
