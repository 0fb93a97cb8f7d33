//! Line drawing demo.
//!
//! Opens one window, clears it to yellow, and draws a single line segment
//! from the viewport center to 100px up-right of it. Escape or closing the
//! window exits.

use anyhow::Result;
use winit::dpi::LogicalSize;

use strake_engine::core::{App, AppControl, FrameCtx};
use strake_engine::coords::ColorRgba;
use strake_engine::device::GpuInit;
use strake_engine::input::{InputState, Key};
use strake_engine::logging::{init_logging, LoggingConfig};
use strake_engine::render::{LineRenderer, LineVertex};
use strake_engine::window::{Runtime, RuntimeConfig};

/// The one segment this demo draws, in pixel units.
const SEGMENT: [LineVertex; 2] = [
    LineVertex::new(0.0, 0.0, 0.0),
    LineVertex::new(100.0, 100.0, 0.0),
];

/// Opaque yellow backdrop.
const BACKGROUND: ColorRgba = ColorRgba::new(1.0, 1.0, 0.0, 1.0);

struct LineApp {
    line: LineRenderer,
}

impl LineApp {
    fn new() -> Self {
        Self {
            line: LineRenderer::new(SEGMENT),
        }
    }

    fn wants_exit(input: &InputState) -> bool {
        input.key_down(Key::Escape)
    }
}

impl App for LineApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if Self::wants_exit(ctx.input) {
            return AppControl::Exit;
        }

        let line = &mut self.line;
        ctx.render(BACKGROUND, |rctx, target| {
            line.render(rctx, target);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("press Escape or close the window to exit");

    let config = RuntimeConfig {
        title: "Line Drawing".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), LineApp::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strake_engine::input::{InputEvent, KeyState};

    // ── fixed scene ─────────────────────────────────────────────────────────

    #[test]
    fn segment_endpoints_are_fixed() {
        assert_eq!(SEGMENT[0], LineVertex::new(0.0, 0.0, 0.0));
        assert_eq!(SEGMENT[1], LineVertex::new(100.0, 100.0, 0.0));
    }

    #[test]
    fn background_is_opaque_yellow() {
        assert_eq!(BACKGROUND.r, 1.0);
        assert_eq!(BACKGROUND.g, 1.0);
        assert_eq!(BACKGROUND.b, 0.0);
        assert_eq!(BACKGROUND.a, 1.0);
    }

    // ── exit policy ─────────────────────────────────────────────────────────

    #[test]
    fn escape_requests_exit() {
        let mut input = InputState::default();
        assert!(!LineApp::wants_exit(&input));

        input.apply_event(InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
        });
        assert!(LineApp::wants_exit(&input));
    }
}
