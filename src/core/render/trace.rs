//=========================================================================
// Trace Renderer
//=========================================================================
//
// Headless `Renderer` that counts submissions and reports them through
// `log`. Used by the binary when no GPU backend is plugged in, and by
// tests that need to inspect what a frame drew.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{RenderSettings, Renderer};
use crate::core::hud::{HudFrame, HudScreen};
use crate::core::scene::{Actor, DebugBuffer};

//=== FrameStats ==========================================================

/// What the last completed frame submitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub eye: Vec3,
    pub dir: Vec3,
    pub debug_lines: usize,
    pub actors: usize,
    pub hud_screen: Option<HudScreen>,
    pub hud_lines: usize,
}

//=== TraceRenderer =======================================================

#[derive(Debug, Default)]
pub struct TraceRenderer {
    settings: Option<RenderSettings>,
    shadows: bool,
    in_frame: bool,
    frames: u64,
    current: FrameStats,
    last: FrameStats,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self {
            shadows: true,
            ..Self::default()
        }
    }

    /// Number of frames finished so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stats of the most recently finished frame.
    pub fn last_frame(&self) -> FrameStats {
        self.last
    }

    pub fn settings(&self) -> Option<&RenderSettings> {
        self.settings.as_ref()
    }
}

impl Renderer for TraceRenderer {
    fn init(&mut self, settings: &RenderSettings) {
        info!(
            target: "render",
            "Trace renderer: '{}' {}x{}, detail {}",
            settings.title,
            settings.width,
            settings.height,
            settings.detail
        );
        self.settings = Some(settings.clone());
    }

    fn start(&mut self, eye: Vec3, dir: Vec3) {
        if self.in_frame {
            warn!(target: "render", "start() called twice without finish()");
        }
        self.in_frame = true;
        self.current = FrameStats {
            eye,
            dir,
            ..FrameStats::default()
        };
    }

    fn render_debug(&mut self, buffer: &DebugBuffer) {
        self.current.debug_lines += buffer.len();
    }

    fn render_actors(&mut self, actors: &[Actor]) {
        self.current.actors += actors.len();
    }

    fn render_hud(&mut self, hud: &HudFrame<'_>) {
        self.current.hud_screen = Some(hud.screen);
        self.current.hud_lines = hud.lines.len();
    }

    fn finish(&mut self) {
        self.in_frame = false;
        self.frames += 1;
        self.last = self.current;

        trace!(
            target: "render",
            "Frame {}: {} debug lines, {} actors, HUD {:?}",
            self.frames,
            self.last.debug_lines,
            self.last.actors,
            self.last.hud_screen
        );
    }

    fn shadows(&self) -> bool {
        self.shadows
    }

    fn set_shadows(&mut self, enabled: bool) {
        debug!(target: "render", "Shadows: {}", enabled);
        self.shadows = enabled;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hud::Hud;

    #[test]
    fn new_renderer_has_shadows_enabled() {
        assert!(TraceRenderer::new().shadows());
    }

    #[test]
    fn finish_publishes_frame_stats() {
        let mut renderer = TraceRenderer::new();
        let mut buffer = DebugBuffer::new();
        buffer.push_line(Vec3::ZERO, Vec3::X, Vec3::ONE);

        renderer.start(Vec3::Y, Vec3::NEG_Y);
        renderer.render_debug(&buffer);
        renderer.finish();

        let stats = renderer.last_frame();
        assert_eq!(renderer.frames(), 1);
        assert_eq!(stats.eye, Vec3::Y);
        assert_eq!(stats.debug_lines, 1);
        assert_eq!(stats.actors, 0);
    }

    #[test]
    fn hud_screen_recorded() {
        let mut renderer = TraceRenderer::new();
        let mut hud = Hud::new();
        hud.add_line(HudScreen::Pause, "paused");
        hud.set_active_screen(HudScreen::Pause);

        renderer.start(Vec3::ZERO, Vec3::Z);
        renderer.render_hud(&hud.frame());
        renderer.finish();

        assert_eq!(renderer.last_frame().hud_screen, Some(HudScreen::Pause));
        assert_eq!(renderer.last_frame().hud_lines, 1);
    }

    #[test]
    fn start_resets_counts() {
        let mut renderer = TraceRenderer::new();
        let mut buffer = DebugBuffer::new();
        buffer.push_line(Vec3::ZERO, Vec3::X, Vec3::ONE);

        renderer.start(Vec3::ZERO, Vec3::Z);
        renderer.render_debug(&buffer);
        renderer.finish();

        renderer.start(Vec3::ZERO, Vec3::Z);
        renderer.finish();

        assert_eq!(renderer.last_frame().debug_lines, 0);
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn init_stores_settings() {
        let mut renderer = TraceRenderer::new();
        renderer.init(&RenderSettings::default());
        assert_eq!(renderer.settings().map(|s| s.detail), Some(40));
    }
}
