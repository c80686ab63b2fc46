//=========================================================================
// Rendering
//=========================================================================
//
// Render mode selection and the renderer contract.
//
// Per-frame call order issued by the debugger:
// ```text
// start(eye, dir)
//   [render_debug(buffer)]     Debug | Both
//   [render_actors(actors)]    Normal | Both, non-empty only
//   render_hud(frame)
// finish()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::hud::HudFrame;
use crate::core::scene::{Actor, DebugBuffer};

//=== Module Declarations =================================================

mod trace;

//=== Public API ==========================================================

pub use trace::{FrameStats, TraceRenderer};

//=== RenderMode ==========================================================

/// Which geometry is drawn each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Scene debug geometry only.
    Debug,

    /// Shaded actors only.
    #[default]
    Normal,

    /// Debug geometry over shaded actors.
    Both,
}

impl RenderMode {
    /// Next mode in the cycle `Normal → Debug → Both → Normal`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Normal => Self::Debug,
            Self::Debug => Self::Both,
            Self::Both => Self::Normal,
        }
    }

    pub fn draws_debug(self) -> bool {
        matches!(self, Self::Debug | Self::Both)
    }

    pub fn draws_actors(self) -> bool {
        matches!(self, Self::Normal | Self::Both)
    }
}

//=== RenderSettings ======================================================

/// Window and renderer setup passed once at init.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Vec3,
    /// Tessellation detail for curved shapes.
    pub detail: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: "Crazy Golf".to_string(),
            width: 800,
            height: 600,
            background: Vec3::splat(150.0 / 255.0),
            detail: 40,
        }
    }
}

//=== Renderer Trait ======================================================

/// Drawing backend driven by the visual debugger.
///
/// Must be `Send`: it is moved onto the logic thread with the debugger.
pub trait Renderer: Send {
    fn init(&mut self, settings: &RenderSettings);

    /// Begins a frame seen from `eye` looking along `dir`.
    fn start(&mut self, eye: Vec3, dir: Vec3);

    fn render_debug(&mut self, buffer: &DebugBuffer);

    fn render_actors(&mut self, actors: &[Actor]);

    fn render_hud(&mut self, hud: &HudFrame<'_>);

    fn finish(&mut self);

    fn shadows(&self) -> bool;

    fn set_shadows(&mut self, enabled: bool);
}

//=========================================================================
// Unit Tests
//=========================================================================
