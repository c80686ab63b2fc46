//=========================================================================
// Debugger Configuration
//=========================================================================
//
// Plain configuration values for the visual debugger. Built through
// `DebuggerBuilder`, which validates each value as it is set.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::render::RenderSettings;

//=== DebuggerConfig ======================================================

/// Runtime configuration for [`crate::core::VisualDebugger`] and the
/// thread that drives it.
///
/// # Default Values
///
/// - **TPS**: 60.0 (dt = 1/60 s)
/// - **Channel capacity**: 128 platform messages
/// - **Camera**: eye (0, 110, 15), dir (0, -100, 1), speed 30
/// - **Force step**: 0.1 per Up/Down key event
#[derive(Debug, Clone, PartialEq)]
pub struct DebuggerConfig {
    pub render: RenderSettings,
    pub tps: f64,
    pub channel_capacity: usize,
    pub camera_eye: Vec3,
    pub camera_dir: Vec3,
    pub camera_speed: f32,
    pub force_step: f32,
}

impl DebuggerConfig {
    /// Fixed simulation step in seconds.
    pub fn delta_time(&self) -> f32 {
        (1.0 / self.tps) as f32
    }
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            tps: 60.0,
            channel_capacity: 128,
            camera_eye: Vec3::new(0.0, 110.0, 15.0),
            camera_dir: Vec3::new(0.0, -100.0, 1.0),
            camera_speed: 30.0,
            force_step: 0.1,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delta_time_is_one_sixtieth() {
        let config = DebuggerConfig::default();
        assert!((config.delta_time() - 1.0 / 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn delta_time_follows_tps() {
        let config = DebuggerConfig { tps: 120.0, ..DebuggerConfig::default() };
        assert!((config.delta_time() - 1.0 / 120.0).abs() < f32::EPSILON);
    }
}
