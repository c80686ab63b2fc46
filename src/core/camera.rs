//=========================================================================
// Camera
//=========================================================================
//
// Free-fly camera driven by held keys and mouse drags.
//
// Movement is expressed in the camera frame:
// - forward/backward along the view direction
// - left/right along the side axis (dir × world-up)
// - up/down along world up
//
// Mouse drags yaw around world up and pitch around the side axis. The
// rotation angle is `dx * speed * dt` degrees, so a faster camera also
// turns faster. Pitch stops just short of straight up or down, so the
// view never flips over the pole.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};

//=== Constants ===========================================================

/// Pitch limit in radians (89.5°).
const MAX_PITCH: f32 = 89.5 * std::f32::consts::PI / 180.0;

//=== Camera ==============================================================

/// Eye position plus unit view direction, resettable to the start pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    dir: Vec3,
    speed: f32,

    eye_init: Vec3,
    dir_init: Vec3,
    speed_init: f32,
}

impl Camera {
    /// Creates a camera at `eye` looking along `dir` (normalized here).
    pub fn new(eye: Vec3, dir: Vec3, speed: f32) -> Self {
        let dir = dir.normalize_or_zero();
        Self {
            eye,
            dir,
            speed,
            eye_init: eye,
            dir_init: dir,
            speed_init: speed,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn dir(&self) -> Vec3 {
        self.dir
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    //--- Reset ------------------------------------------------------------

    /// Restores the pose and speed given at construction.
    pub fn reset(&mut self) {
        self.eye = self.eye_init;
        self.dir = self.dir_init;
        self.speed = self.speed_init;
    }

    //--- Mouse Look -------------------------------------------------------

    /// Rotates the view direction by a mouse drag of `(dx, dy)` pixels.
    pub fn motion(&mut self, dx: f32, dy: f32, dt: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let scale = std::f32::consts::PI * self.speed * dt / 180.0;

        let yaw = Quat::from_axis_angle(Vec3::Y, dx * scale);
        let yawed = yaw * self.dir;

        // Heading is undefined when looking straight up or down
        let heading = Vec3::new(yawed.x, 0.0, yawed.z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);

        let pitch = yawed.y.clamp(-1.0, 1.0).asin() + dy * scale;
        let pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);

        self.dir = (heading * pitch.cos() + Vec3::Y * pitch.sin()).normalize_or_zero();
    }

    //--- Translation ------------------------------------------------------

    pub fn move_forward(&mut self, dt: f32) {
        self.eye += self.dir * self.speed * dt;
    }

    pub fn move_backward(&mut self, dt: f32) {
        self.eye -= self.dir * self.speed * dt;
    }

    pub fn move_left(&mut self, dt: f32) {
        self.eye -= self.side() * self.speed * dt;
    }

    pub fn move_right(&mut self, dt: f32) {
        self.eye += self.side() * self.speed * dt;
    }

    pub fn move_up(&mut self, dt: f32) {
        self.eye += Vec3::Y * self.speed * dt;
    }

    pub fn move_down(&mut self, dt: f32) {
        self.eye -= Vec3::Y * self.speed * dt;
    }

    //--- Internal Helpers -------------------------------------------------

    // Zero when looking straight up or down.
    fn side(&self) -> Vec3 {
        self.dir.cross(Vec3::Y).normalize_or_zero()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
