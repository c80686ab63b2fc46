//=========================================================================
// Physics Scene
//=========================================================================
//
// Contract between the visual debugger and the physics simulation.
//
// The debugger never simulates anything itself; it steps the scene once
// per frame, forwards gameplay input (force, push, reset, pause) and reads
// back actors and debug geometry for drawing.
//
// Architecture:
//   VisualDebugger ──update(dt)──► PhysicsScene
//                  ◄──actors()───
//                  ◄──debug_buffer()
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Module Declarations =================================================

mod golf;

//=== Public API ==========================================================

pub use golf::GolfCourse;

//=== Actor ===============================================================

/// Collision shape of an actor, in local space around its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
    Plane,
}

/// Role an actor plays on the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Ground,
    Wall,
    Ball,
    Target,
}

/// Snapshot of one rigid actor for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: usize,
    pub kind: ActorKind,
    pub shape: Shape,
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: Vec3,
    pub selected: bool,
}

impl Actor {
    /// Axis-aligned bounds as `(min, max)`. Planes have no finite bounds.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        match self.shape {
            Shape::Sphere { radius } => {
                Some((self.position - Vec3::splat(radius), self.position + Vec3::splat(radius)))
            }
            Shape::Box { half_extents } => {
                Some((self.position - half_extents, self.position + half_extents))
            }
            Shape::Plane => None,
        }
    }
}

//=== Debug Geometry ======================================================

/// Colored segment emitted by the scene for the debug render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Vec3,
}

/// Debug geometry for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugBuffer {
    pub lines: Vec<DebugLine>,
}

impl DebugBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, start: Vec3, end: Vec3, color: Vec3) {
        self.lines.push(DebugLine { start, end, color });
    }

    /// Adds the twelve edges of the box spanning `min..max`.
    pub fn push_aabb(&mut self, min: Vec3, max: Vec3, color: Vec3) {
        let corner = |x: bool, y: bool, z: bool| {
            Vec3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };

        for a in [false, true] {
            for b in [false, true] {
                self.push_line(corner(false, a, b), corner(true, a, b), color);
                self.push_line(corner(a, false, b), corner(a, true, b), color);
                self.push_line(corner(a, b, false), corner(a, b, true), color);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

//=== PhysicsScene Trait ==================================================

/// Physics simulation driven by the visual debugger.
///
/// Implementations must be `Send`: the debugger runs on the logic thread.
/// All methods are called from that one thread, one at a time.
pub trait PhysicsScene: Send {
    /// Builds the initial actors. Called once before the first frame.
    fn init(&mut self);

    /// Advances the simulation by `dt` seconds. No-op while paused.
    fn update(&mut self, dt: f32);

    fn paused(&self) -> bool;

    fn set_paused(&mut self, paused: bool);

    /// Current actors, in a stable order.
    fn actors(&self) -> Vec<Actor>;

    /// Debug geometry for the current state.
    fn debug_buffer(&self) -> DebugBuffer;

    /// Magnitude applied by the next `push`.
    fn force(&self) -> f32;

    fn set_force(&mut self, force: f32);

    /// Strikes the ball with the current force.
    fn push(&mut self);

    fn has_won(&self) -> bool;

    fn set_won(&mut self, won: bool);

    /// Moves the target to its alternate position.
    fn switch_target_position(&mut self);

    /// Rebuilds the actors in their start state.
    fn reset(&mut self);

    /// Moves the selection highlight to the next actor.
    fn select_next_actor(&mut self);

    /// Releases simulation resources at shutdown.
    fn release(&mut self) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
