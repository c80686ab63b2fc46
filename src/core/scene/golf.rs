//=========================================================================
// Golf Course
//=========================================================================
//
// Reference `PhysicsScene`: a walled putting lane with a ball and a red
// target square.
//
// Layout (top view, Y up, ball putts towards -Z):
// ```text
//   z = -40  ┌──────────────┐
//            │  [B]    [A]  │   target alternates A ↔ B
//            │              │
//            │      ●       │   ball starts at the tee
//   z =  +4  └──────────────┘
//          x = -8        x = +8
// ```
//
// Simulation is a point-mass integrator: rolling damping, wall bounces
// with restitution, no spin and no actor-actor collisions. The game is
// won when the ball comes to rest over the target.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::{Actor, ActorKind, DebugBuffer, PhysicsScene, Shape};

//=== Course Constants ====================================================

const BALL_RADIUS: f32 = 0.5;
const TEE: Vec3 = Vec3::new(0.0, BALL_RADIUS, 0.0);
const PUTT_DIRECTION: Vec3 = Vec3::NEG_Z;

const LANE_MIN_X: f32 = -8.0;
const LANE_MAX_X: f32 = 8.0;
const LANE_MIN_Z: f32 = -40.0;
const LANE_MAX_Z: f32 = 4.0;
const WALL_HALF_THICKNESS: f32 = 0.5;
const WALL_HALF_HEIGHT: f32 = 1.0;

const TARGET_HALF_EXTENTS: Vec3 = Vec3::new(2.0, 0.05, 2.0);
const TARGET_POSITIONS: [Vec3; 2] = [Vec3::new(3.0, 0.05, -22.0), Vec3::new(-3.0, 0.05, -32.0)];

/// Velocity gained per unit of force on a push.
const IMPULSE_PER_FORCE: f32 = 10.0;
/// Fraction of velocity lost per second while rolling.
const ROLLING_DAMPING: f32 = 0.8;
/// Fraction of normal velocity kept after hitting a wall.
const RESTITUTION: f32 = 0.6;
/// Below this speed the ball is considered at rest.
const REST_SPEED: f32 = 0.05;

const GROUND_COLOR: Vec3 = Vec3::new(0.3, 0.6, 0.3);
const WALL_COLOR: Vec3 = Vec3::new(0.55, 0.35, 0.2);
const BALL_COLOR: Vec3 = Vec3::new(0.95, 0.95, 0.95);
const TARGET_COLOR: Vec3 = Vec3::new(0.9, 0.1, 0.1);
const VELOCITY_COLOR: Vec3 = Vec3::new(0.1, 0.1, 0.9);

//=== GolfCourse ==========================================================

/// Walled putting lane implementing [`PhysicsScene`].
#[derive(Debug, Clone)]
pub struct GolfCourse {
    ball_position: Vec3,
    ball_velocity: Vec3,
    target_slot: usize,
    force: f32,
    paused: bool,
    won: bool,
    selected: Option<usize>,
}

impl GolfCourse {
    pub fn new() -> Self {
        Self {
            ball_position: TEE,
            ball_velocity: Vec3::ZERO,
            target_slot: 0,
            force: 0.0,
            paused: false,
            won: false,
            selected: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn ball_position(&self) -> Vec3 {
        self.ball_position
    }

    pub fn ball_velocity(&self) -> Vec3 {
        self.ball_velocity
    }

    pub fn target_position(&self) -> Vec3 {
        TARGET_POSITIONS[self.target_slot]
    }

    /// Index into [`actors`](PhysicsScene::actors) of the highlighted actor.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    //--- Internal Helpers -------------------------------------------------

    fn ball_at_rest(&self) -> bool {
        self.ball_velocity.length() < REST_SPEED
    }

    fn ball_over_target(&self) -> bool {
        let offset = (self.ball_position - self.target_position()).abs();
        offset.x <= TARGET_HALF_EXTENTS.x && offset.z <= TARGET_HALF_EXTENTS.z
    }

    fn bounce_off_walls(&mut self) {
        let p = &mut self.ball_position;
        let v = &mut self.ball_velocity;

        if p.x - BALL_RADIUS < LANE_MIN_X {
            p.x = LANE_MIN_X + BALL_RADIUS;
            v.x = -v.x * RESTITUTION;
        } else if p.x + BALL_RADIUS > LANE_MAX_X {
            p.x = LANE_MAX_X - BALL_RADIUS;
            v.x = -v.x * RESTITUTION;
        }

        if p.z - BALL_RADIUS < LANE_MIN_Z {
            p.z = LANE_MIN_Z + BALL_RADIUS;
            v.z = -v.z * RESTITUTION;
        } else if p.z + BALL_RADIUS > LANE_MAX_Z {
            p.z = LANE_MAX_Z - BALL_RADIUS;
            v.z = -v.z * RESTITUTION;
        }
    }

    fn walls() -> [(Vec3, Vec3); 4] {
        let center_x = (LANE_MIN_X + LANE_MAX_X) / 2.0;
        let center_z = (LANE_MIN_Z + LANE_MAX_Z) / 2.0;
        let half_x = (LANE_MAX_X - LANE_MIN_X) / 2.0 + 2.0 * WALL_HALF_THICKNESS;
        let half_z = (LANE_MAX_Z - LANE_MIN_Z) / 2.0;

        [
            (
                Vec3::new(LANE_MIN_X - WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, center_z),
                Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, half_z),
            ),
            (
                Vec3::new(LANE_MAX_X + WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, center_z),
                Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, half_z),
            ),
            (
                Vec3::new(center_x, WALL_HALF_HEIGHT, LANE_MIN_Z - WALL_HALF_THICKNESS),
                Vec3::new(half_x, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
            ),
            (
                Vec3::new(center_x, WALL_HALF_HEIGHT, LANE_MAX_Z + WALL_HALF_THICKNESS),
                Vec3::new(half_x, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
            ),
        ]
    }
}

impl Default for GolfCourse {
    fn default() -> Self {
        Self::new()
    }
}

//=== PhysicsScene Implementation =========================================

impl PhysicsScene for GolfCourse {
    fn init(&mut self) {
        self.ball_position = TEE;
        self.ball_velocity = Vec3::ZERO;
        info!(
            target: "scene",
            "Golf course ready: {} actors, target at {:?}",
            self.actors().len(),
            self.target_position()
        );
    }

    fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        let damping = (1.0 - ROLLING_DAMPING * dt).max(0.0);
        self.ball_velocity *= damping;
        if self.ball_at_rest() {
            self.ball_velocity = Vec3::ZERO;
        }

        self.ball_position += self.ball_velocity * dt;
        self.bounce_off_walls();

        if !self.won && self.ball_at_rest() && self.ball_over_target() {
            self.won = true;
            info!(target: "scene", "Ball came to rest on the target");
        }

        trace!(
            target: "scene",
            "Ball at {:?}, velocity {:?}",
            self.ball_position,
            self.ball_velocity
        );
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        debug!(target: "scene", "Paused: {}", paused);
        self.paused = paused;
    }

    fn actors(&self) -> Vec<Actor> {
        let mut actors = Vec::with_capacity(7);

        actors.push(Actor {
            id: 0,
            kind: ActorKind::Ground,
            shape: Shape::Plane,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            color: GROUND_COLOR,
            selected: false,
        });

        for (position, half_extents) in Self::walls() {
            actors.push(Actor {
                id: actors.len(),
                kind: ActorKind::Wall,
                shape: Shape::Box { half_extents },
                position,
                velocity: Vec3::ZERO,
                color: WALL_COLOR,
                selected: false,
            });
        }

        actors.push(Actor {
            id: actors.len(),
            kind: ActorKind::Target,
            shape: Shape::Box { half_extents: TARGET_HALF_EXTENTS },
            position: self.target_position(),
            velocity: Vec3::ZERO,
            color: TARGET_COLOR,
            selected: false,
        });

        actors.push(Actor {
            id: actors.len(),
            kind: ActorKind::Ball,
            shape: Shape::Sphere { radius: BALL_RADIUS },
            position: self.ball_position,
            velocity: self.ball_velocity,
            color: BALL_COLOR,
            selected: false,
        });

        if let Some(actor) = self.selected.and_then(|index| actors.get_mut(index)) {
            actor.selected = true;
        }

        actors
    }

    fn debug_buffer(&self) -> DebugBuffer {
        let mut buffer = DebugBuffer::new();

        for actor in self.actors() {
            if let Some((min, max)) = actor.bounds() {
                buffer.push_aabb(min, max, actor.color);
            }
        }

        if self.ball_velocity != Vec3::ZERO {
            buffer.push_line(
                self.ball_position,
                self.ball_position + self.ball_velocity,
                VELOCITY_COLOR,
            );
        }

        buffer
    }

    fn force(&self) -> f32 {
        self.force
    }

    fn set_force(&mut self, force: f32) {
        self.force = force;
    }

    fn push(&mut self) {
        let impulse = PUTT_DIRECTION * self.force * IMPULSE_PER_FORCE;
        self.ball_velocity += impulse;
        debug!(target: "scene", "Ball pushed with force {:.2}", self.force);
    }

    fn has_won(&self) -> bool {
        self.won
    }

    fn set_won(&mut self, won: bool) {
        self.won = won;
    }

    fn switch_target_position(&mut self) {
        self.target_slot = (self.target_slot + 1) % TARGET_POSITIONS.len();
        debug!(target: "scene", "Target moved to {:?}", self.target_position());
    }

    fn reset(&mut self) {
        self.ball_position = TEE;
        self.ball_velocity = Vec3::ZERO;
        info!(target: "scene", "Scene reset");
    }

    fn select_next_actor(&mut self) {
        // Ground (index 0) is never highlighted.
        let count = self.actors().len();
        self.selected = match self.selected {
            Some(index) if index + 1 < count => Some(index + 1),
            _ => Some(1),
        };
        debug!(target: "scene", "Selected actor {:?}", self.selected);
    }

    fn release(&mut self) {
        info!(target: "scene", "Golf course released");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
