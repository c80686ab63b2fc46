//=========================================================================
// Visual Debugger
//=========================================================================
//
// Per-frame glue between input, camera, HUD, renderer and physics scene.
//
// Frame pipeline (`process_frame`):
// ```text
//  input batches
//      ↓
//  StateTracker ── pressed ──► key_press / special_key   (Escape → Exit)
//      │          repeated ──► special_key               (arrows, F-keys)
//      │          released ──► key_release
//      │          drag     ──► camera.motion
//      ↓
//  frame()
//      ├─ key_hold            held W/S/A/D/Z/Q move the camera
//      ├─ renderer.start
//      ├─ debug / actors      per RenderMode
//      ├─ HUD select + render
//      ├─ HUD rebuild         force text refreshed
//      ├─ renderer.finish
//      └─ scene.update(dt)
// ```
//
// All state is owned here and touched only by the logic thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::config::DebuggerConfig;
use crate::core::hud::{self, Hud, HudScreen};
use crate::core::input::{InputEvent, KeyCode, StateTracker};
use crate::core::platform_bridge::TickControl;
use crate::core::render::{RenderMode, Renderer};
use crate::core::scene::PhysicsScene;

//=== VisualDebugger ======================================================

/// Owns the camera, HUD and key table, and drives a physics scene and a
/// renderer one frame at a time.
pub struct VisualDebugger<P: PhysicsScene, R: Renderer> {
    scene: P,
    renderer: R,
    camera: Camera,
    hud: Hud,
    input: StateTracker,
    render_mode: RenderMode,
    hud_visible: bool,
    force_text: String,
    delta_time: f32,
    force_step: f32,
}

impl<P: PhysicsScene, R: Renderer> VisualDebugger<P, R> {
    //--- Construction -----------------------------------------------------

    /// Initializes the scene, renderer, camera and HUD.
    pub fn new(config: &DebuggerConfig, mut scene: P, mut renderer: R) -> Self {
        scene.init();
        let force_text = hud::force_text(scene.force());

        renderer.init(&config.render);

        let camera = Camera::new(config.camera_eye, config.camera_dir, config.camera_speed);

        let mut hud = Hud::new();
        hud::populate(&mut hud, &force_text);

        info!(
            target: "debugger",
            "Visual debugger initialized (dt: {:.4}s, mode: {:?})",
            config.delta_time(),
            RenderMode::default()
        );

        Self {
            scene,
            renderer,
            camera,
            hud,
            input: StateTracker::new(),
            render_mode: RenderMode::default(),
            hud_visible: true,
            force_text,
            delta_time: config.delta_time(),
            force_step: config.force_step,
        }
    }

    //--- Frame Entry Point ------------------------------------------------

    /// Applies one frame of input batches, then renders and steps.
    ///
    /// Returns [`TickControl::Exit`] when Escape was pressed; the frame is
    /// not rendered in that case.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> TickControl {
        self.input.clear();
        for batch in batches {
            self.input.process_events(batch);
        }

        let pressed = self.input.keys_pressed().to_vec();
        for key in pressed {
            let control = if key.is_special() {
                self.special_key(key);
                TickControl::Continue
            } else {
                self.key_press(key)
            };
            if control == TickControl::Exit {
                return TickControl::Exit;
            }
        }

        let repeated = self.input.keys_repeated().to_vec();
        for key in repeated.into_iter().filter(|k| k.is_special()) {
            self.special_key(key);
        }

        let released = self.input.keys_released().to_vec();
        for key in released {
            self.key_release(key);
        }

        let (dx, dy) = self.input.drag_delta();
        self.mouse_drag(dx, dy);

        self.frame();
        TickControl::Continue
    }

    /// Renders the current state and performs one simulation step.
    pub fn frame(&mut self) {
        self.key_hold();

        self.renderer.start(self.camera.eye(), self.camera.dir());

        if self.render_mode.draws_debug() {
            let buffer = self.scene.debug_buffer();
            self.renderer.render_debug(&buffer);
        }

        if self.render_mode.draws_actors() {
            let actors = self.scene.actors();
            if !actors.is_empty() {
                self.renderer.render_actors(&actors);
            }
        }

        let screen = HudScreen::select(self.hud_visible, self.scene.paused(), self.scene.has_won());
        self.hud.set_active_screen(screen);
        self.renderer.render_hud(&self.hud.frame());

        self.force_text = hud::force_text(self.scene.force());
        self.hud.clear();
        hud::populate(&mut self.hud, &self.force_text);

        self.renderer.finish();

        self.scene.update(self.delta_time);
        trace!(target: "debugger", "Frame done, HUD {:?}", screen);
    }

    //--- Keyboard ---------------------------------------------------------

    /// Handles the first press of a regular key.
    pub fn key_press(&mut self, key: KeyCode) -> TickControl {
        match key {
            KeyCode::Escape => {
                info!(target: "debugger", "Escape pressed, exiting");
                TickControl::Exit
            }
            KeyCode::KeyR => {
                self.scene.push();
                TickControl::Continue
            }
            _ => TickControl::Continue,
        }
    }

    /// Handles a key release. No key binds a release action.
    pub fn key_release(&mut self, key: KeyCode) {
        trace!(target: "debugger", "Key released: {:?}", key);
    }

    /// Runs continuous actions for every held key.
    pub fn key_hold(&mut self) {
        let held: Vec<KeyCode> = self.input.keys_down().copied().collect();
        for key in held {
            self.camera_input(key);
        }
    }

    /// Handles arrow and function keys (fires on press and auto-repeat).
    pub fn special_key(&mut self, key: KeyCode) {
        match key {
            //--- Game controls --------------------------------------------
            KeyCode::ArrowUp => {
                self.scene.set_force(self.scene.force() + self.force_step);
            }
            KeyCode::ArrowDown => {
                self.scene.set_force(self.scene.force() - self.force_step);
            }

            //--- Display controls -----------------------------------------
            KeyCode::F5 => {
                self.hud_visible = !self.hud_visible;
                debug!(target: "debugger", "HUD visible: {}", self.hud_visible);
            }
            KeyCode::F6 => {
                let shadows = !self.renderer.shadows();
                self.renderer.set_shadows(shadows);
            }
            KeyCode::F7 => self.toggle_render_mode(),
            KeyCode::F8 => {
                self.camera.reset();
                debug!(target: "debugger", "Camera reset");
            }

            //--- Simulation controls --------------------------------------
            KeyCode::F9 => self.scene.select_next_actor(),
            KeyCode::F10 => {
                let paused = !self.scene.paused();
                self.scene.set_paused(paused);
            }
            KeyCode::F4 => {
                self.scene.set_force(0.0);
                self.scene.set_won(false);
                self.scene.switch_target_position();
                self.scene.reset();
            }
            _ => {}
        }
    }

    fn camera_input(&mut self, key: KeyCode) {
        let dt = self.delta_time;
        match key {
            KeyCode::KeyW => self.camera.move_forward(dt),
            KeyCode::KeyS => self.camera.move_backward(dt),
            KeyCode::KeyA => self.camera.move_left(dt),
            KeyCode::KeyD => self.camera.move_right(dt),
            KeyCode::KeyZ => self.camera.move_up(dt),
            KeyCode::KeyQ => self.camera.move_down(dt),
            _ => {}
        }
    }

    /// Forgets every held key and button, e.g. after focus loss.
    pub fn release_input(&mut self) {
        self.input.release_all();
        debug!(target: "debugger", "Held input released");
    }

    //--- Mouse ------------------------------------------------------------

    /// Rotates the camera by a drag of `(dx, dy)` pixels (`last - new`).
    pub fn mouse_drag(&mut self, dx: f32, dy: f32) {
        self.camera.motion(dx, dy, self.delta_time);
    }

    //--- Render Mode ------------------------------------------------------

    pub fn toggle_render_mode(&mut self) {
        self.render_mode = self.render_mode.toggle();
        debug!(target: "debugger", "Render mode: {:?}", self.render_mode);
    }

    //--- Shutdown ---------------------------------------------------------

    /// Releases the scene. Called once when the logic thread exits.
    pub fn shutdown(&mut self) {
        self.scene.release();
        info!(target: "debugger", "Visual debugger shut down");
    }

    //--- Accessors --------------------------------------------------------

    pub fn scene(&self) -> &P {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    pub fn force_text(&self) -> &str {
        &self.force_text
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hud::HudFrame;
    use crate::core::input::{Modifiers, MouseButton};
    use crate::core::render::{RenderSettings, TraceRenderer};
    use crate::core::scene::{Actor, DebugBuffer, GolfCourse};
    use glam::Vec3;

    //--- Test Helpers -----------------------------------------------------

    type Debugger = VisualDebugger<GolfCourse, TraceRenderer>;

    fn debugger() -> Debugger {
        VisualDebugger::new(&DebuggerConfig::default(), GolfCourse::new(), TraceRenderer::new())
    }

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::key_down(key)
    }

    fn repeat(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE, repeat: true }
    }

    fn release(key: KeyCode) -> InputEvent {
        InputEvent::key_up(key)
    }

    fn button_down(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE, x, y }
    }

    fn tap(debugger: &mut Debugger, key: KeyCode) -> TickControl {
        let control = debugger.process_frame(&[vec![press(key)]]);
        debugger.process_frame(&[vec![release(key)]]);
        control
    }

    /// Records the order of renderer calls.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<&'static str>,
        shadows: bool,
    }

    impl Renderer for CallLog {
        fn init(&mut self, _settings: &RenderSettings) {
            self.calls.push("init");
        }
        fn start(&mut self, _eye: Vec3, _dir: Vec3) {
            self.calls.push("start");
        }
        fn render_debug(&mut self, _buffer: &DebugBuffer) {
            self.calls.push("debug");
        }
        fn render_actors(&mut self, _actors: &[Actor]) {
            self.calls.push("actors");
        }
        fn render_hud(&mut self, _hud: &HudFrame<'_>) {
            self.calls.push("hud");
        }
        fn finish(&mut self) {
            self.calls.push("finish");
        }
        fn shadows(&self) -> bool {
            self.shadows
        }
        fn set_shadows(&mut self, enabled: bool) {
            self.shadows = enabled;
        }
    }

    fn frame_calls(debugger: &mut VisualDebugger<GolfCourse, CallLog>) -> Vec<&'static str> {
        debugger.renderer.calls.clear();
        debugger.frame();
        debugger.renderer.calls.clone()
    }

    //=====================================================================
    // Initialization Tests
    //=====================================================================

    #[test]
    fn init_sets_defaults() {
        let debugger = debugger();

        assert_eq!(debugger.render_mode(), RenderMode::Normal);
        assert!(debugger.hud_visible());
        assert_eq!(debugger.force_text(), "Force: 0.000000");
        assert_eq!(debugger.camera().eye(), Vec3::new(0.0, 110.0, 15.0));
        assert!(debugger.renderer().settings().is_some());
    }

    //=====================================================================
    // Render Order Tests
    //=====================================================================

    #[test]
    fn normal_mode_draws_actors_only() {
        let mut debugger =
            VisualDebugger::new(&DebuggerConfig::default(), GolfCourse::new(), CallLog::default());
        assert_eq!(frame_calls(&mut debugger), vec!["start", "actors", "hud", "finish"]);
    }

    #[test]
    fn debug_mode_draws_debug_only() {
        let mut debugger =
            VisualDebugger::new(&DebuggerConfig::default(), GolfCourse::new(), CallLog::default());
        debugger.toggle_render_mode();
        assert_eq!(frame_calls(&mut debugger), vec!["start", "debug", "hud", "finish"]);
    }

    #[test]
    fn both_mode_draws_debug_then_actors() {
        let mut debugger =
            VisualDebugger::new(&DebuggerConfig::default(), GolfCourse::new(), CallLog::default());
        debugger.toggle_render_mode();
        debugger.toggle_render_mode();
        assert_eq!(
            frame_calls(&mut debugger),
            vec!["start", "debug", "actors", "hud", "finish"]
        );
    }

    #[test]
    fn f7_cycles_render_mode() {
        let mut debugger = debugger();

        tap(&mut debugger, KeyCode::F7);
        assert_eq!(debugger.render_mode(), RenderMode::Debug);
        tap(&mut debugger, KeyCode::F7);
        assert_eq!(debugger.render_mode(), RenderMode::Both);
        tap(&mut debugger, KeyCode::F7);
        assert_eq!(debugger.render_mode(), RenderMode::Normal);
    }

    //=====================================================================
    // HUD Tests
    //=====================================================================

    #[test]
    fn help_screen_shown_by_default() {
        let mut debugger = debugger();
        debugger.frame();
        assert_eq!(debugger.renderer().last_frame().hud_screen, Some(HudScreen::Help));
    }

    #[test]
    fn f5_hides_hud() {
        let mut debugger = debugger();
        tap(&mut debugger, KeyCode::F5);
        assert!(!debugger.hud_visible());
        assert_eq!(debugger.renderer().last_frame().hud_screen, Some(HudScreen::Empty));
    }

    #[test]
    fn f10_pauses_and_shows_pause_screen() {
        let mut debugger = debugger();
        tap(&mut debugger, KeyCode::F10);

        assert!(debugger.scene().paused());
        assert_eq!(debugger.renderer().last_frame().hud_screen, Some(HudScreen::Pause));

        tap(&mut debugger, KeyCode::F10);
        assert!(!debugger.scene().paused());
    }

    #[test]
    fn win_screen_overrides_hidden_hud() {
        let mut debugger = debugger();
        tap(&mut debugger, KeyCode::F5);
        debugger.scene.set_won(true);

        debugger.frame();

        assert_eq!(debugger.renderer().last_frame().hud_screen, Some(HudScreen::Win));
    }

    #[test]
    fn force_text_follows_scene_force() {
        let mut debugger = debugger();
        tap(&mut debugger, KeyCode::ArrowUp);

        assert_eq!(debugger.force_text(), "Force: 0.100000");
        assert!(debugger.hud().lines(HudScreen::Help)[0].ends_with("Force: 0.100000"));
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn escape_requests_exit() {
        let mut debugger = debugger();
        assert_eq!(tap(&mut debugger, KeyCode::Escape), TickControl::Exit);
    }

    #[test]
    fn escape_skips_rendering() {
        let mut debugger = debugger();
        debugger.process_frame(&[vec![press(KeyCode::Escape)]]);
        assert_eq!(debugger.renderer().frames(), 0);
    }

    #[test]
    fn arrow_keys_adjust_force_and_repeat() {
        let mut debugger = debugger();

        debugger.process_frame(&[vec![press(KeyCode::ArrowUp)]]);
        debugger.process_frame(&[vec![repeat(KeyCode::ArrowUp)]]);
        debugger.process_frame(&[vec![repeat(KeyCode::ArrowUp)]]);
        debugger.process_frame(&[vec![release(KeyCode::ArrowUp)]]);
        assert!((debugger.scene().force() - 0.3).abs() < 1e-5);

        tap(&mut debugger, KeyCode::ArrowDown);
        assert!((debugger.scene().force() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn every_repeat_in_one_frame_steps_force() {
        let mut debugger = debugger();

        debugger.process_frame(&[vec![
            press(KeyCode::ArrowUp),
            repeat(KeyCode::ArrowUp),
            repeat(KeyCode::ArrowUp),
        ]]);

        assert!((debugger.scene().force() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn release_input_stops_held_keys() {
        let mut debugger = debugger();
        debugger.process_frame(&[vec![press(KeyCode::KeyW)]]);

        debugger.release_input();
        let eye = debugger.camera().eye();
        debugger.process_frame(&[]);

        assert_eq!(debugger.camera().eye(), eye);
    }

    #[test]
    fn regular_key_fires_once_while_held() {
        let mut debugger = debugger();
        debugger.scene.set_force(1.0);

        debugger.process_frame(&[vec![press(KeyCode::KeyR)]]);
        let after_first = debugger.scene().ball_velocity();

        debugger.process_frame(&[vec![repeat(KeyCode::KeyR)]]);
        debugger.process_frame(&[vec![press(KeyCode::KeyR)]]);

        // Only damping acts after the first push.
        assert!(debugger.scene().ball_velocity().length() < after_first.length());
    }

    #[test]
    fn r_pushes_ball() {
        let mut debugger = debugger();
        debugger.scene.set_force(1.0);

        tap(&mut debugger, KeyCode::KeyR);

        assert!(debugger.scene().ball_velocity().z < 0.0);
    }

    #[test]
    fn f4_resets_game() {
        let mut debugger = debugger();
        let target = debugger.scene().target_position();
        debugger.scene.set_force(2.0);
        debugger.scene.set_won(true);

        tap(&mut debugger, KeyCode::F4);

        assert_eq!(debugger.scene().force(), 0.0);
        assert!(!debugger.scene().has_won());
        assert_ne!(debugger.scene().target_position(), target);
    }

    #[test]
    fn f6_toggles_shadows() {
        let mut debugger = debugger();
        assert!(debugger.renderer().shadows());
        tap(&mut debugger, KeyCode::F6);
        assert!(!debugger.renderer().shadows());
    }

    #[test]
    fn f9_selects_next_actor() {
        let mut debugger = debugger();
        tap(&mut debugger, KeyCode::F9);
        assert_eq!(debugger.scene().selected(), Some(1));
    }

    //=====================================================================
    // Camera Tests
    //=====================================================================

    #[test]
    fn held_w_moves_camera_every_frame() {
        let mut debugger = debugger();
        let start = debugger.camera().eye();

        debugger.process_frame(&[vec![press(KeyCode::KeyW)]]);
        let after_one = debugger.camera().eye();
        debugger.process_frame(&[]);
        let after_two = debugger.camera().eye();

        assert_ne!(after_one, start);
        assert!((after_two - start).length() > (after_one - start).length());
    }

    #[test]
    fn released_key_stops_camera() {
        let mut debugger = debugger();
        debugger.process_frame(&[vec![press(KeyCode::KeyZ)]]);
        debugger.process_frame(&[vec![release(KeyCode::KeyZ)]]);
        let eye = debugger.camera().eye();

        debugger.process_frame(&[]);

        assert_eq!(debugger.camera().eye(), eye);
    }

    #[test]
    fn f8_resets_camera() {
        let mut debugger = debugger();
        debugger.process_frame(&[vec![press(KeyCode::KeyD)]]);
        debugger.process_frame(&[vec![release(KeyCode::KeyD)]]);

        tap(&mut debugger, KeyCode::F8);

        assert_eq!(debugger.camera().eye(), Vec3::new(0.0, 110.0, 15.0));
    }

    #[test]
    fn mouse_drag_rotates_camera_hover_does_not() {
        let mut debugger = debugger();
        let dir = debugger.camera().dir();

        debugger.process_frame(&[vec![InputEvent::MouseMoved { x: 50.0, y: 50.0 }]]);
        assert_eq!(debugger.camera().dir(), dir);

        debugger.process_frame(&[
            vec![button_down(50.0, 50.0)],
            vec![InputEvent::MouseMoved { x: 80.0, y: 50.0 }],
        ]);
        assert_ne!(debugger.camera().dir(), dir);
    }

    #[test]
    fn click_after_hover_in_one_frame_does_not_rotate() {
        let mut debugger = debugger();
        let dir = debugger.camera().dir();

        // Batches arrive discrete first, so the press precedes the motion
        // that led up to it.
        debugger.process_frame(&[
            vec![button_down(400.0, 300.0)],
            vec![InputEvent::MouseMoved { x: 400.0, y: 300.0 }],
        ]);

        assert_eq!(debugger.camera().dir(), dir);
    }

    #[test]
    fn drag_released_in_same_frame_still_rotates() {
        let mut debugger = debugger();
        debugger.process_frame(&[vec![button_down(0.0, 0.0)]]);
        let dir = debugger.camera().dir();

        debugger.process_frame(&[
            vec![InputEvent::MouseButtonUp {
                button: MouseButton::Left,
                modifiers: Modifiers::NONE,
                x: 200.0,
                y: 0.0,
            }],
            vec![InputEvent::MouseMoved { x: 200.0, y: 0.0 }],
        ]);

        assert_ne!(debugger.camera().dir(), dir);
    }

    //=====================================================================
    // Simulation Tests
    //=====================================================================

    #[test]
    fn frame_steps_scene() {
        let mut debugger = debugger();
        debugger.scene.set_force(1.0);
        debugger.scene.push();

        debugger.frame();

        assert!(debugger.scene().ball_position().z < 0.0);
    }
}
