//=========================================================================
// Crazy Golf Debugger
//
// Main entry point and coordinator for the visual debugger.
//
// Architecture:
// ```text
//     DebuggerBuilder  ──build()──>  Debugger  ──run()──>  [Runtime]
//         │                             │
//         ├─ with_tps()                 ├─ spawns logic thread
//         ├─ with_window_size()         ├─ runs platform (main thread)
//         └─ with_camera() ...          └─ blocks until exit
// ```
//
//=========================================================================

//=== Standard Library ====================================================

use std::any::Any;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use glam::Vec3;
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{CoreSignal, PlatformError, PlatformEvent};
use crate::core::{
    DebuggerConfig, GolfCourse, LogicLoop, PhysicsScene, Renderer, TraceRenderer, VisualDebugger,
};
use crate::platform::Platform;

//=== DebuggerBuilder =====================================================

/// Builder for configuring and constructing a [`Debugger`].
///
/// # Default Values
///
/// - **Window**: "Crazy Golf", 800x600, grey background
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 messages
/// - **Camera**: eye (0, 110, 15), dir (0, -100, 1), speed 30
/// - **Force step**: 0.1
///
/// # Examples
///
/// ```no_run
/// use crazy_golf::DebuggerBuilder;
///
/// DebuggerBuilder::new()
///     .with_tps(120.0)
///     .with_window_size(1024, 768)
///     .build()
///     .run()
///     .expect("debugger failed");
/// ```
pub struct DebuggerBuilder {
    config: DebuggerConfig,
}

impl DebuggerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: DebuggerConfig::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.render.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.config.render.width = width;
        self.config.render.height = height;
        self
    }

    /// Sets the background color (RGB, 0..=1).
    pub fn with_background(mut self, color: Vec3) -> Self {
        self.config.render.background = color;
        self
    }

    /// Sets the tessellation detail for curved shapes.
    ///
    /// # Panics
    ///
    /// Panics if `detail == 0`.
    pub fn with_render_detail(mut self, detail: u32) -> Self {
        assert!(detail > 0, "Render detail must be positive");
        self.config.render.detail = detail;
        self
    }

    /// Sets the logic tick rate. The scene steps by `1 / tps` seconds
    /// each tick.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → logic communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets the initial camera pose and speed. F8 returns to this pose.
    ///
    /// # Panics
    ///
    /// Panics if `dir` is zero or `speed` is negative.
    pub fn with_camera(mut self, eye: Vec3, dir: Vec3, speed: f32) -> Self {
        assert!(dir != Vec3::ZERO, "Camera direction must be non-zero");
        assert!(speed >= 0.0, "Camera speed must be non-negative, got {}", speed);
        self.config.camera_eye = eye;
        self.config.camera_dir = dir;
        self.config.camera_speed = speed;
        self
    }

    /// Sets how much one Up/Down key event changes the putt force.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0.0`.
    pub fn with_force_step(mut self, step: f32) -> Self {
        assert!(step > 0.0, "Force step must be positive, got {}", step);
        self.config.force_step = step;
        self
    }

    /// Builds the debugger instance.
    pub fn build(self) -> Debugger {
        info!(
            "Building debugger (TPS: {}, channel: {}, window: {}x{})",
            self.config.tps,
            self.config.channel_capacity,
            self.config.render.width,
            self.config.render.height
        );
        Debugger { config: self.config }
    }
}

impl Default for DebuggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Debugger ============================================================

/// Crazy Golf visual debugger runtime.
///
/// # Architecture
///
/// ```text
/// Debugger (Main Thread)
///   ├─► LogicLoop (Logic Thread @ TPS)
///   │     └─► VisualDebugger: input, camera, render, scene step
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// platform → logic: crossbeam channel (PlatformEvent)
/// logic → platform: EventLoopProxy (CoreSignal)
/// ```
pub struct Debugger {
    config: DebuggerConfig,
}

impl Debugger {
    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    /// Runs the built-in golf course with the headless trace renderer.
    pub fn run(self) -> Result<(), PlatformError> {
        self.run_with(GolfCourse::new(), TraceRenderer::new())
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime with the given scene and renderer and blocks
    /// until the window is closed or Escape is pressed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the winit event loop and a proxy for shutdown signals
    /// 2. Creates the bounded channel for platform → logic communication
    /// 3. Spawns the logic thread running at the configured TPS
    /// 4. Runs the platform event loop (blocks here)
    /// 5. Joins the logic thread
    ///
    /// # Errors
    ///
    /// Fails if the event loop cannot be created or run, or if the logic
    /// thread panicked.
    pub fn run_with<P, R>(self, scene: P, renderer: R) -> Result<(), PlatformError>
    where
        P: PhysicsScene + 'static,
        R: Renderer + 'static,
    {
        info!("Starting debugger runtime (TPS: {})", self.config.tps);

        //--- 1. Event loop and shutdown proxy -----------------------------
        let event_loop = Platform::create_event_loop()?;
        let proxy = event_loop.create_proxy();

        //--- 2. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.config.channel_capacity);

        info!("Channel created (capacity: {})", self.config.channel_capacity);

        //--- 3. Spawn the logic thread ------------------------------------
        let debugger = VisualDebugger::new(&self.config, scene, renderer);
        let logic = LogicLoop::new(debugger, rx);
        let logic_handle = logic.spawn(self.config.tps, move || {
            if proxy.send_event(CoreSignal::Shutdown).is_err() {
                warn!("Event loop already closed, shutdown signal dropped");
            }
        });
        info!("Logic thread spawned");

        //--- 4. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.config.render.clone());
        info!("Platform initialized, entering event loop");

        let platform_result = platform.run(event_loop);
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 5. Cleanup: wait for the logic thread ------------------------
        // Platform dropped its sender, so the logic loop sees a
        // disconnect even if the window never reported a close.
        if let Err(payload) = logic_handle.join() {
            let message = panic_message(payload.as_ref());
            error!("Logic thread panicked: {}", message);
            return Err(PlatformError::LogicThreadPanicked(message));
        }

        info!("Debugger shutdown complete");
        platform_result
    }
}

//--- Helpers -------------------------------------------------------------

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
