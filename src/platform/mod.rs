//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  VisualDebugger      │
//  │   ↓                      │    │   ├─ input/camera    │
//  │  InputBuffer             │    │   ├─ render + HUD    │
//  │   ↓                      │    │   └─ scene.update    │
//  │  RedrawRequested (flush) │    │                      │
//  │   ↓                      │    │                      │
//  │  crossbeam channel ──────┼───►│                      │
//  │                          │    │                      │
//  │  user_event(Shutdown) ◄──┼────┤  EventLoopProxy      │
//  └──────────────────────────┘    └──────────────────────┘
// ```
//
// Responsibilities:
// - Create and own the OS window
// - Convert winit types to engine InputEvents
// - Buffer input until the frame boundary and send it in one message
// - Leave the event loop on close request or debugger shutdown
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{CoreSignal, PlatformError, PlatformEvent};
use crate::core::render::RenderSettings;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Lives on the main thread (winit requirement on macOS/iOS); talks to
/// the logic thread only through `event_sender`.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    settings: RenderSettings,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, settings: RenderSettings) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    /// Creates the event loop that carries [`CoreSignal`]s.
    ///
    /// Separate from `run` so the caller can hand a proxy to the logic
    /// thread before the loop starts.
    pub(crate) fn create_event_loop() -> Result<EventLoop<CoreSignal>, PlatformError> {
        EventLoop::<CoreSignal>::with_user_event()
            .build()
            .map_err(PlatformError::EventLoopCreation)
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the debugger exits.
    pub(crate) fn run(mut self, event_loop: EventLoop<CoreSignal>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the logic thread.
    ///
    /// Returns `false` once the logic thread has hung up; the events are
    /// dropped in that case.
    fn flush_input_buffer(&mut self) -> bool {
        let pending = self.buffer.len();
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return true;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                pending
            );
            return false;
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== winit Integration ===================================================

impl ApplicationHandler<CoreSignal> for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, signal: CoreSignal) {
        match signal {
            CoreSignal::Shutdown => {
                info!(target: "platform", "Debugger requested shutdown");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform", "Window lost focus");
                // Input buffered before the focus change must arrive first
                if !self.flush_input_buffer()
                    || self.event_sender.send(PlatformEvent::FocusLost).is_err()
                {
                    event_loop.exit();
                }
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                if !self.flush_input_buffer() {
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
