//=========================================================================
// State Tracker
//=========================================================================
//
// Key-state table and mouse tracking with per-frame deltas.
//
// Architecture:
//   InputEvent → process_events() → keys held / pressed / repeated → query
//
// Frame lifecycle: clear() → process_events() → query
//
// Button events carry the cursor position, so a press re-anchors the drag
// and a release finishes it even when the coalesced cursor motion of the
// same frame is applied after them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Tracks held keys and buttons across frames and the transitions that
/// happened during the current frame.
///
/// Presses are recorded in arrival order so handlers run in the order the
/// user typed. A key already down is never reported as pressed again
/// until it has been released.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: Vec<KeyCode>,
    keys_released_this_frame: Vec<KeyCode>,
    keys_repeated_this_frame: Vec<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,

    //--- Continuous Input ------------------------------------------------
    drag_delta: (f32, f32),
}

impl StateTracker {
    /// Creates a tracker with no keys held and the cursor at the origin.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            keys_pressed_this_frame: Vec::new(),
            keys_released_this_frame: Vec::new(),
            keys_repeated_this_frame: Vec::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            drag_delta: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas.
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.keys_repeated_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.drag_delta = (0.0, 0.0);
    }

    /// Processes input events in order, updating internal state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Releases every held key and button (focus loss, reset).
    pub fn release_all(&mut self) {
        self.keys_released_this_frame.extend(self.keys_down.drain());
        self.mouse_buttons_down.clear();
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers, repeat } => {
                self.modifiers = *modifiers;
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.push(*key);
                } else if *repeat {
                    self.keys_repeated_this_frame.push(*key);
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.push(*key);
                }
            }

            InputEvent::MouseButtonDown { button, modifiers, x, y } => {
                self.modifiers = *modifiers;
                if self.mouse_buttons_down.is_empty() {
                    self.mouse_position = (*x, *y);
                } else {
                    self.move_cursor(*x, *y);
                }
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button, modifiers, x, y } => {
                self.modifiers = *modifiers;
                self.move_cursor(*x, *y);
                self.mouse_buttons_down.remove(button);
            }

            InputEvent::MouseMoved { x, y } => self.move_cursor(*x, *y),

            InputEvent::FocusLost => self.release_all(),

            InputEvent::Unidentified => {}
        }
    }

    // Only drags rotate the camera; hover just tracks position.
    fn move_cursor(&mut self, x: f32, y: f32) {
        if !self.mouse_buttons_down.is_empty() {
            self.drag_delta.0 += self.mouse_position.0 - x;
            self.drag_delta.1 += self.mouse_position.1 - y;
        }
        self.mouse_position = (x, y);
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if the key went UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if the key went DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns `true` if the OS auto-repeated the held key this frame.
    pub fn is_key_repeated(&self, key: KeyCode) -> bool {
        self.keys_repeated_this_frame.contains(&key)
    }

    /// Keys currently held, in no particular order.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    /// Keys pressed this frame, in arrival order.
    pub fn keys_pressed(&self) -> &[KeyCode] {
        &self.keys_pressed_this_frame
    }

    /// Keys released this frame, in arrival order.
    pub fn keys_released(&self) -> &[KeyCode] {
        &self.keys_released_this_frame
    }

    /// Auto-repeat events for held keys this frame, in arrival order.
    pub fn keys_repeated(&self) -> &[KeyCode] {
        &self.keys_repeated_this_frame
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Returns `true` while the button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Returns `true` if the button went UP → DOWN this frame.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Last seen cursor position.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Accumulated `last - new` cursor movement while a button was held.
    pub fn drag_delta(&self) -> (f32, f32) {
        self.drag_delta
    }

    /// Returns the modifier state of the most recent key/button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
