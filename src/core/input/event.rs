//=========================================================================
// Input Event Types
//
// Portable representation of keyboard and mouse input.
//
// The platform layer converts winit events into these types before they
// cross the thread boundary, so the debugger never sees a winit type.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (key table, mouse drag)
//         ↓
//    VisualDebugger handlers
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character, so
/// `KeyW` moves the camera forward on QWERTY and AZERTY alike.
///
/// The function row is included because the debugger binds F4-F10 to
/// scene and view controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform reports but this enum does not name.
    Unidentified,
}

impl KeyCode {
    /// Returns `true` for keys that repeat their action while held down
    /// (auto-repeat), as opposed to firing once per press.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Self::ArrowUp
                | Self::ArrowDown
                | Self::ArrowLeft
                | Self::ArrowRight
                | Self::F1
                | Self::F2
                | Self::F3
                | Self::F4
                | Self::F5
                | Self::F6
                | Self::F7
                | Self::F8
                | Self::F9
                | Self::F10
                | Self::F11
                | Self::F12
        )
    }
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events compare by type + payload (key/button + modifiers + repeat flag).
/// Cursor coordinates never take part: `MouseMoved` events are all equal,
/// which lets the input buffer coalesce cursor motion (last position wins),
/// and button events compare by button and modifiers only.
///
/// ```text
/// KeyDown{A, CTRL} == KeyDown{A, CTRL}       ✓
/// KeyDown{A, CTRL} == KeyDown{A, SHIFT}      ✗
/// KeyDown{A}       == KeyUp{A}               ✗
/// MouseMoved{...}  == MouseMoved{...}        ✓
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down. `repeat` is set for OS auto-repeat while held.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
        repeat: bool,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse button pressed at cursor position `(x, y)`.
    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
        x: f32,
        y: f32,
    },

    /// Mouse button released at cursor position `(x, y)`.
    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
        x: f32,
        y: f32,
    },

    /// Cursor moved. Screen space, pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Window lost focus: everything held so far counts as released.
    FocusLost,

    /// Unsupported event; ignored by the tracker.
    Unidentified,
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Shorthand for a fresh (non-repeat) key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
            repeat: false,
        }
    }

    /// Shorthand for a key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Returns `true` for keyboard, mouse button and focus events, whose
    /// relative order within a frame is significant.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::MouseMoved { .. } | Self::Unidentified)
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (
                KeyDown { key: a, modifiers: ma, repeat: ra },
                KeyDown { key: b, modifiers: mb, repeat: rb },
            ) => a == b && ma == mb && ra == rb,
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma, .. },
                MouseButtonDown { button: b, modifiers: mb, .. },
            ) => a == b && ma == mb,
            (
                MouseButtonUp { button: a, modifiers: ma, .. },
                MouseButtonUp { button: b, modifiers: mb, .. },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (FocusLost, FocusLost) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + payload. Coordinates of `MouseMoved` are not
/// hashed, keeping `a == b → hash(a) == hash(b)`.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers, repeat } => {
                key.hash(state);
                modifiers.hash(state);
                repeat.hash(state);
            }
            Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers, .. }
            | Self::MouseButtonUp { button, modifiers, .. } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state. Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    //=====================================================================
    // Equality Tests
    //=====================================================================

    #[test]
    fn equality_same_key_same_modifiers() {
        assert_eq!(InputEvent::key_down(KeyCode::KeyR), InputEvent::key_down(KeyCode::KeyR));
    }

    #[test]
    fn equality_mousemoved_ignores_coordinates() {
        let a = InputEvent::MouseMoved { x: 10.0, y: 10.0 };
        let b = InputEvent::MouseMoved { x: 200.0, y: 300.0 };
        assert_eq!(a, b);
    }

    #[test]
    fn repeat_press_differs_from_fresh_press() {
        let fresh = InputEvent::key_down(KeyCode::ArrowUp);
        let repeat = InputEvent::KeyDown {
            key: KeyCode::ArrowUp,
            modifiers: Modifiers::NONE,
            repeat: true,
        };
        assert_ne!(fresh, repeat);
    }

    #[test]
    fn different_modifiers_not_equal() {
        let a = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::CTRL };
        let b = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT };
        assert_ne!(a, b);
    }

    //=====================================================================
    // Hashing Tests
    //=====================================================================

    #[test]
    fn hash_mousemoved_stable_across_positions() {
        let a = InputEvent::MouseMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::MouseMoved { x: 300.0, y: 400.0 };
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn hashset_keeps_single_mousemoved() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::MouseMoved { x: 20.0, y: 30.0 });
        assert_eq!(set.len(), 1);
    }

    //=====================================================================
    // Classification Tests
    //=====================================================================

    #[test]
    fn function_and_arrow_keys_are_special() {
        assert!(KeyCode::F4.is_special());
        assert!(KeyCode::F10.is_special());
        assert!(KeyCode::ArrowDown.is_special());
        assert!(!KeyCode::KeyR.is_special());
        assert!(!KeyCode::Escape.is_special());
    }

    #[test]
    fn mouse_motion_is_continuous() {
        assert!(!InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_discrete());
        assert!(InputEvent::key_up(KeyCode::KeyW).is_discrete());
        assert!(InputEvent::FocusLost.is_discrete());
    }

    #[test]
    fn button_equality_ignores_cursor_position() {
        let a = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
            x: 1.0,
            y: 2.0,
        };
        let b = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
            x: 50.0,
            y: 60.0,
        };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
