//=========================================================================
// Heads-Up Display
//=========================================================================
//
// Screen-keyed text lines with one active screen.
//
// The HUD only stores text; layout and glyph rendering belong to the
// renderer, which receives a borrowed `HudFrame` each frame.
//
// Screen selection:
// ```text
//  won?  ──yes──► Win
//   │no
//  visible? ──no──► Empty
//   │yes
//  paused? ──yes──► Pause
//   │no
//  Help
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::Vec3;

//=== HudScreen ===========================================================

/// HUD screen identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudScreen {
    Empty = 0,
    Help = 1,
    Pause = 2,
    Win = 3,
}

impl HudScreen {
    /// Picks the screen to show this frame.
    ///
    /// A won game always shows `Win`, even when the HUD is hidden.
    pub fn select(visible: bool, paused: bool, won: bool) -> Self {
        if won {
            Self::Win
        } else if !visible {
            Self::Empty
        } else if paused {
            Self::Pause
        } else {
            Self::Help
        }
    }
}

//=== HudFrame ============================================================

/// Borrowed view of what the renderer should draw for the HUD.
#[derive(Debug, Clone, Copy)]
pub struct HudFrame<'a> {
    pub screen: HudScreen,
    pub lines: &'a [String],
    pub font_size: f32,
    pub color: Vec3,
}

//=== Hud =================================================================

/// Text lines per screen plus shared font settings.
#[derive(Debug, Clone)]
pub struct Hud {
    screens: HashMap<HudScreen, Vec<String>>,
    active: HudScreen,
    font_size: f32,
    color: Vec3,
}

impl Hud {
    pub const DEFAULT_FONT_SIZE: f32 = 0.018;

    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
            active: HudScreen::Empty,
            font_size: Self::DEFAULT_FONT_SIZE,
            color: Vec3::ZERO,
        }
    }

    //--- Content ----------------------------------------------------------

    /// Appends a line to `screen`.
    pub fn add_line(&mut self, screen: HudScreen, text: impl Into<String>) {
        self.screens.entry(screen).or_default().push(text.into());
    }

    /// Appends `count` blank lines to `screen`.
    pub fn add_blank_lines(&mut self, screen: HudScreen, count: usize) {
        let lines = self.screens.entry(screen).or_default();
        lines.extend(std::iter::repeat(String::new()).take(count));
    }

    /// Removes every line from every screen. The active screen and font
    /// settings are kept.
    pub fn clear(&mut self) {
        for lines in self.screens.values_mut() {
            lines.clear();
        }
    }

    /// Lines registered for `screen` (empty if none were added).
    pub fn lines(&self, screen: HudScreen) -> &[String] {
        self.screens.get(&screen).map(Vec::as_slice).unwrap_or(&[])
    }

    //--- Selection & Style ------------------------------------------------

    pub fn set_active_screen(&mut self, screen: HudScreen) {
        self.active = screen;
    }

    pub fn active_screen(&self) -> HudScreen {
        self.active
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Snapshot of the active screen for the renderer.
    pub fn frame(&self) -> HudFrame<'_> {
        HudFrame {
            screen: self.active,
            lines: self.lines(self.active),
            font_size: self.font_size,
            color: self.color,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

//=== Screen Content ======================================================

const MENU_INDENT: &str = "                                                   ";
const FORCE_INDENT: &str = "                                                              ";
const WIN_INDENT: &str = "                                                                   ";
const WIN_HINT_INDENT: &str = "                                                                ";

/// Fills all four screens with the Crazy Golf text.
///
/// `force_text` is shown at the top of the help screen.
pub fn populate(hud: &mut Hud, force_text: &str) {
    //--- Empty ------------------------------------------------------------
    hud.add_line(HudScreen::Empty, "");

    //--- Help -------------------------------------------------------------
    hud.add_line(HudScreen::Help, format!("{FORCE_INDENT}{force_text}"));
    hud.add_blank_lines(HudScreen::Help, 17);

    for line in [
        "CRAZY GOLF",
        "",
        "GAME CONTROLS",
        "UP Arrow       -    Increase Force",
        "DOWN Arrow    -    Decrease Force",
        "R                  -    Apply Force",
    ] {
        hud.add_line(HudScreen::Help, menu_line(line));
    }
    hud.add_blank_lines(HudScreen::Help, 5);

    for line in [
        "VIEW CONTROLS",
        "F4 - reset scene",
        "F5 - help on/off",
        "F6 - shadows on/off",
        "F7 - render mode",
        "F8 - reset view",
        "",
        "Try to hit the red square!",
    ] {
        hud.add_line(HudScreen::Help, menu_line(line));
    }

    //--- Pause ------------------------------------------------------------
    hud.add_blank_lines(HudScreen::Pause, 3);
    hud.add_line(HudScreen::Pause, "   Simulation paused. Press F10 to continue.");

    //--- Win --------------------------------------------------------------
    hud.add_blank_lines(HudScreen::Win, 20);
    hud.add_line(HudScreen::Win, format!("{WIN_INDENT}YOU WIN!"));
    hud.add_line(HudScreen::Win, format!("{WIN_HINT_INDENT}F4 - reset scene"));

    hud.set_font_size(Hud::DEFAULT_FONT_SIZE);
    hud.set_color(Vec3::ZERO);
}

fn menu_line(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{MENU_INDENT}{text}")
    }
}

/// Formats the force magnitude shown on the help screen.
pub fn force_text(force: f32) -> String {
    format!("Force: {force:.6}")
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Selection Tests
    //=====================================================================

    #[test]
    fn visible_running_shows_help() {
        assert_eq!(HudScreen::select(true, false, false), HudScreen::Help);
    }

    #[test]
    fn visible_paused_shows_pause() {
        assert_eq!(HudScreen::select(true, true, false), HudScreen::Pause);
    }

    #[test]
    fn hidden_shows_empty_even_when_paused() {
        assert_eq!(HudScreen::select(false, true, false), HudScreen::Empty);
        assert_eq!(HudScreen::select(false, false, false), HudScreen::Empty);
    }

    #[test]
    fn win_overrides_everything() {
        for visible in [true, false] {
            for paused in [true, false] {
                assert_eq!(HudScreen::select(visible, paused, true), HudScreen::Win);
            }
        }
    }

    #[test]
    fn screen_discriminants_are_stable() {
        assert_eq!(HudScreen::Empty as i32, 0);
        assert_eq!(HudScreen::Help as i32, 1);
        assert_eq!(HudScreen::Pause as i32, 2);
        assert_eq!(HudScreen::Win as i32, 3);
    }

    //=====================================================================
    // Content Tests
    //=====================================================================

    #[test]
    fn populate_builds_every_screen() {
        let mut hud = Hud::new();
        populate(&mut hud, "Force: 1.000000");

        assert_eq!(hud.lines(HudScreen::Empty).len(), 1);
        assert_eq!(hud.lines(HudScreen::Pause).len(), 4);
        assert_eq!(hud.lines(HudScreen::Win).len(), 22);
        assert!(hud.lines(HudScreen::Help)[0].ends_with("Force: 1.000000"));
        assert!(hud.lines(HudScreen::Help).iter().any(|l| l.contains("CRAZY GOLF")));
        assert!(hud.lines(HudScreen::Pause)[3].contains("F10"));
        assert!(hud.lines(HudScreen::Win)[20].contains("YOU WIN!"));
    }

    #[test]
    fn clear_then_populate_does_not_accumulate() {
        let mut hud = Hud::new();
        populate(&mut hud, "a");
        let help_len = hud.lines(HudScreen::Help).len();

        hud.clear();
        populate(&mut hud, "b");

        assert_eq!(hud.lines(HudScreen::Help).len(), help_len);
        assert!(hud.lines(HudScreen::Help)[0].ends_with('b'));
    }

    #[test]
    fn clear_keeps_active_screen() {
        let mut hud = Hud::new();
        hud.set_active_screen(HudScreen::Pause);
        hud.clear();
        assert_eq!(hud.active_screen(), HudScreen::Pause);
    }

    #[test]
    fn frame_exposes_active_lines_and_style() {
        let mut hud = Hud::new();
        populate(&mut hud, "x");
        hud.set_active_screen(HudScreen::Win);

        let frame = hud.frame();
        assert_eq!(frame.screen, HudScreen::Win);
        assert_eq!(frame.lines.len(), 22);
        assert_eq!(frame.font_size, Hud::DEFAULT_FONT_SIZE);
        assert_eq!(frame.color, Vec3::ZERO);
    }

    #[test]
    fn unknown_screen_has_no_lines() {
        let hud = Hud::new();
        assert!(hud.lines(HudScreen::Help).is_empty());
    }

    #[test]
    fn force_text_uses_six_decimals() {
        assert_eq!(force_text(20.0), "Force: 20.000000");
        assert_eq!(force_text(-0.5), "Force: -0.500000");
    }
}
