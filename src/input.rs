//! Shared input handling: click targets and normalized event types.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// All possible input events, normalized from keyboard and mouse sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key press.
    Key(char),
    /// Enter.
    Submit,
    /// Backspace.
    Erase,
    /// Escape.
    Cancel,
    /// Arrow-key table navigation.
    Up,
    Down,
    /// A click on a registered target, identified by a semantic action ID.
    Click(u16),
}

impl InputEvent {
    /// Maps a terminal key event, ignoring releases and modifier-only keys.
    pub fn from_key(key: KeyEvent) -> Option<InputEvent> {
        match key.code {
            KeyCode::Char(c) => Some(InputEvent::Key(c)),
            KeyCode::Enter => Some(InputEvent::Submit),
            KeyCode::Backspace => Some(InputEvent::Erase),
            KeyCode::Esc => Some(InputEvent::Cancel),
            KeyCode::Up => Some(InputEvent::Up),
            KeyCode::Down => Some(InputEvent::Down),
            _ => None,
        }
    }
}

/// A region on screen that can be clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    /// Semantic action ID, defined in `game::actions`.
    pub action_id: u16,
}

/// Shared state between the render pass and the click handler. Targets are
/// re-registered on every frame so they always match what is on screen.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region and a semantic action ID.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-row click target at the given row within an area.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Last registered takes priority when targets overlap, matching typical
    /// UI layering where later elements are on top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }

    /// Maps a mouse event to a click on a registered target, if any.
    pub fn resolve_mouse(&self, ev: MouseEvent) -> Option<InputEvent> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hit_test(ev.column, ev.row).map(InputEvent::Click)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // ── key mapping tests ───────────────────────────────────────────

    #[test]
    fn key_mapping() {
        assert_eq!(InputEvent::from_key(key(KeyCode::Char('b'))), Some(InputEvent::Key('b')));
        assert_eq!(InputEvent::from_key(key(KeyCode::Enter)), Some(InputEvent::Submit));
        assert_eq!(InputEvent::from_key(key(KeyCode::Backspace)), Some(InputEvent::Erase));
        assert_eq!(InputEvent::from_key(key(KeyCode::Esc)), Some(InputEvent::Cancel));
        assert_eq!(InputEvent::from_key(key(KeyCode::Up)), Some(InputEvent::Up));
        assert_eq!(InputEvent::from_key(key(KeyCode::Down)), Some(InputEvent::Down));
        assert_eq!(InputEvent::from_key(key(KeyCode::F(1))), None);
        assert_eq!(InputEvent::from_key(key(KeyCode::Tab)), None);
    }

    // ── hit_test tests ──────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
    }

    #[test]
    fn hit_test_miss_returns_none() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);

        assert_eq!(cs.hit_test(5, 9), None);
        assert_eq!(cs.hit_test(5, 11), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 40, 3), 42);

        assert_eq!(cs.hit_test(10, 4), None);
        assert_eq!(cs.hit_test(10, 5), Some(42));
        assert_eq!(cs.hit_test(10, 6), Some(42));
        assert_eq!(cs.hit_test(10, 7), Some(42));
        assert_eq!(cs.hit_test(10, 8), None);
    }

    #[test]
    fn hit_test_column_precision() {
        let mut cs = ClickState::new();
        // Two targets side by side on the same row
        cs.add_click_target(Rect::new(0, 5, 10, 1), 1);
        cs.add_click_target(Rect::new(10, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(3, 5), Some(1));
        assert_eq!(cs.hit_test(9, 5), Some(1));
        assert_eq!(cs.hit_test(10, 5), Some(2));
        assert_eq!(cs.hit_test(15, 5), Some(2));
        assert_eq!(cs.hit_test(20, 5), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        // Row-wide target registered first
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        // Narrower target registered later (on top)
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(20, 5), Some(1));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target tests ──────────────────────────────────────

    #[test]
    fn add_row_target_within_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 12, 99);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(99));
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99); // before area
        cs.add_row_target(area, 15, 98); // after area

        assert_eq!(cs.targets.len(), 0);
    }

    // ── ClickState management tests ────────────────────────────────

    #[test]
    fn click_state_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 2, 80, 1), 2);
        assert_eq!(cs.targets.len(), 2);

        cs.clear_targets();
        assert_eq!(cs.targets.len(), 0);
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── mouse resolution tests ─────────────────────────────────────

    fn mouse_down(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn mouse_click_resolves_to_action() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 3, 20, 1), 7);

        assert_eq!(cs.resolve_mouse(mouse_down(4, 3)), Some(InputEvent::Click(7)));
        assert_eq!(cs.resolve_mouse(mouse_down(4, 4)), None);
    }

    #[test]
    fn mouse_move_is_ignored() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 3, 20, 1), 7);
        let ev = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 4,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(cs.resolve_mouse(ev), None);
    }
}
