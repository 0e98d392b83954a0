//! Terminal input translation
//!
//! Maps crossterm events onto [`InputEvent`]s. Pointer presses are mapped
//! from terminal cells back into logical playfield coordinates.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use crate::renderer::cell_to_logical;
use crate::sim::InputEvent;

/// Translate one terminal event, given the viewport the playfield occupies
pub fn translate(event: &Event, viewport: Rect) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    // Windows also reports releases; auto-repeat must not re-flap
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Flap),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputEvent::ToggleTheme),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, viewport: Rect) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_to_logical(viewport, mouse.column, mouse.row)
                .map(|p| InputEvent::PointerDown { x: p.x, y: p.y })
        }
        _ => None,
    }
}

/// Drain every pending terminal event without blocking
pub fn drain_events(viewport: Rect) -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = translate(&event::read()?, viewport) {
            events.push(input);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 30,
    };

    #[test]
    fn test_key_bindings() {
        assert_eq!(translate(&press(KeyCode::Char(' ')), VIEWPORT), Some(InputEvent::Flap));
        assert_eq!(translate(&press(KeyCode::Up), VIEWPORT), Some(InputEvent::Flap));
        assert_eq!(translate(&press(KeyCode::Char('N')), VIEWPORT), Some(InputEvent::ToggleTheme));
        assert_eq!(translate(&press(KeyCode::Esc), VIEWPORT), Some(InputEvent::Quit));
        assert_eq!(translate(&press(KeyCode::Char('x')), VIEWPORT), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&event, VIEWPORT), Some(InputEvent::Quit));
        assert_eq!(translate(&press(KeyCode::Char('c')), VIEWPORT), None);
    }

    #[test]
    fn test_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&event, VIEWPORT), None);
    }

    #[test]
    fn test_click_maps_to_logical() {
        // Cell (20, 15) centre is (205, 310) in playfield units
        let event = click(MouseEventKind::Down(MouseButton::Left), 20, 15);
        match translate(&event, VIEWPORT) {
            Some(InputEvent::PointerDown { x, y }) => {
                assert!((x - 205.0).abs() < 1e-3);
                assert!((y - 310.0).abs() < 1e-3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_click_outside_viewport_ignored() {
        let event = click(MouseEventKind::Down(MouseButton::Left), 45, 3);
        assert_eq!(translate(&event, VIEWPORT), None);
        let event = click(MouseEventKind::Down(MouseButton::Right), 5, 3);
        assert_eq!(translate(&event, VIEWPORT), None);
        let event = click(MouseEventKind::Moved, 5, 3);
        assert_eq!(translate(&event, VIEWPORT), None);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(translate(&Event::Resize(80, 24), VIEWPORT), None);
    }
}
