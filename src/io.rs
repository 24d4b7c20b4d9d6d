use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::Event;

/// Converts a crossterm event into an app event. Anything we don't care about maps to `None`.
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // Some platforms report releases too, only react once per press
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' ') | KeyCode::Char('p'),
                ..
            } => Some(Event::TogglePause),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event as CrossTermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyEventState;
    use crossterm::event::KeyModifiers;

    use super::convert_event;
    use crate::events::Event;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        let quit = [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ];

        for event in quit {
            assert_eq!(convert_event(event), Some(Event::Exit));
        }
    }

    #[test]
    fn pause_key() {
        assert_eq!(
            convert_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Event::TogglePause)
        );
    }

    #[test]
    fn ignored() {
        assert_eq!(convert_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(convert_event(CrossTermEvent::Resize(80, 24)), None);

        let release = CrossTermEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(release), None);
    }
}
