use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevMonth,
    NextMonth,
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    Today,
    ToggleOrder,
    NextEvent,
    PrevEvent,
    ShowDetail,
    Close,
    ToggleHelp,
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    loop {
        match poll_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Close,
        (KeyCode::Char('['), _) => Action::PrevMonth,
        (KeyCode::Char(']'), _) => Action::NextMonth,
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => Action::PrevDay,
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => Action::NextDay,
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Action::PrevWeek,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::NextWeek,
        (KeyCode::Tab, _) => Action::NextEvent,
        (KeyCode::BackTab, _) => Action::PrevEvent,
        (KeyCode::Enter, _) => Action::ShowDetail,
        (KeyCode::Char('t'), _) => Action::Today,
        (KeyCode::Char('s'), _) => Action::ToggleOrder,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn brackets_navigate_months() {
        assert_eq!(action_for(key(KeyCode::Char('['))), Some(Action::PrevMonth));
        assert_eq!(action_for(key(KeyCode::Char(']'))), Some(Action::NextMonth));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_nothing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn vim_and_arrow_keys_agree() {
        assert_eq!(action_for(key(KeyCode::Char('h'))), action_for(key(KeyCode::Left)));
        assert_eq!(action_for(key(KeyCode::Char('j'))), action_for(key(KeyCode::Down)));
    }

    #[test]
    fn keymap_moves_days_weeks_and_events() {
        let cases = [
            (KeyCode::Char('h'), Action::PrevDay),
            (KeyCode::Char('l'), Action::NextDay),
            (KeyCode::Left, Action::PrevDay),
            (KeyCode::Right, Action::NextDay),
            (KeyCode::Char('k'), Action::PrevWeek),
            (KeyCode::Char('j'), Action::NextWeek),
            (KeyCode::Up, Action::PrevWeek),
            (KeyCode::Down, Action::NextWeek),
            (KeyCode::Tab, Action::NextEvent),
            (KeyCode::BackTab, Action::PrevEvent),
            (KeyCode::Enter, Action::ShowDetail),
            (KeyCode::Char('t'), Action::Today),
            (KeyCode::Char('s'), Action::ToggleOrder),
            (KeyCode::Char('?'), Action::ToggleHelp),
            (KeyCode::Esc, Action::Close),
            (KeyCode::Char('q'), Action::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(action_for(key(code)), Some(expected), "{code:?}");
        }
    }
}
