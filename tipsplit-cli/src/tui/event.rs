//! Keyboard dispatch for the calculator.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::{App, Focus, Screen};

/// Drains one pending key event into the app, if any.
/// Ok(true) tells the caller to leave the draw loop.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // Short timeout so the loop stays responsive without busy-waiting
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Press only; release and repeat are ignored
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // Any keystroke except Enter dismisses the previous message
        if key.code != KeyCode::Enter {
            app.message = None;
        }

        // Ctrl+C exits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.screen {
            Screen::Calculator => handle_calculator(app, key),
            Screen::Help => handle_help(app, key.code),
        }

        // A handler may have flipped `running`
        if !app.running {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Handle the calculator screen
fn handle_calculator(app: &mut App, key: KeyEvent) {
    // While the bill field has focus, editing keys go straight to it and
    // the totals reparse live. Everything else stays a command key.
    if app.focus == Focus::Bill && is_bill_edit_key(&key) {
        app.input.handle_event(&Event::Key(key));
        app.sync_bill_from_input();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_split(),
        KeyCode::Char('-') => app.decrement_split(),
        KeyCode::Enter => {
            if app.focus == Focus::Bill {
                app.apply_bill_input();
            }
        }
        KeyCode::Left => match app.focus {
            Focus::Split => app.decrement_split(),
            Focus::Rate => app.slider_left(),
            Focus::Bill => {}
        },
        KeyCode::Right => match app.focus {
            Focus::Split => app.increment_split(),
            Focus::Rate => app.slider_right(),
            Focus::Bill => {}
        },
        _ => {}
    }
}

/// Keys the bill text field consumes while focused
fn is_bill_edit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => c.is_ascii_digit() || c == '.' || c == ',',
        KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End => true,
        _ => false,
    }
}

/// Keys accepted while the help overlay is open.
fn handle_help(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.go_back();
        }
        _ => {}
    }
}
