use crossword_game::{GameEvent, MoveDirection};
use eframe::egui::{Event, InputState, Key, Modifiers};

use crate::ui::Action;

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    event: GameEvent,
}

impl Shortcut {
    const fn command(key: Key, event: GameEvent) -> Self {
        Self {
            trigger: Trigger { key, command: true },
            event,
        }
    }

    const fn plain(key: Key, event: GameEvent) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: false,
            },
            event,
        }
    }
}

const SHORTCUTS: [Shortcut; 9] = [
    Shortcut::command(Key::N, GameEvent::NewGame),
    Shortcut::plain(Key::ArrowUp, GameEvent::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, GameEvent::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, GameEvent::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, GameEvent::MoveSelection(MoveDirection::Right)),
    Shortcut::plain(Key::Space, GameEvent::ToggleDirection),
    Shortcut::plain(Key::Tab, GameEvent::ToggleDirection),
    Shortcut::plain(Key::Backspace, GameEvent::Backspace),
    Shortcut::plain(Key::Delete, GameEvent::Backspace),
];

fn shortcut_event(key: Key, modifiers: Modifiers) -> Option<GameEvent> {
    // `modifiers.command` is Ctrl on Windows/Linux and Cmd on Mac
    SHORTCUTS
        .iter()
        .find(|shortcut| {
            shortcut.trigger.key == key && shortcut.trigger.command == modifiers.command
        })
        .map(|shortcut| shortcut.event)
}

fn letter_events(text: &str) -> impl Iterator<Item = GameEvent> + '_ {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(GameEvent::InputLetter)
}

/// Translates this frame's keyboard events into actions.
pub fn handle_input(i: &InputState) -> Vec<Action> {
    let mut actions = vec![];
    for event in &i.events {
        match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => actions.extend(shortcut_event(*key, *modifiers).map(Action::from)),
            Event::Text(text) if !i.modifiers.command => {
                actions.extend(letter_events(text).map(Action::from));
            }
            _ => {}
        }
    }
    actions
}
