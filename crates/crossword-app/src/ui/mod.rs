use crossword_game::GameEvent;

use crate::settings::Settings;

pub mod clues;
pub mod dialogs;
pub mod game_screen;
pub mod grid;
pub mod input;
pub mod sidebar;

/// Requests produced by the UI for the app to apply after drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum Action {
    Game(GameEvent),
    UpdateSettings(Settings),
}
