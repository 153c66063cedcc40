//! Crossword desktop application UI.
//!
//! # Design Notes
//! - The grid fills the left side; the active clue, buttons and clue lists sit on the right.
//! - Keyboard-driven input (letters, arrows, backspace) with mouse selection of cells and clues.
//! - Every user request becomes an [`Action`] and is applied after the frame is drawn.

use crossword_catalog::Catalog;
use crossword_core::Puzzle;
use crossword_game::Session;
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    settings::Settings,
    ui::{
        self, Action,
        clues::CluesViewModel,
        game_screen::GameScreenViewModel,
        grid::GridViewModel,
        sidebar::SidebarViewModel,
    },
};

#[derive(Debug)]
pub struct CrosswordApp {
    session: Session<Catalog>,
    settings: Settings,
}

impl CrosswordApp {
    pub fn new(_cc: &CreationContext<'_>, catalog: Catalog, puzzle_index: usize) -> Self {
        Self::with_session(Session::with_puzzle(catalog, puzzle_index))
    }

    fn with_session(session: Session<Catalog>) -> Self {
        Self {
            session,
            settings: Settings::default(),
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Game(event) => self.session.dispatch(event),
            Action::UpdateSettings(settings) => {
                log::debug!("settings updated: {settings:?}");
                self.settings = settings;
            }
        }
    }

    fn handle_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.handle_action(action);
        }
    }
}

impl App for CrosswordApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if !self.session.state().show_completion_dialog() {
            let actions = ctx.input(ui::input::handle_input);
            self.handle_all(actions);
        }

        let state = self.session.snapshot();
        let vm = GameScreenViewModel {
            grid_vm: GridViewModel::new(&state, self.settings),
            sidebar_vm: SidebarViewModel::new(&state, self.settings),
            clues_vm: CluesViewModel::new(&state),
        };

        let mut actions = vec![];
        CentralPanel::default().show(ctx, |ui| {
            actions.extend(ui::game_screen::show(ui, &vm));
        });

        if state.show_completion_dialog() {
            let title = state.puzzle().map_or("", Puzzle::title);
            actions.extend(ui::dialogs::show_completion(ctx, title));
        }

        self.handle_all(actions);
    }
}
