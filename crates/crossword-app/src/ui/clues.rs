use crossword_core::{Clue, Direction};
use crossword_game::{GameEvent, SessionState};
use eframe::egui::{RichText, ScrollArea, Ui};

use crate::ui::Action;

#[derive(Debug, Clone)]
pub struct CluesViewModel<'a> {
    state: &'a SessionState,
}

impl<'a> CluesViewModel<'a> {
    pub fn new(state: &'a SessionState) -> Self {
        Self { state }
    }

    fn clues(&self, direction: Direction) -> Vec<&'a Clue> {
        self.state
            .puzzle()
            .map(|puzzle| puzzle.clues_in(direction))
            .unwrap_or_default()
    }

    fn is_complete(&self, clue: &Clue) -> bool {
        self.state
            .puzzle()
            .is_some_and(|puzzle| puzzle.is_clue_complete(clue))
    }
}

fn clue_label(clue: &Clue) -> String {
    format!("{}. {} ({})", clue.number(), clue.text(), clue.len())
}

pub fn show(ui: &mut Ui, vm: &CluesViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];
    ScrollArea::vertical()
        .id_salt("clue_lists")
        .show(ui, |ui| {
            for direction in Direction::ALL {
                ui.heading(direction.to_string());
                for clue in vm.clues(direction) {
                    let mut text = RichText::new(clue_label(clue));
                    if vm.is_complete(clue) {
                        text = text.weak();
                    }
                    let selected = vm.state.is_selected_clue(clue);
                    if ui.selectable_label(selected, text).clicked() {
                        actions.push(GameEvent::SelectClue(clue.id()).into());
                    }
                }
                ui.add_space(8.0);
            }
        });
    actions
}

#[cfg(test)]
mod tests {
    use crossword_catalog::Catalog;
    use crossword_game::Session;

    use super::*;

    #[test]
    fn test_clue_label() {
        let clue = Clue::new(3, "Fox, in Scotland", Direction::Down, (0, 2).into(), "TOD");
        assert_eq!(clue_label(&clue), "3. Fox, in Scotland (3)");
    }

    #[test]
    fn test_clues_are_listed_by_number() {
        let session = Session::with_puzzle(Catalog::samples(), 1);
        let vm = CluesViewModel::new(session.state());
        let numbers = |direction| {
            vm.clues(direction)
                .iter()
                .map(|clue| clue.number())
                .collect::<Vec<_>>()
        };
        assert_eq!(numbers(Direction::Across), [1, 7]);
        assert_eq!(numbers(Direction::Down), [1, 3, 8, 9]);
    }

    #[test]
    fn test_completed_clues_are_marked() {
        let mut session = Session::with_puzzle(Catalog::samples(), 0);
        session.reveal_current_answer();
        let vm = CluesViewModel::new(session.state());
        let across = vm.clues(Direction::Across);
        assert!(vm.is_complete(across[0]));
        assert!(!vm.is_complete(across[1]));
    }
}
