use crossword_game::{CheckResult, GameEvent, SessionState};
use eframe::egui::{Button, CollapsingHeader, RichText, Ui};

use crate::{settings::Settings, ui::Action, version};

#[derive(Debug, Clone)]
pub struct SidebarViewModel<'a> {
    state: &'a SessionState,
    settings: Settings,
}

impl<'a> SidebarViewModel<'a> {
    pub fn new(state: &'a SessionState, settings: Settings) -> Self {
        Self { state, settings }
    }

    fn clue_banner(&self) -> String {
        match self.state.selected_clue() {
            Some(clue) => format!("{} {}: {}", clue.number(), clue.direction(), clue.text()),
            None => "No clue selected".to_owned(),
        }
    }

    fn check_message(&self) -> Option<&'static str> {
        match self.state.check_result() {
            CheckResult::None => None,
            CheckResult::Correct => Some("All answers are correct!"),
            CheckResult::Incorrect => Some("Some answers are incorrect or missing."),
        }
    }

    fn progress(&self) -> Option<(usize, usize)> {
        self.state
            .puzzle()
            .map(|puzzle| (puzzle.filled_count(), puzzle.open_cell_count()))
    }
}

pub fn show(ui: &mut Ui, vm: &SidebarViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];
    let has_puzzle = vm.state.puzzle().is_some();
    let has_clue = vm.state.selected_clue().is_some();

    ui.vertical(|ui| {
        if let Some(puzzle) = vm.state.puzzle() {
            ui.heading(puzzle.title());
        }

        ui.group(|ui| {
            ui.label(RichText::new(vm.clue_banner()).size(18.0));
        });

        ui.horizontal_wrapped(|ui| {
            let buttons = [
                ("Check", has_puzzle, GameEvent::CheckAnswers),
                ("Reveal", has_clue, GameEvent::RevealCurrentAnswer),
                ("Clear", has_puzzle, GameEvent::ClearAll),
                ("New Game", true, GameEvent::NewGame),
            ];
            for (label, enabled, event) in buttons {
                if ui.add_enabled(enabled, Button::new(label)).clicked() {
                    actions.push(event.into());
                }
            }
        });

        if let Some(message) = vm.check_message() {
            let color = if vm.state.check_result().is_correct() {
                ui.visuals().warn_fg_color
            } else {
                ui.visuals().error_fg_color
            };
            ui.label(RichText::new(message).color(color).size(16.0));
        }

        if let Some((filled, total)) = vm.progress() {
            ui.label(format!("{filled} / {total} cells filled"));
        }

        let mut settings = vm.settings;
        CollapsingHeader::new("Settings")
            .default_open(false)
            .show(ui, |ui| {
                let Settings {
                    show_numbers,
                    highlight_active_clue,
                } = &mut settings;
                ui.checkbox(show_numbers, "Show clue numbers");
                ui.checkbox(highlight_active_clue, "Highlight active clue");
            });
        if settings != vm.settings {
            actions.push(Action::UpdateSettings(settings));
        }

        ui.small(format!("v{}", version::build_version()));
    });
    actions
}
