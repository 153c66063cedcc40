use crossword_game::GameEvent;
use eframe::egui::{Context, Id, Modal, Sides};

use crate::ui::Action;

pub fn show_completion(ctx: &Context, title: &str) -> Vec<Action> {
    let mut actions = vec![];
    let modal = Modal::new(Id::new("completion")).show(ctx, |ui| {
        ui.heading("Congratulations!");
        ui.add_space(4.0);
        ui.label(format!("You solved \"{title}\"."));
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let ok = ui.button("OK");
                if ui.memory(|memory| memory.focused().is_none()) {
                    ok.request_focus();
                }
                if ok.clicked() {
                    ui.close();
                }
                if ui.button("Next Puzzle").clicked() {
                    actions.push(GameEvent::NewGame.into());
                    ui.close();
                }
            },
        );
    });
    if modal.should_close() {
        actions.push(GameEvent::DismissCompletionDialog.into());
    }
    actions
}
