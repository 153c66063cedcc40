use eframe::egui::{Separator, Ui};
use egui_extras::{Size, StripBuilder};

use crate::ui::{
    Action,
    clues::{self, CluesViewModel},
    grid::{self, GridViewModel},
    sidebar::{self, SidebarViewModel},
};

#[derive(Debug, Clone)]
pub struct GameScreenViewModel<'a> {
    pub grid_vm: GridViewModel<'a>,
    pub sidebar_vm: SidebarViewModel<'a>,
    pub clues_vm: CluesViewModel<'a>,
}

pub fn show(ui: &mut Ui, vm: &GameScreenViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];
    StripBuilder::new(ui)
        .size(Size::relative(0.6))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                actions.extend(grid::show(ui, &vm.grid_vm));
            });
            strip.cell(|ui| {
                ui.vertical(|ui| {
                    actions.extend(sidebar::show(ui, &vm.sidebar_vm));
                    ui.add(Separator::default());
                    actions.extend(clues::show(ui, &vm.clues_vm));
                });
            });
        });
    actions
}
