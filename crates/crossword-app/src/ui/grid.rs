use std::sync::Arc;

use crossword_core::{Cell, Position};
use crossword_game::{GameEvent, SessionState};
use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, Visuals};

use crate::{settings::Settings, ui::Action};

const BORDER_WIDTH: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct GridViewModel<'a> {
    state: &'a SessionState,
    settings: Settings,
}

impl<'a> GridViewModel<'a> {
    pub fn new(state: &'a SessionState, settings: Settings) -> Self {
        Self { state, settings }
    }

    fn dimensions(&self) -> (usize, usize) {
        self.state
            .puzzle()
            .map_or((0, 0), |puzzle| (puzzle.rows(), puzzle.cols()))
    }

    fn cell(&self, pos: Position) -> Option<&'a Cell> {
        self.state.puzzle().and_then(|puzzle| puzzle.cell(pos))
    }

    fn cell_highlight(&self, pos: Position) -> CellHighlight {
        if self.state.is_selected(pos) {
            CellHighlight::Selected
        } else if self.settings.highlight_active_clue && self.state.is_in_selected_clue(pos) {
            CellHighlight::ActiveClue
        } else {
            CellHighlight::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellHighlight {
    Selected,
    ActiveClue,
    None,
}

impl CellHighlight {
    fn fill_color(self, visuals: &Visuals) -> Color32 {
        match self {
            Self::Selected => visuals.selection.bg_fill,
            Self::ActiveClue => visuals.widgets.hovered.bg_fill,
            Self::None => visuals.text_edit_bg_color(),
        }
    }

    fn border(self, visuals: &Visuals) -> Stroke {
        match self {
            Self::Selected => Stroke::new(3.0, visuals.selection.stroke.color),
            Self::ActiveClue | Self::None => {
                Stroke::new(1.0, visuals.widgets.inactive.fg_stroke.color)
            }
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn cell_size(available: Vec2, rows: usize, cols: usize) -> f32 {
    let width = (available.x - 2.0 * BORDER_WIDTH) / cols.max(1) as f32;
    let height = (available.y - 2.0 * BORDER_WIDTH) / rows.max(1) as f32;
    width.min(height).max(0.0)
}

#[expect(clippy::cast_precision_loss)]
fn cell_rect(origin: Rect, cell_size: f32, pos: Position) -> Rect {
    let min = origin.min
        + Vec2::new(
            BORDER_WIDTH + cell_size * pos.col() as f32,
            BORDER_WIDTH + cell_size * pos.row() as f32,
        );
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

pub fn show(ui: &mut Ui, vm: &GridViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];

    let (rows, cols) = vm.dimensions();
    if rows == 0 || cols == 0 {
        return actions;
    }

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let border_color = visuals.widgets.inactive.fg_stroke.color;
    let block_color = visuals.strong_text_color();

    let size = cell_size(ui.available_size(), rows, cols);
    #[expect(clippy::cast_precision_loss)]
    let board_size =
        Vec2::new(size * cols as f32, size * rows as f32) + Vec2::splat(2.0 * BORDER_WIDTH);
    let (rect, _response) = ui.allocate_exact_size(board_size, Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, border_color);

    for row in 0..rows {
        for col in 0..cols {
            let pos = Position::new(row, col);
            let Some(cell) = vm.cell(pos) else {
                continue;
            };
            let bounds = cell_rect(rect, size, pos);

            if cell.is_black() {
                painter.rect_filled(bounds, 0.0, block_color);
                continue;
            }

            let highlight = vm.cell_highlight(pos);
            painter.rect_filled(bounds, 0.0, highlight.fill_color(visuals));

            if vm.settings.show_numbers
                && let Some(number) = cell.number()
            {
                painter.text(
                    bounds.left_top() + Vec2::new(size * 0.06, size * 0.03),
                    Align2::LEFT_TOP,
                    number.to_string(),
                    FontId::proportional(size * 0.28),
                    visuals.text_color(),
                );
            }
            if let Some(letter) = cell.input() {
                painter.text(
                    bounds.center() + Vec2::new(0.0, size * 0.08),
                    Align2::CENTER_CENTER,
                    letter.to_string(),
                    FontId::proportional(size * 0.6),
                    visuals.strong_text_color(),
                );
            }

            painter.rect_stroke(
                bounds,
                0.0,
                highlight.border(visuals),
                StrokeKind::Inside,
            );

            let response = ui.interact(bounds, ui.id().with((row, col)), Sense::click());
            if response.clicked() {
                actions.push(GameEvent::SelectCell(pos).into());
            }
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use crossword_catalog::Catalog;
    use crossword_game::Session;

    use super::*;

    #[test]
    fn test_cell_highlight_follows_selection() {
        let session = Session::with_puzzle(Catalog::samples(), 0);
        let vm = GridViewModel::new(session.state(), Settings::default());
        assert_eq!(vm.cell_highlight(Position::new(0, 0)), CellHighlight::Selected);
        assert_eq!(vm.cell_highlight(Position::new(0, 2)), CellHighlight::ActiveClue);
        assert_eq!(vm.cell_highlight(Position::new(2, 0)), CellHighlight::None);
    }

    #[test]
    fn test_active_clue_highlight_can_be_disabled() {
        let session = Session::with_puzzle(Catalog::samples(), 0);
        let settings = Settings {
            highlight_active_clue: false,
            ..Settings::default()
        };
        let vm = GridViewModel::new(session.state(), settings);
        assert_eq!(vm.cell_highlight(Position::new(0, 0)), CellHighlight::Selected);
        assert_eq!(vm.cell_highlight(Position::new(0, 1)), CellHighlight::None);
    }

    #[test]
    fn test_cell_size_fits_both_axes() {
        let size = cell_size(Vec2::new(304.0, 204.0), 2, 3);
        assert!((size - 100.0).abs() < f32::EPSILON);
        assert!(cell_size(Vec2::ZERO, 3, 3) >= 0.0);
    }

    #[test]
    fn test_grid_without_puzzle_has_no_cells() {
        let state = SessionState::default();
        let vm = GridViewModel::new(&state, Settings::default());
        assert_eq!(vm.dimensions(), (0, 0));
    }
}
