/// Display preferences. Held for the lifetime of the window only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub show_numbers: bool,
    pub highlight_active_clue: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_numbers: true,
            highlight_active_clue: true,
        }
    }
}
